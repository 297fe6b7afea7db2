use std::sync::Arc;

use shelfward::cli::{prompts, render};
use shelfward::modules::catalog::application::ports::MetadataProvider;
use shelfward::modules::catalog::domain::repositories::BookRepository;
use shelfward::modules::catalog::infrastructure::persistence::BookRepositoryImpl;
use shelfward::modules::placement::application::use_cases::CreateBookcaseCommand;
use shelfward::modules::placement::domain::repositories::{BookcaseRepository, ShelfRepository};
use shelfward::modules::placement::infrastructure::persistence::{
    BookcaseRepositoryImpl, ShelfRepositoryImpl,
};
use shelfward::shared::database::Database;
use shelfward::shared::utils::logger;
use shelfward::{AppError, AppResult, CatalogService, OpenLibraryClient, PlacementService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logger();

    let database = Database::new()?;
    database.run_migrations()?;
    let pool = database.pool();

    let book_repo: Arc<dyn BookRepository> = Arc::new(BookRepositoryImpl::new(pool.clone()));
    let shelf_repo: Arc<dyn ShelfRepository> = Arc::new(ShelfRepositoryImpl::new(pool.clone()));
    let bookcase_repo: Arc<dyn BookcaseRepository> =
        Arc::new(BookcaseRepositoryImpl::new(pool.clone()));
    let metadata_provider: Arc<dyn MetadataProvider> = Arc::new(OpenLibraryClient::new()?);

    let catalog = CatalogService::new(book_repo.clone(), metadata_provider);
    let placement = PlacementService::new(bookcase_repo, shelf_repo, book_repo);

    println!("Shelfward - personal library catalog");

    loop {
        println!();
        println!("  1. Add a book");
        println!("  2. Place a book on a shelf");
        println!("  3. Check a book out");
        println!("  4. Check a book in");
        println!("  5. Create a bookcase");
        println!("  6. Delete a bookcase");
        println!("  7. List bookcases");
        println!("  8. List books");
        println!("  q. Quit");

        let choice = prompts::prompt_line("Choice")?;
        let outcome = match choice.as_str() {
            "1" => add_book_flow(&catalog).await,
            "2" => place_book_flow(&catalog, &placement).await,
            "3" => check_out_flow(&catalog).await,
            "4" => check_in_flow(&catalog).await,
            "5" => create_bookcase_flow(&placement).await,
            "6" => delete_bookcase_flow(&placement).await,
            "7" => list_bookcases_flow(&placement).await,
            "8" => list_books_flow(&catalog).await,
            "q" | "Q" => break,
            other => {
                println!("Unknown choice '{}'", other);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            logger::LogContext::error_with_context(&e, "Menu action failed");
            println!("Error: {}", e);
        }
    }

    Ok(())
}

async fn add_book_flow(catalog: &CatalogService) -> AppResult<()> {
    let isbn = prompts::prompt_isbn()?;
    let title = prompts::prompt_line("Title (leave blank to use metadata)")?;
    let title = if title.is_empty() { None } else { Some(title) };

    let result = catalog.add_book(isbn, title).await?;
    if result.metadata_resolved {
        println!("Added '{}' from ISBN metadata", result.title);
    } else {
        println!("Added '{}' without external metadata", result.title);
    }
    Ok(())
}

async fn place_book_flow(
    catalog: &CatalogService,
    placement: &PlacementService,
) -> AppResult<()> {
    let title = prompts::prompt_book_title()?;
    let book = catalog
        .find_book_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No book titled '{}'", title)))?;

    let bookcases = placement.get_all_bookcases().await?;
    let mut shelves = Vec::new();
    for bookcase in &bookcases {
        shelves.extend(placement.get_shelves_in_bookcase(bookcase.id).await?);
    }

    let shelf_id = prompts::prompt_shelf_selection(&shelves)?;
    let result = placement.place_book_on_shelf(book.id, shelf_id).await?;
    println!("Placed '{}' on {}", book.title, result.shelf_label);
    Ok(())
}

async fn check_out_flow(catalog: &CatalogService) -> AppResult<()> {
    let title = prompts::prompt_book_title()?;
    let book = catalog
        .find_book_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No book titled '{}'", title)))?;

    let result = catalog.check_out_book(book.id).await?;
    println!("'{}' is now {}", result.title, result.availability_status);
    Ok(())
}

async fn check_in_flow(catalog: &CatalogService) -> AppResult<()> {
    let title = prompts::prompt_book_title()?;
    let result = catalog.check_in_book(title).await?;
    println!("'{}' is now {}", result.title, result.availability_status);
    Ok(())
}

async fn create_bookcase_flow(placement: &PlacementService) -> AppResult<()> {
    let location = prompts::prompt_line("Location")?;
    let zone = prompts::prompt_line("Zone")?;
    let zone_index = prompts::prompt_line("Zone index")?;
    let shelf_count: i32 = prompts::prompt_line("Shelf count")?
        .parse()
        .map_err(|_| AppError::ValidationError("Shelf count must be a number".to_string()))?;
    let capacity: i32 = prompts::prompt_line("Book capacity per shelf")?
        .parse()
        .map_err(|_| AppError::ValidationError("Capacity must be a number".to_string()))?;

    let result = placement
        .create_bookcase(CreateBookcaseCommand::new(
            whoami(),
            location,
            zone,
            zone_index,
            shelf_count,
            capacity,
        ))
        .await?;
    println!(
        "Created bookcase '{}' with {} shelves",
        result.location,
        result.shelf_ids.len()
    );
    Ok(())
}

async fn delete_bookcase_flow(placement: &PlacementService) -> AppResult<()> {
    let location = prompts::prompt_line("Location of bookcase to delete")?;
    let bookcases = placement.get_all_bookcases().await?;
    let bookcase = bookcases
        .iter()
        .find(|b| b.location.eq_ignore_ascii_case(&location))
        .ok_or_else(|| AppError::NotFound(format!("No bookcase at '{}'", location)))?;

    if !prompts::confirm("This deletes every shelf and book inside. Continue?")? {
        println!("Cancelled");
        return Ok(());
    }

    let result = placement.delete_bookcase(bookcase.id).await?;
    println!(
        "Deleted bookcase with {} shelves and {} books",
        result.shelves_deleted, result.books_deleted
    );
    Ok(())
}

async fn list_bookcases_flow(placement: &PlacementService) -> AppResult<()> {
    let bookcases = placement.get_all_bookcases().await?;
    if bookcases.is_empty() {
        println!("No bookcases yet");
    }
    for bookcase in &bookcases {
        let shelves = placement.get_shelves_in_bookcase(bookcase.id).await?;
        println!("{}", render::bookcase_summary(bookcase, &shelves));
    }
    Ok(())
}

async fn list_books_flow(catalog: &CatalogService) -> AppResult<()> {
    let books = catalog.get_all_books().await?;
    if books.is_empty() {
        println!("No books yet");
    }
    for book in &books {
        println!("{}", render::book_card(book));
    }
    Ok(())
}

fn whoami() -> String {
    std::env::var("USER").unwrap_or_else(|_| "owner".to_string())
}
