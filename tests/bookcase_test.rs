mod utils;

use std::collections::HashSet;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use shelfward::modules::catalog::domain::repositories::BookRepository;
use shelfward::modules::placement::domain::repositories::{BookcaseRepository, ShelfRepository};
use shelfward::modules::placement::PlacementService;
use shelfward::shared::domain::value_objects::BookcaseId;
use shelfward::shared::errors::AppError;

use utils::factories;
use utils::fakes::{InMemoryBookRepository, InMemoryBookcaseRepository, InMemoryShelfRepository};

struct Fixture {
    bookcase_repo: Arc<InMemoryBookcaseRepository>,
    shelf_repo: Arc<InMemoryShelfRepository>,
    book_repo: Arc<InMemoryBookRepository>,
    service: PlacementService,
}

fn fixture() -> Fixture {
    let bookcase_repo = Arc::new(InMemoryBookcaseRepository::default());
    let shelf_repo = Arc::new(InMemoryShelfRepository::default());
    let book_repo = Arc::new(InMemoryBookRepository::default());
    let service = PlacementService::new(
        bookcase_repo.clone(),
        shelf_repo.clone(),
        book_repo.clone(),
    );
    Fixture {
        bookcase_repo,
        shelf_repo,
        book_repo,
        service,
    }
}

#[tokio::test]
async fn creating_a_bookcase_provisions_exactly_its_shelves() {
    let fx = fixture();

    let result = fx
        .service
        .create_bookcase(factories::create_bookcase_command("Study", 4, 10))
        .await
        .unwrap();

    assert_eq!(result.shelf_ids.len(), 4);

    let shelves = fx
        .service
        .get_shelves_in_bookcase(result.bookcase_id)
        .await
        .unwrap();
    assert_eq!(shelves.len(), 4);

    let positions: Vec<i32> = shelves.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);

    let unique: HashSet<i32> = positions.into_iter().collect();
    assert_eq!(unique.len(), 4, "positions must not repeat");

    for shelf in &shelves {
        assert_eq!(shelf.label, format!("Shelf {}", shelf.position));
        assert_eq!(shelf.book_capacity, 10);
        assert!(shelf.is_empty());
    }
}

#[tokio::test]
async fn duplicate_location_is_rejected_with_no_shelf_writes() {
    let fx = fixture();

    fx.service
        .create_bookcase(factories::create_bookcase_command("Hallway", 3, 5))
        .await
        .unwrap();

    let saves_before = fx.shelf_repo.save_calls.load(Ordering::SeqCst);

    let err = fx
        .service
        .create_bookcase(factories::create_bookcase_command("Hallway", 2, 8))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Duplicate(_)));
    assert_eq!(
        fx.shelf_repo.save_calls.load(Ordering::SeqCst),
        saves_before,
        "a rejected bookcase must not persist any shelves"
    );
    assert_eq!(fx.bookcase_repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_dimensions_are_rejected() {
    let fx = fixture();

    let err = fx
        .service
        .create_bookcase(factories::create_bookcase_command("Attic", 0, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let err = fx
        .service
        .create_bookcase(factories::create_bookcase_command("Attic", 2, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn deleting_a_bookcase_cascades_books_then_shelves_then_bookcase() {
    let fx = fixture();

    let created = fx
        .service
        .create_bookcase(factories::create_bookcase_command("Living Room", 2, 3))
        .await
        .unwrap();
    let shelves = fx
        .service
        .get_shelves_in_bookcase(created.bookcase_id)
        .await
        .unwrap();

    // two placed books plus one loose book that must survive
    let dune = factories::book("Dune", factories::DUNE_ISBN);
    let hyperion = factories::book("Hyperion", factories::HYPERION_ISBN);
    let loose = factories::book("Loose Book", "9780261103252");
    fx.book_repo.save(&dune).await.unwrap();
    fx.book_repo.save(&hyperion).await.unwrap();
    fx.book_repo.save(&loose).await.unwrap();

    fx.service
        .place_book_on_shelf(dune.id, shelves[0].id)
        .await
        .unwrap();
    fx.service
        .place_book_on_shelf(hyperion.id, shelves[1].id)
        .await
        .unwrap();

    let result = fx
        .service
        .delete_bookcase(created.bookcase_id)
        .await
        .unwrap();
    assert_eq!(result.books_deleted, 2);
    assert_eq!(result.shelves_deleted, 2);

    // bookcase and its shelves are gone
    assert!(fx
        .bookcase_repo
        .find_by_id(created.bookcase_id)
        .await
        .unwrap()
        .is_none());
    assert!(fx
        .shelf_repo
        .find_by_bookcase_id(created.bookcase_id)
        .await
        .unwrap()
        .is_empty());

    // no surviving book references a deleted shelf
    let remaining = fx.book_repo.find_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title.as_str(), "Loose Book");
    assert!(remaining[0].shelf_id.is_none());
}

#[tokio::test]
async fn deleting_a_missing_bookcase_is_not_found() {
    let fx = fixture();

    let err = fx
        .service
        .delete_bookcase(BookcaseId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
