mod utils;

use std::sync::Arc;

use shelfward::modules::catalog::domain::repositories::BookRepository;
use shelfward::modules::catalog::domain::value_objects::AvailabilityStatus;
use shelfward::modules::catalog::CatalogService;
use shelfward::modules::placement::PlacementService;
use shelfward::shared::errors::AppError;

use utils::factories;
use utils::fakes::{
    InMemoryBookRepository, InMemoryBookcaseRepository, InMemoryShelfRepository, MockMetadata,
};

fn catalog_with(provider: MockMetadata) -> (Arc<InMemoryBookRepository>, CatalogService) {
    let book_repo = Arc::new(InMemoryBookRepository::default());
    let service = CatalogService::new(book_repo.clone(), Arc::new(provider));
    (book_repo, service)
}

#[tokio::test]
async fn adding_a_book_resolves_metadata() {
    let mut provider = MockMetadata::new();
    provider
        .expect_lookup()
        .times(1)
        .returning(|_| Ok(factories::dune_metadata()));
    let (book_repo, catalog) = catalog_with(provider);

    let result = catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap();
    assert!(result.metadata_resolved);
    assert_eq!(result.title, "Dune");

    let book = book_repo
        .find_by_id(result.book_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book.authors.len(), 1);
    assert_eq!(book.authors[0].as_str(), "Frank Herbert");
    assert_eq!(book.publisher, "Ace Books");
    assert_eq!(book.availability_status, AvailabilityStatus::Available);
    assert!(book.shelf_id.is_none());
}

#[tokio::test]
async fn lookup_failure_without_manual_title_surfaces_the_error() {
    let mut provider = MockMetadata::new();
    provider
        .expect_lookup()
        .returning(|_| Err(AppError::MetadataLookup("service unreachable".to_string())));
    let (book_repo, catalog) = catalog_with(provider);

    let err = catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MetadataLookup(_)));
    assert!(book_repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn lookup_failure_with_manual_title_creates_a_bare_record() {
    let mut provider = MockMetadata::new();
    provider
        .expect_lookup()
        .returning(|_| Err(AppError::MetadataLookup("service unreachable".to_string())));
    let (book_repo, catalog) = catalog_with(provider);

    let result = catalog
        .add_book(factories::DUNE_ISBN.to_string(), Some("Dune".to_string()))
        .await
        .unwrap();
    assert!(!result.metadata_resolved);

    let book = book_repo
        .find_by_id(result.book_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book.title.as_str(), "Dune");
    assert!(book.authors.is_empty());
    assert!(book.publisher.is_empty());
}

#[tokio::test]
async fn duplicate_isbn_is_rejected_before_lookup() {
    let mut provider = MockMetadata::new();
    // exactly one lookup: the rejected second add never reaches the provider
    provider
        .expect_lookup()
        .times(1)
        .returning(|_| Ok(factories::dune_metadata()));
    let (book_repo, catalog) = catalog_with(provider);

    catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap();

    let err = catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)));
    assert_eq!(book_repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_isbn_is_rejected() {
    let (_, catalog) = catalog_with(MockMetadata::new());

    let err = catalog
        .add_book("not-an-isbn".to_string(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn checking_out_twice_is_an_invalid_state() {
    let mut provider = MockMetadata::new();
    provider
        .expect_lookup()
        .returning(|_| Ok(factories::dune_metadata()));
    let (book_repo, catalog) = catalog_with(provider);

    let added = catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap();

    let result = catalog.check_out_book(added.book_id).await.unwrap();
    assert_eq!(result.availability_status, AvailabilityStatus::CheckedOut);

    let err = catalog.check_out_book(added.book_id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let book = book_repo.find_by_id(added.book_id).await.unwrap().unwrap();
    assert_eq!(book.availability_status, AvailabilityStatus::CheckedOut);
}

#[tokio::test]
async fn check_in_matches_titles_case_insensitively() {
    let mut provider = MockMetadata::new();
    provider
        .expect_lookup()
        .returning(|_| Ok(factories::dune_metadata()));
    let (_, catalog) = catalog_with(provider);

    let added = catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap();
    catalog.check_out_book(added.book_id).await.unwrap();

    let result = catalog.check_in_book("dUnE".to_string()).await.unwrap();
    assert_eq!(result.book_id, added.book_id);
    assert_eq!(result.availability_status, AvailabilityStatus::Available);
}

#[tokio::test]
async fn checking_in_an_available_book_is_a_no_op() {
    let mut provider = MockMetadata::new();
    provider
        .expect_lookup()
        .returning(|_| Ok(factories::dune_metadata()));
    let (_, catalog) = catalog_with(provider);

    catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap();

    let result = catalog.check_in_book("Dune".to_string()).await.unwrap();
    assert_eq!(result.availability_status, AvailabilityStatus::Available);
}

#[tokio::test]
async fn checking_in_an_unknown_title_is_not_found() {
    let (_, catalog) = catalog_with(MockMetadata::new());

    let err = catalog
        .check_in_book("Nonexistent".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

/// Full walkthrough: catalog a book, shelve it, circulate it, and verify
/// it stays on its shelf the whole time.
#[tokio::test]
async fn living_room_walkthrough() {
    let book_repo = Arc::new(InMemoryBookRepository::default());
    let mut provider = MockMetadata::new();
    provider
        .expect_lookup()
        .returning(|_| Ok(factories::dune_metadata()));
    let catalog = CatalogService::new(book_repo.clone(), Arc::new(provider));
    let placement = PlacementService::new(
        Arc::new(InMemoryBookcaseRepository::default()),
        Arc::new(InMemoryShelfRepository::default()),
        book_repo.clone(),
    );

    let created = placement
        .create_bookcase(factories::create_bookcase_command("Living Room", 2, 1))
        .await
        .unwrap();
    assert_eq!(created.shelf_ids.len(), 2);

    let added = catalog
        .add_book(factories::DUNE_ISBN.to_string(), None)
        .await
        .unwrap();

    let placed = placement
        .place_book_on_shelf(added.book_id, created.shelf_ids[0])
        .await
        .unwrap();
    assert_eq!(placed.shelf_label, "Shelf 1");

    // the first shelf only fits one book
    let other = factories::book("Hyperion", factories::HYPERION_ISBN);
    book_repo.save(&other).await.unwrap();
    let err = placement
        .place_book_on_shelf(other.id, created.shelf_ids[0])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CapacityExceeded(_)));

    catalog.check_out_book(added.book_id).await.unwrap();
    let err = catalog.check_out_book(added.book_id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let checked_in = catalog.check_in_book("Dune".to_string()).await.unwrap();
    assert_eq!(
        checked_in.availability_status,
        AvailabilityStatus::Available
    );

    // circulation never disturbs placement
    let book = book_repo.find_by_id(added.book_id).await.unwrap().unwrap();
    assert_eq!(book.shelf_id, Some(created.shelf_ids[0]));
    let on_shelf = placement
        .get_books_on_shelf(created.shelf_ids[0])
        .await
        .unwrap();
    assert_eq!(on_shelf.len(), 1);
}
