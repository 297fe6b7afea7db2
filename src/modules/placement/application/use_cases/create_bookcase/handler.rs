use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::placement::domain::entities::Bookcase;
use crate::modules::placement::domain::repositories::{BookcaseRepository, ShelfRepository};
use crate::shared::{application::use_case::UseCase, errors::AppError, errors::AppResult};

use super::{command::CreateBookcaseCommand, result::CreateBookcaseResult};

/// Use case handler for creating a new bookcase.
///
/// The duplicate-location check runs before anything is persisted, so a
/// rejected command leaves zero bookcase or shelf rows behind.
pub struct CreateBookcaseHandler {
    bookcase_repository: Arc<dyn BookcaseRepository>,
    shelf_repository: Arc<dyn ShelfRepository>,
}

impl CreateBookcaseHandler {
    pub fn new(
        bookcase_repository: Arc<dyn BookcaseRepository>,
        shelf_repository: Arc<dyn ShelfRepository>,
    ) -> Self {
        Self {
            bookcase_repository,
            shelf_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateBookcaseCommand, CreateBookcaseResult> for CreateBookcaseHandler {
    async fn execute(&self, command: CreateBookcaseCommand) -> AppResult<CreateBookcaseResult> {
        if self
            .bookcase_repository
            .find_by_location(&command.location)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "Bookcase at location '{}' already exists",
                command.location
            )));
        }

        let bookcase = Bookcase::new(
            command.owner_id,
            command.location,
            command.zone,
            command.zone_index,
            command.shelf_count,
            command.book_capacity_per_shelf,
        )?;

        self.bookcase_repository.save(&bookcase).await?;

        let shelves = bookcase.provision_shelves()?;
        for shelf in &shelves {
            self.shelf_repository.save(shelf).await?;
        }

        log_info!(
            "Created bookcase '{}' with {} shelves",
            bookcase.location,
            shelves.len()
        );

        Ok(CreateBookcaseResult::new(
            bookcase.id,
            bookcase.location,
            shelves.iter().map(|s| s.id).collect(),
        ))
    }
}
