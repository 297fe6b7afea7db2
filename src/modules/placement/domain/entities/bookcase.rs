use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shelf::Shelf;
use crate::shared::domain::value_objects::BookcaseId;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Bookcase aggregate root.
///
/// A physical storage unit holding a fixed complement of shelves. The
/// bookcase owns the shelf creation policy: every bookcase starts with
/// exactly `shelf_count` shelves, labeled and positioned deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookcase {
    pub id: BookcaseId,
    pub owner_id: String,
    pub location: String,
    pub zone: String,
    pub zone_index: String,
    pub shelf_count: i32,
    pub book_capacity_per_shelf: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookcase {
    pub fn new(
        owner_id: String,
        location: String,
        zone: String,
        zone_index: String,
        shelf_count: i32,
        book_capacity_per_shelf: i32,
    ) -> AppResult<Self> {
        Validator::validate_location(&location)?;
        Validator::validate_shelf_count(shelf_count)?;
        Validator::validate_capacity(book_capacity_per_shelf)?;

        let now = Utc::now();
        Ok(Self {
            id: BookcaseId::new(),
            owner_id,
            location,
            zone,
            zone_index,
            shelf_count,
            book_capacity_per_shelf,
            created_at: now,
            updated_at: now,
        })
    }

    /// Provision the fixed shelf complement for this bookcase: exactly
    /// `shelf_count` shelves labeled "Shelf 1".."Shelf N" at contiguous
    /// 1-based positions, each with `book_capacity_per_shelf` capacity.
    pub fn provision_shelves(&self) -> AppResult<Vec<Shelf>> {
        (1..=self.shelf_count)
            .map(|position| {
                Shelf::new(
                    self.id,
                    position,
                    format!("Shelf {}", position),
                    self.book_capacity_per_shelf,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn living_room(shelf_count: i32, capacity: i32) -> Bookcase {
        Bookcase::new(
            "owner-1".to_string(),
            "Living Room".to_string(),
            "A".to_string(),
            "1".to_string(),
            shelf_count,
            capacity,
        )
        .unwrap()
    }

    #[test]
    fn provisions_exactly_shelf_count_shelves() {
        let bookcase = living_room(4, 10);
        let shelves = bookcase.provision_shelves().unwrap();
        assert_eq!(shelves.len(), 4);
    }

    #[test]
    fn shelves_have_contiguous_positions_and_deterministic_labels() {
        let bookcase = living_room(3, 5);
        let shelves = bookcase.provision_shelves().unwrap();

        let positions: Vec<i32> = shelves.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);

        let unique: HashSet<i32> = positions.into_iter().collect();
        assert_eq!(unique.len(), 3);

        assert_eq!(shelves[0].label, "Shelf 1");
        assert_eq!(shelves[2].label, "Shelf 3");

        for shelf in &shelves {
            assert_eq!(shelf.book_capacity, 5);
            assert_eq!(shelf.bookcase_id, bookcase.id);
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(Bookcase::new(
            "owner-1".to_string(),
            "".to_string(),
            "A".to_string(),
            "1".to_string(),
            2,
            5
        )
        .is_err());
        assert!(Bookcase::new(
            "owner-1".to_string(),
            "Hall".to_string(),
            "A".to_string(),
            "1".to_string(),
            0,
            5
        )
        .is_err());
        assert!(Bookcase::new(
            "owner-1".to_string(),
            "Hall".to_string(),
            "A".to_string(),
            "1".to_string(),
            2,
            0
        )
        .is_err());
    }
}
