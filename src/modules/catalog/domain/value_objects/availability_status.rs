use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-state circulation flag for a book
#[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::AvailabilityStatus"]
pub enum AvailabilityStatus {
    Available,
    CheckedOut,
}

impl AvailabilityStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::CheckedOut => "Checked out",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Default for AvailabilityStatus {
    fn default() -> Self {
        AvailabilityStatus::Available
    }
}
