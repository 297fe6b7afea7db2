use crate::modules::placement::domain::value_objects::Placement;

/// Result of a successful placement
#[derive(Debug, Clone)]
pub struct PlaceBookOnShelfResult {
    pub placement: Placement,
    pub shelf_label: String,
}

impl PlaceBookOnShelfResult {
    pub fn new(placement: Placement, shelf_label: String) -> Self {
        Self {
            placement,
            shelf_label,
        }
    }
}
