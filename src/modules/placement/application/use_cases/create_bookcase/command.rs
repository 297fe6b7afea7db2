/// Command for creating a bookcase with its fixed shelf complement
#[derive(Debug, Clone)]
pub struct CreateBookcaseCommand {
    pub owner_id: String,
    pub location: String,
    pub zone: String,
    pub zone_index: String,
    pub shelf_count: i32,
    pub book_capacity_per_shelf: i32,
}

impl CreateBookcaseCommand {
    pub fn new(
        owner_id: String,
        location: String,
        zone: String,
        zone_index: String,
        shelf_count: i32,
        book_capacity_per_shelf: i32,
    ) -> Self {
        Self {
            owner_id,
            location,
            zone,
            zone_index,
            shelf_count,
            book_capacity_per_shelf,
        }
    }
}
