use uuid::Uuid;

use crate::modules::learning::domain::ItemStatus;

/// Result of creating a new learning item
#[derive(Debug, Clone)]
pub struct CreateItemResult {
    pub item_id: Uuid,
    pub title: String,
    pub status: ItemStatus,
}

impl CreateItemResult {
    pub fn new(item_id: Uuid, title: String, status: ItemStatus) -> Self {
        Self {
            item_id,
            title,
            status,
        }
    }
}
