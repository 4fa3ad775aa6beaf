use uuid::Uuid;

use crate::modules::learning::domain::ItemStatus;

/// Result of updating a learning item
#[derive(Debug, Clone)]
pub struct UpdateItemResult {
    pub item_id: Uuid,
    pub status: ItemStatus,
    pub progress: u32,
}

impl UpdateItemResult {
    pub fn new(item_id: Uuid, status: ItemStatus, progress: u32) -> Self {
        Self {
            item_id,
            status,
            progress,
        }
    }
}
