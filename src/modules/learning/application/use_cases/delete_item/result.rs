use uuid::Uuid;

/// Result of deleting a learning item
#[derive(Debug, Clone)]
pub struct DeleteItemResult {
    pub item_id: Uuid,
    /// Dependency edges removed alongside the item (either direction)
    pub removed_edges: u64,
}

impl DeleteItemResult {
    pub fn new(item_id: Uuid, removed_edges: u64) -> Self {
        Self {
            item_id,
            removed_edges,
        }
    }
}
