use uuid::Uuid;

/// Command for deleting a learning item with its modules and edges
#[derive(Debug, Clone)]
pub struct DeleteItemCommand {
    pub item_id: Uuid,
    pub owner_id: String,
}

impl DeleteItemCommand {
    pub fn new(item_id: Uuid, owner_id: String) -> Self {
        Self { item_id, owner_id }
    }
}
