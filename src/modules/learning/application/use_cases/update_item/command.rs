use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::learning::domain::ItemStatus;

/// Command for updating fields and/or status of a learning item.
///
/// Outer `None` means "leave unchanged"; for the double-optional fields the
/// inner `None` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemCommand {
    pub item_id: Uuid,
    pub owner_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub category_id: Option<Option<Uuid>>,
    pub status: Option<ItemStatus>,
}

impl UpdateItemCommand {
    pub fn new(item_id: Uuid, owner_id: String) -> Self {
        Self {
            item_id,
            owner_id,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_category(mut self, category_id: Option<Uuid>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }
}
