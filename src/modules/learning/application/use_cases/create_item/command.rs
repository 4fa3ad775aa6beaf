use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Command for creating a new learning item
#[derive(Debug, Clone)]
pub struct CreateItemCommand {
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub category_id: Option<Uuid>,
}

impl CreateItemCommand {
    pub fn new(owner_id: String, title: String) -> Self {
        Self {
            owner_id,
            title,
            description: String::new(),
            due_date: None,
            category_id: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
