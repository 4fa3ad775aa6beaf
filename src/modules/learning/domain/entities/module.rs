use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::learning::domain::value_objects::ModuleStatus;

/// Sub-unit of a learning item with its own completion status.
///
/// Modules are owned by their parent `LearningItem` and are only created,
/// edited, reordered or deleted through the aggregate's module operations;
/// each of those recomputes the parent's progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: Uuid,
    /// Backreference to the owning learning item (by id, no ownership cycle)
    pub item_id: Uuid,
    pub title: String,
    pub status: ModuleStatus,
    /// Position within the parent; unique per item, not necessarily contiguous
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Module {
    pub fn new(item_id: Uuid, title: String, order: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            item_id,
            title,
            status: ModuleStatus::Pending,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: ModuleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
