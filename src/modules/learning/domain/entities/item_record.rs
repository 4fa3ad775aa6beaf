use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::learning::domain::value_objects::ItemStatus;

/// Persistence-facing snapshot of a learning item's scalar state.
///
/// The module list is stored separately (see `ModuleRepository`); the
/// aggregate is rebuilt from record + modules via `LearningItem::from_record`,
/// which recomputes the cached progress so it can never drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: ItemStatus,
    pub progress: u32,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
