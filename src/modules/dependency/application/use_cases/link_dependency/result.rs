use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result of linking a dependency
#[derive(Debug, Clone)]
pub struct LinkDependencyResult {
    pub dependency_id: Uuid,
    pub source_id: Uuid,
    pub target_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl LinkDependencyResult {
    pub fn new(
        dependency_id: Uuid,
        source_id: Uuid,
        target_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            dependency_id,
            source_id,
            target_id,
            created_at,
        }
    }
}
