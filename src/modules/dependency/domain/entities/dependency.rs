use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Directed prerequisite edge between two learning items.
///
/// `source -> target` means "source requires target to be completed first".
/// Edge-set invariants (no self-loop, no duplicate pair, acyclic) are
/// enforced by `DependencyGraph::link`, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub id: Uuid,
    pub source_id: Uuid,
    pub target_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Dependency {
    pub fn new(source_id: Uuid, target_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_id,
            target_id,
            created_at: Utc::now(),
        }
    }
}
