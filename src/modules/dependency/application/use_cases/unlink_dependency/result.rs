use uuid::Uuid;

/// Result of unlinking a dependency
#[derive(Debug, Clone)]
pub struct UnlinkDependencyResult {
    pub source_id: Uuid,
    pub target_id: Uuid,
}

impl UnlinkDependencyResult {
    pub fn new(source_id: Uuid, target_id: Uuid) -> Self {
        Self {
            source_id,
            target_id,
        }
    }
}
