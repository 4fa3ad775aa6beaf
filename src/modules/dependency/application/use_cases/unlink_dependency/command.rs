use uuid::Uuid;

/// Command for removing a single prerequisite edge
#[derive(Debug, Clone)]
pub struct UnlinkDependencyCommand {
    pub owner_id: String,
    pub source_id: Uuid,
    pub target_id: Uuid,
}

impl UnlinkDependencyCommand {
    pub fn new(owner_id: String, source_id: Uuid, target_id: Uuid) -> Self {
        Self {
            owner_id,
            source_id,
            target_id,
        }
    }
}
