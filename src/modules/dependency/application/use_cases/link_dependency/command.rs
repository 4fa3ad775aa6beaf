use uuid::Uuid;

/// Command for adding a prerequisite edge: source requires target first
#[derive(Debug, Clone)]
pub struct LinkDependencyCommand {
    pub owner_id: String,
    pub source_id: Uuid,
    pub target_id: Uuid,
}

impl LinkDependencyCommand {
    pub fn new(owner_id: String, source_id: Uuid, target_id: Uuid) -> Self {
        Self {
            owner_id,
            source_id,
            target_id,
        }
    }
}
