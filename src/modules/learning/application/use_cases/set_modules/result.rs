use uuid::Uuid;

/// Result of replacing a learning item's module set
#[derive(Debug, Clone)]
pub struct SetModulesResult {
    pub item_id: Uuid,
    pub module_count: usize,
    pub progress: u32,
}

impl SetModulesResult {
    pub fn new(item_id: Uuid, module_count: usize, progress: u32) -> Self {
        Self {
            item_id,
            module_count,
            progress,
        }
    }
}
