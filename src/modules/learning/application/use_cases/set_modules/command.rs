use uuid::Uuid;

use crate::modules::learning::domain::Module;

/// Command for replacing the module set of a learning item
#[derive(Debug, Clone)]
pub struct SetModulesCommand {
    pub item_id: Uuid,
    pub owner_id: String,
    pub modules: Vec<Module>,
}

impl SetModulesCommand {
    pub fn new(item_id: Uuid, owner_id: String, modules: Vec<Module>) -> Self {
        Self {
            item_id,
            owner_id,
            modules,
        }
    }
}
