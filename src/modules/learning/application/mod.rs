pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{ItemRef, ItemRepository, ModuleRepository};

pub use use_cases::{
    CreateItemCommand, CreateItemHandler, CreateItemResult, DeleteItemCommand, DeleteItemHandler,
    DeleteItemResult, SetModulesCommand, SetModulesHandler, SetModulesResult, UpdateItemCommand,
    UpdateItemHandler, UpdateItemResult,
};
