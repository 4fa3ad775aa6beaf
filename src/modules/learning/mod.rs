pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    CreateItemCommand, CreateItemHandler, CreateItemResult, DeleteItemCommand, DeleteItemHandler,
    DeleteItemResult, ItemRepository, ModuleRepository, SetModulesCommand, SetModulesHandler,
    SetModulesResult, UpdateItemCommand, UpdateItemHandler, UpdateItemResult,
};
pub use domain::{ItemStatus, LearningItem, Module, ModuleStatus};
