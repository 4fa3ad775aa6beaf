pub mod create_item;
pub mod delete_item;
pub mod set_modules;
pub mod update_item;

pub use create_item::{CreateItemCommand, CreateItemHandler, CreateItemResult};
pub use delete_item::{DeleteItemCommand, DeleteItemHandler, DeleteItemResult};
pub use set_modules::{SetModulesCommand, SetModulesHandler, SetModulesResult};
pub use update_item::{UpdateItemCommand, UpdateItemHandler, UpdateItemResult};
