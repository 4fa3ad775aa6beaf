pub mod item_repository;
pub mod module_repository;

pub use item_repository::{ItemRef, ItemRepository};
pub use module_repository::ModuleRepository;
