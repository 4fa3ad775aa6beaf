pub mod item_status;
pub mod module_status;

pub use item_status::ItemStatus;
pub use module_status::ModuleStatus;
