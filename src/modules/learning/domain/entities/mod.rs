pub mod item_record;
pub mod learning_item;
pub mod module;

pub use item_record::ItemRecord;
pub use learning_item::LearningItem;
pub use module::Module;
