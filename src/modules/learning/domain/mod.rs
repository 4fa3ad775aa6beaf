pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{ItemRecord, LearningItem, Module};
pub use services::{ProgressCalculator, StatusMachine};
pub use value_objects::{ItemStatus, ModuleStatus};
