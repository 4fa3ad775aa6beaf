pub mod modules;
pub mod shared;

// Re-exports for easy external access
pub use modules::dependency::{DependencyGraph, LinkDependencyHandler, UnlinkDependencyHandler};
pub use modules::learning::{
    CreateItemHandler, DeleteItemHandler, LearningItem, SetModulesHandler, UpdateItemHandler,
};
pub use shared::errors::{DomainError, DomainResult, ValidationError};
