pub mod persistence;

pub use persistence::{InMemoryItemRepository, InMemoryModuleRepository};
