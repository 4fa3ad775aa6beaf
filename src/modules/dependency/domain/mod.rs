pub mod entities;
pub mod events;
pub mod services;

// Re-exports for easy access
pub use entities::Dependency;
pub use services::DependencyGraph;
