pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    DependencyRepository, LinkDependencyCommand, LinkDependencyHandler, LinkDependencyResult,
    UnlinkDependencyCommand, UnlinkDependencyHandler, UnlinkDependencyResult,
};
pub use domain::{Dependency, DependencyGraph};
