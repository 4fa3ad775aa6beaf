pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::DependencyRepository;

pub use use_cases::{
    LinkDependencyCommand, LinkDependencyHandler, LinkDependencyResult, UnlinkDependencyCommand,
    UnlinkDependencyHandler, UnlinkDependencyResult,
};
