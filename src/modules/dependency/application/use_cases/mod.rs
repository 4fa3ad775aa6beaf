pub mod link_dependency;
pub mod unlink_dependency;

pub use link_dependency::{LinkDependencyCommand, LinkDependencyHandler, LinkDependencyResult};
pub use unlink_dependency::{
    UnlinkDependencyCommand, UnlinkDependencyHandler, UnlinkDependencyResult,
};
