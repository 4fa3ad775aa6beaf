mod command;
mod handler;
mod result;

pub use command::UnlinkDependencyCommand;
pub use handler::UnlinkDependencyHandler;
pub use result::UnlinkDependencyResult;
