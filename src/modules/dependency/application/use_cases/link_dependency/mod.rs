mod command;
mod handler;
mod result;

pub use command::LinkDependencyCommand;
pub use handler::LinkDependencyHandler;
pub use result::LinkDependencyResult;
