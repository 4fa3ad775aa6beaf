mod command;
mod handler;
mod result;

pub use command::SetModulesCommand;
pub use handler::SetModulesHandler;
pub use result::SetModulesResult;
