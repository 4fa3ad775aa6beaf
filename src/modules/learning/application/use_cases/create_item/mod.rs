mod command;
mod handler;
mod result;

pub use command::CreateItemCommand;
pub use handler::CreateItemHandler;
pub use result::CreateItemResult;
