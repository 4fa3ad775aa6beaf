mod command;
mod handler;
mod result;

pub use command::DeleteItemCommand;
pub use handler::DeleteItemHandler;
pub use result::DeleteItemResult;
