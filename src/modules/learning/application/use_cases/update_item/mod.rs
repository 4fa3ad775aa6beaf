mod command;
mod handler;
mod result;

pub use command::UpdateItemCommand;
pub use handler::UpdateItemHandler;
pub use result::UpdateItemResult;
