pub mod dependency;
pub mod learning;
