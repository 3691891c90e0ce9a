pub mod build;
mod command_result;
pub mod dashboard;
pub mod fetch;

pub use command_result::*;
