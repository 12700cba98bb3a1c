pub mod cmd;
pub mod command;
pub mod runtime;
pub mod utils;

pub use command::constants;
