mod command_to_string;
mod expand_and_resolve_path;

pub use command_to_string::command_to_string;
pub use expand_and_resolve_path::expand_and_resolve_path;
