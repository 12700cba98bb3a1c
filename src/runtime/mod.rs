mod error;
mod logging;

pub use error::Error;
pub use logging::*;
