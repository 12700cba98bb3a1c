pub mod junction_finder_cmd;

pub use junction_finder_cmd::JunctionFinderCMD;
pub use junction_finder_cmd::RunOutcome;
