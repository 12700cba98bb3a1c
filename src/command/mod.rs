pub mod constants;
pub mod configfile;
pub mod layout;
pub mod snakemake;

pub use layout::validate_layout;
pub use layout::WorkflowLayout;

pub use configfile::write_configfile;
pub use configfile::ConfigFileParams;
pub use configfile::ConfigOutcome;
pub use configfile::RunConfig;
pub use configfile::Threshold;

pub use snakemake::Snakemake;
pub use snakemake::SnakemakeParams;
