//Conventional layout, relative to the base directory
pub const WORKFLOW_DIR: &str = "workflow";
pub const SNAKEFILE: &str = "Snakefile";
pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "config.yaml";

//Command line defaults
pub const DEFAULT_THRESHOLD: &str = "99.9";
pub const DEFAULT_THREADS: &str = "1";
pub const DEFAULT_PATH_WORKDIR: &str = ".";
pub const DEFAULT_RUNNER: &str = "snakemake";

//Runner arguments
pub const RUNNER_ARG_USE_CONDA: &str = "--use-conda";
pub const RUNNER_ARG_CORES: &str = "--cores";
pub const RUNNER_ARG_FORCE: &str = "-F";
pub const RUNNER_ARG_DRY_RUN: &str = "-n";

//Environment variable that overrides the log filter
pub const LOG_ENV: &str = "JUNCTION_FINDER_LOG";
