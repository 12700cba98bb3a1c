use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::command::constants::{DEFAULT_PATH_WORKDIR, DEFAULT_RUNNER, DEFAULT_THREADS, DEFAULT_THRESHOLD};
use crate::command::snakemake::exit_code_for;
use crate::command::{
    validate_layout, write_configfile, ConfigFileParams, ConfigOutcome, Snakemake,
    SnakemakeParams, Threshold, WorkflowLayout,
};
use crate::utils;


#[derive(Args, Debug, Clone)]
pub struct JunctionFinderCMD {
    #[arg(short = 'i', long = "indir", value_parser = clap::value_parser!(PathBuf))]  /// Input path to assembly directory
    pub path_in: PathBuf,

    #[arg(short = 'q', long = "query_file", value_parser = clap::value_parser!(PathBuf))]  /// Path to query file
    pub path_query: PathBuf,

    /// Cutoff threshold of match coverage and identity. Ignore threshold by setting to 0 or False
    #[arg(short = 'T', long = "threshold", default_value = DEFAULT_THRESHOLD)]
    pub threshold: Threshold,

    /// Include only the top hit for each sample and their queries
    #[arg(short = 'b')]
    pub top_only: bool,

    #[arg(short = 'o', long = "outdir", value_parser = clap::value_parser!(PathBuf))]  /// Output path to results and temporary files directory
    pub path_out: PathBuf,

    /// Include samples with no hits in the junctions results files
    #[arg(short = 'e')]
    pub include_empty: bool,

    /// Preserve an existing configuration file and exit without running the pipeline
    #[arg(short = 'k')]
    pub keep_config: bool,

    /// Number of threads to allocate for the pipeline. Passed on to Snakemake as is, so "all" works too
    #[arg(short = 't', long = "threads", default_value = DEFAULT_THREADS)]
    pub threads: String,

    /// Force rerun of all tasks in the pipeline
    #[arg(short = 'F')]
    pub force: bool,

    /// Skip Snakemake, for running it manually. The config file is still generated
    #[arg(short = 'S')]
    pub skip_runner: bool,

    /// Perform a dry run with Snakemake to see jobs without executing them
    #[arg(short = 'n')]
    pub dry_run: bool,

    /// Enable debug mode. Also passed on to the workflow
    #[arg(short = 'd')]
    pub debug: bool,

    /// Directory holding workflow/ and config/
    #[arg(short = 'C', long = "workdir", value_parser = clap::value_parser!(PathBuf), default_value = DEFAULT_PATH_WORKDIR)]
    pub path_workdir: PathBuf,

    /// Snakemake executable to invoke
    #[arg(long = "snakemake", default_value = DEFAULT_RUNNER)]
    pub runner: String,

    /// Do not pass --use-conda to Snakemake
    #[arg(long = "no-conda")]
    pub no_conda: bool,

    /// Exit with Snakemake's exit status instead of always succeeding
    #[arg(long = "propagate-exit")]
    pub propagate_exit: bool,
}


/// How a run ended, short of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    ConfigKept,
    RunnerSkipped,
    RunnerFinished(ExitStatus),
}


impl JunctionFinderCMD {

    /// Run the commandline option. Returns the exit code for the process
    pub fn try_execute(&mut self) -> Result<u8> {
        let path_cwd = std::env::current_dir().context("Failed to get current directory")?;
        let outcome = self.run_in(&path_cwd)?;
        Ok(match outcome {
            RunOutcome::ConfigKept | RunOutcome::RunnerSkipped => 0,
            RunOutcome::RunnerFinished(status) => exit_code_for(&status, self.propagate_exit),
        })
    }

    /// Validate, write the config and invoke the runner. Relative paths are taken relative to `path_cwd`
    pub fn run_in(&self, path_cwd: &Path) -> Result<RunOutcome> {
        let layout = WorkflowLayout::new(utils::expand_and_resolve_path(&self.path_workdir, path_cwd));
        log::debug!("Using base directory {}", layout.path_base.display());

        validate_layout(&layout, self.debug)?;

        let outcome = write_configfile(&layout, &ConfigFileParams {
            path_in: self.path_in.clone(),
            path_query: self.path_query.clone(),
            path_out: self.path_out.clone(),
            path_cwd: path_cwd.to_path_buf(),
            threshold: self.threshold,
            top_only: self.top_only,
            include_empty: self.include_empty,
            debug: self.debug,
            keep_config: self.keep_config,
            skip_runner: self.skip_runner,
        })?;
        if let ConfigOutcome::Kept(_) = outcome {
            return Ok(RunOutcome::ConfigKept);
        }

        if self.skip_runner {
            println!("Warning: Skipping Snakemake!");
            return Ok(RunOutcome::RunnerSkipped);
        }

        let status = Snakemake::run(&SnakemakeParams {
            runner: self.runner.clone(),
            path_workdir: layout.path_base.clone(),
            threads: self.threads.clone(),
            force: self.force,
            dry_run: self.dry_run,
            use_conda: !self.no_conda,
            debug: self.debug,
        })?;
        Ok(RunOutcome::RunnerFinished(status))
    }
}
