use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use log::{debug, info, warn};

use crate::command::constants::{
    RUNNER_ARG_CORES, RUNNER_ARG_DRY_RUN, RUNNER_ARG_FORCE, RUNNER_ARG_USE_CONDA,
};
use crate::runtime::Error;
use crate::utils;

#[derive(Clone, Debug)]
pub struct SnakemakeParams {
    pub runner: String,
    pub path_workdir: PathBuf,

    //Passed on as --cores without checks; the runner manages its own parallelism and also accepts "all"
    pub threads: String,

    pub force: bool,
    pub dry_run: bool,
    pub use_conda: bool,
    pub debug: bool,
}

pub struct Snakemake {}

impl Snakemake {

    /// Compose the runner invocation as an argument list. No shell is involved
    pub fn build_command(params: &SnakemakeParams) -> Command {
        let mut cmd = Command::new(&params.runner);
        if params.use_conda {
            cmd.arg(RUNNER_ARG_USE_CONDA);
        }
        cmd.arg(RUNNER_ARG_CORES).arg(&params.threads);
        if params.force {
            cmd.arg(RUNNER_ARG_FORCE);
        }
        if params.dry_run {
            cmd.arg(RUNNER_ARG_DRY_RUN);
        }
        cmd.current_dir(&params.path_workdir);
        cmd
    }

    /// Run the workflow and block until the runner exits. Output goes straight to the terminal
    pub fn run(params: &SnakemakeParams) -> Result<ExitStatus, Error> {
        let mut cmd = Self::build_command(params);
        let cmd_string = utils::command_to_string(&cmd);
        if params.debug {
            println!("Running command: {}", cmd_string);
        }
        debug!("Runner working directory {:?}", params.path_workdir);

        let status = match cmd.status() {
            Ok(status) => status,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                return Err(Error::utility_not_executable(&params.runner));
            }
            Err(e) => {
                return Err(Error::utility_execution_error(
                    &params.runner,
                    cmd_string,
                    Some(e.to_string()),
                ));
            }
        };

        if status.success() {
            info!("{} has finished successfully", params.runner);
        } else {
            warn!("{} exited with {}", params.runner, status);
        }
        Ok(status)
    }
}


/// Exit code for this process once the runner is done. The runner's status is only
/// forwarded on request; a runner killed by a signal maps to 1
pub fn exit_code_for(status: &ExitStatus, propagate: bool) -> u8 {
    if !propagate || status.success() {
        return 0;
    }
    match status.code() {
        Some(code) => u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1),
        None => 1,
    }
}
