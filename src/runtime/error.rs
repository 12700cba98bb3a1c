use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No workflow directory detected, are you sure you are running the script from the software folder? (looked for {:?})", path)]
    WorkflowDirMissing { path: std::path::PathBuf },

    #[error("Error no Snakefile detected in workflow directory. Software is probably corrupt, consider redownloading. (looked for {:?})", path)]
    SnakefileMissing { path: std::path::PathBuf },

    #[error("I/O error at {:?}: {}", path, source)]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialise configuration for {:?}{}", path, Error::format_msg_as_detail(msg))]
    ConfigSerialize {
        path: std::path::PathBuf,
        msg: Option<String>,
    },

    #[error(
        "Utility '{}' failed on execute \'{}\'{}",
        utility,
        cmd,
        Error::format_msg_as_detail(msg)
    )]
    UtilityExecutionError {
        utility: String,
        cmd: String,
        msg: Option<String>,
    },

    #[error(
        "Failed trying to execute utility '{utility}'. Make sure it is in your $PATH and you have execution permissions."
    )]
    UtilityNotExecutable { utility: String },
}

impl Error {
    #[cold]
    pub fn workflow_dir_missing<P: AsRef<std::path::Path>>(path: P) -> Self {
        Error::WorkflowDirMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[cold]
    pub fn snakefile_missing<P: AsRef<std::path::Path>>(path: P) -> Self {
        Error::SnakefileMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[cold]
    pub fn io<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    #[cold]
    pub fn config_serialize<P: AsRef<std::path::Path>, M: Into<String>>(
        path: P,
        msg: Option<M>,
    ) -> Self {
        Error::ConfigSerialize {
            path: path.as_ref().to_path_buf(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn utility_execution_error<U: Into<String>, C: Into<String>, M: Into<String>>(
        utility: U,
        cmd: C,
        msg: Option<M>,
    ) -> Self {
        Error::UtilityExecutionError {
            utility: utility.into(),
            cmd: cmd.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn utility_not_executable<U: Into<String>>(utility: U) -> Self {
        Error::UtilityNotExecutable {
            utility: utility.into(),
        }
    }

    /// Missing pieces of the workflow layout. These are reported on stdout as plain diagnostics
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::WorkflowDirMissing { .. } | Error::SnakefileMissing { .. }
        )
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }
}
