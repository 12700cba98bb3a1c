use std::path::{Path, PathBuf};

use log::debug;

use crate::command::constants::{CONFIG_DIR, CONFIG_FILE, SNAKEFILE, WORKFLOW_DIR};
use crate::runtime::Error;

///////////////////////////////
/// Where the workflow definition and its config live. All paths derive from one explicit base directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowLayout {
    pub path_base: PathBuf,
}

impl WorkflowLayout {
    pub fn new<P: AsRef<Path>>(path_base: P) -> Self {
        WorkflowLayout {
            path_base: path_base.as_ref().to_path_buf(),
        }
    }

    pub fn workflow_dir(&self) -> PathBuf {
        self.path_base.join(WORKFLOW_DIR)
    }

    pub fn snakefile(&self) -> PathBuf {
        self.workflow_dir().join(SNAKEFILE)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.path_base.join(CONFIG_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }
}


/////// Check that the workflow directory and its Snakefile are present
pub fn validate_layout(layout: &WorkflowLayout, debug: bool) -> Result<(), Error> {
    let workflow_dir = layout.workflow_dir();
    debug!("Looking for workflow directory {:?}", workflow_dir);
    if !workflow_dir.is_dir() {
        return Err(Error::workflow_dir_missing(workflow_dir));
    }

    let snakefile = layout.snakefile();
    if !snakefile.is_file() {
        return Err(Error::snakefile_missing(snakefile));
    }

    if debug {
        println!("Snakefile detected");
    }
    Ok(())
}
