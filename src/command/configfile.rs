use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use serde::{Serialize, Serializer};

use crate::command::layout::WorkflowLayout;
use crate::runtime::Error;
use crate::utils::expand_and_resolve_path;

///////////////////////////////
/// Cutoff of match coverage and identity. Disabled when given as 0 or false
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Threshold {
    Cutoff(f64),
    Disabled,
}

impl std::str::FromStr for Threshold {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("false") {
            return Ok(Threshold::Disabled);
        }
        match t.parse::<f64>() {
            Ok(v) if !v.is_finite() => Err(format!("Invalid threshold: {}", s)),
            Ok(v) if v == 0.0 => Ok(Threshold::Disabled),
            Ok(v) => Ok(Threshold::Cutoff(v)),
            Err(_) => Err(format!("Invalid threshold: {} (expected a number, 0 or false)", s)),
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Cutoff(v) => write!(f, "{}", v),
            Threshold::Disabled => write!(f, "false"),
        }
    }
}

//The workflow tests the value for truthiness, so a disabled threshold is written as a plain false
impl Serialize for Threshold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Threshold::Cutoff(v) => serializer.serialize_f64(*v),
            Threshold::Disabled => serializer.serialize_bool(false),
        }
    }
}


///////////////////////////////
/// The document the workflow reads. Fields are in alphabetical order, which is the key order of the file
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunConfig {
    pub debug: bool,
    pub include_empty: bool,
    pub indir: PathBuf,
    pub outdir: PathBuf,
    pub query_file: PathBuf,
    pub threshold: Threshold,
    pub top_only: bool,
}


#[derive(Clone, Debug)]
pub struct ConfigFileParams {
    pub path_in: PathBuf,
    pub path_query: PathBuf,
    pub path_out: PathBuf,

    //Relative input paths are resolved against this directory
    pub path_cwd: PathBuf,

    pub threshold: Threshold,
    pub top_only: bool,
    pub include_empty: bool,
    pub debug: bool,

    pub keep_config: bool,
    pub skip_runner: bool,
}

impl ConfigFileParams {
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            debug: self.debug,
            include_empty: self.include_empty,
            indir: expand_and_resolve_path(&self.path_in, &self.path_cwd),
            outdir: expand_and_resolve_path(&self.path_out, &self.path_cwd),
            query_file: expand_and_resolve_path(&self.path_query, &self.path_cwd),
            threshold: self.threshold,
            top_only: self.top_only,
        }
    }
}


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// A fresh config file was written
    Written(PathBuf),
    /// An existing config file was kept and the pipeline should not run
    Kept(PathBuf),
}


/////// Write config/config.yaml for the workflow, creating config/ if needed
pub fn write_configfile(
    layout: &WorkflowLayout,
    params: &ConfigFileParams,
) -> Result<ConfigOutcome, Error> {
    let config_file = layout.config_file();

    if !config_file.is_file() {
        let config_dir = layout.config_dir();
        if !config_dir.is_dir() {
            println!("No config dir detected, creating directory.");
            fs::create_dir(&config_dir).map_err(|e| Error::io(&config_dir, e))?;
        }
    } else if params.keep_config && !params.skip_runner {
        println!("--keep_config is set to true, exiting!");
        return Ok(ConfigOutcome::Kept(config_file));
    }

    let run_config = params.to_run_config();
    debug!("Run configuration: {:?}", run_config);

    let yaml = serde_yaml::to_string(&run_config)
        .map_err(|e| Error::config_serialize(&config_file, Some(e.to_string())))?;
    fs::write(&config_file, yaml).map_err(|e| Error::io(&config_file, e))?;

    info!("Wrote config file {}", config_file.display());
    Ok(ConfigOutcome::Written(config_file))
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn params(cwd: &std::path::Path) -> ConfigFileParams {
        ConfigFileParams {
            path_in: PathBuf::from("assemblies/"),
            path_query: PathBuf::from("queries/junctions.fasta"),
            path_out: PathBuf::from("/results/run1//"),
            path_cwd: cwd.to_path_buf(),
            threshold: Threshold::Cutoff(99.9),
            top_only: true,
            include_empty: false,
            debug: false,
            keep_config: false,
            skip_runner: false,
        }
    }

    #[test]
    fn test_threshold_parse() {
        assert_eq!("99.9".parse::<Threshold>(), Ok(Threshold::Cutoff(99.9)));
        assert_eq!("95".parse::<Threshold>(), Ok(Threshold::Cutoff(95.0)));
        assert_eq!("0".parse::<Threshold>(), Ok(Threshold::Disabled));
        assert_eq!("0.0".parse::<Threshold>(), Ok(Threshold::Disabled));
        assert_eq!("False".parse::<Threshold>(), Ok(Threshold::Disabled));
        assert_eq!("false".parse::<Threshold>(), Ok(Threshold::Disabled));
        assert!("high".parse::<Threshold>().is_err());
        assert!("inf".parse::<Threshold>().is_err());
    }

    #[test]
    fn test_yaml_document() {
        let run_config = params(std::path::Path::new("/work")).to_run_config();
        let yaml = serde_yaml::to_string(&run_config).unwrap();
        assert_eq!(
            yaml,
            "debug: false\n\
             include_empty: false\n\
             indir: /work/assemblies\n\
             outdir: /results/run1\n\
             query_file: /work/queries/junctions.fasta\n\
             threshold: 99.9\n\
             top_only: true\n"
        );
    }

    #[test]
    fn test_disabled_threshold_is_false() {
        let mut p = params(std::path::Path::new("/work"));
        p.threshold = Threshold::Disabled;
        let yaml = serde_yaml::to_string(&p.to_run_config()).unwrap();
        assert!(yaml.contains("\nthreshold: false\n"));
    }

    #[test]
    fn test_creates_config_dir() {
        let dir = TempDir::new().unwrap();
        let layout = WorkflowLayout::new(dir.path());

        let outcome = write_configfile(&layout, &params(dir.path())).unwrap();
        assert_eq!(outcome, ConfigOutcome::Written(layout.config_file()));

        let content = fs::read_to_string(layout.config_file()).unwrap();
        let expected_indir = format!("indir: {}/assemblies\n", dir.path().display());
        assert!(content.contains(&expected_indir));
    }

    #[test]
    fn test_keep_config_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let layout = WorkflowLayout::new(dir.path());
        fs::create_dir(layout.config_dir()).unwrap();
        fs::write(layout.config_file(), "sentinel: 1\n").unwrap();

        let mut p = params(dir.path());
        p.keep_config = true;
        let outcome = write_configfile(&layout, &p).unwrap();
        assert_eq!(outcome, ConfigOutcome::Kept(layout.config_file()));
        assert_eq!(fs::read_to_string(layout.config_file()).unwrap(), "sentinel: 1\n");
    }

    #[test]
    fn test_keep_config_ignored_when_skipping_runner() {
        let dir = TempDir::new().unwrap();
        let layout = WorkflowLayout::new(dir.path());
        fs::create_dir(layout.config_dir()).unwrap();
        fs::write(layout.config_file(), "sentinel: 1\n").unwrap();

        let mut p = params(dir.path());
        p.keep_config = true;
        p.skip_runner = true;
        let outcome = write_configfile(&layout, &p).unwrap();
        assert!(matches!(outcome, ConfigOutcome::Written(_)));
        assert!(fs::read_to_string(layout.config_file()).unwrap().contains("top_only: true"));
    }

    #[test]
    fn test_existing_config_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let layout = WorkflowLayout::new(dir.path());
        fs::create_dir(layout.config_dir()).unwrap();
        fs::write(layout.config_file(), "sentinel: 1\n").unwrap();

        write_configfile(&layout, &params(dir.path())).unwrap();
        let content = fs::read_to_string(layout.config_file()).unwrap();
        assert!(!content.contains("sentinel"));
    }
}
