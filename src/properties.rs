use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Snakemake writes job properties into every job script on a line starting with this prefix
static PROPERTIES_PREFIX: &str = "# properties = ";

#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("can't read job script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("job script {0} has no `# properties = ` line")]
    Missing(PathBuf),

    #[error("job properties in {path} aren't valid JSON: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("job properties in {path} have no usable `threads` field: {source}")]
    MissingThreads {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The only field submission needs, everything else is kept untyped in [`JobProperties::raw`]
#[derive(Debug, Deserialize)]
struct Resources {
    threads: u32,
}

/// Resource requirements and metadata of one Snakemake job
#[derive(Debug, Clone)]
pub struct JobProperties {
    pub threads: u32,
    /// Complete payload as Snakemake wrote it
    pub raw: Value,
}

impl JobProperties {
    pub fn read(jobscript: &Path) -> Result<JobProperties, PropertiesError> {
        info!("Reading job properties from {}", jobscript.display());
        let script = fs::read_to_string(jobscript).map_err(|source| {
            warn!("Can't read job script at path {}: {}", jobscript.display(), source);
            PropertiesError::Read { path: jobscript.to_path_buf(), source }
        })?;
        JobProperties::parse(&script, jobscript)
    }

    /// Parse properties out of job script text, `path` is only used in errors
    pub fn parse(script: &str, path: &Path) -> Result<JobProperties, PropertiesError> {
        let json = script
            .lines()
            .find_map(|line| line.strip_prefix(PROPERTIES_PREFIX))
            .ok_or_else(|| PropertiesError::Missing(path.to_path_buf()))?;

        let raw: Value = serde_json::from_str(json)
            .map_err(|source| PropertiesError::Decode { path: path.to_path_buf(), source })?;

        // from_value consumes, so clone to keep the untyped payload for the submission record
        let resources = serde_json::from_value::<Resources>(raw.clone())
            .map_err(|source| PropertiesError::MissingThreads { path: path.to_path_buf(), source })?;

        Ok(JobProperties { threads: resources.threads, raw })
    }

    /// Compact JSON with keys in the order Snakemake wrote them
    pub fn to_json(&self) -> String {
        self.raw.to_string()
    }
}
