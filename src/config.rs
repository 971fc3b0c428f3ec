use std::path::PathBuf;

use thiserror::Error;

pub static DEFAULT_PARTITION: &str = "devel";
/// sbatch `-t` value, in minutes
pub static DEFAULT_TIME_LIMIT: &str = "1";
pub static DEFAULT_MIN_THREADS: u32 = 2;
pub static DEFAULT_LOG_PATH: &str = "submit-script.log";
pub static DEFAULT_SBATCH: &str = "sbatch";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no SLURM account set, pass --account or set ACCOUNT")]
    MissingAccount,
}

/// Settings for one submission
///
/// The billing account has no default: submitting without one fails before sbatch is run,
/// instead of passing an empty `-A` through to the scheduler.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub account: String,
    pub partition: String,
    pub time_limit: String,
    pub min_threads: u32,
    pub log_path: PathBuf,
    pub sbatch: String,
}

impl SubmitConfig {
    pub fn new(account: &str) -> Result<SubmitConfig, ConfigError> {
        let account = account.trim();
        if account.is_empty() {
            return Err(ConfigError::MissingAccount);
        }

        Ok(SubmitConfig {
            account: account.to_string(),
            partition: DEFAULT_PARTITION.to_string(),
            time_limit: DEFAULT_TIME_LIMIT.to_string(),
            min_threads: DEFAULT_MIN_THREADS,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            sbatch: DEFAULT_SBATCH.to_string(),
        })
    }

    /// Like [`SubmitConfig::new`], but an absent account is an error too
    pub fn from_account(account: Option<&str>) -> Result<SubmitConfig, ConfigError> {
        SubmitConfig::new(account.ok_or(ConfigError::MissingAccount)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SubmitConfig::new("proj123").unwrap();
        assert_eq!(config.account, "proj123");
        assert_eq!(config.partition, "devel");
        assert_eq!(config.time_limit, "1");
        assert_eq!(config.min_threads, 2);
        assert_eq!(config.log_path, PathBuf::from("submit-script.log"));
        assert_eq!(config.sbatch, "sbatch");
    }

    #[test]
    fn missing_account_fails_fast() {
        assert_eq!(SubmitConfig::from_account(None).unwrap_err(), ConfigError::MissingAccount);
        assert_eq!(SubmitConfig::new("").unwrap_err(), ConfigError::MissingAccount);
        assert_eq!(SubmitConfig::new("   ").unwrap_err(), ConfigError::MissingAccount);
    }
}
