use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, ConfigError, SubmitConfig};

/// Print the status of a SLURM job as success, running or failed
#[derive(Debug, Parser)]
#[command(name = "cluster-status", version, about)]
pub struct StatusArgs {
    /// SLURM job ID, as printed by submit-script
    pub job_id: String,

    /// sacct binary to query
    #[arg(long, default_value = "sacct")]
    pub sacct: String,
}

/// Submit a Snakemake job script to SLURM with sbatch
#[derive(Debug, Parser)]
#[command(name = "submit-script", version, about)]
pub struct SubmitArgs {
    /// Job script written by Snakemake
    pub jobscript: PathBuf,

    /// SLURM account to bill
    #[arg(short = 'A', long, env = "ACCOUNT")]
    pub account: Option<String>,

    /// Partition to submit to
    #[arg(short, long, default_value = config::DEFAULT_PARTITION)]
    pub partition: String,

    /// Time limit passed to sbatch -t
    #[arg(short, long, default_value = config::DEFAULT_TIME_LIMIT)]
    pub time: String,

    /// Minimum number of threads to reserve
    #[arg(long, default_value_t = config::DEFAULT_MIN_THREADS)]
    pub min_threads: u32,

    /// Where to write the submission record
    #[arg(long, default_value = config::DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// sbatch binary to run
    #[arg(long, default_value = config::DEFAULT_SBATCH)]
    pub sbatch: String,
}

impl SubmitArgs {
    pub fn config(&self) -> Result<SubmitConfig, ConfigError> {
        let mut config = SubmitConfig::from_account(self.account.as_deref())?;
        config.partition = self.partition.clone();
        config.time_limit = self.time.clone();
        config.min_threads = self.min_threads;
        config.log_path = self.log.clone();
        config.sbatch = self.sbatch.clone();
        Ok(config)
    }
}
