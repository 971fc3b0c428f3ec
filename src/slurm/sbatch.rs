use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::config::SubmitConfig;
use crate::slurm::error::SlurmError;
use crate::slurm::process;

/// Job ID assigned by SLURM, printed by `sbatch --parsable`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl JobId {
    /// Parse `sbatch --parsable` output, which is `<id>` or `<id>;<cluster>`
    fn parse(stdout: &str) -> Option<JobId> {
        let line = stdout.lines().map(str::trim).find(|l| !l.is_empty())?;
        let id = line.split(';').next().unwrap_or(line).trim();
        (!id.is_empty()).then(|| JobId(id.to_string()))
    }
}

/// Always reserve at least `floor` threads, even for single threaded jobs
pub fn effective_threads(declared: u32, floor: u32) -> u32 {
    declared.max(floor)
}

/// Everything sbatch needs to submit one job script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub account: String,
    pub partition: String,
    pub time_limit: String,
    pub threads: u32,
    pub jobscript: PathBuf,
}

impl Submission {
    pub fn new(config: &SubmitConfig, declared_threads: u32, jobscript: &Path) -> Submission {
        Submission {
            account: config.account.clone(),
            partition: config.partition.clone(),
            time_limit: config.time_limit.clone(),
            threads: effective_threads(declared_threads, config.min_threads),
            jobscript: jobscript.to_path_buf(),
        }
    }

    /// Fixed options: parsable output, time limit and partition
    fn options(&self) -> [&str; 5] {
        ["--parsable", "-t", self.time_limit.as_str(), "-p", self.partition.as_str()]
    }

    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = self.options().iter().map(|o| o.to_string()).collect();
        args.extend([
            "-A".to_string(),
            self.account.clone(),
            "-n".to_string(),
            self.threads.to_string(),
            self.jobscript.display().to_string(),
        ]);
        args
    }

    /// The submission as it would be typed into a shell
    pub fn command_line(&self) -> String {
        format!("sbatch {}", self.args().join(" "))
    }
}

/// Something that can hand a job script to the scheduler
pub trait Submitter {
    fn submit(&self, submission: &Submission) -> Result<JobId, SlurmError>;
}

/// Submit with the sbatch binary
pub struct Sbatch {
    program: String,
}

impl Sbatch {
    pub fn with_program(program: impl Into<String>) -> Sbatch {
        Sbatch { program: program.into() }
    }
}

impl Submitter for Sbatch {
    fn submit(&self, submission: &Submission) -> Result<JobId, SlurmError> {
        let mut sbatch = Command::new(&self.program);
        let cmd = sbatch.args(submission.args());
        let stdout = process::stdout(cmd)?;
        let job_id = JobId::parse(&stdout).ok_or_else(|| {
            warn!("{} exited successfully but printed no job id, the job may already be queued", self.program);
            SlurmError::NoJobId { program: self.program.clone() }
        })?;
        info!("SLURM job id: {job_id}");
        Ok(job_id)
    }
}
