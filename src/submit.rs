use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::SubmitConfig;
use crate::properties::JobProperties;
use crate::record;
use crate::slurm::sbatch::{JobId, Submission, Submitter};

/// Read a job script's properties, submit it and write the submission record
///
/// The record is written even when sbatch fails, so the command that was attempted can be
/// inspected afterwards. A record that can't be written is only a warning: the outcome of sbatch
/// is always what gets returned.
pub fn submit_job(config: &SubmitConfig, jobscript: &Path, submitter: &impl Submitter) -> Result<JobId> {
    let properties = JobProperties::read(jobscript)?;
    let submission = Submission::new(config, properties.threads, jobscript);
    info!("Job declares {} threads, requesting {}", properties.threads, submission.threads);
    info!("{}", submission.command_line());

    let submitted = submitter.submit(&submission);
    if let Err(err) = &submitted {
        warn!("Submission failed: {err}");
    }

    if let Err(err) = record::write(&config.log_path, &submission, &properties) {
        warn!("{err:#}");
    }
    submitted.with_context(|| format!("Can't submit {}", jobscript.display()))
}
