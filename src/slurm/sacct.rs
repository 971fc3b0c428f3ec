use std::process::Command;

use log::info;

use crate::slurm::error::SlurmError;
use crate::slurm::process;
use crate::slurm::state::JobStatus;

/// Something that can report the most recent state of a SLURM job
pub trait Accounting {
    /// Raw state text for the job, e.g. `RUNNING` or `CANCELLED+`. Empty if nothing was recorded.
    fn latest_state(&self, job_id: &str) -> Result<String, SlurmError>;
}

/// Query job state with `sacct -j <id> --format State --noheader`
pub struct Sacct {
    program: String,
}

impl Sacct {
    pub fn with_program(program: impl Into<String>) -> Sacct {
        Sacct { program: program.into() }
    }

    fn arguments(job_id: &str) -> [&str; 5] {
        ["-j", job_id, "--format", "State", "--noheader"]
    }
}

impl Accounting for Sacct {
    fn latest_state(&self, job_id: &str) -> Result<String, SlurmError> {
        let mut sacct = Command::new(&self.program);
        let cmd = sacct.args(Sacct::arguments(job_id));
        let stdout = process::stdout(cmd)?;
        Ok(first_state(&stdout).to_string())
    }
}

/// sacct prints one line per job step (`batch`, `extern`, ...), the first line is the job itself
fn first_state(stdout: &str) -> &str {
    stdout
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .unwrap_or("")
}

/// Look up a job and classify its state
pub fn check_status(accounting: &impl Accounting, job_id: &str) -> Result<JobStatus, SlurmError> {
    let state = accounting.latest_state(job_id)?;
    let status = JobStatus::classify(&state);
    info!("SLURM job {job_id} is {state:?}: {status}");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedState(&'static str);

    impl Accounting for FixedState {
        fn latest_state(&self, _job_id: &str) -> Result<String, SlurmError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn first_line_first_field() {
        let stdout = "  CANCELLED+ by 1234\n CANCELLED \n COMPLETED\n";
        assert_eq!(first_state(stdout), "CANCELLED+");
    }

    #[test]
    fn empty_output_is_empty_state() {
        assert_eq!(first_state(""), "");
        assert_eq!(first_state("\n"), "");
    }

    #[test]
    fn sacct_arguments() {
        assert_eq!(Sacct::arguments("42"), ["-j", "42", "--format", "State", "--noheader"]);
    }

    #[test]
    fn check_status_scenarios() {
        assert_eq!(check_status(&FixedState("PENDING"), "1").unwrap(), JobStatus::Running);
        assert_eq!(check_status(&FixedState("COMPLETED"), "1").unwrap(), JobStatus::Success);
        assert_eq!(check_status(&FixedState("CANCELLED+"), "1").unwrap(), JobStatus::Failed);
        assert_eq!(check_status(&FixedState(""), "1").unwrap(), JobStatus::Failed);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let sacct = Sacct::with_program("/nonexistent/bin/sacct");
        let err = sacct.latest_state("1").unwrap_err();
        assert!(matches!(err, SlurmError::Spawn { .. }), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_propagated() {
        let sacct = Sacct::with_program("false");
        let err = check_status(&sacct, "1").unwrap_err();
        assert!(matches!(err, SlurmError::CommandFailed { code: Some(1), .. }), "{err}");
    }
}
