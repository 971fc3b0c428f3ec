use std::fmt;

/// SLURM states that mean the job hasn't finished yet
static RUNNING_STATES: [&str; 5] = ["PENDING", "CONFIGURING", "COMPLETING", "RUNNING", "SUSPENDED"];

/// The only SLURM state that counts as success
static SUCCESS_STATE: &str = "COMPLETED";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Success,
    Running,
    Failed,
}

/// The three job states Snakemake's `--cluster-status` protocol understands.
///
/// SLURM reports many more states (CANCELLED, TIMEOUT, NODE_FAIL, OUT_OF_MEMORY, ...) and decorates
/// some of them, e.g. `CANCELLED+` or `CANCELLED by 1234`. Classification checks whether the state
/// text *contains* a known token rather than comparing it exactly, so decorated states still match.
/// Anything unrecognised, including empty text, is a failure.
impl JobStatus {
    pub fn classify(state: &str) -> JobStatus {
        if state.contains(SUCCESS_STATE) {
            JobStatus::Success
        } else if RUNNING_STATES.iter().any(|s| state.contains(s)) {
            JobStatus::Running
        } else {
            JobStatus::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Success => "success",
            JobStatus::Running => "running",
            JobStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_is_success() {
        assert_eq!(JobStatus::classify("COMPLETED"), JobStatus::Success);
    }

    #[test]
    fn completed_wins_over_everything_else() {
        assert_eq!(JobStatus::classify("RUNNING COMPLETED"), JobStatus::Success);
        assert_eq!(JobStatus::classify("b'COMPLETED'"), JobStatus::Success);
    }

    #[test]
    fn in_progress_states_are_running() {
        for state in ["PENDING", "CONFIGURING", "COMPLETING", "RUNNING", "SUSPENDED"] {
            assert_eq!(JobStatus::classify(state), JobStatus::Running, "{state}");
        }
    }

    #[test]
    fn decorated_states_match_by_substring() {
        assert_eq!(JobStatus::classify("PENDING+"), JobStatus::Running);
        assert_eq!(JobStatus::classify("NOT_RUNNING_ANYMORE"), JobStatus::Running);
    }

    #[test]
    fn terminal_and_unknown_states_are_failed() {
        for state in ["CANCELLED+", "CANCELLED", "FAILED", "TIMEOUT", "NODE_FAIL", "OUT_OF_MEMORY", "", "completed"] {
            assert_eq!(JobStatus::classify(state), JobStatus::Failed, "{state:?}");
        }
    }

    #[test]
    fn display_matches_snakemake_protocol() {
        assert_eq!(JobStatus::Success.to_string(), "success");
        assert_eq!(JobStatus::Running.to_string(), "running");
        assert_eq!(JobStatus::Failed.to_string(), "failed");
    }
}
