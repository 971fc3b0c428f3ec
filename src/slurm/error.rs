use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlurmError {
    #[error("can't run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{program} exited successfully but printed no job id, the job may already be queued")]
    NoJobId { program: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
