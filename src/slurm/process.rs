use std::process::Command;

use log::{info, warn};

use crate::slurm::error::SlurmError;

/// Run a command to completion and return its stdout, failing on a non-zero exit status
pub(crate) fn stdout(cmd: &mut Command) -> Result<String, SlurmError> {
    let program = cmd.get_program().to_string_lossy().to_string();
    info!("Running {program} process");
    info!("{:?}", &cmd);

    let output = cmd.output().map_err(|source| {
        warn!("Can't start {program}: {source}");
        SlurmError::Spawn { program: program.clone(), source }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("{program} failed ({}): {stderr}", output.status);
        return Err(SlurmError::CommandFailed { program, code: output.status.code(), stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
