//! Query and submit jobs using the SLURM command line tools

/// Errors raised by running SLURM commands
pub mod error;

/// Run a SLURM command and collect its stdout
mod process;

/// Map raw SLURM job states onto Snakemake's status categories
pub mod state;

/// Query the SLURM accounting database with sacct
pub mod sacct;

/// Build and run sbatch submissions
pub mod sbatch;
