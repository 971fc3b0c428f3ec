use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use smkslurm::cli::StatusArgs;
use smkslurm::slurm::sacct::{check_status, Sacct};

fn main() -> Result<()> {
    env_logger::init();
    let args = StatusArgs::parse();
    info!("Checking status of SLURM job {}", args.job_id);

    let sacct = Sacct::with_program(&args.sacct);
    let status = check_status(&sacct, &args.job_id)
        .with_context(|| format!("Can't get status of SLURM job {}", args.job_id))?;

    println!("{status}");
    Ok(())
}
