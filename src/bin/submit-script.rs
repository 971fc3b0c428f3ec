use anyhow::Result;
use clap::Parser;
use log::info;

use smkslurm::cli::SubmitArgs;
use smkslurm::slurm::sbatch::Sbatch;
use smkslurm::submit::submit_job;

fn main() -> Result<()> {
    env_logger::init();
    let args = SubmitArgs::parse();
    let config = args.config()?;
    info!("Submitting {} with account {}", args.jobscript.display(), config.account);

    let sbatch = Sbatch::with_program(&config.sbatch);
    let job_id = submit_job(&config, &args.jobscript, &sbatch)?;

    // snakemake reads the job id from stdout and passes it to cluster-status
    println!("{job_id}");
    Ok(())
}
