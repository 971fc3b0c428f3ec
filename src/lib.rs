//! Helpers that let Snakemake drive a SLURM cluster
//!
//! Two binaries are built on top of this library: `cluster-status` maps a SLURM job ID onto the
//! three states Snakemake understands, and `submit-script` submits a Snakemake job script with
//! `sbatch` and records what it did.

/// Command line arguments shared by the binaries
pub mod cli;

/// Submission settings, most importantly the billing account
pub mod config;

/// Read the job properties Snakemake embeds in each job script
pub mod properties;

/// Write a plain text record of each submission for debugging
pub mod record;

/// Talk to SLURM: sacct queries, sbatch submissions and job state classification
pub mod slurm;

/// Tie properties, sbatch and the submission record together
pub mod submit;
