use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::properties::JobProperties;
use crate::slurm::sbatch::Submission;

/// Rendering context for the submission record
#[derive(Serialize)]
struct RecordContext {
    command: String,
    jobscript: String,
    properties: String,
}

/// Render the submission record: the sbatch command line, the job script path and the full job
/// properties, separated by blank lines
pub fn render(submission: &Submission, properties: &JobProperties) -> Result<String> {
    /// included record template
    static RECORD: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/templates/submit_log.txt"));
    let mut tt = TinyTemplate::new();
    // the default formatter HTML-escapes, which would mangle the JSON payload
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("record", RECORD)?;

    let context = RecordContext {
        command: submission.command_line(),
        jobscript: submission.jobscript.display().to_string(),
        properties: properties.to_json(),
    };

    Ok(tt.render("record", &context)?)
}

/// Overwrite `out_path` with the record of this submission
pub fn write(out_path: &Path, submission: &Submission, properties: &JobProperties) -> Result<()> {
    let record = render(submission, properties)?;
    info!("Writing submission record to {}", out_path.display());
    fs::write(out_path, record).with_context(|| format!("Can't write submission record {}", out_path.display()))
}
