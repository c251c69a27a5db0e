use crate::cli;
use crate::io::output::{create_writer, PpeReport};
use crate::ppe::{self, PpeRequest};
use anyhow::Result;
use std::path::PathBuf;

pub struct PpeConfig {
    pub workers: u32,
    pub days: u32,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn estimate(config: PpeConfig) -> Result<()> {
    let request = PpeRequest {
        workers: config.workers,
        days: config.days,
    };

    let report = PpeReport {
        request,
        estimate: ppe::estimate(request),
        generated_at: chrono::Utc::now(),
    };

    let mut writer = create_writer(config.format.into(), config.output.as_deref())?;
    writer.write_ppe(&report)
}
