use crate::cli;
use crate::form::{self, AssessmentForm};
use crate::io::output::{create_writer, AssessmentReport};
use crate::risk::{RiskAssessmentInput, RiskScorer};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct AssessConfig {
    pub form: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

pub fn assess(config: AssessConfig) -> Result<()> {
    let scoring = crate::config::load_config().scoring();
    let input = read_input(&config.form, config.strict)?;

    let scorer = RiskScorer::new(scoring);
    let result = scorer.assess(&input);
    log::info!(
        "Scored {} as {} ({}/100)",
        display_name(&input),
        result.risk_level.label(),
        result.risk_score
    );

    let report = AssessmentReport {
        section_title: input.section_title,
        unit_name: input.unit_name,
        result,
        generated_at: chrono::Utc::now(),
    };

    let mut writer = create_writer(config.format.into(), config.output.as_deref())?;
    writer.write_assessment(&report)
}

fn display_name(input: &RiskAssessmentInput) -> &str {
    if input.unit_name.is_empty() {
        "unnamed unit"
    } else {
        &input.unit_name
    }
}

fn read_input(path: &Path, strict: bool) -> Result<RiskAssessmentInput> {
    if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read form from stdin")?;
        return parse_stdin(&contents, strict);
    }

    if strict {
        Ok(form::load_input_strict(path)?)
    } else {
        Ok(form::load_form(path)?.sanitize())
    }
}

/// Stdin forms are JSON.
fn parse_stdin(contents: &str, strict: bool) -> Result<RiskAssessmentInput> {
    if strict {
        serde_json::from_str(contents).context("Failed to parse form from stdin")
    } else {
        let form: AssessmentForm =
            serde_json::from_str(contents).context("Failed to parse form from stdin")?;
        Ok(form.sanitize())
    }
}
