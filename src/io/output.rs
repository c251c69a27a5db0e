use crate::ppe::{PpeEstimate, PpeRequest};
use crate::risk::RiskAssessmentResult;
use chrono::{DateTime, Utc};
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Assessment result together with its display context.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub section_title: String,
    pub unit_name: String,
    pub result: RiskAssessmentResult,
    pub generated_at: DateTime<Utc>,
}

/// Supply estimate together with the request that produced it.
#[derive(Debug, Clone)]
pub struct PpeReport {
    pub request: PpeRequest,
    pub estimate: PpeEstimate,
    pub generated_at: DateTime<Utc>,
}

pub trait ReportWriter {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()>;
    fn write_ppe(&mut self, report: &PpeReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        // The JSON contract is the bare result: riskScore, riskLevel,
        // recommendations
        let json = serde_json::to_string_pretty(&report.result)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn write_ppe(&mut self, report: &PpeReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&report.estimate)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_header("Biosecurity Risk Assessment", report.generated_at)?;

        if !report.section_title.is_empty() {
            writeln!(self.writer, "**{}**", report.section_title)?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        if !report.unit_name.is_empty() {
            writeln!(self.writer, "| Unit | {} |", report.unit_name)?;
        }
        writeln!(
            self.writer,
            "| Risk Score | {} / 100 |",
            report.result.risk_score
        )?;
        writeln!(
            self.writer,
            "| Risk Level | {} |",
            report.result.risk_level.label()
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for rec in &report.result.recommendations {
            writeln!(self.writer, "- {}", rec)?;
        }
        Ok(())
    }

    fn write_ppe(&mut self, report: &PpeReport) -> anyhow::Result<()> {
        self.write_header("PPE Supply Estimate", report.generated_at)?;

        writeln!(
            self.writer,
            "For {} workers over {} days:",
            report.request.workers, report.request.days
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Item | Quantity |")?;
        writeln!(self.writer, "|------|----------|")?;
        writeln!(self.writer, "| Coveralls | {} |", report.estimate.coveralls)?;
        writeln!(
            self.writer,
            "| Gloves (pairs) | {} |",
            report.estimate.gloves
        )?;
        writeln!(self.writer, "| Masks | {} |", report.estimate.masks)?;
        writeln!(
            self.writer,
            "| Boot Covers | {} |",
            report.estimate.boot_covers
        )?;
        writeln!(
            self.writer,
            "| Disinfectant (L) | {} |",
            report.estimate.disinfectant_liters
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Order {} coveralls to account for replacements.",
            report.estimate.coveralls_with_reserve()
        )?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, title: &str, generated_at: DateTime<Utc>) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", title)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for TerminalWriter {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        println!("{}", "Biosecurity Risk Assessment".bold().blue());
        println!("{}", "===========================".blue());
        if !report.section_title.is_empty() {
            println!("{}", report.section_title.bold());
        }
        if !report.unit_name.is_empty() {
            println!("Unit: {}", report.unit_name);
        }
        println!();

        let level = report.result.risk_level;
        println!(
            "Risk Level: {}  (score {}/100)",
            level.label().color(level.color()).bold(),
            report.result.risk_score
        );
        println!("  {}", score_meter(report.result.risk_score).color(level.color()));
        println!();

        println!("Recommendations:");
        for (i, rec) in report.result.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
        Ok(())
    }

    fn write_ppe(&mut self, report: &PpeReport) -> anyhow::Result<()> {
        println!("{}", "PPE Supply Estimate".bold().blue());
        println!("{}", "===================".blue());
        println!(
            "Crew: {} workers, {} days",
            report.request.workers, report.request.days
        );
        println!();
        println!("  Coveralls:        {}", report.estimate.coveralls);
        println!("  Gloves (pairs):   {}", report.estimate.gloves);
        println!("  Masks:            {}", report.estimate.masks);
        println!("  Boot covers:      {}", report.estimate.boot_covers);
        println!("  Disinfectant (L): {}", report.estimate.disinfectant_liters);
        println!();
        println!(
            "Order {} coveralls to account for replacements.",
            report.estimate.coveralls_with_reserve()
        );
        Ok(())
    }
}

/// 20-segment meter for a 0-100 score.
fn score_meter(score: u32) -> String {
    let filled = (score as usize).div_ceil(5).min(20);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

/// Build a writer for the requested format and destination. Terminal output
/// goes to stdout only.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    match (format, output) {
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => anyhow::bail!(
            "terminal format writes to stdout; use --format json or markdown with --output"
        ),
    }
}
