use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biorisk")]
#[command(about = "Farm biosecurity risk assessment", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a biosecurity questionnaire
    Assess {
        /// Form file (.toml or .json); use - to read JSON from stdin
        form: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject unrecognized categorical answers instead of scoring
        /// them as neutral
        #[arg(long)]
        strict: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Estimate PPE and disinfectant supplies for a crew
    Ppe {
        /// Number of workers
        #[arg(long)]
        workers: u32,

        /// Number of days
        #[arg(long)]
        days: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_assess_command() {
        let cli = Cli::parse_from(["biorisk", "assess", "farm.toml", "--format", "json"]);

        match cli.command {
            Commands::Assess {
                form,
                format,
                strict,
                ..
            } => {
                assert_eq!(form, PathBuf::from("farm.toml"));
                assert_eq!(format, OutputFormat::Json);
                assert!(!strict);
            }
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_cli_parsing_ppe_command() {
        let cli = Cli::parse_from(["biorisk", "ppe", "--workers", "5", "--days", "7"]);

        match cli.command {
            Commands::Ppe { workers, days, .. } => {
                assert_eq!(workers, 5);
                assert_eq!(days, 7);
            }
            _ => panic!("Expected Ppe command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["biorisk", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }
}
