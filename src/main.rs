use anyhow::Result;
use biorisk::cli::{Cli, Commands};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            form,
            format,
            output,
            strict,
            verbosity,
        } => {
            init_logging(verbosity);
            let config = biorisk::commands::assess::AssessConfig {
                form,
                format,
                output,
                strict,
            };
            biorisk::commands::assess::assess(config)
        }
        Commands::Ppe {
            workers,
            days,
            format,
            output,
        } => {
            init_logging(0);
            let config = biorisk::commands::ppe::PpeConfig {
                workers,
                days,
                format,
                output,
            };
            biorisk::commands::ppe::estimate(config)
        }
        Commands::Init { force } => {
            init_logging(0);
            biorisk::commands::init::init_config(force)
        }
    }
}

/// Default to warnings; each -v raises the filter one level. RUST_LOG
/// still wins when set.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
