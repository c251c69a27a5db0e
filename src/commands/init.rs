use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".biorisk.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Biorisk Configuration

[scoring]
# Starting score before adjustments
base_score = 50
# Minimum length of the biosecurity-measures text before the
# document-SOPs advisory stops firing
sop_min_length = 30

[scoring.thresholds]
# Scores below `low` are Low risk, below `high` Moderate, otherwise High
low = 35
high = 65
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .biorisk.toml configuration file");

    Ok(())
}
