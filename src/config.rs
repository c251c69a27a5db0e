use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Score thresholds separating the risk tiers.
///
/// A score below `low` is Low risk, below `high` is Moderate, and anything
/// at or above `high` is High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_low_threshold")]
    pub low: u32,

    #[serde(default = "default_high_threshold")]
    pub high: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: default_low_threshold(),
            high: default_high_threshold(),
        }
    }
}

impl Thresholds {
    /// Validate ordering: `0 < low < high <= 100`.
    pub fn validate(&self) -> Result<(), String> {
        if self.low == 0 {
            return Err("low threshold must be greater than 0".to_string());
        }
        if self.low >= self.high {
            return Err(format!(
                "low threshold ({}) must be below high threshold ({})",
                self.low, self.high
            ));
        }
        if self.high > 100 {
            return Err(format!(
                "high threshold ({}) must not exceed 100",
                self.high
            ));
        }
        Ok(())
    }
}

/// Tunable scoring constants.
///
/// Defaults reproduce the reference heuristic exactly; the per-answer
/// adjustment tables are fixed on the answer enums and are deliberately not
/// configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Starting score before adjustments, the "unknown farm" prior.
    #[serde(default = "default_base_score")]
    pub base_score: i32,

    /// Minimum trimmed length of the biosecurity-measures text before the
    /// document-SOPs advisory stops firing.
    #[serde(default = "default_sop_min_length")]
    pub sop_min_length: usize,

    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            sop_min_length: default_sop_min_length(),
            thresholds: Thresholds::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0..=100).contains(&self.base_score) {
            return Err(format!(
                "base score ({}) must be between 0 and 100",
                self.base_score
            ));
        }
        self.thresholds.validate()
    }
}

fn default_base_score() -> i32 {
    50
}

fn default_sop_min_length() -> usize {
    30
}

fn default_low_threshold() -> u32 {
    35
}

fn default_high_threshold() -> u32 {
    65
}

/// Top-level `.biorisk.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BioriskConfig {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl BioriskConfig {
    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}

/// Parse and validate config from a TOML string. Invalid scoring sections
/// warn and fall back to defaults rather than failing the run.
fn parse_and_validate_config(contents: &str) -> Result<BioriskConfig, String> {
    let mut config = toml::from_str::<BioriskConfig>(contents)
        .map_err(|e| format!("Failed to parse .biorisk.toml: {}", e))?;

    if let Some(ref scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            log::warn!("Invalid scoring config: {}. Using defaults.", e);
            config.scoring = Some(ScoringConfig::default());
        }
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<BioriskConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration by walking up from the current directory until a
/// `.biorisk.toml` parses. Falls back to defaults when none is found.
pub fn load_config() -> BioriskConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return BioriskConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".biorisk.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No .biorisk.toml found. Using default config.");
            BioriskConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference_constants() {
        let config = ScoringConfig::default();
        assert_eq!(config.base_score, 50);
        assert_eq!(config.sop_min_length, 30);
        assert_eq!(config.thresholds.low, 35);
        assert_eq!(config.thresholds.high, 65);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let thresholds = Thresholds { low: 70, high: 40 };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_high_threshold_capped_at_100() {
        let thresholds = Thresholds { low: 35, high: 120 };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = parse_and_validate_config("[scoring]\nbase_score = 40\n").unwrap();
        let scoring = config.scoring();
        assert_eq!(scoring.base_score, 40);
        assert_eq!(scoring.thresholds, Thresholds::default());
    }

    #[test]
    fn test_invalid_scoring_section_falls_back_to_defaults() {
        let config =
            parse_and_validate_config("[scoring.thresholds]\nlow = 90\nhigh = 20\n").unwrap();
        assert_eq!(config.scoring(), ScoringConfig::default());
    }

    #[test]
    fn test_unparseable_toml_is_an_error() {
        assert!(parse_and_validate_config("not toml at all [").is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.scoring(), ScoringConfig::default());
    }
}
