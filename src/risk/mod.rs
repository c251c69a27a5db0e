pub mod history;
pub mod recommendations;

use crate::config::{ScoringConfig, Thresholds};
use serde::{Deserialize, Serialize};

/// Vaccination program level reported for the unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaccinationLevel {
    None,
    Basic,
    Standard,
    Comprehensive,
}

impl VaccinationLevel {
    /// Additive score adjustment for this program level.
    pub fn adjustment(&self) -> i32 {
        match self {
            VaccinationLevel::None => 20,
            VaccinationLevel::Basic => 10,
            VaccinationLevel::Standard => 0,
            VaccinationLevel::Comprehensive => -10,
        }
    }
}

/// Policy controlling how external visitors enter the premises.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitorProtocol {
    None,
    SignIn,
    ControlledAccess,
}

impl VisitorProtocol {
    pub fn adjustment(&self) -> i32 {
        match self {
            VisitorProtocol::None => 15,
            VisitorProtocol::SignIn => 5,
            VisitorProtocol::ControlledAccess => 0,
        }
    }
}

/// Where the unit sources its feed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedSource {
    OnFarm,
    LocalSupplier,
    CertifiedSupplier,
    Mixed,
}

impl FeedSource {
    pub fn adjustment(&self) -> i32 {
        match self {
            FeedSource::OnFarm => 5,
            FeedSource::LocalSupplier => 10,
            FeedSource::CertifiedSupplier => -10,
            FeedSource::Mixed => 5,
        }
    }
}

/// Questionnaire snapshot consumed by the scorer.
///
/// The enum-valued fields are `Option`: `None` means the answer was
/// unrecognized or deliberately unspecified and contributes a zero
/// adjustment. Deserializing this type directly rejects unknown enum
/// strings; the permissive path that maps them to `None` instead lives in
/// [`crate::form::AssessmentForm`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentInput {
    /// Display title for the assessment, not scored.
    #[serde(default)]
    pub section_title: String,
    /// Farm or unit name, not scored.
    #[serde(default)]
    pub unit_name: String,
    #[serde(default = "default_vaccination")]
    pub vaccination_level: Option<VaccinationLevel>,
    /// Free-text protocol description; only its trimmed length is scored.
    #[serde(default)]
    pub biosecurity_measures: String,
    #[serde(default = "default_visitor")]
    pub visitor_protocol: Option<VisitorProtocol>,
    #[serde(default = "default_feed")]
    pub feed_source: Option<FeedSource>,
    /// Free-text outbreak history, scanned for keyword categories.
    #[serde(default)]
    pub disease_history: String,
}

fn default_vaccination() -> Option<VaccinationLevel> {
    Some(VaccinationLevel::Standard)
}

fn default_visitor() -> Option<VisitorProtocol> {
    Some(VisitorProtocol::ControlledAccess)
}

fn default_feed() -> Option<FeedSource> {
    Some(FeedSource::CertifiedSupplier)
}

impl Default for RiskAssessmentInput {
    fn default() -> Self {
        Self {
            section_title: String::new(),
            unit_name: String::new(),
            vaccination_level: default_vaccination(),
            biosecurity_measures: String::new(),
            visitor_protocol: default_visitor(),
            feed_source: default_feed(),
            disease_history: String::new(),
        }
    }
}

/// Coarse risk tier derived from the clamped score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32, thresholds: &Thresholds) -> Self {
        if score < thresholds.low {
            RiskLevel::Low
        } else if score < thresholds.high {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Terminal color class for this tier. Presentation only, not part of
    /// the scoring contract.
    pub fn color(&self) -> colored::Color {
        match self {
            RiskLevel::Low => colored::Color::Green,
            RiskLevel::Moderate => colored::Color::Yellow,
            RiskLevel::High => colored::Color::Red,
        }
    }
}

/// Result of a single assessment. Fresh value per call, no identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentResult {
    /// Composite score, clamped to [0, 100].
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    /// Ordered advisories, always at least one.
    pub recommendations: Vec<String>,
}

/// Heuristic biosecurity scorer.
///
/// Pure and stateless: the same input always produces the same result, and
/// concurrent callers need no coordination.
pub struct RiskScorer {
    config: ScoringConfig,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

impl RiskScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Compute a risk assessment from a questionnaire snapshot.
    ///
    /// Total over its input domain: there is no error path. Unrecognized
    /// categorical answers (`None`) contribute a zero adjustment.
    pub fn assess(&self, input: &RiskAssessmentInput) -> RiskAssessmentResult {
        let raw = self.raw_score(input);
        let risk_score = raw.clamp(0, 100) as u32;
        let risk_level = RiskLevel::from_score(risk_score, &self.config.thresholds);
        let recommendations = recommendations::generate(input, &self.config);

        RiskAssessmentResult {
            risk_score,
            risk_level,
            recommendations,
        }
    }

    /// Unclamped running total. The categorical adjustments are independent
    /// and order-insensitive; the disease-history scan is a priority chain
    /// internally but contributes a single summand here.
    fn raw_score(&self, input: &RiskAssessmentInput) -> i32 {
        self.config.base_score
            + input.vaccination_level.map_or(0, |v| v.adjustment())
            + input.visitor_protocol.map_or(0, |v| v.adjustment())
            + input.feed_source.map_or(0, |f| f.adjustment())
            + history::scan(&input.disease_history).adjustment()
    }
}
