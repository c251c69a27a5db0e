//! Raw questionnaire boundary.
//!
//! [`AssessmentForm`] mirrors the questionnaire as submitted: every field a
//! free-form string. [`AssessmentForm::sanitize`] converts it to the typed
//! [`RiskAssessmentInput`], preserving the permissive policy of the original
//! system: an unrecognized categorical answer is not an error, it simply
//! contributes no score adjustment. Callers wanting hard rejection of
//! unknown values should deserialize [`RiskAssessmentInput`] directly via
//! [`load_input_strict`].

use crate::errors::BioriskError;
use crate::risk::{FeedSource, RiskAssessmentInput, VaccinationLevel, VisitorProtocol};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Questionnaire as submitted, before any interpretation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentForm {
    pub section_title: String,
    pub unit_name: String,
    pub vaccination_level: String,
    pub biosecurity_measures: String,
    pub visitor_protocol: String,
    pub feed_source: String,
    pub disease_history: String,
}

impl AssessmentForm {
    /// Convert to a typed input.
    ///
    /// Empty categorical answers take the field default; unrecognized ones
    /// become `None` (zero adjustment) with a warning. Never fails.
    pub fn sanitize(&self) -> RiskAssessmentInput {
        let defaults = RiskAssessmentInput::default();

        RiskAssessmentInput {
            section_title: self.section_title.clone(),
            unit_name: self.unit_name.clone(),
            vaccination_level: parse_answer(
                &self.vaccination_level,
                "vaccination level",
                defaults.vaccination_level,
            ),
            biosecurity_measures: self.biosecurity_measures.clone(),
            visitor_protocol: parse_answer(
                &self.visitor_protocol,
                "visitor protocol",
                defaults.visitor_protocol,
            ),
            feed_source: parse_answer(&self.feed_source, "feed source", defaults.feed_source),
            disease_history: self.disease_history.clone(),
        }
    }
}

/// Parse one categorical answer against its enum's wire names.
fn parse_answer<T>(raw: &str, field: &str, default: Option<T>) -> Option<T>
where
    T: DeserializeOwned,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }

    match serde_json::from_value(serde_json::Value::String(trimmed.to_string())) {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Unrecognized {} {:?}, scoring it as neutral", field, trimmed);
            None
        }
    }
}

/// Permissive parse helpers for the individual enums, used by callers that
/// take answers from flags rather than a form file.
pub fn parse_vaccination(raw: &str) -> Option<VaccinationLevel> {
    parse_answer(raw, "vaccination level", None)
}

pub fn parse_visitor_protocol(raw: &str) -> Option<VisitorProtocol> {
    parse_answer(raw, "visitor protocol", None)
}

pub fn parse_feed_source(raw: &str) -> Option<FeedSource> {
    parse_answer(raw, "feed source", None)
}

/// Read a form file, dispatching on extension (`.toml` or `.json`).
pub fn load_form(path: &Path) -> Result<AssessmentForm, BioriskError> {
    let kind = form_kind(path)?;
    let contents = read_form_file(path)?;
    match kind {
        FormKind::Toml => toml::from_str(&contents)
            .map_err(|e| BioriskError::parse(path, e.to_string())),
        FormKind::Json => serde_json::from_str(&contents)
            .map_err(|e| BioriskError::parse(path, e.to_string())),
    }
}

/// Read a form file directly into the typed input. Unknown enum strings are
/// a parse error on this path.
pub fn load_input_strict(path: &Path) -> Result<RiskAssessmentInput, BioriskError> {
    let kind = form_kind(path)?;
    let contents = read_form_file(path)?;
    match kind {
        FormKind::Toml => toml::from_str(&contents)
            .map_err(|e| BioriskError::parse(path, e.to_string())),
        FormKind::Json => serde_json::from_str(&contents)
            .map_err(|e| BioriskError::parse(path, e.to_string())),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FormKind {
    Toml,
    Json,
}

fn form_kind(path: &Path) -> Result<FormKind, BioriskError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(FormKind::Toml),
        Some("json") => Ok(FormKind::Json),
        _ => Err(BioriskError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_form_file(path: &Path) -> Result<String, BioriskError> {
    std::fs::read_to_string(path).map_err(|e| BioriskError::io(path, e))
}
