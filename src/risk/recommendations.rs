//! Advisory generation for a scored assessment.
//!
//! Rules are independent predicates evaluated in a fixed order; every
//! matching rule emits exactly one advisory. When nothing matches, a single
//! fallback advisory affirms the posture.

use crate::config::ScoringConfig;
use crate::risk::{FeedSource, RiskAssessmentInput, VaccinationLevel, VisitorProtocol};

const UPGRADE_VACCINATION: &str =
    "Upgrade vaccination program to standard/comprehensive based on species and regional risks.";
const CONTROL_VISITOR_ACCESS: &str =
    "Implement controlled access with sign-in, PPE, and supervised entry for all visitors.";
const DOCUMENT_SOPS: &str = "Document and enforce detailed biosecurity SOPs (entry protocol, disinfection, quarantine, traffic flow).";
const CERTIFY_FEED: &str = "Source feed from certified suppliers and keep traceability records.";
const POSTURE_STRONG: &str =
    "Your biosecurity posture looks strong. Maintain logs and periodic audits.";

/// Build the advisory list for an input. Never returns an empty list.
pub fn generate(input: &RiskAssessmentInput, config: &ScoringConfig) -> Vec<String> {
    let mut recommendations = Vec::new();

    if needs_vaccination_upgrade(input.vaccination_level) {
        recommendations.push(UPGRADE_VACCINATION.to_string());
    }
    if needs_visitor_controls(input.visitor_protocol) {
        recommendations.push(CONTROL_VISITOR_ACCESS.to_string());
    }
    if needs_documented_sops(&input.biosecurity_measures, config.sop_min_length) {
        recommendations.push(DOCUMENT_SOPS.to_string());
    }
    if needs_certified_feed(input.feed_source) {
        recommendations.push(CERTIFY_FEED.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(POSTURE_STRONG.to_string());
    }

    recommendations
}

fn needs_vaccination_upgrade(level: Option<VaccinationLevel>) -> bool {
    matches!(
        level,
        Some(VaccinationLevel::None) | Some(VaccinationLevel::Basic)
    )
}

fn needs_visitor_controls(protocol: Option<VisitorProtocol>) -> bool {
    protocol != Some(VisitorProtocol::ControlledAccess)
}

fn needs_documented_sops(measures: &str, min_length: usize) -> bool {
    measures.trim().chars().count() < min_length
}

fn needs_certified_feed(source: Option<FeedSource>) -> bool {
    source != Some(FeedSource::CertifiedSupplier)
}
