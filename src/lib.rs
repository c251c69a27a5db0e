// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod form;
pub mod io;
pub mod ppe;
pub mod risk;

// Re-export commonly used types
pub use crate::config::{BioriskConfig, ScoringConfig, Thresholds};
pub use crate::errors::BioriskError;
pub use crate::form::AssessmentForm;
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
pub use crate::ppe::{PpeEstimate, PpeRequest};
pub use crate::risk::{
    FeedSource, RiskAssessmentInput, RiskAssessmentResult, RiskLevel, RiskScorer,
    VaccinationLevel, VisitorProtocol,
};
