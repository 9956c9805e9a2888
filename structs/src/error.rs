use thiserror::Error;

use crate::config::ConfigViolation;

/// Failure taxonomy for one generation call. Zero-waypoint runs are not
/// errors and are reported as an empty result instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),
    #[error("invalid configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),
    #[error("mission compile failed: {0}")]
    MissionCompile(String),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
