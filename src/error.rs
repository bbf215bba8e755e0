//! Custom error types for ProserPlan
//!
//! This module defines the error hierarchy for the planning core using
//! thiserror. The pure computations (`net_worth`, `remaining`, `reconcile`)
//! fail only when a total does not fit in an i64 of cents; validation,
//! simulation and the snapshot/CLI layer report through [`PlanError`].

use thiserror::Error;

use crate::models::ProjectedBalance;

/// A record failed validation
///
/// Identifies the entity kind, the record's id (when it has one) and the
/// offending field so the caller can point the user at it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {entity} '{id}': field '{field}' {message}")]
pub struct ValidationError {
    pub entity: &'static str,
    pub id: String,
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        entity: &'static str,
        id: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            id: id.into(),
            field,
            message: message.into(),
        }
    }

    /// Error for a monetary field that must not be negative
    pub fn negative(entity: &'static str, id: impl Into<String>, field: &'static str) -> Self {
        Self::new(entity, id, field, "must not be negative")
    }

    /// Error for an amount whose running total does not fit in i64 cents
    pub fn out_of_range(entity: &'static str, id: impl Into<String>, field: &'static str) -> Self {
        Self::new(entity, id, field, "is out of range")
    }

    /// Error for an enum field holding an unknown value
    pub fn unknown_variant(
        entity: &'static str,
        field: &'static str,
        value: &str,
        expected: &[&str],
    ) -> Self {
        Self::new(
            entity,
            "",
            field,
            format!("has unknown value '{}' (expected one of: {})", value, expected.join(", ")),
        )
    }
}

/// The main error type for ProserPlan operations
#[derive(Error, Debug)]
pub enum PlanError {
    /// Input record failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payoff simulation hit its month cap before every debt was paid
    #[error("Debt payoff did not converge within {months} months")]
    SimulationDiverged {
        months: u32,
        projected_balances: Vec<ProjectedBalance>,
    },

    /// The caller aborted a running computation
    #[error("Computation cancelled")]
    Cancelled,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlanError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the simulation diverged
    pub fn is_diverged(&self) -> bool {
        matches!(self, Self::SimulationDiverged { .. })
    }

    /// Check if the computation was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The offending field, for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PlanError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for ProserPlan operations
pub type PlanResult<T> = Result<T, PlanError>;
