//! Data Transfer Objects for TOPSIS endpoints.
//!
//! These types define the JSON request/response structure for the HTTP API.
//! They are separate from domain types to allow independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::DomainError;
use crate::domain::topsis::{RankingMethod, ScoredAlternative, ScoredMatrix};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to score an inline decision matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    /// Label column header followed by the criteria headers.
    pub headers: Vec<String>,
    /// Each row: label, then one cell per criterion.
    pub rows: Vec<Vec<String>>,
    /// Comma-separated weights, e.g. `"1,1,2"`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `"+,-,+"`.
    pub impacts: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One scored row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAlternativeResponse {
    pub label: String,
    pub values: Vec<f64>,
    pub closeness: f64,
    pub rank: u32,
}

impl From<&ScoredAlternative> for ScoredAlternativeResponse {
    fn from(alternative: &ScoredAlternative) -> Self {
        Self {
            label: alternative.label.clone(),
            values: alternative.values.clone(),
            closeness: alternative.closeness,
            rank: alternative.rank,
        }
    }
}

/// Scored table in input row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// Input headers followed by `Topsis Score` and `Rank`.
    pub headers: Vec<String>,
    pub alternatives: Vec<ScoredAlternativeResponse>,
    pub ranking_method: RankingMethod,
}

impl From<&ScoredMatrix> for ScoreResponse {
    fn from(scored: &ScoredMatrix) -> Self {
        Self {
            headers: scored.headers(),
            alternatives: scored.alternatives.iter().map(Into::into).collect(),
            ranking_method: scored.ranking_method,
        }
    }
}

/// Response for an analysis that was stored and delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub recipient: String,
    /// Name of the stored result file.
    pub result_file: String,
    #[serde(flatten)]
    pub result: ScoreResponse,
    pub html_table: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: HashMap::new(),
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message,
            details: err.details,
        }
    }
}
