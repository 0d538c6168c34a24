//! Scoring errors, all raised before any computation starts.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Where an offending value was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueLocation {
    /// A criterion cell of the decision matrix (zero-based row).
    Cell {
        row: usize,
        label: String,
        column: String,
    },
    /// An entry of the weight or impact vector (zero-based position).
    Vector { name: &'static str, position: usize },
}

impl fmt::Display for ValueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueLocation::Cell { row, label, column } => {
                write!(f, "row {} ('{}'), column '{}'", row + 1, label, column)
            }
            ValueLocation::Vector { name, position } => {
                write!(f, "{} entry {}", name, position + 1)
            }
        }
    }
}

/// Precondition failures of the TOPSIS scorer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error(
        "Dimension mismatch: {weights} weights and {impacts} impacts for {criteria} criteria"
    )]
    DimensionMismatch {
        weights: usize,
        impacts: usize,
        criteria: usize,
    },

    #[error("Invalid impact symbol '{symbol}' at position {}: expected '+' or '-'", .position + 1)]
    InvalidImpactSymbol { position: usize, symbol: String },

    #[error(
        "Insufficient data: need at least 1 alternative and 1 criterion, got {alternatives} and {criteria}"
    )]
    InsufficientData { alternatives: usize, criteria: usize },

    #[error("Non-numeric value '{value}' at {location}")]
    NonNumericValue { location: ValueLocation, value: String },

    #[error("Invalid weight {value} at position {}: weights must be positive", .position + 1)]
    InvalidWeight { position: usize, value: f64 },

    #[error("Row {} has {actual} criterion values, expected {expected}", .row + 1)]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl TopsisError {
    /// Returns the error code used when surfacing this error to callers.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::DimensionMismatch { .. } | TopsisError::RaggedRow { .. } => {
                ErrorCode::DimensionMismatch
            }
            TopsisError::InvalidImpactSymbol { .. } => ErrorCode::InvalidImpactSymbol,
            TopsisError::InsufficientData { .. } => ErrorCode::InsufficientData,
            TopsisError::NonNumericValue { .. } => ErrorCode::NonNumericValue,
            TopsisError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
        }
    }
}

impl From<TopsisError> for DomainError {
    fn from(err: TopsisError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            TopsisError::DimensionMismatch {
                weights,
                impacts,
                criteria,
            } => base
                .with_detail("weights", weights.to_string())
                .with_detail("impacts", impacts.to_string())
                .with_detail("criteria", criteria.to_string()),
            TopsisError::InvalidImpactSymbol { position, symbol } => base
                .with_detail("position", (position + 1).to_string())
                .with_detail("symbol", symbol),
            TopsisError::InsufficientData {
                alternatives,
                criteria,
            } => base
                .with_detail("alternatives", alternatives.to_string())
                .with_detail("criteria", criteria.to_string()),
            TopsisError::NonNumericValue { location, value } => {
                let base = base.with_detail("value", value);
                match location {
                    ValueLocation::Cell { row, label, column } => base
                        .with_detail("row", (row + 1).to_string())
                        .with_detail("alternative", label)
                        .with_detail("column", column),
                    ValueLocation::Vector { name, position } => base
                        .with_detail("vector", name)
                        .with_detail("position", (position + 1).to_string()),
                }
            }
            TopsisError::InvalidWeight { position, value } => base
                .with_detail("position", (position + 1).to_string())
                .with_detail("value", value.to_string()),
            TopsisError::RaggedRow {
                row,
                expected,
                actual,
            } => base
                .with_detail("row", (row + 1).to_string())
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message_names_all_counts() {
        let err = TopsisError::DimensionMismatch {
            weights: 3,
            impacts: 2,
            criteria: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: 3 weights and 2 impacts for 2 criteria"
        );
    }

    #[test]
    fn impact_symbol_position_is_one_based() {
        let err = TopsisError::InvalidImpactSymbol {
            position: 1,
            symbol: "*".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid impact symbol '*' at position 2: expected '+' or '-'"
        );
    }

    #[test]
    fn non_numeric_cell_message_names_row_and_column() {
        let err = TopsisError::NonNumericValue {
            location: ValueLocation::Cell {
                row: 0,
                label: "A".to_string(),
                column: "Price".to_string(),
            },
            value: "cheap".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Non-numeric value 'cheap' at row 1 ('A'), column 'Price'"
        );
    }

    #[test]
    fn non_numeric_weight_message_names_vector() {
        let err = TopsisError::NonNumericValue {
            location: ValueLocation::Vector {
                name: "weights",
                position: 2,
            },
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Non-numeric value 'x' at weights entry 3");
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err: DomainError = TopsisError::NonNumericValue {
            location: ValueLocation::Cell {
                row: 1,
                label: "B".to_string(),
                column: "Storage".to_string(),
            },
            value: "n/a".to_string(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::NonNumericValue);
        assert_eq!(err.details.get("row"), Some(&"2".to_string()));
        assert_eq!(err.details.get("column"), Some(&"Storage".to_string()));
        assert_eq!(err.details.get("alternative"), Some(&"B".to_string()));
    }

    #[test]
    fn ragged_row_maps_to_dimension_mismatch_code() {
        let err = TopsisError::RaggedRow {
            row: 0,
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.code(), ErrorCode::DimensionMismatch);
    }
}
