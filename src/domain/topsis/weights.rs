//! Per-criterion weights.

use serde::Serialize;
use std::fmt;

use super::{TopsisError, ValueLocation};

/// Positive finite weights, one per criterion, used as given (no rescaling to sum 1).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting non-finite and non-positive entries.
    pub fn new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        for (position, &value) in weights.iter().enumerate() {
            if !value.is_finite() {
                return Err(TopsisError::NonNumericValue {
                    location: ValueLocation::Vector {
                        name: "weights",
                        position,
                    },
                    value: value.to_string(),
                });
            }
            if value <= 0.0 {
                return Err(TopsisError::InvalidWeight { position, value });
            }
        }
        Ok(Self(weights))
    }

    /// Parses a comma-separated list such as `"1,1,2"`.
    ///
    /// An empty string yields an empty vector.
    pub fn parse(raw: &str) -> Result<Self, TopsisError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let values = raw
            .split(',')
            .enumerate()
            .map(|(position, entry)| {
                let entry = entry.trim();
                entry.parse::<f64>().map_err(|_| TopsisError::NonNumericValue {
                    location: ValueLocation::Vector {
                        name: "weights",
                        position,
                    },
                    value: entry.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|w| w.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
