//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::topsis::RankingMethod;

/// Scorer and input-format settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// `competition` (default) or `dense`
    #[serde(default = "default_ranking_method")]
    pub ranking_method: String,

    /// Field delimiter of uploaded tables
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl ScoringConfig {
    pub fn ranking_method(&self) -> Result<RankingMethod, ValidationError> {
        self.ranking_method
            .parse()
            .map_err(|_| ValidationError::InvalidRankingMethod(self.ranking_method.clone()))
    }

    /// Returns the delimiter as the single ASCII byte the table reader splits on.
    pub fn delimiter(&self) -> Result<u8, ValidationError> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() && !matches!(*byte, b'"' | b'\r' | b'\n') => Ok(*byte),
            _ => Err(ValidationError::InvalidDelimiter),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ranking_method()?;
        self.delimiter()?;
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ranking_method: default_ranking_method(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_ranking_method() -> String {
    "competition".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}
