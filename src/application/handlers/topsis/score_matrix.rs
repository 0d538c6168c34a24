//! ScoreMatrixHandler - Scores a decision matrix supplied inline.

use tracing::debug;

use crate::domain::topsis::{
    DecisionMatrix, ImpactVector, ScoredMatrix, TopsisError, TopsisScorer, WeightVector,
};

/// Command to score an inline decision matrix.
#[derive(Debug, Clone)]
pub struct ScoreMatrixCommand {
    /// Label column header followed by one header per criterion.
    pub headers: Vec<String>,
    /// Label cell followed by one numeric cell per criterion.
    pub rows: Vec<Vec<String>>,
    /// Comma-separated weights, e.g. `"1,1,2"`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `"+,-,+"`.
    pub impacts: String,
}

/// Handler for inline scoring.
///
/// No ports: the work is pure apart from logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreMatrixHandler {
    scorer: TopsisScorer,
}

impl ScoreMatrixHandler {
    pub fn new(scorer: TopsisScorer) -> Self {
        Self { scorer }
    }

    pub fn handle(&self, cmd: ScoreMatrixCommand) -> Result<ScoredMatrix, TopsisError> {
        let weights = WeightVector::parse(&cmd.weights)?;
        let impacts = ImpactVector::parse(&cmd.impacts)?;
        let matrix = DecisionMatrix::from_raw(&cmd.headers, &cmd.rows)?;

        let scored = self.scorer.score(&matrix, &weights, &impacts)?;

        debug!(
            alternatives = scored.len(),
            best = scored.best().map(|a| a.label.as_str()).unwrap_or_default(),
            "Scored inline matrix"
        );

        Ok(scored)
    }
}
