//! TOPSIS Scorer - closeness scores and ranks for a decision matrix.

use serde::Serialize;
use tracing::debug;

use super::{
    assign_ranks, DecisionMatrix, Impact, ImpactVector, RankingMethod, ScoredAlternative,
    ScoredMatrix, TopsisError, WeightVector,
};

/// Closeness assigned when a row is at distance zero from both ideal points.
pub const EQUIDISTANT_CLOSENESS: f64 = 0.5;

/// Options that change scorer output without changing the method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScorerOptions {
    pub ranking_method: RankingMethod,
}

/// Every intermediate stage of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisEvaluation {
    /// Normalized and weighted values, `[row][criterion]`.
    pub weighted: Vec<Vec<f64>>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
    pub distance_to_best: Vec<f64>,
    pub distance_to_worst: Vec<f64>,
    pub scored: ScoredMatrix,
}

/// TOPSIS scoring.
///
/// Stateless apart from its options; every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisScorer {
    options: ScorerOptions,
}

impl TopsisScorer {
    pub fn new(options: ScorerOptions) -> Self {
        Self { options }
    }

    /// Scorer using the given ranking method.
    pub fn with_ranking_method(ranking_method: RankingMethod) -> Self {
        Self::new(ScorerOptions { ranking_method })
    }

    pub fn options(&self) -> ScorerOptions {
        self.options
    }

    /// Scores and ranks every alternative.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm (zero norm yields 0)
    /// 2. Multiply by the column weight
    /// 3. Ideal best/worst per column (max/min, swapped for `Cost`)
    /// 4. Euclidean distance of each row to both ideal points
    /// 5. closeness = d_worst / (d_best + d_worst), 0.5 when both are 0
    /// 6. Rank descending by closeness, ties share a rank
    ///
    /// # Errors
    /// - `InsufficientData` when there is no alternative or no criterion
    /// - `DimensionMismatch` when weight, impact, and criteria counts differ
    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<ScoredMatrix, TopsisError> {
        self.evaluate(matrix, weights, impacts).map(|e| e.scored)
    }

    /// Like [`score`](Self::score), also returning the intermediate stages.
    pub fn evaluate(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisEvaluation, TopsisError> {
        Self::validate(matrix, weights, impacts)?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            ranking_method = %self.options.ranking_method,
            "Scoring decision matrix"
        );

        let weighted = Self::normalize_and_weight(matrix, weights.as_slice());
        let (ideal_best, ideal_worst) = Self::ideal_points(&weighted, impacts.as_slice());

        let distance_to_best: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean_distance(row, &ideal_best))
            .collect();
        let distance_to_worst: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean_distance(row, &ideal_worst))
            .collect();

        let closeness: Vec<f64> = distance_to_best
            .iter()
            .zip(&distance_to_worst)
            .map(|(&best, &worst)| closeness(best, worst))
            .collect();
        let ranks = assign_ranks(&closeness, self.options.ranking_method);

        let alternatives = matrix
            .alternatives()
            .iter()
            .zip(closeness.iter().zip(&ranks))
            .map(|(alternative, (&closeness, &rank))| ScoredAlternative {
                label: alternative.label.clone(),
                values: alternative.values.clone(),
                closeness,
                rank,
            })
            .collect();

        let scored = ScoredMatrix {
            label_header: matrix.label_header().to_string(),
            criteria: matrix.criteria().to_vec(),
            alternatives,
            ranking_method: self.options.ranking_method,
        };

        Ok(TopsisEvaluation {
            weighted,
            ideal_best,
            ideal_worst,
            distance_to_best,
            distance_to_worst,
            scored,
        })
    }

    /// Checks preconditions. Value finiteness and weight positivity are
    /// guaranteed by the matrix and weight constructors.
    fn validate(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<(), TopsisError> {
        let criteria = matrix.criterion_count();
        let alternatives = matrix.alternative_count();

        if criteria == 0 || alternatives == 0 {
            return Err(TopsisError::InsufficientData {
                alternatives,
                criteria,
            });
        }

        if weights.len() != criteria || impacts.len() != criteria {
            return Err(TopsisError::DimensionMismatch {
                weights: weights.len(),
                impacts: impacts.len(),
                criteria,
            });
        }

        Ok(())
    }

    /// Vector-normalizes each column, then applies its weight.
    fn normalize_and_weight(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<Vec<f64>> {
        let norms: Vec<f64> = (0..matrix.criterion_count())
            .map(|j| column_norm(matrix.column(j)))
            .collect();

        matrix
            .alternatives()
            .iter()
            .map(|alternative| {
                alternative
                    .values
                    .iter()
                    .zip(norms.iter().zip(weights))
                    .map(|(&value, (&norm, &weight))| {
                        if norm == 0.0 {
                            0.0
                        } else {
                            value / norm * weight
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns (ideal best, ideal worst) per criterion.
    fn ideal_points(weighted: &[Vec<f64>], impacts: &[Impact]) -> (Vec<f64>, Vec<f64>) {
        impacts
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let (min, max) = weighted.iter().map(|row| row[j]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(min, max), v| (min.min(v), max.max(v)),
                );
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip()
    }
}

/// Euclidean norm of a column, scaled by its largest magnitude so that
/// squaring large values cannot overflow.
fn column_norm(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let scale = values.clone().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let sum: f64 = values.map(|v| (v / scale).powi(2)).sum();
    scale * sum.sqrt()
}

/// Euclidean distance between two points, scaled by the largest coordinate
/// difference so that squaring neither overflows nor underflows to zero.
fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    let differences = a.iter().zip(b).map(|(x, y)| x - y);
    let scale = differences.clone().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let sum: f64 = differences.map(|d| (d / scale).powi(2)).sum();
    scale * sum.sqrt()
}

fn closeness(distance_to_best: f64, distance_to_worst: f64) -> f64 {
    let largest = distance_to_best.max(distance_to_worst);
    if largest == 0.0 {
        return EQUIDISTANT_CLOSENESS;
    }
    let (best, worst) = (distance_to_best / largest, distance_to_worst / largest);
    worst / (best + worst)
}
