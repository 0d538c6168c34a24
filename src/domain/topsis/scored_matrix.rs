//! Scored Matrix - the decision matrix with closeness and rank appended.

use serde::Serialize;

use super::RankingMethod;

/// Header appended for the closeness column.
pub const SCORE_HEADER: &str = "Topsis Score";

/// Header appended for the rank column.
pub const RANK_HEADER: &str = "Rank";

/// One alternative with its derived closeness score and rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAlternative {
    pub label: String,
    pub values: Vec<f64>,
    /// Relative closeness to the ideal solution, in `[0, 1]`.
    pub closeness: f64,
    /// 1 = best.
    pub rank: u32,
}

/// Scorer output. Row order matches the input matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatrix {
    pub label_header: String,
    pub criteria: Vec<String>,
    pub alternatives: Vec<ScoredAlternative>,
    pub ranking_method: RankingMethod,
}

impl ScoredMatrix {
    /// Returns all column headers: label, criteria, score, rank.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.criteria.len() + 3);
        headers.push(self.label_header.clone());
        headers.extend(self.criteria.iter().cloned());
        headers.push(SCORE_HEADER.to_string());
        headers.push(RANK_HEADER.to_string());
        headers
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the first alternative in row order holding rank 1.
    pub fn best(&self) -> Option<&ScoredAlternative> {
        self.alternatives.iter().find(|a| a.rank == 1)
    }

    /// Returns the alternatives sorted by rank, row order breaking ties.
    pub fn by_rank(&self) -> Vec<&ScoredAlternative> {
        let mut sorted: Vec<&ScoredAlternative> = self.alternatives.iter().collect();
        sorted.sort_by_key(|a| a.rank);
        sorted
    }

    /// Returns the closeness scores in row order.
    pub fn closeness_scores(&self) -> Vec<f64> {
        self.alternatives.iter().map(|a| a.closeness).collect()
    }

    /// Returns the ranks in row order.
    pub fn ranks(&self) -> Vec<u32> {
        self.alternatives.iter().map(|a| a.rank).collect()
    }
}
