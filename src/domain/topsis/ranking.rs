//! Rank assignment from closeness scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How tied scores are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMethod {
    /// Ties share a rank and leave a gap: `[0.8, 0.8, 0.6]` ranks `[1, 1, 3]`.
    #[default]
    Competition,
    /// Ties share a rank with no gap: `[0.8, 0.8, 0.6]` ranks `[1, 1, 2]`.
    Dense,
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankingMethod::Competition => "competition",
            RankingMethod::Dense => "dense",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RankingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "competition" => Ok(RankingMethod::Competition),
            "dense" => Ok(RankingMethod::Dense),
            other => Err(format!("unknown ranking method '{}'", other)),
        }
    }
}

/// Ranks scores descending (1 = highest), returning ranks in input order.
///
/// Scores are compared exactly; equal scores always share a rank.
pub fn assign_ranks(scores: &[f64], method: RankingMethod) -> Vec<u32> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks = vec![0u32; scores.len()];
    let mut current_rank = 0u32;
    let mut previous: Option<f64> = None;

    for (position, &index) in order.iter().enumerate() {
        let score = scores[index];
        if previous != Some(score) {
            current_rank = match method {
                RankingMethod::Competition => position as u32 + 1,
                RankingMethod::Dense => current_rank + 1,
            };
            previous = Some(score);
        }
        ranks[index] = current_rank;
    }

    ranks
}
