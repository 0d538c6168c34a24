//! TOPSIS Module - Pure domain service for multi-criteria ranking.
//!
//! Ranks alternatives by their relative closeness to an ideal solution
//! (Technique for Order Preference by Similarity to Ideal Solution).
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives by criteria, with labels carried through
//! - `WeightVector` / `ImpactVector` - One weight and one direction per criterion
//! - `TopsisScorer` - Normalization, weighting, ideal points, distances, closeness
//! - `ScoredMatrix` - Input rows with closeness and rank appended
//! - `RankingMethod` - Tie handling (competition by default, dense on request)
//!
//! # Design Philosophy
//!
//! Everything here is pure: no I/O, no shared state, identical inputs give
//! bit-identical outputs. All preconditions are checked before any arithmetic,
//! so a failed call never yields partial results.

mod decision_matrix;
mod errors;
mod impact;
mod ranking;
mod scored_matrix;
mod scorer;
mod weights;

// Re-export all public types
pub use decision_matrix::{Alternative, DecisionMatrix, DecisionMatrixBuilder};
pub use errors::{TopsisError, ValueLocation};
pub use impact::{Impact, ImpactVector};
pub use ranking::{assign_ranks, RankingMethod};
pub use scored_matrix::{ScoredAlternative, ScoredMatrix, RANK_HEADER, SCORE_HEADER};
pub use scorer::{ScorerOptions, TopsisEvaluation, TopsisScorer, EQUIDISTANT_CLOSENESS};
pub use weights::WeightVector;
