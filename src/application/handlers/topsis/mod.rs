//! TOPSIS handlers - Inline scoring and uploaded analyses.

mod score_matrix;
mod submit_analysis;

pub use score_matrix::{ScoreMatrixCommand, ScoreMatrixHandler};
pub use submit_analysis::{
    AnalysisError, SubmitAnalysisCommand, SubmitAnalysisHandler, SubmitAnalysisResult,
};
