//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod topsis;

pub use topsis::{
    AnalysisError, ScoreMatrixCommand, ScoreMatrixHandler, SubmitAnalysisCommand,
    SubmitAnalysisHandler, SubmitAnalysisResult,
};
