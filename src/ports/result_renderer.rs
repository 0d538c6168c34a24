//! Result Renderer Port - Scored matrix to the file and mail a requester gets.
//!
//! Keeps presentation formats out of the application layer; the report
//! adapters decide how a result looks.

use crate::domain::foundation::EmailAddress;
use crate::domain::topsis::ScoredMatrix;

use super::ResultMessage;

/// Request parameters echoed back exactly as the requester typed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisParameters<'a> {
    pub weights: &'a str,
    pub impacts: &'a str,
}

/// Everything produced from one scored matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    /// Content of the stored result file.
    pub csv: String,
    /// Result table for display.
    pub html_table: String,
    pub message: ResultMessage,
}

/// Port for presenting a finished analysis.
///
/// # Contract
///
/// Implementations must attach exactly the `csv` they return to `message`,
/// so the stored file and the mailed file never differ.
pub trait ResultRenderer: Send + Sync {
    fn render(
        &self,
        scored: &ScoredMatrix,
        recipient: &EmailAddress,
        parameters: AnalysisParameters<'_>,
    ) -> RenderedResult;
}
