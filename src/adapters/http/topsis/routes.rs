//! Axum router configuration for TOPSIS endpoints.

use axum::{routing::post, Router};

use super::handlers::{score_matrix, submit_analysis, TopsisAppState};

/// Create the TOPSIS API router.
///
/// # Routes
/// - `POST /score` - Score an inline decision matrix (JSON)
/// - `POST /submit` - Score an uploaded file and mail the result (multipart)
pub fn topsis_routes() -> Router<TopsisAppState> {
    Router::new()
        .route("/score", post(score_matrix))
        .route("/submit", post(submit_analysis))
}

/// Create the TOPSIS module router, suitable for mounting at `/api`.
pub fn topsis_router() -> Router<TopsisAppState> {
    Router::new().nest("/topsis", topsis_routes())
}
