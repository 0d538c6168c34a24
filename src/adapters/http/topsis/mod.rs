//! HTTP adapter for TOPSIS endpoints.
//!
//! Exposes the scorer via REST API:
//! - `POST /api/topsis/score` - Score a JSON decision matrix
//! - `POST /api/topsis/submit` - Score an uploaded file and mail the result

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{health, TopsisApiError, TopsisAppState, SUBMIT_CONFIRMATION};
pub use routes::{topsis_router, topsis_routes};
