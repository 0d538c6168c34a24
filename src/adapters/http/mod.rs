//! HTTP adapters - REST API implementations.
//!
//! Builds the application router: health check, TOPSIS endpoints, and the
//! shared middleware stack (request ids, tracing, timeout, body limit).

pub mod topsis;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use topsis::{topsis_router, TopsisApiError, TopsisAppState};

/// Request limits applied to every route.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub max_upload_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Create the complete application router.
///
/// # Routes
/// - `GET /health` - Liveness check
/// - `/api/topsis/*` - See [`topsis::routes`]
pub fn app_router(state: TopsisAppState, limits: HttpLimits) -> Router {
    Router::new()
        .route("/health", get(topsis::health))
        .nest("/api", topsis_router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(limits.max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(limits.request_timeout))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
