//! HTTP handlers for TOPSIS endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::topsis::{
    AnalysisError, ScoreMatrixCommand, ScoreMatrixHandler, SubmitAnalysisCommand,
    SubmitAnalysisHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::topsis::{TopsisError, TopsisScorer};
use crate::ports::{ResultDelivery, ResultRenderer, ResultStorage, TableParsers};

use super::dto::{ErrorResponse, HealthResponse, ScoreRequest, ScoreResponse, SubmitResponse};

/// Confirmation shown after a successful submission.
pub const SUBMIT_CONFIRMATION: &str = "Result sent to email and displayed below";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct TopsisAppState {
    pub table_parsers: TableParsers,
    pub result_storage: Arc<dyn ResultStorage>,
    pub result_delivery: Arc<dyn ResultDelivery>,
    pub result_renderer: Arc<dyn ResultRenderer>,
    pub scorer: TopsisScorer,
}

impl TopsisAppState {
    pub fn new(
        table_parsers: TableParsers,
        result_storage: Arc<dyn ResultStorage>,
        result_delivery: Arc<dyn ResultDelivery>,
        result_renderer: Arc<dyn ResultRenderer>,
        scorer: TopsisScorer,
    ) -> Self {
        Self {
            table_parsers,
            result_storage,
            result_delivery,
            result_renderer,
            scorer,
        }
    }

    pub fn score_matrix_handler(&self) -> ScoreMatrixHandler {
        ScoreMatrixHandler::new(self.scorer)
    }

    pub fn submit_analysis_handler(&self) -> SubmitAnalysisHandler {
        SubmitAnalysisHandler::new(
            self.table_parsers.clone(),
            self.result_storage.clone(),
            self.result_delivery.clone(),
            self.result_renderer.clone(),
            self.scorer,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// POST /api/topsis/score - Score an inline decision matrix
pub async fn score_matrix(
    State(state): State<TopsisAppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<impl IntoResponse, TopsisApiError> {
    let handler = state.score_matrix_handler();
    let cmd = ScoreMatrixCommand {
        headers: request.headers,
        rows: request.rows,
        weights: request.weights,
        impacts: request.impacts,
    };

    let scored = handler.handle(cmd)?;

    Ok(Json(ScoreResponse::from(&scored)))
}

/// POST /api/topsis/submit - Score an uploaded file and mail the result
///
/// Multipart fields: `file`, `weights`, `impacts`, `email`.
pub async fn submit_analysis(
    State(state): State<TopsisAppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, TopsisApiError> {
    let cmd = read_submission(multipart).await?;

    tracing::info!(
        file_name = %cmd.file_name,
        size_bytes = cmd.content.len(),
        "Received analysis submission"
    );

    let result = state.submit_analysis_handler().handle(cmd).await?;

    let response = SubmitResponse {
        message: SUBMIT_CONFIRMATION.to_string(),
        recipient: result.recipient.to_string(),
        result_file: result.result_file.file_name().unwrap_or_default(),
        result: ScoreResponse::from(&result.scored),
        html_table: result.html_table,
    };

    Ok(Json(response))
}

async fn read_submission(
    mut multipart: Multipart,
) -> Result<SubmitAnalysisCommand, TopsisApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut weights = None;
    let mut impacts = None;
    let mut email = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload.csv").to_string();
                let bytes = field.bytes().await.map_err(invalid_multipart)?;
                file = Some((file_name, bytes.to_vec()));
            }
            "weights" => weights = Some(field.text().await.map_err(invalid_multipart)?),
            "impacts" => impacts = Some(field.text().await.map_err(invalid_multipart)?),
            "email" => email = Some(field.text().await.map_err(invalid_multipart)?),
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    let (file_name, content) = file.ok_or_else(|| missing_field("file"))?;
    Ok(SubmitAnalysisCommand {
        file_name,
        content,
        weights: weights.ok_or_else(|| missing_field("weights"))?,
        impacts: impacts.ok_or_else(|| missing_field("impacts"))?,
        email: email.ok_or_else(|| missing_field("email"))?,
    })
}

fn invalid_multipart(err: axum::extract::multipart::MultipartError) -> TopsisApiError {
    TopsisApiError(DomainError::new(
        ErrorCode::InvalidFormat,
        format!("Invalid form data: {}", err.body_text()),
    ))
}

fn missing_field(field: &str) -> TopsisApiError {
    TopsisApiError(
        DomainError::new(ErrorCode::EmptyField, format!("Missing form field '{}'", field))
            .with_detail("field", field),
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct TopsisApiError(DomainError);

impl TopsisApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::NonNumericValue => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::DeliveryError => StatusCode::BAD_GATEWAY,
            ErrorCode::StorageError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<DomainError> for TopsisApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<TopsisError> for TopsisApiError {
    fn from(err: TopsisError) -> Self {
        Self(err.into())
    }
}

impl From<AnalysisError> for TopsisApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for TopsisApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %self.0.code, error = %self.0.message, "Request failed");
        }
        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}
