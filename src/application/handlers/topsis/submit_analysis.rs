//! SubmitAnalysisHandler - Scores an uploaded table and mails the result.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, ValidationError};
use crate::domain::topsis::{
    DecisionMatrix, ImpactVector, ScoredMatrix, TopsisError, TopsisScorer, WeightVector,
};
use crate::ports::{
    AnalysisParameters, DeliveryError, ResultDelivery, ResultRenderer, ResultStorage,
    StorageError, StoredFile, TableError, TableParsers,
};

/// Command to analyze an uploaded decision table.
#[derive(Debug, Clone)]
pub struct SubmitAnalysisCommand {
    /// Name of the uploaded file as sent by the client.
    pub file_name: String,
    pub content: Vec<u8>,
    /// Comma-separated weights as typed by the requester.
    pub weights: String,
    /// Comma-separated impacts as typed by the requester.
    pub impacts: String,
    pub email: String,
}

/// Result of a delivered analysis.
#[derive(Debug, Clone)]
pub struct SubmitAnalysisResult {
    pub scored: ScoredMatrix,
    pub upload_file: StoredFile,
    pub result_file: StoredFile,
    pub html_table: String,
    pub recipient: EmailAddress,
}

/// Error type for analysis submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(#[from] ValidationError),

    #[error("Number of weights ({weights}) must match number of impacts ({impacts})")]
    ParameterCountMismatch { weights: usize, impacts: usize },

    #[error("Could not read table: {0}")]
    Table(#[from] TableError),

    #[error(transparent)]
    Scoring(#[from] TopsisError),

    #[error("Could not store files: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not deliver results: {0}")]
    Delivery(#[from] DeliveryError),
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::InvalidAddress(inner) => {
                let message = format!("Invalid email address: {}", inner);
                let mut domain = DomainError::from(inner);
                domain.message = message;
                domain
            }
            AnalysisError::Scoring(inner) => inner.into(),
            AnalysisError::ParameterCountMismatch { weights, impacts } => {
                DomainError::new(ErrorCode::DimensionMismatch, err.to_string())
                    .with_detail("weights", weights.to_string())
                    .with_detail("impacts", impacts.to_string())
            }
            AnalysisError::Table(TableError::RaggedRow { .. }) => {
                DomainError::new(ErrorCode::DimensionMismatch, err.to_string())
            }
            AnalysisError::Table(TableError::Empty) => {
                DomainError::new(ErrorCode::InsufficientData, err.to_string())
            }
            AnalysisError::Table(_) => DomainError::new(ErrorCode::InvalidFormat, err.to_string())
                .with_detail("field", "file"),
            AnalysisError::Storage(_) => DomainError::new(ErrorCode::StorageError, err.to_string()),
            AnalysisError::Delivery(_) => {
                DomainError::new(ErrorCode::DeliveryError, err.to_string())
            }
        }
    }
}

/// Handler for uploaded analyses.
///
/// Steps run in order and the first failure aborts the rest, so nothing is
/// delivered unless scoring and result storage succeeded.
pub struct SubmitAnalysisHandler {
    parsers: TableParsers,
    storage: Arc<dyn ResultStorage>,
    delivery: Arc<dyn ResultDelivery>,
    renderer: Arc<dyn ResultRenderer>,
    scorer: TopsisScorer,
}

impl SubmitAnalysisHandler {
    pub fn new(
        parsers: TableParsers,
        storage: Arc<dyn ResultStorage>,
        delivery: Arc<dyn ResultDelivery>,
        renderer: Arc<dyn ResultRenderer>,
        scorer: TopsisScorer,
    ) -> Self {
        Self {
            parsers,
            storage,
            delivery,
            renderer,
            scorer,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnalysisCommand,
    ) -> Result<SubmitAnalysisResult, AnalysisError> {
        // 1. Validate request parameters
        let recipient = EmailAddress::new(&cmd.email)?;
        let weights = WeightVector::parse(&cmd.weights)?;
        let impacts = ImpactVector::parse(&cmd.impacts)?;
        if weights.len() != impacts.len() {
            return Err(AnalysisError::ParameterCountMismatch {
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        // 2. Keep the upload
        let upload_file = self.storage.store_upload(&cmd.file_name, &cmd.content).await?;

        // 3. Parse and score
        let table = self.parsers.for_file(&cmd.file_name).parse(&cmd.content)?;
        let matrix = DecisionMatrix::from_raw(&table.headers, &table.rows)?;
        let scored = self.scorer.score(&matrix, &weights, &impacts)?;

        // 4. Render and persist the result
        let rendered = self.renderer.render(
            &scored,
            &recipient,
            AnalysisParameters {
                weights: &cmd.weights,
                impacts: &cmd.impacts,
            },
        );
        let result_file = self.storage.store_result(&rendered.csv).await?;

        // 5. Deliver
        if let Err(e) = self.delivery.deliver(&rendered.message).await {
            warn!(recipient = %recipient, error = %e, "Result delivery failed");
            return Err(e.into());
        }

        info!(
            recipient = %recipient,
            alternatives = scored.len(),
            result_file = %result_file.path.display(),
            "Analysis delivered"
        );

        Ok(SubmitAnalysisResult {
            scored,
            upload_file,
            result_file,
            html_table: rendered.html_table,
            recipient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::delivery::InMemoryDelivery;
    use crate::adapters::report::ReportRenderer;
    use crate::adapters::table::{DelimitedTextParser, SpreadsheetParser};
    use crate::ports::{Attachment, RenderedResult, ResultMessage};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock implementations
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct MockResultStorage {
        uploads: Mutex<Vec<String>>,
        results: Mutex<Vec<String>>,
        fail_results: bool,
    }

    impl MockResultStorage {
        fn failing_results() -> Self {
            Self {
                fail_results: true,
                ..Self::default()
            }
        }

        fn stored(path: &str, size: usize) -> StoredFile {
            StoredFile {
                path: PathBuf::from(path),
                size_bytes: size as u64,
                stored_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ResultStorage for MockResultStorage {
        async fn store_upload(
            &self,
            file_name: &str,
            content: &[u8],
        ) -> Result<StoredFile, StorageError> {
            self.uploads.lock().unwrap().push(file_name.to_string());
            Ok(Self::stored(&format!("uploads/{}", file_name), content.len()))
        }

        async fn store_result(&self, csv: &str) -> Result<StoredFile, StorageError> {
            if self.fail_results {
                return Err(StorageError::io("disk full"));
            }
            self.results.lock().unwrap().push(csv.to_string());
            Ok(Self::stored("results/result.csv", csv.len()))
        }
    }

    const PHONES: &str = "Model,Price,Storage\nA,250,16\nB,200,16\nC,300,32\n";

    fn command(weights: &str, impacts: &str, email: &str) -> SubmitAnalysisCommand {
        SubmitAnalysisCommand {
            file_name: "phones.csv".to_string(),
            content: PHONES.as_bytes().to_vec(),
            weights: weights.to_string(),
            impacts: impacts.to_string(),
            email: email.to_string(),
        }
    }

    fn handler(
        storage: Arc<MockResultStorage>,
        delivery: InMemoryDelivery,
    ) -> SubmitAnalysisHandler {
        handler_with_renderer(storage, delivery, Arc::new(ReportRenderer::default()))
    }

    fn handler_with_renderer(
        storage: Arc<MockResultStorage>,
        delivery: InMemoryDelivery,
        renderer: Arc<dyn ResultRenderer>,
    ) -> SubmitAnalysisHandler {
        SubmitAnalysisHandler::new(
            TableParsers::new(
                Arc::new(DelimitedTextParser::default()),
                Arc::new(SpreadsheetParser::new()),
            ),
            storage,
            Arc::new(delivery),
            renderer,
            TopsisScorer::default(),
        )
    }

    /// Renders fixed text so tests can see where each output ends up.
    struct PlainRenderer;

    impl ResultRenderer for PlainRenderer {
        fn render(
            &self,
            scored: &ScoredMatrix,
            recipient: &EmailAddress,
            parameters: AnalysisParameters<'_>,
        ) -> RenderedResult {
            let csv = format!("best={}", scored.best().map_or("", |a| a.label.as_str()));
            RenderedResult {
                csv: csv.clone(),
                html_table: "<p>plain</p>".to_string(),
                message: ResultMessage {
                    recipient: recipient.clone(),
                    subject: format!("{} / {}", parameters.weights, parameters.impacts),
                    text_body: String::new(),
                    html_body: String::new(),
                    attachment: Attachment::csv("plain.csv", csv.into_bytes()),
                },
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn scores_stores_and_delivers() {
        let storage = Arc::new(MockResultStorage::default());
        let delivery = InMemoryDelivery::new();
        let handler = handler(storage.clone(), delivery.clone());

        let result = handler
            .handle(command("1,1", "+,+", "analyst@example.com"))
            .await
            .unwrap();

        assert_eq!(result.scored.best().unwrap().label, "C");
        assert_eq!(result.recipient.as_str(), "analyst@example.com");
        assert!(result.html_table.contains("<table"));
        assert_eq!(*storage.uploads.lock().unwrap(), vec!["phones.csv"]);

        let results = storage.results.lock().unwrap();
        assert!(results[0].starts_with("Model,Price,Storage,Topsis Score,Rank\n"));

        let sent = delivery.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].attachment.file_name, "result.csv");
        assert_eq!(sent[0].attachment.content, results[0].as_bytes());
        assert!(sent[0].text_body.contains("- Weights: 1,1"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Validation Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn rejects_invalid_email_before_storing() {
        let storage = Arc::new(MockResultStorage::default());
        let delivery = InMemoryDelivery::new();
        let handler = handler(storage.clone(), delivery.clone());

        let err = handler
            .handle(command("1,1", "+,+", "not-an-address"))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::InvalidAddress(_)));
        assert!(storage.uploads.lock().unwrap().is_empty());
        assert_eq!(delivery.sent_count(), 0);
    }

    #[tokio::test]
    async fn rejects_weight_impact_count_mismatch() {
        let storage = Arc::new(MockResultStorage::default());
        let handler = handler(storage.clone(), InMemoryDelivery::new());

        let err = handler
            .handle(command("1,1,1", "+,+", "analyst@example.com"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AnalysisError::ParameterCountMismatch {
                weights: 3,
                impacts: 2
            }
        );
        assert!(storage.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_invalid_impact_symbol() {
        let handler = handler(
            Arc::new(MockResultStorage::default()),
            InMemoryDelivery::new(),
        );

        let err = handler
            .handle(command("1,1", "+,*", "analyst@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::Scoring(TopsisError::InvalidImpactSymbol { position: 1, .. })
        ));
    }

    #[tokio::test]
    async fn counts_that_disagree_with_table_are_dimension_mismatch() {
        let delivery = InMemoryDelivery::new();
        let handler = handler(Arc::new(MockResultStorage::default()), delivery.clone());

        let err = handler
            .handle(command("1,1,1", "+,+,+", "analyst@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::Scoring(TopsisError::DimensionMismatch { criteria: 2, .. })
        ));
        assert_eq!(delivery.sent_count(), 0);
    }

    #[tokio::test]
    async fn ragged_table_is_reported() {
        let handler = handler(
            Arc::new(MockResultStorage::default()),
            InMemoryDelivery::new(),
        );
        let mut cmd = command("1,1", "+,+", "analyst@example.com");
        cmd.content = b"Model,Price,Storage\nA,\"250,16\n".to_vec();

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(
            err,
            AnalysisError::Table(TableError::RaggedRow {
                line: 2,
                expected: 3,
                actual: 2
            })
        );
    }

    #[tokio::test]
    async fn spreadsheet_uploads_go_to_the_workbook_reader() {
        let storage = Arc::new(MockResultStorage::default());
        let handler = handler(storage.clone(), InMemoryDelivery::new());
        let mut cmd = command("1,1", "+,+", "analyst@example.com");
        cmd.file_name = "phones.xlsx".to_string();

        let err = handler.handle(cmd).await.unwrap_err();

        assert!(matches!(err, AnalysisError::Table(TableError::Workbook(_))));
        assert_eq!(*storage.uploads.lock().unwrap(), vec!["phones.xlsx"]);
        assert!(storage.results.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn injected_renderer_shapes_stored_and_mailed_result() {
        let storage = Arc::new(MockResultStorage::default());
        let delivery = InMemoryDelivery::new();
        let handler =
            handler_with_renderer(storage.clone(), delivery.clone(), Arc::new(PlainRenderer));

        let result = handler
            .handle(command("1,1", "+,-", "analyst@example.com"))
            .await
            .unwrap();

        assert_eq!(result.html_table, "<p>plain</p>");
        assert_eq!(*storage.results.lock().unwrap(), vec!["best=A"]);
        let sent = delivery.sent_messages();
        assert_eq!(sent[0].subject, "1,1 / +,-");
        assert_eq!(sent[0].attachment.content, b"best=A");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Infrastructure Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn storage_failure_prevents_delivery() {
        let delivery = InMemoryDelivery::new();
        let handler = handler(Arc::new(MockResultStorage::failing_results()), delivery.clone());

        let err = handler
            .handle(command("1,1", "+,+", "analyst@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Storage(_)));
        assert_eq!(delivery.sent_count(), 0);
    }

    #[tokio::test]
    async fn delivery_failure_is_surfaced() {
        let delivery = InMemoryDelivery::failing(DeliveryError::Rejected {
            status: 403,
            message: "domain not verified".to_string(),
        });
        let handler = handler(Arc::new(MockResultStorage::default()), delivery);

        let err = handler
            .handle(command("1,1", "+,+", "analyst@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Delivery(_)));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn maps_errors_to_domain_codes() {
        let cases = vec![
            (
                AnalysisError::ParameterCountMismatch {
                    weights: 1,
                    impacts: 2,
                },
                ErrorCode::DimensionMismatch,
            ),
            (
                AnalysisError::InvalidAddress(ValidationError::invalid_format("email", "no @")),
                ErrorCode::InvalidFormat,
            ),
            (AnalysisError::Table(TableError::Empty), ErrorCode::InsufficientData),
            (
                AnalysisError::Table(TableError::Workbook("zip".to_string())),
                ErrorCode::InvalidFormat,
            ),
            (
                AnalysisError::Storage(StorageError::io("disk full")),
                ErrorCode::StorageError,
            ),
            (
                AnalysisError::Delivery(DeliveryError::Transport("timeout".to_string())),
                ErrorCode::DeliveryError,
            ),
        ];

        for (error, code) in cases {
            assert_eq!(DomainError::from(error).code, code);
        }
    }
}
