//! TOPSIS Ranker binary entry point.
//!
//! Loads configuration, wires adapters into the HTTP router, and serves it.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use topsis_ranker::adapters::{
    app_router, CsvResultWriter, DelimitedTextParser, HttpLimits, InMemoryDelivery,
    LocalResultStorage, ReportRenderer, ResendConfig, ResendDelivery, ResultMessageComposer,
    SpreadsheetParser, TopsisAppState,
};
use topsis_ranker::config::AppConfig;
use topsis_ranker::domain::topsis::TopsisScorer;
use topsis_ranker::ports::{ResultDelivery, TableParsers};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("topsis-ranker shutdown complete");
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.server.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let ranking_method = config.scoring.ranking_method()?;
    let delimiter = config.scoring.delimiter()?;
    let addr = config.server.socket_addr()?;

    let delivery: Arc<dyn ResultDelivery> = match &config.email.resend_api_key {
        Some(key) => {
            let resend = ResendConfig::new(key.clone(), config.email.from_header())
                .with_base_url(config.email.api_base_url.clone());
            Arc::new(ResendDelivery::new(resend)?)
        }
        None => {
            tracing::warn!("No Resend API key configured; result mail is kept in memory only");
            Arc::new(InMemoryDelivery::new())
        }
    };

    let parsers = TableParsers::new(
        Arc::new(DelimitedTextParser::new(delimiter)),
        Arc::new(SpreadsheetParser::new()),
    );
    let renderer = ReportRenderer::new(
        CsvResultWriter::default(),
        ResultMessageComposer::new(config.email.from_name.clone()),
    );

    let state = TopsisAppState::new(
        parsers,
        Arc::new(LocalResultStorage::new(
            config.storage.upload_dir.clone(),
            config.storage.result_dir.clone(),
        )),
        delivery,
        Arc::new(renderer),
        TopsisScorer::with_ranking_method(ranking_method),
    );

    let limits = HttpLimits {
        max_upload_bytes: config.server.max_upload_bytes,
        request_timeout: config.server.request_timeout(),
    };
    let app = app_router(state, limits);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        ranking_method = %ranking_method,
        "topsis-ranker listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
