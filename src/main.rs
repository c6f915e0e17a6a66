//! Process entry point: configuration, tracing, wiring, serve.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chaos_check::adapters::ai::{AnthropicConfig, AnthropicGenerator};
use chaos_check::adapters::http::{assessment_routes, health_routes, AssessmentHandlers};
use chaos_check::adapters::storage::{spawn_sweeper, InMemorySessionStore};
use chaos_check::application::handlers::assessment::{
    GenerateReportHandler, NextQuestionHandler, StartAssessmentHandler,
};
use chaos_check::config::AppConfig;
use chaos_check::ports::{SessionStore, TextGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let api_key = config.ai.anthropic_api_key.clone().unwrap_or_default();
    let generator: Arc<dyn TextGenerator> = Arc::new(AnthropicGenerator::new(
        AnthropicConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    ));

    let handlers = AssessmentHandlers::new(
        Arc::new(StartAssessmentHandler::new(store.clone())),
        Arc::new(NextQuestionHandler::new(store.clone(), generator.clone())),
        Arc::new(GenerateReportHandler::new(store.clone(), generator)),
    );

    // Runs for the process lifetime; nothing joins it.
    let _sweeper = spawn_sweeper(store.clone());

    let app = Router::new()
        .nest("/api/assessment", assessment_routes(handlers))
        .merge(health_routes(store))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(config.server.cors_origins_list()));

    let addr = config.server.socket_addr();
    info!(%addr, model = %config.ai.model, "chaos-check listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: Vec<String>) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
