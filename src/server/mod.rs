pub mod response;

use crate::core::generator::PasswordGenerator;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use response::{ErrorResponse, GenerateResponse, GENERATION_FAILED};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<PasswordGenerator>,
    pub include_words: bool,
    pub expose_error_details: bool,
}

/// `/generate`, `/health`, and the static front-end for everything else.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/generate", get(generate))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn generate(State(state): State<AppState>) -> Response {
    tracing::info!("Password generation request received");

    match state.generator.generate().await {
        Ok(generated) => {
            Json(GenerateResponse::new(generated, state.include_words)).into_response()
        }
        Err(e) => {
            tracing::error!("❌ Password generation failed: {}", e);
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            let details = state.expose_error_details.then(|| e.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: GENERATION_FAILED.to_string(),
                    details,
                }),
            )
                .into_response()
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "backend": state.generator.source().name(),
    }))
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
