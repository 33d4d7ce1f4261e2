//! HTTP interface: router assembly, shared state and the response envelope.
//!
//! Every endpoint answers with the same JSON envelope
//! `{ success, data?, message? }` so the frontend has one shape to parse.
//! Public read endpoints degrade to sensible defaults when the database is
//! unreachable; write endpoints report `success = false` with a status code.

use crate::{
    config::app::AppConfig,
    core::auth::TokenKeys,
    errors::{Error, Result},
};
use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

pub mod admin;
pub mod auth;
pub mod public;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool owned by the composition root
    pub db: DatabaseConnection,
    /// Token signing and verification keys
    pub keys: Arc<TokenKeys>,
}

/// The JSON envelope all endpoints answer with.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was handled
    pub success: bool,
    /// Payload, omitted on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable note, mostly used on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
        })
    }

    /// Successful response carrying data and a note.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        })
    }

    /// Failed response carrying only a note.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. } | Self::Config { .. } => StatusCode::BAD_REQUEST,
            Self::ContentNotFound { .. } | Self::SectionNotFound { .. } | Self::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Storage details stay in the log, never in the response body.
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Request failed");
            ApiResponse::<()>::failure("internal server error")
        } else {
            ApiResponse::<()>::failure(self.to_string())
        };

        (status, Json(body)).into_response()
    }
}

/// Assembles the full application router with all routes nested under
/// `base_path`.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let api = Router::new()
        .merge(public::routes())
        .nest("/admin", admin::routes().route_layer(
            middleware::from_fn_with_state(state.clone(), auth::require_auth),
        ));

    Router::new()
        .nest(base_path, api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves until ctrl-c.
pub async fn run_server(config: &AppConfig, db: DatabaseConnection) -> Result<()> {
    let keys = Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_secs));
    let state = AppState { db, keys };
    let app = build_router(state, &config.api_base_path);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(address = %listener.local_addr()?, base_path = %config.api_base_path, "Serving HTTP API");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "Failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_success_envelope_omits_message() {
        let Json(response) = ApiResponse::ok(vec![1, 2, 3]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let response = ApiResponse::<()>::failure("Email atau password salah");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Email atau password salah");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let response = Error::Validation {
            message: "judul cannot be empty".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_record_maps_to_not_found() {
        let response = Error::ContentNotFound { id: 99 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
