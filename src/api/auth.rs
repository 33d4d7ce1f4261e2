//! Login endpoint and the bearer-token middleware guarding admin routes.

use super::{ApiResponse, AppState};
use crate::{
    core::auth::{self, LoginOutcome},
    entities::admin,
};
use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Credentials posted to `/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload returned on a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed bearer token for the Authorization header
    pub token: String,
    /// The authenticated admin, password omitted
    pub admin: admin::Model,
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, crate::errors::Error> {
    let outcome = auth::login(&state.db, &state.keys, &request.email, &request.password).await?;

    match outcome {
        LoginOutcome::Success(success) => {
            info!(email = %success.admin.email, demo = success.demo, "Admin logged in");
            let message = if success.demo {
                "Login berhasil (demo)"
            } else {
                "Login berhasil"
            };
            let payload = LoginResponse {
                token: success.token,
                admin: success.admin,
            };
            Ok(ApiResponse::ok_with_message(payload, message).into_response())
        }
        LoginOutcome::InvalidCredentials => {
            debug!(email = %request.email, "Rejected login attempt");
            Ok((
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::failure("Email atau password salah")),
            )
                .into_response())
        }
    }
}

/// Middleware that rejects requests without a valid bearer token. Verified
/// claims are stored as a request extension for downstream handlers.
pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let claims = token.and_then(|token| auth::verify_token(&state.keys, token).ok());

    match claims {
        Some(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::failure("Sesi tidak valid, silakan login ulang")),
        )
            .into_response(),
    }
}
