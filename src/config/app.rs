//! Application configuration from environment variables.
//!
//! Every setting has a documented default so the server starts in a bare
//! development environment; a `.env` file is loaded before this runs.

use std::env;

/// Runtime settings for the HTTP server and auth layer
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to (`HOST`, default `127.0.0.1`)
    pub host: String,
    /// Port the HTTP listener binds to (`PORT`, default `3000`)
    pub port: u16,
    /// Prefix all routes are nested under (`API_BASE_PATH`, default `/api`)
    pub api_base_path: String,
    /// HMAC secret for signing bearer tokens (`JWT_SECRET`)
    pub jwt_secret: String,
    /// Token lifetime in seconds (`TOKEN_TTL_SECS`, default 86400)
    pub token_ttl_secs: i64,
    /// Path to the content seed catalog (`CONTENT_CONFIG`, default `content.toml`)
    pub content_config_path: String,
}

impl AppConfig {
    /// Reads the configuration from the environment, applying defaults for
    /// anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let api_base_path = env::var("API_BASE_PATH").unwrap_or_else(|_| "/api".to_string());
        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "desa-digital-dev-secret".to_string());
        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(86_400);
        let content_config_path =
            env::var("CONTENT_CONFIG").unwrap_or_else(|_| "content.toml".to_string());

        Self {
            host,
            port,
            api_base_path,
            jwt_secret,
            token_ttl_secs,
            content_config_path,
        }
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
