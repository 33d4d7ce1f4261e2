/// Application settings from environment variables
pub mod app;

/// Database configuration and connection management
pub mod database;

/// Content seed catalog loading from content.toml
pub mod content;
