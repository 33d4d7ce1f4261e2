//! Unified error types for the village website backend.
//!
//! Core functions return `Result<T>` so failures stay typed until they reach
//! the API layer, which decides whether to degrade to a default (public read
//! paths) or report a structured failure (write paths).

use thiserror::Error;

/// All errors that can occur in the application.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Database operation failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A website content entry was not found by its ID
    #[error("Content entry {id} not found")]
    ContentNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// A content entry referenced a section that has no descriptor
    #[error("No active section '{section}' registered for page '{page}'")]
    SectionNotFound {
        /// Page the entry was targeting
        page: String,
        /// Section key that has no descriptor
        section: String,
    },

    /// Generic record-not-found for the flat CRUD entities
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Table/entity name for the message
        entity: &'static str,
        /// Primary key that was looked up
        id: i64,
    },

    /// Input rejected at the application boundary
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable reason
        message: String,
    },

    /// Token signing or verification failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// I/O failure (e.g. reading the content seed catalog)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
