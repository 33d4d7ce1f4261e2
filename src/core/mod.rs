//! Core business logic - framework-agnostic operations over the village site's
//! relational store. The HTTP layer in [`crate::api`] is a thin consumer of
//! these functions; everything here is testable against in-memory `SQLite`.

/// Admin authentication and signed bearer tokens
pub mod auth;
/// Content store, section registry, reader and editor views
pub mod content;
/// Downloadable public documents
pub mod document;
/// Agenda events
pub mod event;
/// Photo gallery
pub mod gallery;
/// News articles with offset/limit pagination
pub mod news;
/// Organization structure members
pub mod organization;
/// Placeholder token substitution for content values
pub mod placeholder;
/// Public services (layanan)
pub mod service;
/// Village profile singleton
pub mod settings;
/// Dashboard statistics
pub mod stats;
/// Citizen service submissions with generated tracking numbers
pub mod submission;
