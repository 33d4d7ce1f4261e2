//! Content seed catalog loading from content.toml.
//!
//! The catalog lists the website sections and content entries the site ships
//! with. It is used to seed the database on first run or when entries are
//! missing; rows already present are never overwritten, so operator edits
//! survive restarts.

use crate::entities::website_content::ContentType;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The entire parsed content.toml file
#[derive(Debug, Deserialize)]
pub struct ContentCatalog {
    /// Section descriptors to register
    #[serde(default)]
    pub sections: Vec<SectionSeed>,
    /// Content entries to install
    #[serde(default)]
    pub entries: Vec<ContentSeed>,
}

/// Seed definition for one section descriptor
#[derive(Debug, Deserialize, Clone)]
pub struct SectionSeed {
    /// Key content entries reference
    pub section_key: String,
    /// Display label
    pub section_name: String,
    /// Page the section belongs to
    pub page: String,
    /// Help text for the editor
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name for the editor UI
    #[serde(default)]
    pub icon: Option<String>,
    /// Display ordering within the page
    #[serde(default)]
    pub sort_order: i32,
}

/// Seed definition for one content entry
#[derive(Debug, Deserialize, Clone)]
pub struct ContentSeed {
    /// Lookup key within the section
    pub content_key: String,
    /// Initial value, may contain placeholder tokens
    pub content_value: String,
    /// Editor widget hint, defaults to plain text
    #[serde(default = "default_content_type")]
    pub content_type: ContentType,
    /// Page grouping key
    pub page: String,
    /// Section grouping key
    pub section: String,
    /// Label shown in the editor
    pub label: String,
    /// Help text for the editor
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the editor requires a non-empty value
    #[serde(default)]
    pub is_required: bool,
    /// Maximum value length hint
    #[serde(default)]
    pub max_length: Option<i32>,
    /// Display ordering within the section
    #[serde(default)]
    pub sort_order: i32,
}

const fn default_content_type() -> ContentType {
    ContentType::Text
}

/// Loads the content catalog from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<ContentCatalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read content catalog: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse content catalog: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_content_catalog() {
        let toml_str = r#"
            [[sections]]
            section_key = "hero"
            section_name = "Hero Banner"
            page = "homepage"
            icon = "image"
            sort_order = 1

            [[entries]]
            content_key = "hero_title"
            content_value = "Selamat Datang di {village_name}"
            content_type = "text"
            page = "homepage"
            section = "hero"
            label = "Judul Hero"
            is_required = true
            max_length = 100
            sort_order = 1

            [[entries]]
            content_key = "mission_text"
            content_value = '["Pelayanan prima", "Transparansi"]'
            content_type = "json"
            page = "about"
            section = "vision_mission"
            label = "Teks Misi"
        "#;

        let catalog: ContentCatalog = toml::from_str(toml_str).unwrap();
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.sections[0].section_key, "hero");
        assert_eq!(catalog.sections[0].sort_order, 1);

        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.entries[0].content_key, "hero_title");
        assert!(catalog.entries[0].is_required);
        assert_eq!(catalog.entries[0].max_length, Some(100));
        assert_eq!(catalog.entries[1].content_type, ContentType::Json);
        assert_eq!(catalog.entries[1].max_length, None);
    }

    #[test]
    fn test_empty_catalog_sections_default() {
        let catalog: ContentCatalog = toml::from_str("").unwrap();
        assert!(catalog.sections.is_empty());
        assert!(catalog.entries.is_empty());
    }
}
