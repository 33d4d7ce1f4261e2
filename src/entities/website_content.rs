//! Website content entity - The persisted content store of the generic CMS layer.
//!
//! Each row maps a `(page, section, content_key)` triple to a free-text value
//! plus display metadata for the admin editor. `content_type` is advisory only:
//! it selects the editor widget and which validation hints apply, it does not
//! change how the value is stored. `section` groups entries against
//! `website_sections.section_key` by convention, not by an enforced foreign key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Visibility status shared by content entries and section descriptors
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    /// Shown by the public reader and the default editor view
    #[sea_orm(string_value = "active")]
    Active,
    /// Hidden unless the editor explicitly asks for inactive rows
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// Which editor widget a content value is edited with
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Single-line text input
    #[sea_orm(string_value = "text")]
    Text,
    /// Multi-line text area
    #[sea_orm(string_value = "textarea")]
    Textarea,
    /// Raw HTML fragment
    #[sea_orm(string_value = "html")]
    Html,
    /// JSON encoded as a string (e.g. a list of mission statements)
    #[sea_orm(string_value = "json")]
    Json,
}

/// Website content database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "website_content")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Key the public pages look the value up by, unique within its section
    pub content_key: String,
    /// The editable value; may contain placeholder tokens like `{village_name}`
    #[sea_orm(column_type = "Text")]
    pub content_value: String,
    /// Advisory widget/validation hint
    pub content_type: ContentType,
    /// Page grouping key (e.g. "homepage", "global")
    pub page: String,
    /// Section grouping key within the page
    pub section: String,
    /// Label shown next to the field in the editor
    pub label: String,
    /// Help text shown under the field in the editor
    pub description: Option<String>,
    /// Editor hint: the field must not be saved empty
    pub is_required: bool,
    /// Editor hint: maximum value length, unlimited when None
    pub max_length: Option<i32>,
    /// Display ordering within the section, ascending
    pub sort_order: i32,
    /// Inactive entries are hidden from the public reader
    pub status: ContentStatus,
    /// When the entry was created
    pub created_at: DateTimeUtc,
    /// When the entry was last modified
    pub updated_at: DateTimeUtc,
}

/// Content entries have no enforced relationships; section grouping is by key
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
