//! Website section entity - The section registry of the generic CMS layer.
//!
//! Rows are purely descriptive metadata the admin editor uses to group and
//! label content entries. No link integrity is enforced against
//! `website_content` rows sharing the same `section_key`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub use super::website_content::ContentStatus;

/// Website section database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "website_sections")]
pub struct Model {
    /// Unique identifier for the descriptor
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Key that content entries reference via their `section` column
    pub section_key: String,
    /// Display label for the section header in the editor
    pub section_name: String,
    /// Page this section belongs to
    pub page: String,
    /// Help text shown under the section header
    pub description: Option<String>,
    /// Icon name for the editor UI
    pub icon: Option<String>,
    /// Display ordering within the page, ascending
    pub sort_order: i32,
    /// Inactive sections are not offered when validating new content
    pub status: ContentStatus,
    /// When the descriptor was created
    pub created_at: DateTimeUtc,
    /// When the descriptor was last modified
    pub updated_at: DateTimeUtc,
}

/// Section descriptors have no enforced relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
