//! News entity - Articles published on the public site.
//!
//! Each article has a unique slug for URL routing, a publication date used for
//! ordering, and a `status` that keeps drafts off the public listing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Publication status of a news article
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum NewsStatus {
    /// Visible on the public site
    #[sea_orm(string_value = "published")]
    Published,
    /// Only visible in the admin editor
    #[sea_orm(string_value = "draft")]
    Draft,
}

/// News database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news")]
pub struct Model {
    /// Unique identifier for the article
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Article headline
    pub judul: String,
    /// URL slug, unique across all articles
    #[sea_orm(unique)]
    pub slug: String,
    /// Article body (HTML or plain text)
    #[sea_orm(column_type = "Text")]
    pub konten: String,
    /// Cover image URL
    pub gambar: Option<String>,
    /// Publication date, public listing is ordered by this descending
    pub tanggal: Date,
    /// Author display name
    pub penulis: String,
    /// Draft articles are hidden from the public listing
    pub status: NewsStatus,
    /// When the article was created
    pub created_at: DateTimeUtc,
    /// When the article was last modified
    pub updated_at: DateTimeUtc,
}

/// News has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
