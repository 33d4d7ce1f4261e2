//! Village profile entity - The singleton branding/settings record for the site.
//!
//! Exactly one logical row exists (conventionally id=1). It holds the display
//! branding used by the public pages and by the placeholder processor.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Village profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "desa_settings")]
pub struct Model {
    /// Unique identifier; updates always target id=1
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Official village name, substituted for `{village_name}`
    pub nama_desa: String,
    /// Village slogan, substituted for `{village_slogan}`
    pub slogan: Option<String>,
    /// Postal address shown in the footer and contact page
    pub alamat: Option<String>,
    /// Logo image URL
    pub logo: Option<String>,
    /// Hero banner image URL for the homepage
    pub hero_image: Option<String>,
    /// Primary theme color as a hex string
    pub primary_color: String,
    /// Secondary theme color as a hex string
    pub secondary_color: String,
    /// Long-form village description
    pub deskripsi: Option<String>,
    /// When the profile was created
    pub created_at: DateTimeUtc,
    /// When the profile was last modified
    pub updated_at: DateTimeUtc,
}

/// The village profile has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
