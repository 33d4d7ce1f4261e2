//! Gallery entity - Photo documentation of village activities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gallery item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "galleries")]
pub struct Model {
    /// Unique identifier for the gallery item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Photo title
    pub judul: String,
    /// Optional caption
    pub deskripsi: Option<String>,
    /// Photo URL
    pub gambar: String,
    /// Free-form category used for filtering
    pub kategori: Option<String>,
    /// Date the photo was taken, listing is ordered by this descending
    pub tanggal: Date,
    /// When the item was created
    pub created_at: DateTimeUtc,
    /// When the item was last modified
    pub updated_at: DateTimeUtc,
}

/// Gallery has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
