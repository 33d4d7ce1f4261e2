//! Event entity - Scheduled village activities shown on the agenda page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Event database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Event title
    pub judul: String,
    /// Optional description
    pub deskripsi: Option<String>,
    /// When the event takes place, listing is ordered by this ascending
    pub tanggal: DateTimeUtc,
    /// Venue
    pub lokasi: Option<String>,
    /// Poster image URL
    pub gambar: Option<String>,
    /// When the event was created
    pub created_at: DateTimeUtc,
    /// When the event was last modified
    pub updated_at: DateTimeUtc,
}

/// Event has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
