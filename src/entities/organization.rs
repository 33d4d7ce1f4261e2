//! Organization entity - Village government officials shown on the structure page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Organization member database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organisasi")]
pub struct Model {
    /// Unique identifier for the member
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name
    pub nama: String,
    /// Position title (e.g. "Kepala Desa", "Sekretaris")
    pub jabatan: String,
    /// Portrait photo URL
    pub foto: Option<String>,
    /// Display order on the structure page, ascending
    pub urutan: i32,
    /// When the member record was created
    pub created_at: DateTimeUtc,
    /// When the member record was last modified
    pub updated_at: DateTimeUtc,
}

/// Organization has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
