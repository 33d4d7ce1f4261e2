//! Service entity - Public services citizens can request (layanan).
//!
//! Deleting a service cascades to its submissions via the foreign key on
//! `pengajuan_layanan.layanan_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Public service database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "layanan")]
pub struct Model {
    /// Unique identifier for the service
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Service name (e.g. "Surat Keterangan Domisili")
    pub nama: String,
    /// What the service provides
    pub deskripsi: Option<String>,
    /// Requirements the citizen must bring
    pub persyaratan: Option<String>,
    /// Path to the document template for this service
    pub template_dokumen: Option<String>,
    /// When the service was created
    pub created_at: DateTimeUtc,
    /// When the service was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Service and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One service has many submissions
    #[sea_orm(has_many = "super::submission::Entity")]
    Submissions,
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
