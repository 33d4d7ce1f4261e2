//! Service submission entity - Citizen requests against a public service.
//!
//! Each submission gets a generated tracking number (`nomor_pengajuan`) shaped
//! `YYYYMMDD-XXXXXX`; the unique column constraint is what enforces uniqueness,
//! not the generator. Submissions cascade-delete with their parent service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Processing status of a submission
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Received, not yet picked up by an operator
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Being processed
    #[sea_orm(string_value = "diproses")]
    Diproses,
    /// Completed
    #[sea_orm(string_value = "selesai")]
    Selesai,
    /// Rejected
    #[sea_orm(string_value = "ditolak")]
    Ditolak,
}

/// Service submission database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pengajuan_layanan")]
pub struct Model {
    /// Unique identifier for the submission
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the service this submission was made against
    pub layanan_id: i64,
    /// Generated tracking number, unique across all submissions
    #[sea_orm(unique)]
    pub nomor_pengajuan: String,
    /// Citizen's full name
    pub nama: String,
    /// Citizen's national identity number
    pub nik: String,
    /// Path to an uploaded supporting file, if any
    pub file_pendukung: Option<String>,
    /// Current processing status
    pub status: SubmissionStatus,
    /// Operator note shown to the citizen when tracking
    pub catatan: Option<String>,
    /// When the submission was received, listing is ordered by this descending
    pub created_at: DateTimeUtc,
    /// When the submission was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Submission and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each submission belongs to one service; removed with it
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::LayananId",
        to = "super::service::Column::Id",
        on_delete = "Cascade"
    )]
    Service,
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
