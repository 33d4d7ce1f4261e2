//! Document entity - Downloadable public documents (regulations, forms, reports).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a document
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Listed and downloadable
    #[sea_orm(string_value = "active")]
    Active,
    /// Kept for record but hidden from the default listing
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// Document database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Unique identifier for the document
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Document title
    pub judul: String,
    /// Optional summary
    pub deskripsi: Option<String>,
    /// Storage path of the file
    pub file_path: String,
    /// Free-form category used for filtering
    pub kategori: Option<String>,
    /// File size in bytes
    pub ukuran: i64,
    /// File type (e.g. "pdf", "docx")
    pub tipe_file: Option<String>,
    /// Year the document applies to
    pub tahun: Option<i32>,
    /// Official document number, if any
    pub nomor_dokumen: Option<String>,
    /// Official issue date
    pub tanggal_terbit: Option<Date>,
    /// Archived documents are hidden from the default listing
    pub status: DocumentStatus,
    /// How many times the document has been downloaded
    pub download_count: i64,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Document has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
