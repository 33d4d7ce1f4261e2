//! Public document business logic.

use crate::{
    entities::{Document, document, document::DocumentStatus},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Retrieves active documents, optionally filtered by category, newest first.
pub async fn list_documents(
    db: &DatabaseConnection,
    kategori: Option<&str>,
) -> Result<Vec<document::Model>> {
    let mut query = Document::find().filter(document::Column::Status.eq(DocumentStatus::Active));
    if let Some(kategori) = kategori {
        query = query.filter(document::Column::Kategori.eq(kategori));
    }
    query
        .order_by_desc(document::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a document by its unique ID.
pub async fn get_document_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<document::Model>> {
    Document::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Arguments for creating a document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentArgs {
    /// Document title
    pub judul: String,
    /// Optional summary
    #[serde(default)]
    pub deskripsi: Option<String>,
    /// Storage path of the file
    pub file_path: String,
    /// Category for filtering
    #[serde(default)]
    pub kategori: Option<String>,
    /// File size in bytes
    #[serde(default)]
    pub ukuran: i64,
    /// File type
    #[serde(default)]
    pub tipe_file: Option<String>,
    /// Year the document applies to
    #[serde(default)]
    pub tahun: Option<i32>,
    /// Official document number
    #[serde(default)]
    pub nomor_dokumen: Option<String>,
    /// Official issue date
    #[serde(default)]
    pub tanggal_terbit: Option<Date>,
}

/// Creates an active document record.
pub async fn create_document(
    db: &DatabaseConnection,
    args: CreateDocumentArgs,
) -> Result<document::Model> {
    if args.judul.trim().is_empty() {
        return Err(Error::Validation {
            message: "judul cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let item = document::ActiveModel {
        judul: Set(args.judul.trim().to_string()),
        deskripsi: Set(args.deskripsi),
        file_path: Set(args.file_path),
        kategori: Set(args.kategori),
        ukuran: Set(args.ukuran),
        tipe_file: Set(args.tipe_file),
        tahun: Set(args.tahun),
        nomor_dokumen: Set(args.nomor_dokumen),
        tanggal_terbit: Set(args.tanggal_terbit),
        status: Set(DocumentStatus::Active),
        download_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = item.insert(db).await?;
    Ok(created)
}

/// Partial update for a document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocumentArgs {
    /// New title
    pub judul: Option<String>,
    /// New summary
    pub deskripsi: Option<String>,
    /// New category
    pub kategori: Option<String>,
    /// New lifecycle status
    pub status: Option<DocumentStatus>,
}

/// Applies a partial update to a document.
pub async fn update_document(
    db: &DatabaseConnection,
    id: i64,
    args: UpdateDocumentArgs,
) -> Result<document::Model> {
    let item = Document::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "documents",
            id,
        })?;

    let mut active: document::ActiveModel = item.into();
    if let Some(judul) = args.judul {
        active.judul = Set(judul);
    }
    if let Some(deskripsi) = args.deskripsi {
        active.deskripsi = Set(Some(deskripsi));
    }
    if let Some(kategori) = args.kategori {
        active.kategori = Set(Some(kategori));
    }
    if let Some(status) = args.status {
        active.status = Set(status);
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a document record.
pub async fn delete_document(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = Document::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "documents",
            id,
        });
    }
    Ok(())
}

/// Increments the download counter for a document.
pub async fn record_download(db: &DatabaseConnection, id: i64) -> Result<document::Model> {
    use sea_orm::sea_query::Expr;

    let result = Document::update_many()
        .col_expr(
            document::Column::DownloadCount,
            Expr::col(document::Column::DownloadCount).add(1),
        )
        .filter(document::Column::Id.eq(id))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "documents",
            id,
        });
    }

    Document::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "documents",
            id,
        })
}
