//! Shared test utilities for the village website backend.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{auth, content, document, event, gallery, news, service, submission},
    entities::{self, news::NewsStatus},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Registers a content section so entries under it pass validation.
///
/// # Defaults
/// * `section_name`: the key itself
/// * `description`, `icon`: None
/// * `sort_order`: 0
pub async fn create_test_section(
    db: &DatabaseConnection,
    page: &str,
    section_key: &str,
) -> Result<entities::website_section::Model> {
    content::create_section(
        db,
        content::CreateSectionArgs {
            section_key: section_key.to_string(),
            section_name: section_key.to_string(),
            page: page.to_string(),
            description: None,
            icon: None,
            sort_order: 0,
        },
    )
    .await
}

/// Creates an active text content entry under an existing section.
pub async fn create_test_content(
    db: &DatabaseConnection,
    page: &str,
    section: &str,
    content_key: &str,
    content_value: &str,
) -> Result<entities::website_content::Model> {
    content::create_content(
        db,
        content::CreateContentArgs {
            content_key: content_key.to_string(),
            content_value: content_value.to_string(),
            content_type: entities::website_content::ContentType::Text,
            page: page.to_string(),
            section: section.to_string(),
            label: content_key.to_string(),
            description: None,
            is_required: false,
            max_length: None,
            sort_order: 0,
        },
    )
    .await
}

/// Creates a news article with sensible defaults.
///
/// # Defaults
/// * `judul`: derived from the slug
/// * `tanggal`: today
/// * `penulis`: "Admin"
pub async fn create_test_news(
    db: &DatabaseConnection,
    slug: &str,
    status: NewsStatus,
) -> Result<entities::news::Model> {
    news::create_news(
        db,
        news::CreateNewsArgs {
            judul: format!("Berita {slug}"),
            slug: slug.to_string(),
            konten: "Isi berita untuk pengujian.".to_string(),
            gambar: None,
            tanggal: chrono::Utc::now().date_naive(),
            penulis: "Admin".to_string(),
            status,
        },
    )
    .await
}

/// Creates a gallery photo with sensible defaults.
pub async fn create_test_gallery(
    db: &DatabaseConnection,
    judul: &str,
    kategori: Option<&str>,
) -> Result<entities::gallery::Model> {
    gallery::create_gallery(
        db,
        gallery::CreateGalleryArgs {
            judul: judul.to_string(),
            deskripsi: None,
            gambar: "/uploads/galeri/test.jpg".to_string(),
            kategori: kategori.map(ToString::to_string),
            tanggal: chrono::Utc::now().date_naive(),
        },
    )
    .await
}

/// Creates an event scheduled at the given time.
pub async fn create_test_event(
    db: &DatabaseConnection,
    judul: &str,
    tanggal: chrono::DateTime<chrono::Utc>,
) -> Result<entities::event::Model> {
    event::create_event(
        db,
        event::CreateEventArgs {
            judul: judul.to_string(),
            deskripsi: None,
            tanggal,
            lokasi: Some("Balai Desa".to_string()),
            gambar: None,
        },
    )
    .await
}

/// Creates a public service with sensible defaults.
pub async fn create_test_service(
    db: &DatabaseConnection,
    nama: &str,
) -> Result<entities::service::Model> {
    service::create_service(
        db,
        service::CreateServiceArgs {
            nama: nama.to_string(),
            deskripsi: None,
            persyaratan: Some("KTP dan Kartu Keluarga".to_string()),
            template_dokumen: None,
        },
    )
    .await
}

/// Creates a pending service submission for an existing service.
///
/// # Defaults
/// * `nik`: a fixed 16-digit test number
/// * `file_pendukung`: None
pub async fn create_test_submission(
    db: &DatabaseConnection,
    layanan_id: i64,
    nama: &str,
) -> Result<entities::submission::Model> {
    submission::create_submission(
        db,
        submission::CreateSubmissionArgs {
            layanan_id,
            nama: nama.to_string(),
            nik: "3201010101010001".to_string(),
            file_pendukung: None,
        },
    )
    .await
}

/// Creates an active downloadable document.
pub async fn create_test_document(
    db: &DatabaseConnection,
    judul: &str,
    kategori: Option<&str>,
) -> Result<entities::document::Model> {
    document::create_document(
        db,
        document::CreateDocumentArgs {
            judul: judul.to_string(),
            deskripsi: None,
            file_path: "/uploads/dokumen/test.pdf".to_string(),
            kategori: kategori.map(ToString::to_string),
            ukuran: 1024,
            tipe_file: Some("pdf".to_string()),
            tahun: Some(2024),
            nomor_dokumen: None,
            tanggal_terbit: None,
        },
    )
    .await
}

/// Creates an admin account for authentication tests.
pub async fn create_test_admin(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<entities::admin::Model> {
    auth::create_admin(
        db,
        "Test Admin".to_string(),
        email.to_string(),
        password.to_string(),
    )
    .await
}
