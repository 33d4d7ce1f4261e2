//! Service submission business logic.
//!
//! Submissions are citizen requests against a service. Each one is assigned a
//! generated tracking number `YYYYMMDD-XXXXXX` where the suffix is six random
//! characters from `[A-Z0-9]`. The generator does not retry: the unique column
//! constraint is what guarantees uniqueness, and the astronomically unlikely
//! collision simply fails the insert.

use crate::{
    entities::{
        Submission, submission,
        submission::SubmissionStatus,
    },
    errors::{Error, Result},
};
use chrono::{Datelike, Utc};
use rand::Rng;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 6;

/// Generates a tracking number shaped `YYYYMMDD-XXXXXX` for today.
#[must_use]
pub fn generate_submission_number() -> String {
    let today = Utc::now();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET[idx] as char
        })
        .collect();

    format!(
        "{:04}{:02}{:02}-{}",
        today.year(),
        today.month(),
        today.day(),
        suffix
    )
}

/// Arguments for creating a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmissionArgs {
    /// Service being requested
    pub layanan_id: i64,
    /// Citizen's full name
    pub nama: String,
    /// Citizen's national identity number
    pub nik: String,
    /// Path of an uploaded supporting file
    #[serde(default)]
    pub file_pendukung: Option<String>,
}

/// Creates a submission in `pending` status with a fresh tracking number and
/// returns the stored record.
pub async fn create_submission(
    db: &DatabaseConnection,
    args: CreateSubmissionArgs,
) -> Result<submission::Model> {
    if args.nama.trim().is_empty() {
        return Err(Error::Validation {
            message: "nama cannot be empty".to_string(),
        });
    }
    if args.nik.trim().is_empty() {
        return Err(Error::Validation {
            message: "nik cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let item = submission::ActiveModel {
        layanan_id: Set(args.layanan_id),
        nomor_pengajuan: Set(generate_submission_number()),
        nama: Set(args.nama.trim().to_string()),
        nik: Set(args.nik.trim().to_string()),
        file_pendukung: Set(args.file_pendukung),
        status: Set(SubmissionStatus::Pending),
        catatan: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = item.insert(db).await?;
    Ok(created)
}

/// Retrieves all submissions, newest first, for the admin dashboard.
pub async fn list_submissions(db: &DatabaseConnection) -> Result<Vec<submission::Model>> {
    Submission::find()
        .order_by_desc(submission::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a submission by its tracking number, for the public status tracker.
pub async fn get_submission_by_nomor(
    db: &DatabaseConnection,
    nomor: &str,
) -> Result<Option<submission::Model>> {
    Submission::find()
        .filter(submission::Column::NomorPengajuan.eq(nomor))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Moves a submission to a new status, optionally with an operator note.
pub async fn update_submission_status(
    db: &DatabaseConnection,
    id: i64,
    status: SubmissionStatus,
    catatan: Option<String>,
) -> Result<submission::Model> {
    let item = Submission::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "pengajuan_layanan",
            id,
        })?;

    let mut active: submission::ActiveModel = item.into();
    active.status = Set(status);
    if let Some(catatan) = catatan {
        active.catatan = Set(Some(catatan));
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}
