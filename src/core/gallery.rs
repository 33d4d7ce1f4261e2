//! Gallery business logic.

use crate::{
    entities::{Gallery, gallery},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Retrieves gallery items, optionally filtered by category, newest first.
pub async fn list_galleries(
    db: &DatabaseConnection,
    kategori: Option<&str>,
) -> Result<Vec<gallery::Model>> {
    let mut query = Gallery::find();
    if let Some(kategori) = kategori {
        query = query.filter(gallery::Column::Kategori.eq(kategori));
    }
    query
        .order_by_desc(gallery::Column::Tanggal)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Arguments for creating a gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryArgs {
    /// Photo title
    pub judul: String,
    /// Optional caption
    #[serde(default)]
    pub deskripsi: Option<String>,
    /// Photo URL
    pub gambar: String,
    /// Category for filtering
    #[serde(default)]
    pub kategori: Option<String>,
    /// Date the photo was taken
    pub tanggal: Date,
}

/// Creates a gallery item.
pub async fn create_gallery(
    db: &DatabaseConnection,
    args: CreateGalleryArgs,
) -> Result<gallery::Model> {
    if args.judul.trim().is_empty() {
        return Err(Error::Validation {
            message: "judul cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let item = gallery::ActiveModel {
        judul: Set(args.judul.trim().to_string()),
        deskripsi: Set(args.deskripsi),
        gambar: Set(args.gambar),
        kategori: Set(args.kategori),
        tanggal: Set(args.tanggal),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = item.insert(db).await?;
    Ok(created)
}

/// Partial update for a gallery item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGalleryArgs {
    /// New title
    pub judul: Option<String>,
    /// New caption
    pub deskripsi: Option<String>,
    /// New photo URL
    pub gambar: Option<String>,
    /// New category
    pub kategori: Option<String>,
    /// New date
    pub tanggal: Option<Date>,
}

/// Applies a partial update to a gallery item.
pub async fn update_gallery(
    db: &DatabaseConnection,
    id: i64,
    args: UpdateGalleryArgs,
) -> Result<gallery::Model> {
    let item = Gallery::find_by_id(id).one(db).await?.ok_or(Error::NotFound {
        entity: "galleries",
        id,
    })?;

    let mut active: gallery::ActiveModel = item.into();
    if let Some(judul) = args.judul {
        active.judul = Set(judul);
    }
    if let Some(deskripsi) = args.deskripsi {
        active.deskripsi = Set(Some(deskripsi));
    }
    if let Some(gambar) = args.gambar {
        active.gambar = Set(gambar);
    }
    if let Some(kategori) = args.kategori {
        active.kategori = Set(Some(kategori));
    }
    if let Some(tanggal) = args.tanggal {
        active.tanggal = Set(tanggal);
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a gallery item.
pub async fn delete_gallery(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = Gallery::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "galleries",
            id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_gallery, setup_test_db};

    #[tokio::test]
    async fn test_list_galleries_filters_by_category() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_gallery(&db, "Gotong Royong", Some("kegiatan")).await?;
        create_test_gallery(&db, "Panen Raya", Some("pertanian")).await?;
        create_test_gallery(&db, "Tanpa Kategori", None).await?;

        let all = list_galleries(&db, None).await?;
        assert_eq!(all.len(), 3);

        let kegiatan = list_galleries(&db, Some("kegiatan")).await?;
        assert_eq!(kegiatan.len(), 1);
        assert_eq!(kegiatan[0].judul, "Gotong Royong");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_gallery_fails() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_gallery(&db, 42, UpdateGalleryArgs::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "galleries", id: 42 }
        ));

        Ok(())
    }
}
