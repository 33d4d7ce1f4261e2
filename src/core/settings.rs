//! Village profile business logic.
//!
//! The profile is a singleton record: reads take the latest row and fall back
//! to a built-in default when the table is empty, updates always target id=1.

use crate::{
    entities::{Settings, settings},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// The profile used when no row has been stored yet.
#[must_use]
pub fn default_profile() -> settings::Model {
    let now = chrono::Utc::now();
    settings::Model {
        id: 1,
        nama_desa: "Desa Maju Sejahtera".to_string(),
        slogan: Some("Menuju Desa Modern dan Sejahtera".to_string()),
        alamat: Some("Jl. Desa Maju No. 123, Kecamatan Sejahtera".to_string()),
        logo: None,
        hero_image: None,
        primary_color: "#3B82F6".to_string(),
        secondary_color: "#10B981".to_string(),
        deskripsi: Some(
            "Desa yang terletak di kawasan strategis dengan potensi alam yang melimpah."
                .to_string(),
        ),
        created_at: now,
        updated_at: now,
    }
}

/// Retrieves the village profile, falling back to the built-in default when
/// the table is empty so public pages always have branding to render.
pub async fn get_settings(db: &DatabaseConnection) -> Result<settings::Model> {
    let stored = Settings::find()
        .order_by_desc(settings::Column::Id)
        .one(db)
        .await?;

    Ok(stored.unwrap_or_else(default_profile))
}

/// Partial update for the village profile; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettingsArgs {
    /// New village name
    pub nama_desa: Option<String>,
    /// New slogan
    pub slogan: Option<String>,
    /// New address
    pub alamat: Option<String>,
    /// New logo URL
    pub logo: Option<String>,
    /// New hero banner URL
    pub hero_image: Option<String>,
    /// New primary theme color
    pub primary_color: Option<String>,
    /// New secondary theme color
    pub secondary_color: Option<String>,
    /// New description
    pub deskripsi: Option<String>,
}

/// Applies a partial update to the singleton row (id=1), creating it from the
/// default profile first when it does not exist yet.
pub async fn update_settings(
    db: &DatabaseConnection,
    args: UpdateSettingsArgs,
) -> Result<settings::Model> {
    let existing = Settings::find_by_id(1_i64).one(db).await?;

    let model = match existing {
        Some(model) => model,
        None => {
            let seed = default_profile();
            let fresh = settings::ActiveModel {
                id: Set(1),
                nama_desa: Set(seed.nama_desa),
                slogan: Set(seed.slogan),
                alamat: Set(seed.alamat),
                logo: Set(seed.logo),
                hero_image: Set(seed.hero_image),
                primary_color: Set(seed.primary_color),
                secondary_color: Set(seed.secondary_color),
                deskripsi: Set(seed.deskripsi),
                created_at: Set(chrono::Utc::now()),
                updated_at: Set(chrono::Utc::now()),
            };
            fresh.insert(db).await?
        }
    };

    let mut active: settings::ActiveModel = model.into();
    if let Some(nama_desa) = args.nama_desa {
        active.nama_desa = Set(nama_desa);
    }
    if let Some(slogan) = args.slogan {
        active.slogan = Set(Some(slogan));
    }
    if let Some(alamat) = args.alamat {
        active.alamat = Set(Some(alamat));
    }
    if let Some(logo) = args.logo {
        active.logo = Set(Some(logo));
    }
    if let Some(hero_image) = args.hero_image {
        active.hero_image = Set(Some(hero_image));
    }
    if let Some(primary_color) = args.primary_color {
        active.primary_color = Set(primary_color);
    }
    if let Some(secondary_color) = args.secondary_color {
        active.secondary_color = Set(secondary_color);
    }
    if let Some(deskripsi) = args.deskripsi {
        active.deskripsi = Set(Some(deskripsi));
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_get_settings_falls_back_to_default() -> Result<()> {
        let db = setup_test_db().await?;

        let profile = get_settings(&db).await?;
        assert_eq!(profile.nama_desa, "Desa Maju Sejahtera");
        assert_eq!(profile.primary_color, "#3B82F6");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_creates_singleton_then_edits() -> Result<()> {
        let db = setup_test_db().await?;

        let updated = update_settings(
            &db,
            UpdateSettingsArgs {
                nama_desa: Some("Desa Sukamaju".to_string()),
                slogan: Some("Bersama Membangun Desa".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(updated.id, 1);
        assert_eq!(updated.nama_desa, "Desa Sukamaju");

        // Untouched fields keep their seeded values
        assert_eq!(updated.primary_color, "#3B82F6");

        let fetched = get_settings(&db).await?;
        assert_eq!(fetched.nama_desa, "Desa Sukamaju");
        assert_eq!(fetched.slogan, Some("Bersama Membangun Desa".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_always_targets_row_one() -> Result<()> {
        let db = setup_test_db().await?;

        update_settings(
            &db,
            UpdateSettingsArgs {
                nama_desa: Some("Pertama".to_string()),
                ..Default::default()
            },
        )
        .await?;
        update_settings(
            &db,
            UpdateSettingsArgs {
                nama_desa: Some("Kedua".to_string()),
                ..Default::default()
            },
        )
        .await?;

        let all = Settings::find().all(&db).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].nama_desa, "Kedua");

        Ok(())
    }
}
