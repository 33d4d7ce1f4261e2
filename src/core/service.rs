//! Public service (layanan) business logic.
//!
//! Deleting a service removes its submissions through the storage-level
//! cascade; no application code has to clean them up.

use crate::{
    entities::{Service, service},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Retrieves all services in insertion order.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>> {
    Service::find()
        .order_by_asc(service::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a service by its unique ID.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<service::Model>> {
    Service::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Arguments for creating a service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceArgs {
    /// Service name
    pub nama: String,
    /// What the service provides
    #[serde(default)]
    pub deskripsi: Option<String>,
    /// Requirements the citizen must bring
    #[serde(default)]
    pub persyaratan: Option<String>,
    /// Document template path
    #[serde(default)]
    pub template_dokumen: Option<String>,
}

/// Creates a service.
pub async fn create_service(
    db: &DatabaseConnection,
    args: CreateServiceArgs,
) -> Result<service::Model> {
    if args.nama.trim().is_empty() {
        return Err(Error::Validation {
            message: "nama cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let item = service::ActiveModel {
        nama: Set(args.nama.trim().to_string()),
        deskripsi: Set(args.deskripsi),
        persyaratan: Set(args.persyaratan),
        template_dokumen: Set(args.template_dokumen),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = item.insert(db).await?;
    Ok(created)
}

/// Partial update for a service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceArgs {
    /// New name
    pub nama: Option<String>,
    /// New description
    pub deskripsi: Option<String>,
    /// New requirements
    pub persyaratan: Option<String>,
    /// New template path
    pub template_dokumen: Option<String>,
}

/// Applies a partial update to a service.
pub async fn update_service(
    db: &DatabaseConnection,
    id: i64,
    args: UpdateServiceArgs,
) -> Result<service::Model> {
    let item = Service::find_by_id(id).one(db).await?.ok_or(Error::NotFound {
        entity: "layanan",
        id,
    })?;

    let mut active: service::ActiveModel = item.into();
    if let Some(nama) = args.nama {
        active.nama = Set(nama);
    }
    if let Some(deskripsi) = args.deskripsi {
        active.deskripsi = Set(Some(deskripsi));
    }
    if let Some(persyaratan) = args.persyaratan {
        active.persyaratan = Set(Some(persyaratan));
    }
    if let Some(template_dokumen) = args.template_dokumen {
        active.template_dokumen = Set(Some(template_dokumen));
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a service; its submissions cascade with it.
pub async fn delete_service(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = Service::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "layanan",
            id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Submission;
    use crate::test_utils::{create_test_service, create_test_submission, setup_test_db};

    #[tokio::test]
    async fn test_service_crud() -> Result<()> {
        let db = setup_test_db().await?;
        let service = create_test_service(&db, "Surat Keterangan Domisili").await?;

        let fetched = get_service_by_id(&db, service.id).await?.unwrap();
        assert_eq!(fetched.nama, "Surat Keterangan Domisili");

        let updated = update_service(
            &db,
            service.id,
            UpdateServiceArgs {
                deskripsi: Some("Penerbitan surat domisili".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(
            updated.deskripsi,
            Some("Penerbitan surat domisili".to_string())
        );

        delete_service(&db, service.id).await?;
        assert!(get_service_by_id(&db, service.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_service_cascades_to_submissions() -> Result<()> {
        let db = setup_test_db().await?;
        let service = create_test_service(&db, "Surat Pengantar").await?;
        create_test_submission(&db, service.id, "Budi Santoso").await?;

        delete_service(&db, service.id).await?;

        let remaining = Submission::find().all(&db).await?;
        assert!(remaining.is_empty());

        Ok(())
    }
}
