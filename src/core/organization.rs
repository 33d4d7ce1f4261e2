//! Organization structure business logic. Members are listed in their
//! configured display order (`urutan` ascending).

use crate::{
    entities::{Organization, organization},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Retrieves all members ordered by `urutan` ascending.
pub async fn list_members(db: &DatabaseConnection) -> Result<Vec<organization::Model>> {
    Organization::find()
        .order_by_asc(organization::Column::Urutan)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Arguments for creating a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberArgs {
    /// Full name
    pub nama: String,
    /// Position title
    pub jabatan: String,
    /// Portrait photo URL
    #[serde(default)]
    pub foto: Option<String>,
    /// Display order
    #[serde(default)]
    pub urutan: i32,
}

/// Creates a member record.
pub async fn create_member(
    db: &DatabaseConnection,
    args: CreateMemberArgs,
) -> Result<organization::Model> {
    if args.nama.trim().is_empty() || args.jabatan.trim().is_empty() {
        return Err(Error::Validation {
            message: "nama and jabatan cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let member = organization::ActiveModel {
        nama: Set(args.nama.trim().to_string()),
        jabatan: Set(args.jabatan.trim().to_string()),
        foto: Set(args.foto),
        urutan: Set(args.urutan),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = member.insert(db).await?;
    Ok(created)
}

/// Partial update for a member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMemberArgs {
    /// New name
    pub nama: Option<String>,
    /// New position title
    pub jabatan: Option<String>,
    /// New photo URL
    pub foto: Option<String>,
    /// New display order
    pub urutan: Option<i32>,
}

/// Applies a partial update to a member record.
pub async fn update_member(
    db: &DatabaseConnection,
    id: i64,
    args: UpdateMemberArgs,
) -> Result<organization::Model> {
    let member = Organization::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "organisasi",
            id,
        })?;

    let mut active: organization::ActiveModel = member.into();
    if let Some(nama) = args.nama {
        active.nama = Set(nama);
    }
    if let Some(jabatan) = args.jabatan {
        active.jabatan = Set(jabatan);
    }
    if let Some(foto) = args.foto {
        active.foto = Set(Some(foto));
    }
    if let Some(urutan) = args.urutan {
        active.urutan = Set(urutan);
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a member record.
pub async fn delete_member(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = Organization::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "organisasi",
            id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_members_listed_in_display_order() -> Result<()> {
        let db = setup_test_db().await?;
        create_member(
            &db,
            CreateMemberArgs {
                nama: "Sekretaris".to_string(),
                jabatan: "Sekretaris Desa".to_string(),
                foto: None,
                urutan: 2,
            },
        )
        .await?;
        create_member(
            &db,
            CreateMemberArgs {
                nama: "Kepala".to_string(),
                jabatan: "Kepala Desa".to_string(),
                foto: None,
                urutan: 1,
            },
        )
        .await?;

        let members = list_members(&db).await?;
        assert_eq!(members[0].nama, "Kepala");
        assert_eq!(members[1].nama, "Sekretaris");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_member_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_member(
            &db,
            CreateMemberArgs {
                nama: String::new(),
                jabatan: "Kepala Desa".to_string(),
                foto: None,
                urutan: 0,
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }
}
