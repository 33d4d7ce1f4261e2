//! Event business logic. The agenda listing is chronological, earliest first.

use crate::{
    entities::{Event, event},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Retrieves all events ordered by date ascending.
pub async fn list_events(db: &DatabaseConnection) -> Result<Vec<event::Model>> {
    Event::find()
        .order_by_asc(event::Column::Tanggal)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Arguments for creating an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventArgs {
    /// Event title
    pub judul: String,
    /// Optional description
    #[serde(default)]
    pub deskripsi: Option<String>,
    /// When the event takes place
    pub tanggal: DateTimeUtc,
    /// Venue
    #[serde(default)]
    pub lokasi: Option<String>,
    /// Poster image URL
    #[serde(default)]
    pub gambar: Option<String>,
}

/// Creates an event.
pub async fn create_event(db: &DatabaseConnection, args: CreateEventArgs) -> Result<event::Model> {
    if args.judul.trim().is_empty() {
        return Err(Error::Validation {
            message: "judul cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let item = event::ActiveModel {
        judul: Set(args.judul.trim().to_string()),
        deskripsi: Set(args.deskripsi),
        tanggal: Set(args.tanggal),
        lokasi: Set(args.lokasi),
        gambar: Set(args.gambar),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = item.insert(db).await?;
    Ok(created)
}

/// Partial update for an event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventArgs {
    /// New title
    pub judul: Option<String>,
    /// New description
    pub deskripsi: Option<String>,
    /// New date
    pub tanggal: Option<DateTimeUtc>,
    /// New venue
    pub lokasi: Option<String>,
    /// New poster URL
    pub gambar: Option<String>,
}

/// Applies a partial update to an event.
pub async fn update_event(
    db: &DatabaseConnection,
    id: i64,
    args: UpdateEventArgs,
) -> Result<event::Model> {
    let item = Event::find_by_id(id).one(db).await?.ok_or(Error::NotFound {
        entity: "events",
        id,
    })?;

    let mut active: event::ActiveModel = item.into();
    if let Some(judul) = args.judul {
        active.judul = Set(judul);
    }
    if let Some(deskripsi) = args.deskripsi {
        active.deskripsi = Set(Some(deskripsi));
    }
    if let Some(tanggal) = args.tanggal {
        active.tanggal = Set(tanggal);
    }
    if let Some(lokasi) = args.lokasi {
        active.lokasi = Set(Some(lokasi));
    }
    if let Some(gambar) = args.gambar {
        active.gambar = Set(Some(gambar));
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes an event.
pub async fn delete_event(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = Event::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "events",
            id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_event, setup_test_db};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_list_events_chronological() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_event(&db, "Nanti", Utc::now() + Duration::days(7)).await?;
        create_test_event(&db, "Besok", Utc::now() + Duration::days(1)).await?;

        let events = list_events(&db).await?;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].judul, "Besok");
        assert_eq!(events[1].judul, "Nanti");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_event_fails() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_event(&db, 7).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "events", id: 7 }
        ));

        Ok(())
    }
}
