//! Dashboard statistics.
//!
//! The admin dashboard shows simple row counts. None of the counts depend on
//! each other, so they are fetched concurrently.

use crate::{
    entities::{Document, Event, Gallery, News, Submission},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;

/// Row counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Statistics {
    /// Number of news articles (drafts included)
    pub news: u64,
    /// Number of gallery items
    pub gallery: u64,
    /// Number of events
    pub events: u64,
    /// Number of service submissions
    pub submissions: u64,
    /// Number of documents
    pub documents: u64,
}

/// Fetches all counters concurrently.
pub async fn get_statistics(db: &DatabaseConnection) -> Result<Statistics> {
    let (news, gallery, events, submissions, documents) = tokio::try_join!(
        News::find().count(db),
        Gallery::find().count(db),
        Event::find().count(db),
        Submission::find().count(db),
        Document::find().count(db),
    )?;

    Ok(Statistics {
        news,
        gallery,
        events,
        submissions,
        documents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        create_test_gallery, create_test_news, create_test_service, create_test_submission,
        setup_test_db,
    };
    use crate::entities::news::NewsStatus;

    #[tokio::test]
    async fn test_statistics_counts() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_news(&db, "satu", NewsStatus::Published).await?;
        create_test_news(&db, "dua", NewsStatus::Draft).await?;
        create_test_gallery(&db, "Foto", None).await?;
        let service = create_test_service(&db, "Surat Pengantar").await?;
        create_test_submission(&db, service.id, "Budi").await?;

        let stats = get_statistics(&db).await?;
        assert_eq!(stats.news, 2);
        assert_eq!(stats.gallery, 1);
        assert_eq!(stats.events, 0);
        assert_eq!(stats.submissions, 1);
        assert_eq!(stats.documents, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_statistics_empty_database() -> Result<()> {
        let db = setup_test_db().await?;

        let stats = get_statistics(&db).await?;
        assert_eq!(stats.news, 0);
        assert_eq!(stats.submissions, 0);

        Ok(())
    }
}
