//! News business logic with offset/limit pagination.
//!
//! The public listing is paginated: the row count and the page of data are
//! fetched concurrently, and `total_pages = ceil(total / limit)`. Drafts are
//! visible only when the caller explicitly asks for them.

use crate::{
    entities::{News, news, news::NewsStatus},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*};
use serde::{Deserialize, Serialize};

/// One page of news articles plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedNews {
    /// Articles on this page, newest first
    pub data: Vec<news::Model>,
    /// Total number of matching articles
    pub total: u64,
    /// 1-based page number that was requested
    pub page: u64,
    /// Page size
    pub limit: u64,
    /// Total number of pages at this page size
    pub total_pages: u64,
}

impl PaginatedNews {
    /// The empty result the API degrades to when the store is unavailable.
    #[must_use]
    pub const fn empty(page: u64, limit: u64) -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page,
            limit,
            total_pages: 0,
        }
    }
}

/// Retrieves one page of articles ordered by publication date descending.
///
/// `status` of `None` means "all"; the public site passes
/// `Some(NewsStatus::Published)`. The count and data queries are issued
/// concurrently since neither depends on the other.
pub async fn list_news(
    db: &DatabaseConnection,
    page: u64,
    limit: u64,
    status: Option<NewsStatus>,
) -> Result<PaginatedNews> {
    let page = page.max(1);
    let limit = limit.max(1);
    // OFFSET binds as a signed 64-bit integer
    let offset = page
        .saturating_sub(1)
        .saturating_mul(limit)
        .min(i64::MAX as u64);

    let base = || {
        let mut query = News::find();
        if let Some(status) = status {
            query = query.filter(news::Column::Status.eq(status));
        }
        query
    };

    let count_query = base().count(db);
    let data_query = base()
        .order_by_desc(news::Column::Tanggal)
        .limit(limit)
        .offset(offset)
        .all(db);

    let (total, data) = tokio::try_join!(count_query, data_query)?;

    Ok(PaginatedNews {
        data,
        total,
        page,
        limit,
        total_pages: total.div_ceil(limit),
    })
}

/// Finds a published article by its slug, for the public detail page.
pub async fn get_news_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<news::Model>> {
    News::find()
        .filter(news::Column::Slug.eq(slug))
        .filter(news::Column::Status.eq(NewsStatus::Published))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Arguments for creating an article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsArgs {
    /// Headline
    pub judul: String,
    /// URL slug, must be unique
    pub slug: String,
    /// Body
    pub konten: String,
    /// Cover image URL
    #[serde(default)]
    pub gambar: Option<String>,
    /// Publication date
    pub tanggal: Date,
    /// Author display name
    pub penulis: String,
    /// Initial status, defaults to draft
    #[serde(default = "default_status")]
    pub status: NewsStatus,
}

const fn default_status() -> NewsStatus {
    NewsStatus::Draft
}

/// Creates an article.
pub async fn create_news(
    db: &DatabaseConnection,
    args: CreateNewsArgs,
) -> Result<news::Model> {
    if args.judul.trim().is_empty() {
        return Err(Error::Validation {
            message: "judul cannot be empty".to_string(),
        });
    }
    if args.slug.trim().is_empty() {
        return Err(Error::Validation {
            message: "slug cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let article = news::ActiveModel {
        judul: Set(args.judul.trim().to_string()),
        slug: Set(args.slug.trim().to_string()),
        konten: Set(args.konten),
        gambar: Set(args.gambar),
        tanggal: Set(args.tanggal),
        penulis: Set(args.penulis),
        status: Set(args.status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = article.insert(db).await?;
    Ok(created)
}

/// Partial update for an article; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNewsArgs {
    /// New headline
    pub judul: Option<String>,
    /// New body
    pub konten: Option<String>,
    /// New cover image URL
    pub gambar: Option<String>,
    /// New publication date
    pub tanggal: Option<Date>,
    /// New author name
    pub penulis: Option<String>,
    /// New status
    pub status: Option<NewsStatus>,
}

/// Applies a partial update to an article.
pub async fn update_news(
    db: &DatabaseConnection,
    id: i64,
    args: UpdateNewsArgs,
) -> Result<news::Model> {
    let article = News::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound { entity: "news", id })?;

    let mut active: news::ActiveModel = article.into();
    if let Some(judul) = args.judul {
        active.judul = Set(judul);
    }
    if let Some(konten) = args.konten {
        active.konten = Set(konten);
    }
    if let Some(gambar) = args.gambar {
        active.gambar = Set(Some(gambar));
    }
    if let Some(tanggal) = args.tanggal {
        active.tanggal = Set(tanggal);
    }
    if let Some(penulis) = args.penulis {
        active.penulis = Set(penulis);
    }
    if let Some(status) = args.status {
        active.status = Set(status);
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes an article.
pub async fn delete_news(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = News::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound { entity: "news", id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_news, setup_test_db};

    #[tokio::test]
    async fn test_pagination_last_partial_page() -> Result<()> {
        let db = setup_test_db().await?;
        for i in 0..25 {
            create_test_news(&db, &format!("artikel-{i:02}"), NewsStatus::Published).await?;
        }

        let page3 = list_news(&db, 3, 10, Some(NewsStatus::Published)).await?;
        assert_eq!(page3.total, 25);
        assert_eq!(page3.data.len(), 5);
        assert_eq!(page3.total_pages, 3);
        assert_eq!(page3.page, 3);
        assert_eq!(page3.limit, 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_pagination_exact_multiple() -> Result<()> {
        let db = setup_test_db().await?;
        for i in 0..20 {
            create_test_news(&db, &format!("artikel-{i:02}"), NewsStatus::Published).await?;
        }

        let result = list_news(&db, 1, 10, Some(NewsStatus::Published)).await?;
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.data.len(), 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_pagination_huge_page_number() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_news(&db, "artikel", NewsStatus::Published).await?;

        let result = list_news(&db, u64::MAX, 10, Some(NewsStatus::Published)).await?;
        assert_eq!(result.total, 1);
        assert!(result.data.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_list_news_hides_drafts_by_default_status() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_news(&db, "terbit", NewsStatus::Published).await?;
        create_test_news(&db, "konsep", NewsStatus::Draft).await?;

        let published = list_news(&db, 1, 10, Some(NewsStatus::Published)).await?;
        assert_eq!(published.total, 1);
        assert_eq!(published.data[0].slug, "terbit");

        let all = list_news(&db, 1, 10, None).await?;
        assert_eq!(all.total, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_news_by_slug_ignores_drafts() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_news(&db, "konsep", NewsStatus::Draft).await?;

        assert!(get_news_by_slug(&db, "konsep").await?.is_none());
        assert!(get_news_by_slug(&db, "tidak-ada").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete_news() -> Result<()> {
        let db = setup_test_db().await?;
        let article = create_test_news(&db, "artikel", NewsStatus::Draft).await?;

        let updated = update_news(
            &db,
            article.id,
            UpdateNewsArgs {
                status: Some(NewsStatus::Published),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(updated.status, NewsStatus::Published);

        delete_news(&db, article.id).await?;
        let missing = delete_news(&db, article.id).await;
        assert!(matches!(
            missing.unwrap_err(),
            Error::NotFound { entity: "news", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_news_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_news(
            &db,
            CreateNewsArgs {
                judul: "  ".to_string(),
                slug: "slug".to_string(),
                konten: "isi".to_string(),
                gambar: None,
                tanggal: chrono::Utc::now().date_naive(),
                penulis: "Admin".to_string(),
                status: NewsStatus::Draft,
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }
}
