//! Database configuration and connection management.
//!
//! The production database is MySQL, addressed through `DB_HOST`/`DB_USER`/
//! `DB_PASSWORD`/`DB_NAME`/`DB_PORT` environment variables with documented
//! defaults; `DATABASE_URL` overrides the composed URL wholesale (tests use it
//! with in-memory `SQLite`). Tables are created at startup from the entity
//! definitions via `SeaORM`'s `Schema::create_table_from_entity`, so the
//! schema always matches the Rust struct definitions without manual SQL.

use crate::entities::{
    Admin, Document, Event, Gallery, News, Organization, Service, Settings, Submission,
    WebsiteContent, WebsiteSection,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

/// Composes the database URL from the environment.
///
/// `DATABASE_URL` wins when set; otherwise a MySQL URL is built from the
/// individual `DB_*` variables (host `localhost`, user `root`, empty password,
/// database `desa_digital`, port `3306`).
#[must_use]
pub fn get_database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }

    let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let user = std::env::var("DB_USER").unwrap_or_else(|_| "root".to_string());
    let password = std::env::var("DB_PASSWORD").unwrap_or_default();
    let name = std::env::var("DB_NAME").unwrap_or_else(|_| "desa_digital".to_string());
    let port = std::env::var("DB_PORT").unwrap_or_else(|_| "3306".to_string());

    if password.is_empty() {
        format!("mysql://{user}@{host}:{port}/{name}")
    } else {
        format!("mysql://{user}:{password}@{host}:{port}/{name}")
    }
}

/// Establishes the database connection, owned by the composition root and
/// injected everywhere else.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    let db = Database::connect(&database_url).await?;
    info!("Database connection established");
    Ok(db)
}

/// Creates all tables that do not exist yet from the entity definitions.
///
/// The submission table's foreign key (`pengajuan_layanan.layanan_id` →
/// `layanan.id`, cascade on delete) comes from the entity relation, so
/// `layanan` must be created before `pengajuan_layanan`.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let statements = [
        schema.create_table_from_entity(Settings),
        schema.create_table_from_entity(News),
        schema.create_table_from_entity(Gallery),
        schema.create_table_from_entity(Event),
        schema.create_table_from_entity(Organization),
        schema.create_table_from_entity(Service),
        schema.create_table_from_entity(Submission),
        schema.create_table_from_entity(Admin),
        schema.create_table_from_entity(Document),
        schema.create_table_from_entity(WebsiteContent),
        schema.create_table_from_entity(WebsiteSection),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(builder.build(&statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        news::Model as NewsModel, settings::Model as SettingsModel,
        website_content::Model as WebsiteContentModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<SettingsModel> = Settings::find().limit(1).all(&db).await?;
        let _: Vec<NewsModel> = News::find().limit(1).all(&db).await?;
        let _: Vec<WebsiteContentModel> = WebsiteContent::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<NewsModel> = News::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[test]
    fn test_database_url_defaults() {
        // Guard against a DATABASE_URL leaking in from the test environment
        if std::env::var("DATABASE_URL").is_err() && std::env::var("DB_HOST").is_err() {
            let url = get_database_url();
            assert!(url.starts_with("mysql://root@localhost:3306/"));
        }
    }
}
