use desa_digital::{
    api,
    config::{app::AppConfig, content, database},
    core::content as content_core,
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = AppConfig::from_env();
    info!("Successfully processed application configuration.");

    // 4. Connect to the database and ensure the schema exists
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to initialize database schema: {}", e))?;

    // 5. Seed the content catalog (missing catalog file is not fatal)
    match content::load_catalog(&app_config.content_config_path) {
        Ok(catalog) => {
            content_core::seed_initial_content(&db, &catalog)
                .await
                .inspect_err(|e| error!("Failed to seed initial content: {}", e))?;
        }
        Err(e) => {
            warn!(
                path = %app_config.content_config_path,
                error = %e,
                "Content catalog not loaded; starting without seeding"
            );
        }
    }

    // 6. Serve the HTTP API until shutdown
    api::run_server(&app_config, db).await?;

    Ok(())
}
