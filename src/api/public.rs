//! Public endpoints backing the village website.
//!
//! Reads degrade instead of failing: when the database is unreachable the
//! site still renders from built-in defaults, so handlers here log the error
//! and answer with an empty or default payload.

use super::{ApiResponse, AppState, auth};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::warn;

use crate::{
    core::{content, document, event, gallery, news, organization, service, settings, submission},
    entities::{
        document::Model as DocumentModel, event::Model as EventModel,
        gallery::Model as GalleryModel, news::NewsStatus,
        organization::Model as OrganizationModel, service::Model as ServiceModel,
        settings::Model as SettingsModel, submission::Model as SubmissionModel,
    },
    errors::Error,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings))
        .route("/content", get(get_all_content))
        .route("/content/:page", get(get_page_content))
        .route("/news", get(list_news))
        .route("/news/:slug", get(get_news))
        .route("/galleries", get(list_galleries))
        .route("/events", get(list_events))
        .route("/organization", get(list_organization))
        .route("/services", get(list_services))
        .route("/documents", get(list_documents))
        .route("/documents/:id/download", post(download_document))
        .route("/service-submissions", post(create_submission))
        .route("/service-submissions/:nomor", get(track_submission))
        .route("/auth/login", post(auth::login))
}

/// `GET /settings`: village profile, defaults when nothing is stored yet.
async fn get_settings(State(state): State<AppState>) -> Json<ApiResponse<SettingsModel>> {
    let profile = match settings::get_settings(&state.db).await {
        Ok(profile) => profile,
        Err(error) => {
            warn!(%error, "Falling back to default village profile");
            settings::default_profile()
        }
    };
    ApiResponse::ok(profile)
}

/// `GET /content`: every active entry grouped page -> section -> key.
async fn get_all_content(State(state): State<AppState>) -> Json<ApiResponse<content::ContentByPage>> {
    let mapping = match content::read_all(&state.db).await {
        Ok(mapping) => mapping,
        Err(error) => {
            warn!(%error, "Serving empty content mapping");
            content::ContentByPage::new()
        }
    };
    ApiResponse::ok(mapping)
}

/// `GET /content/:page`: one page's active entries, empty when unknown.
async fn get_page_content(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Json<ApiResponse<content::PageContent>> {
    let mapping = match content::read_page(&state.db, &page).await {
        Ok(mapping) => mapping,
        Err(error) => {
            warn!(%error, page, "Serving empty page content");
            content::PageContent::new()
        }
    };
    ApiResponse::ok(mapping)
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    page: Option<u64>,
    limit: Option<u64>,
    status: Option<NewsStatus>,
}

/// `GET /news`: paginated listing, published only unless a status is asked
/// for explicitly.
async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Json<ApiResponse<news::PaginatedNews>> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);
    let status = query.status.or(Some(NewsStatus::Published));

    let listing = match news::list_news(&state.db, page, limit, status).await {
        Ok(listing) => listing,
        Err(error) => {
            warn!(%error, "Serving empty news listing");
            news::PaginatedNews::empty(page, limit)
        }
    };
    ApiResponse::ok(listing)
}

/// `GET /news/:slug`: a single published article.
async fn get_news(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, Error> {
    match news::get_news_by_slug(&state.db, &slug).await? {
        Some(article) => Ok(ApiResponse::ok(article).into_response()),
        None => Ok(not_found("Berita tidak ditemukan")),
    }
}

#[derive(Debug, Deserialize)]
struct KategoriQuery {
    kategori: Option<String>,
}

/// `GET /galleries`
async fn list_galleries(
    State(state): State<AppState>,
    Query(query): Query<KategoriQuery>,
) -> Json<ApiResponse<Vec<GalleryModel>>> {
    let items = match gallery::list_galleries(&state.db, query.kategori.as_deref()).await {
        Ok(items) => items,
        Err(error) => {
            warn!(%error, "Serving empty gallery listing");
            Vec::new()
        }
    };
    ApiResponse::ok(items)
}

/// `GET /events`
async fn list_events(State(state): State<AppState>) -> Json<ApiResponse<Vec<EventModel>>> {
    let items = match event::list_events(&state.db).await {
        Ok(items) => items,
        Err(error) => {
            warn!(%error, "Serving empty event listing");
            Vec::new()
        }
    };
    ApiResponse::ok(items)
}

/// `GET /organization`
async fn list_organization(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<OrganizationModel>>> {
    let members = match organization::list_members(&state.db).await {
        Ok(members) => members,
        Err(error) => {
            warn!(%error, "Serving empty organization listing");
            Vec::new()
        }
    };
    ApiResponse::ok(members)
}

/// `GET /services`
async fn list_services(State(state): State<AppState>) -> Json<ApiResponse<Vec<ServiceModel>>> {
    let items = match service::list_services(&state.db).await {
        Ok(items) => items,
        Err(error) => {
            warn!(%error, "Serving empty service listing");
            Vec::new()
        }
    };
    ApiResponse::ok(items)
}

/// `GET /documents`: active documents, optionally filtered by category.
async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<KategoriQuery>,
) -> Json<ApiResponse<Vec<DocumentModel>>> {
    let items = match document::list_documents(&state.db, query.kategori.as_deref()).await {
        Ok(items) => items,
        Err(error) => {
            warn!(%error, "Serving empty document listing");
            Vec::new()
        }
    };
    ApiResponse::ok(items)
}

/// `POST /documents/:id/download`: bumps the download counter.
async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DocumentModel>>, Error> {
    let updated = document::record_download(&state.db, id).await?;
    Ok(ApiResponse::ok(updated))
}

/// `POST /service-submissions`: citizen files a service request and gets a
/// tracking number back.
async fn create_submission(
    State(state): State<AppState>,
    Json(args): Json<submission::CreateSubmissionArgs>,
) -> Result<Json<ApiResponse<SubmissionModel>>, Error> {
    let created = submission::create_submission(&state.db, args).await?;
    Ok(ApiResponse::ok_with_message(
        created,
        "Pengajuan berhasil dikirim",
    ))
}

/// `GET /service-submissions/:nomor`: tracking by nomor pengajuan.
async fn track_submission(
    State(state): State<AppState>,
    Path(nomor): Path<String>,
) -> Result<Response, Error> {
    match submission::get_submission_by_nomor(&state.db, &nomor).await? {
        Some(found) => Ok(ApiResponse::ok(found).into_response()),
        None => Ok(not_found("Pengajuan tidak ditemukan")),
    }
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::failure(message)),
    )
        .into_response()
}
