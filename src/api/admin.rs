//! Protected back-office endpoints. Everything here sits behind the bearer
//! token middleware wired up in `build_router`.

use super::{ApiResponse, AppState};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post, put},
};
use serde::Deserialize;

use crate::{
    core::{
        auth, content, document, event, gallery, news, organization, service, settings, stats,
        submission,
    },
    entities::{
        admin::Model as AdminModel, document::Model as DocumentModel, event::Model as EventModel,
        gallery::Model as GalleryModel, news::Model as NewsModel,
        organization::Model as OrganizationModel, service::Model as ServiceModel,
        settings::Model as SettingsModel, submission::Model as SubmissionModel,
        submission::SubmissionStatus, website_content::Model as ContentModel,
        website_section::Model as SectionModel,
    },
    errors::Error,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/website-content", get(list_content).post(create_content))
        .route(
            "/website-content/:id",
            put(update_content).delete(delete_content),
        )
        .route("/website-sections", get(list_sections))
        .route("/submissions", get(list_submissions))
        .route(
            "/service-submissions/:id/status",
            put(update_submission_status),
        )
        .route("/stats", get(get_stats))
        .route("/settings", put(update_settings))
        .route("/admins", post(create_admin_account))
        .route("/news", post(create_news))
        .route("/news/:id", put(update_news).delete(delete_news))
        .route("/galleries", post(create_gallery))
        .route("/galleries/:id", put(update_gallery).delete(delete_gallery))
        .route("/events", post(create_event))
        .route("/events/:id", put(update_event).delete(delete_event))
        .route("/organization", post(create_member))
        .route("/organization/:id", put(update_member).delete(delete_member))
        .route("/services", post(create_service))
        .route("/services/:id", put(update_service).delete(delete_service))
        .route("/documents", post(create_document))
        .route("/documents/:id", put(update_document).delete(delete_document))
}

// ---------------------------------------------------------------------------
// Content editor
// ---------------------------------------------------------------------------

/// `GET /admin/website-content`: all entries through the editor's filter.
async fn list_content(
    State(state): State<AppState>,
    Query(filter): Query<content::ContentFilter>,
) -> Result<Json<ApiResponse<Vec<ContentModel>>>, Error> {
    let entries = content::list_content(&state.db).await?;
    let filtered = content::filter_entries(&entries, &filter);
    Ok(ApiResponse::ok(filtered))
}

/// `POST /admin/website-content`
async fn create_content(
    State(state): State<AppState>,
    Json(args): Json<content::CreateContentArgs>,
) -> Result<Json<ApiResponse<ContentModel>>, Error> {
    let created = content::create_content(&state.db, args).await?;
    Ok(ApiResponse::ok_with_message(created, "Konten berhasil dibuat"))
}

/// `PUT /admin/website-content/:id`
async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<content::UpdateContentArgs>,
) -> Result<Json<ApiResponse<ContentModel>>, Error> {
    let updated = content::update_content(&state.db, id, args).await?;
    Ok(ApiResponse::ok_with_message(updated, "Konten berhasil disimpan"))
}

/// `DELETE /admin/website-content/:id`
async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, Error> {
    content::delete_content(&state.db, id).await?;
    Ok(ApiResponse::ok_with_message((), "Konten berhasil dihapus"))
}

/// `GET /admin/website-sections`
async fn list_sections(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SectionModel>>>, Error> {
    let sections = content::list_sections(&state.db).await?;
    Ok(ApiResponse::ok(sections))
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

/// `GET /admin/submissions`: newest first.
async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SubmissionModel>>>, Error> {
    let items = submission::list_submissions(&state.db).await?;
    Ok(ApiResponse::ok(items))
}

#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: SubmissionStatus,
    #[serde(default)]
    catatan: Option<String>,
}

/// `PUT /admin/service-submissions/:id/status`
async fn update_submission_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<SubmissionModel>>, Error> {
    let updated =
        submission::update_submission_status(&state.db, id, request.status, request.catatan)
            .await?;
    Ok(ApiResponse::ok_with_message(updated, "Status pengajuan diperbarui"))
}

// ---------------------------------------------------------------------------
// Dashboard & profile
// ---------------------------------------------------------------------------

/// `GET /admin/stats`
async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<stats::Statistics>>, Error> {
    let statistics = stats::get_statistics(&state.db).await?;
    Ok(ApiResponse::ok(statistics))
}

/// `PUT /admin/settings`
async fn update_settings(
    State(state): State<AppState>,
    Json(args): Json<settings::UpdateSettingsArgs>,
) -> Result<Json<ApiResponse<SettingsModel>>, Error> {
    let updated = settings::update_settings(&state.db, args).await?;
    Ok(ApiResponse::ok_with_message(updated, "Pengaturan berhasil disimpan"))
}

#[derive(Debug, Deserialize)]
struct CreateAdminRequest {
    nama: String,
    email: String,
    password: String,
}

/// `POST /admin/admins`
async fn create_admin_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAdminRequest>,
) -> Result<Json<ApiResponse<AdminModel>>, Error> {
    let created =
        auth::create_admin(&state.db, request.nama, request.email, request.password).await?;
    Ok(ApiResponse::ok_with_message(created, "Admin berhasil dibuat"))
}

// ---------------------------------------------------------------------------
// Collection CRUD
// ---------------------------------------------------------------------------

/// `POST /admin/news`
async fn create_news(
    State(state): State<AppState>,
    Json(args): Json<news::CreateNewsArgs>,
) -> Result<Json<ApiResponse<NewsModel>>, Error> {
    let created = news::create_news(&state.db, args).await?;
    Ok(ApiResponse::ok(created))
}

/// `PUT /admin/news/:id`
async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<news::UpdateNewsArgs>,
) -> Result<Json<ApiResponse<NewsModel>>, Error> {
    let updated = news::update_news(&state.db, id, args).await?;
    Ok(ApiResponse::ok(updated))
}

/// `DELETE /admin/news/:id`
async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, Error> {
    news::delete_news(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}

/// `POST /admin/galleries`
async fn create_gallery(
    State(state): State<AppState>,
    Json(args): Json<gallery::CreateGalleryArgs>,
) -> Result<Json<ApiResponse<GalleryModel>>, Error> {
    let created = gallery::create_gallery(&state.db, args).await?;
    Ok(ApiResponse::ok(created))
}

/// `PUT /admin/galleries/:id`
async fn update_gallery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<gallery::UpdateGalleryArgs>,
) -> Result<Json<ApiResponse<GalleryModel>>, Error> {
    let updated = gallery::update_gallery(&state.db, id, args).await?;
    Ok(ApiResponse::ok(updated))
}

/// `DELETE /admin/galleries/:id`
async fn delete_gallery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, Error> {
    gallery::delete_gallery(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}

/// `POST /admin/events`
async fn create_event(
    State(state): State<AppState>,
    Json(args): Json<event::CreateEventArgs>,
) -> Result<Json<ApiResponse<EventModel>>, Error> {
    let created = event::create_event(&state.db, args).await?;
    Ok(ApiResponse::ok(created))
}

/// `PUT /admin/events/:id`
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<event::UpdateEventArgs>,
) -> Result<Json<ApiResponse<EventModel>>, Error> {
    let updated = event::update_event(&state.db, id, args).await?;
    Ok(ApiResponse::ok(updated))
}

/// `DELETE /admin/events/:id`
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, Error> {
    event::delete_event(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}

/// `POST /admin/organization`
async fn create_member(
    State(state): State<AppState>,
    Json(args): Json<organization::CreateMemberArgs>,
) -> Result<Json<ApiResponse<OrganizationModel>>, Error> {
    let created = organization::create_member(&state.db, args).await?;
    Ok(ApiResponse::ok(created))
}

/// `PUT /admin/organization/:id`
async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<organization::UpdateMemberArgs>,
) -> Result<Json<ApiResponse<OrganizationModel>>, Error> {
    let updated = organization::update_member(&state.db, id, args).await?;
    Ok(ApiResponse::ok(updated))
}

/// `DELETE /admin/organization/:id`
async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, Error> {
    organization::delete_member(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}

/// `POST /admin/services`
async fn create_service(
    State(state): State<AppState>,
    Json(args): Json<service::CreateServiceArgs>,
) -> Result<Json<ApiResponse<ServiceModel>>, Error> {
    let created = service::create_service(&state.db, args).await?;
    Ok(ApiResponse::ok(created))
}

/// `PUT /admin/services/:id`
async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<service::UpdateServiceArgs>,
) -> Result<Json<ApiResponse<ServiceModel>>, Error> {
    let updated = service::update_service(&state.db, id, args).await?;
    Ok(ApiResponse::ok(updated))
}

/// `DELETE /admin/services/:id`: submissions for the service go with it.
async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, Error> {
    service::delete_service(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}

/// `POST /admin/documents`
async fn create_document(
    State(state): State<AppState>,
    Json(args): Json<document::CreateDocumentArgs>,
) -> Result<Json<ApiResponse<DocumentModel>>, Error> {
    let created = document::create_document(&state.db, args).await?;
    Ok(ApiResponse::ok(created))
}

/// `PUT /admin/documents/:id`
async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<document::UpdateDocumentArgs>,
) -> Result<Json<ApiResponse<DocumentModel>>, Error> {
    let updated = document::update_document(&state.db, id, args).await?;
    Ok(ApiResponse::ok(updated))
}

/// `DELETE /admin/documents/:id`
async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, Error> {
    document::delete_document(&state.db, id).await?;
    Ok(ApiResponse::ok(()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::auth::{LoginOutcome, TokenKeys};
    use crate::test_utils::setup_test_db;
    use std::sync::Arc;

    async fn test_state() -> crate::errors::Result<AppState> {
        Ok(AppState {
            db: setup_test_db().await?,
            keys: Arc::new(TokenKeys::new("test-secret", 3600)),
        })
    }

    #[tokio::test]
    async fn test_create_admin_endpoint_provisions_login() -> crate::errors::Result<()> {
        let state = test_state().await?;

        let Json(response) = create_admin_account(
            State(state.clone()),
            Json(CreateAdminRequest {
                nama: "Petugas Desa".to_string(),
                email: "petugas@desa.go.id".to_string(),
                password: "rahasia123".to_string(),
            }),
        )
        .await?;

        assert!(response.success);
        assert_eq!(response.data.unwrap().email, "petugas@desa.go.id");

        let outcome =
            auth::login(&state.db, &state.keys, "petugas@desa.go.id", "rahasia123").await?;
        match outcome {
            LoginOutcome::Success(success) => assert!(!success.demo),
            LoginOutcome::InvalidCredentials => panic!("provisioned admin should log in"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_admin_endpoint_rejects_empty_email() -> crate::errors::Result<()> {
        let state = test_state().await?;

        let result = create_admin_account(
            State(state),
            Json(CreateAdminRequest {
                nama: "Petugas Desa".to_string(),
                email: "  ".to_string(),
                password: "rahasia123".to_string(),
            }),
        )
        .await;

        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }
}
