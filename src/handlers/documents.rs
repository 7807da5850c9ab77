// src/handlers/documents.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{DocumentsPage, RequirePage},
    },
    models::documents::{ClientDocument, NewDocumentPayload},
    services::document_service,
};

// POST /api/documents
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "Documentos",
    request_body = NewDocumentPayload,
    responses(
        (status = 201, description = "Documento incluído no topo da lista", body = ClientDocument),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_document(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<DocumentsPage>,
    Json(payload): Json<NewDocumentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let doc = document_service::build_document(payload);
    let created = guard
        .session
        .write(|store| Ok(store.add_document(doc).clone()))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("📁 Documento {} incluído por {}", created.id, guard.user.name);
    Ok((StatusCode::CREATED, Json(created)))
}

// DELETE /api/documents/{id}
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "Documentos",
    params(
        ("id" = String, Path, description = "ID do documento")
    ),
    responses(
        (status = 204, description = "Documento removido"),
        (status = 404, description = "Documento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_document(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<DocumentsPage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    guard
        .session
        .write(|store| store.delete_document(&id))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
