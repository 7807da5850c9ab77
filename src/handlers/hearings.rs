// src/handlers/hearings.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{HearingPanelPage, HearingsManagePage, RequirePage},
    },
    models::hearings::{HearingRequest, HearingReturnPayload, NewHearingPayload},
    services::hearing_service,
};

// =============================================================================
//  GESTÃO (ADVOGADOS E SÓCIOS)
// =============================================================================

// POST /api/hearings
#[utoipa::path(
    post,
    path = "/api/hearings",
    tag = "Audiências",
    request_body = NewHearingPayload,
    responses(
        (status = 201, description = "Audiência solicitada (SOLICITADA)", body = HearingRequest),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 404, description = "Processo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn request_hearing(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<HearingsManagePage>,
    Json(payload): Json<NewHearingPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let hearing = guard
        .session
        .write(|store| hearing_service::request(store, &guard.user.id, payload))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(hearing)))
}

// =============================================================================
//  PAINEL DO AUDIENCISTA
// =============================================================================

// POST /api/hearings/{id}/accept
#[utoipa::path(
    post,
    path = "/api/hearings/{id}/accept",
    tag = "Audiências",
    params(
        ("id" = String, Path, description = "ID da audiência")
    ),
    responses(
        (status = 200, description = "Audiência agendada; despesa BLOCKED criada", body = HearingRequest),
        (status = 409, description = "Audiência não está SOLICITADA")
    ),
    security(("api_jwt" = []))
)]
pub async fn accept_hearing(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<HearingPanelPage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let hearing = guard
        .session
        .write(|store| hearing_service::accept(store, &id, &guard.user.id))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(hearing))
}

// POST /api/hearings/{id}/reject
#[utoipa::path(
    post,
    path = "/api/hearings/{id}/reject",
    tag = "Audiências",
    params(
        ("id" = String, Path, description = "ID da audiência")
    ),
    responses(
        (status = 200, description = "Solicitação recusada e removida", body = HearingRequest),
        (status = 409, description = "Audiência não está SOLICITADA")
    ),
    security(("api_jwt" = []))
)]
pub async fn reject_hearing(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<HearingPanelPage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = guard
        .session
        .write(|store| hearing_service::reject(store, &id))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(removed))
}

// POST /api/hearings/{id}/return
#[utoipa::path(
    post,
    path = "/api/hearings/{id}/return",
    tag = "Audiências",
    params(
        ("id" = String, Path, description = "ID da audiência")
    ),
    request_body = HearingReturnPayload,
    responses(
        (status = 200, description = "Audiência concluída; despesa liberada (PENDING)", body = HearingRequest),
        (status = 400, description = "Resumo ou ata ausentes"),
        (status = 409, description = "Audiência não agendada para este audiencista")
    ),
    security(("api_jwt" = []))
)]
pub async fn submit_hearing_return(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<HearingPanelPage>,
    Path(id): Path<String>,
    Json(payload): Json<HearingReturnPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let hearing = guard
        .session
        .write(|store| hearing_service::submit_return(store, &id, &guard.user.id, payload))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(hearing))
}
