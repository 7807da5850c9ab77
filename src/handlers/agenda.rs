// src/handlers/agenda.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{AgendaPage, RequirePage},
    },
    models::agenda::{MeetingRequest, NewMeetingRequestPayload},
    services::agenda_service,
};

// POST /api/meeting-requests
#[utoipa::path(
    post,
    path = "/api/meeting-requests",
    tag = "Agenda",
    request_body = NewMeetingRequestPayload,
    responses(
        (status = 201, description = "Solicitação registrada como PENDING", body = MeetingRequest),
        (status = 400, description = "Campos obrigatórios ausentes")
    ),
    security(("api_jwt" = []))
)]
pub async fn request_meeting(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<AgendaPage>,
    Json(payload): Json<NewMeetingRequestPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let request = guard
        .session
        .write(|store| agenda_service::request_meeting(store, payload))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("📅 Reunião solicitada por {}: {}", guard.user.name, request.subject);
    Ok((StatusCode::CREATED, Json(request)))
}
