// src/handlers/processes.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{ProcessesPage, RequirePage},
    },
    models::{
        processes::{NewDeadlinePayload, NewProcessEventPayload, Process, ProcessDeadline},
        rbac::PageId,
    },
    services::{access_policy, process_service},
};

// Ver a página de processos não basta: só quem edita pode lançar prazos e andamentos
fn require_editor(guard: &RequirePage<ProcessesPage>) -> Result<(), AppError> {
    if access_policy::can_edit_processes(guard.user.role) {
        Ok(())
    } else {
        Err(AppError::ForbiddenPage(PageId::Processes.as_str().to_string()))
    }
}

// POST /api/deadlines
#[utoipa::path(
    post,
    path = "/api/deadlines",
    tag = "Processos",
    request_body = NewDeadlinePayload,
    responses(
        (status = 201, description = "Prazo cadastrado", body = ProcessDeadline),
        (status = 400, description = "Processo, assunto, data ou destinatários ausentes"),
        (status = 403, description = "Perfil sem permissão de edição")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_deadline(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ProcessesPage>,
    Json(payload): Json<NewDeadlinePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let deadline = require_editor(&guard)
        .and_then(|_| guard.session.write(|store| process_service::create_deadline(store, payload)))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(deadline)))
}

// POST /api/processes/{id}/events
#[utoipa::path(
    post,
    path = "/api/processes/{id}/events",
    tag = "Processos",
    params(
        ("id" = String, Path, description = "ID do processo")
    ),
    request_body = NewProcessEventPayload,
    responses(
        (status = 201, description = "Andamento registrado; devolve o processo atualizado", body = Process),
        (status = 404, description = "Processo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_process_event(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ProcessesPage>,
    Path(id): Path<String>,
    Json(payload): Json<NewProcessEventPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let process = require_editor(&guard)
        .and_then(|_| guard.session.write(|store| process_service::add_event(store, &id, payload)))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("📌 Andamento incluído no processo {}", process.id);
    Ok((StatusCode::CREATED, Json(process)))
}
