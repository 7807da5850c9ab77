// src/handlers/crm.rs

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
    db::SessionHandle,
    middleware::{
        i18n::Locale,
        rbac::{ClientsPage, PartnersPage, PeoplePage, RequirePage},
    },
    models::{
        auth::{NewUserPayload, User},
        crm::{Client, NewClientPayload},
        rbac::{PageId, Role},
    },
    services::{access_policy, crm_service},
};

// A página de clientes do parceiro externo é só leitura
fn require_manager(guard: &RequirePage<ClientsPage>) -> Result<(), AppError> {
    if access_policy::can_manage_clients(guard.user.role) {
        Ok(())
    } else {
        Err(AppError::ForbiddenPage(PageId::Clients.as_str().to_string()))
    }
}

// =============================================================================
//  CLIENTES
// =============================================================================

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clientes",
    request_body = NewClientPayload,
    responses(
        (status = 201, description = "Cliente cadastrado (fim da lista)", body = Client),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Perfil sem permissão para gerenciar clientes")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ClientsPage>,
    Json(payload): Json<NewClientPayload>,
) -> Result<impl IntoResponse, ApiError> {
    require_manager(&guard).map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let client = crm_service::build_client(payload);
    let created = guard
        .session
        .write(|store| Ok(store.add_client(client).clone()))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("👤 Cliente {} cadastrado por {}", created.id, guard.user.name);
    Ok((StatusCode::CREATED, Json(created)))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(
        ("id" = String, Path, description = "ID do cliente")
    ),
    responses(
        (status = 204, description = "Cliente removido (processos e faturas continuam)"),
        (status = 403, description = "Perfil sem permissão para gerenciar clientes"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ClientsPage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_manager(&guard)
        .and_then(|_| guard.session.write(|store| store.delete_client(&id)))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("🗑️ Cliente {} removido por {}", id, guard.user.name);
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PESSOAS E PARCEIROS
// =============================================================================

async fn register_user(
    app_state: &AppState,
    locale: &Locale,
    session: &SessionHandle,
    payload: NewUserPayload,
    forced_role: Option<Role>,
) -> Result<User, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(locale, &app_state.i18n_store))?;

    let user = crm_service::build_user(payload, forced_role)
        .await
        .map_err(|app_err| app_err.to_api_error(locale, &app_state.i18n_store))?;

    let created = session
        .write(|store| store.add_user(user).cloned())
        .map_err(|app_err| app_err.to_api_error(locale, &app_state.i18n_store))?;

    tracing::info!("🆕 Usuário {} ({}) cadastrado", created.email, created.role);
    Ok(created)
}

// POST /api/people
#[utoipa::path(
    post,
    path = "/api/people",
    tag = "Pessoas",
    request_body = NewUserPayload,
    responses(
        (status = 201, description = "Usuário cadastrado", body = User),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_person(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<PeoplePage>,
    Json(payload): Json<NewUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let created = register_user(&app_state, &locale, &guard.session, payload, None).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// POST /api/partners
#[utoipa::path(
    post,
    path = "/api/partners",
    tag = "Pessoas",
    request_body = NewUserPayload,
    responses(
        (status = 201, description = "Parceiro externo cadastrado", body = User),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_partner(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<PartnersPage>,
    Json(payload): Json<NewUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let created = register_user(&app_state, &locale, &guard.session, payload, Some(Role::ExternalPartner)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
