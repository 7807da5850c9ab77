// src/handlers/auth.rs

use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use base64::{Engine, engine::general_purpose::STANDARD};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        auth::{CurrentUser, Session},
        i18n::Locale,
    },
    models::auth::{AvatarResponse, LoginPayload, LoginResponse, SessionResponse, User},
};

// =============================================================================
//  SESSÕES
// =============================================================================

// POST /api/sessions
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = "Sessões",
    responses(
        (status = 201, description = "Sessão aberta com a massa de dados inicial", body = SessionResponse)
    )
)]
pub async fn open_session(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let session = app_state
        .auth_service
        .open_session()
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(session)))
}

// DELETE /api/sessions
#[utoipa::path(
    delete,
    path = "/api/sessions",
    tag = "Sessões",
    responses(
        (status = 204, description = "Sessão descartada"),
        (status = 401, description = "Token inválido ou sessão inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn close_session(
    State(app_state): State<AppState>,
    locale: Locale,
    Session(session): Session,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .auth_service
        .close_session(session.id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  LOGIN / LOGOUT
// =============================================================================

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Autenticação",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login realizado", body = LoginResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Credenciais inválidas")
    ),
    security(("api_jwt" = []))
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    Session(session): Session,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let response = app_state
        .auth_service
        .login(&session, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(response))
}

// POST /api/auth/logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Autenticação",
    responses(
        (status = 204, description = "Usuário desconectado; os dados da sessão são mantidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn logout(
    State(app_state): State<AppState>,
    locale: Locale,
    Session(session): Session,
) -> Result<impl IntoResponse, ApiError> {
    session
        .write(|store| {
            store.logout();
            Ok(())
        })
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("🚪 Logout na sessão {}", session.id);
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  USUÁRIO LOGADO
// =============================================================================

// GET /api/users/me
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Usuários",
    responses(
        (status = 200, description = "Usuário logado", body = User),
        (status = 401, description = "Sem login")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(current: CurrentUser) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(current.user))
}

fn image_mime(bytes: &[u8]) -> Option<&'static str> {
    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    if bytes.starts_with(PNG) {
        Some("image/png")
    } else if bytes.starts_with(JPEG) {
        Some("image/jpeg")
    } else {
        None
    }
}

// PUT /api/users/me/avatar
#[utoipa::path(
    put,
    path = "/api/users/me/avatar",
    tag = "Usuários",
    request_body(content = Vec<u8>, content_type = "application/octet-stream", description = "Imagem PNG ou JPEG"),
    responses(
        (status = 200, description = "Avatar processado", body = AvatarResponse),
        (status = 415, description = "Formato de imagem não suportado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_avatar(
    State(app_state): State<AppState>,
    locale: Locale,
    current: CurrentUser,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let to_api = |app_err: AppError| app_err.to_api_error(&locale, &app_state.i18n_store);

    // O content-type do cliente não é confiável: olhamos os bytes
    let mime = image_mime(&body).ok_or_else(|| to_api(AppError::UnsupportedMedia))?;

    // 1. Ficha da atualização (a mais recente vence)
    let ticket = current
        .session
        .write(|store| store.begin_avatar_update())
        .map_err(to_api)?;

    // 2. Codificação fora do executor
    let data_uri = tokio::task::spawn_blocking(move || format!("data:{};base64,{}", mime, STANDARD.encode(&body)))
        .await
        .map_err(|e| to_api(anyhow::anyhow!("Falha na task do avatar: {}", e).into()))?;

    // 3. Aplica somente se nenhuma outra atualização começou depois
    let (applied, user) = current
        .session
        .write(|store| {
            let applied = store.finish_avatar_update(&ticket, data_uri)?;
            Ok((applied, store.require_user()?.clone()))
        })
        .map_err(to_api)?;

    if !applied {
        tracing::info!("🖼️ Avatar de {} descartado: há uma atualização mais recente", ticket.user_id);
    }
    Ok(Json(AvatarResponse { applied, user }))
}
