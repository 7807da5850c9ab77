// src/handlers/chat.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{ChatPage, RequirePage},
    },
    models::chat::{ChatMessage, SendChatPayload},
    services::chat_service,
};

// POST /api/chat/messages
#[utoipa::path(
    post,
    path = "/api/chat/messages",
    tag = "Chat",
    request_body = SendChatPayload,
    responses(
        (status = 201, description = "Mensagem enviada e resposta automática", body = Vec<ChatMessage>),
        (status = 400, description = "Mensagem vazia")
    ),
    security(("api_jwt" = []))
)]
pub async fn send_message(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ChatPage>,
    Json(payload): Json<SendChatPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = guard
        .session
        .write(|store| chat_service::send(store, payload))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(messages)))
}
