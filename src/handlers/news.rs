// src/handlers/news.rs

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
        rbac::{NewsPage, RequirePage},
    },
    models::news::{NewNewsPayload, NewsItem},
    services::news_service,
};

// POST /api/news
#[utoipa::path(
    post,
    path = "/api/news",
    tag = "Mural",
    request_body = NewNewsPayload,
    responses(
        (status = 201, description = "Comunicado publicado no topo do mural", body = NewsItem),
        (status = 400, description = "Título ou conteúdo vazio"),
        (status = 403, description = "Perfil sem permissão para publicar")
    ),
    security(("api_jwt" = []))
)]
pub async fn publish_news(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<NewsPage>,
    Json(payload): Json<NewNewsPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let item = guard
        .session
        .write(|store| news_service::publish(store, payload))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("📰 Comunicado {} publicado por {}", item.id, guard.user.name);
    Ok((StatusCode::CREATED, Json(item)))
}

// POST /api/news/{id}/read
#[utoipa::path(
    post,
    path = "/api/news/{id}/read",
    tag = "Mural",
    params(
        ("id" = String, Path, description = "ID do comunicado")
    ),
    responses(
        (status = 200, description = "Leitura registrada (idempotente)", body = NewsItem),
        (status = 403, description = "Perfil sem acesso ao mural interno"),
        (status = 404, description = "Comunicado não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn mark_news_read(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<NewsPage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let item = guard
        .session
        .write(|store| store.mark_news_read(&id).cloned())
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(item))
}
