// src/handlers/navigation.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    db::SessionHandle,
    middleware::{auth::CurrentUser, i18n::Locale},
    models::{
        rbac::{MenuEntry, NavigatePayload},
        views::RenderedPage,
    },
    services::{
        access_policy,
        view_dispatcher::{self, RenderContext},
    },
};

/// Renderiza a página pedida. A cotação do dólar só é buscada para o My Holding,
/// e nunca com o lock da sessão preso.
async fn render_for(app_state: &AppState, session: &SessionHandle, requested: Option<&str>) -> Result<RenderedPage, AppError> {
    let requested = match requested {
        Some(page) => page.to_string(),
        None => session.read(|store| store.current_page().to_string())?,
    };

    // A decisão e a renderização usam a mesma leitura: se o usuário mudou no meio
    // da busca e a página passou a exigir cotação, busca e tenta de novo.
    let mut usd_quote = None;
    loop {
        let rendered = session.read(|store| -> Result<Option<RenderedPage>, AppError> {
            if usd_quote.is_none() && view_dispatcher::needs_usd_quote(store, &requested)? {
                return Ok(None);
            }
            view_dispatcher::render(store, &requested, RenderContext::now(usd_quote)).map(Some)
        })??;

        match rendered {
            Some(page) => return Ok(page),
            None => usd_quote = Some(app_state.rate_provider.current_rate().await),
        }
    }
}

// GET /api/navigation/menu
#[utoipa::path(
    get,
    path = "/api/navigation/menu",
    tag = "Navegação",
    responses(
        (status = 200, description = "Menu lateral do perfil logado", body = Vec<MenuEntry>),
        (status = 401, description = "Sem login")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_menu(current: CurrentUser) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(access_policy::menu_for(current.user.role)))
}

// PUT /api/navigation
#[utoipa::path(
    put,
    path = "/api/navigation",
    tag = "Navegação",
    request_body = NavigatePayload,
    responses(
        (status = 200, description = "Página atual alterada e renderizada", body = serde_json::Value),
        (status = 401, description = "Sem login")
    ),
    security(("api_jwt" = []))
)]
pub async fn navigate(
    State(app_state): State<AppState>,
    locale: Locale,
    current: CurrentUser,
    Json(payload): Json<NavigatePayload>,
) -> Result<impl IntoResponse, ApiError> {
    current
        .session
        .write(|store| {
            store.navigate(&payload.page);
            Ok(())
        })
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let page = render_for(&app_state, &current.session, None)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(page))
}

// GET /api/pages/current
#[utoipa::path(
    get,
    path = "/api/pages/current",
    tag = "Navegação",
    responses(
        (status = 200, description = "Página atual da sessão", body = serde_json::Value),
        (status = 401, description = "Sem login")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_current_page(
    State(app_state): State<AppState>,
    locale: Locale,
    current: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let page = render_for(&app_state, &current.session, None)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(page))
}

// GET /api/pages/{page_id}
#[utoipa::path(
    get,
    path = "/api/pages/{page_id}",
    tag = "Navegação",
    params(
        ("page_id" = String, Path, description = "Id da página (ex: finance)")
    ),
    responses(
        (status = 200, description = "Página renderizada; fora do menu vira 'under-construction'", body = serde_json::Value),
        (status = 401, description = "Sem login")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_page(
    State(app_state): State<AppState>,
    locale: Locale,
    current: CurrentUser,
    Path(page_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let page = render_for(&app_state, &current.session, Some(&page_id))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(page))
}
