// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    db::SessionHandle,
    middleware::i18n::Locale,
    models::auth::User,
};

// O middleware em si: token -> sessão, guardada nos "extensions" da requisição
pub async fn session_guard(
    State(app_state): State<AppState>,
    locale: Locale,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let session = bearer
        .ok_or(AppError::InvalidToken)
        .and_then(|TypedHeader(Authorization(bearer))| app_state.auth_service.resolve_session(bearer.token()))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

// Extrator da sessão já resolvida pelo session_guard
pub struct Session(pub SessionHandle);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .map(Session)
            .ok_or(AppError::InvalidToken)
    }
}

/// Sessão com usuário logado. Sem login, a requisição para com 401.
pub struct CurrentUser {
    pub session: SessionHandle,
    pub user: User,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Session(session) = Session::from_request_parts(parts, state).await?;
        let user = session.read(|store| store.require_user().cloned())??;
        Ok(CurrentUser { session, user })
    }
}
