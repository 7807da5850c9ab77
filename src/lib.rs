// src/lib.rs

use axum::{
    Json, Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::session_guard;

/// Monta o router completo. Tudo abaixo de `/api`, exceto health, docs e a
/// abertura de sessão, passa pelo `session_guard`.
pub fn build_router(app_state: AppState) -> Router {
    // Abrir é público; descartar exige o token da própria sessão
    let session_routes = post(handlers::auth::open_session)
        .merge(delete(handlers::auth::close_session).layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_guard,
        )));

    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_guard,
        ));

    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/me/avatar", put(handlers::auth::update_avatar))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_guard,
        ));

    let navigation_routes = Router::new()
        .route("/navigation", put(handlers::navigation::navigate))
        .route("/navigation/menu", get(handlers::navigation::get_menu))
        .route("/pages/current", get(handlers::navigation::get_current_page))
        .route("/pages/{page_id}", get(handlers::navigation::get_page))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_guard,
        ));

    let portal_routes = Router::new()
        // Cadastros
        .route("/clients", post(handlers::crm::create_client))
        .route("/clients/{id}", delete(handlers::crm::delete_client))
        .route("/people", post(handlers::crm::create_person))
        .route("/partners", post(handlers::crm::create_partner))
        // Mural
        .route("/news", post(handlers::news::publish_news))
        .route("/news/{id}/read", post(handlers::news::mark_news_read))
        // Financeiro
        .route("/finance/summary", get(handlers::finance::get_summary))
        .route("/finance/records", post(handlers::finance::create_record))
        .route("/finance/records/{id}", delete(handlers::finance::delete_record))
        // Documentos
        .route("/documents", post(handlers::documents::create_document))
        .route("/documents/{id}", delete(handlers::documents::delete_document))
        // Processos
        .route("/deadlines", post(handlers::processes::create_deadline))
        .route("/processes/{id}/events", post(handlers::processes::add_process_event))
        // Agenda
        .route("/meeting-requests", post(handlers::agenda::request_meeting))
        // Área do cliente
        .route("/invoices/{id}/pay", post(handlers::accounting::pay_invoice))
        .route("/tax-guides/{id}/pay", post(handlers::accounting::pay_tax_guide))
        .route("/irpf-requests", post(handlers::accounting::request_irpf))
        // Audiências
        .route("/hearings", post(handlers::hearings::request_hearing))
        .route("/hearings/{id}/accept", post(handlers::hearings::accept_hearing))
        .route("/hearings/{id}/reject", post(handlers::hearings::reject_hearing))
        .route("/hearings/{id}/return", post(handlers::hearings::submit_hearing_return))
        // Chat
        .route("/chat/messages", post(handlers::chat::send_message))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/sessions", session_routes)
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api", navigation_routes.merge(portal_routes))
        .with_state(app_state)
}
