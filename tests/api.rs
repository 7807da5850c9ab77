// tests/api.rs

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use portal_backend::{
    build_router,
    config::{AppState, Config},
    services::rate_provider::RateSource,
};

// --- Fontes de cotação ---

struct FixedRate(Decimal);

#[async_trait]
impl RateSource for FixedRate {
    async fn fetch_usd_brl(&self) -> anyhow::Result<Decimal> {
        Ok(self.0)
    }
}

struct Offline;

#[async_trait]
impl RateSource for Offline {
    async fn fetch_usd_brl(&self) -> anyhow::Result<Decimal> {
        Err(anyhow::anyhow!("sem rede"))
    }
}

// --- Helpers ---

fn config() -> Config {
    Config {
        addr: "127.0.0.1:0".into(),
        jwt_secret: "segredo-de-teste".into(),
        session_ttl_hours: 1,
        max_sessions: 64,
        rate_provider_url: "http://localhost/nao-usado".into(),
        rate_fallback: Decimal::new(520, 2),
        rate_timeout: None,
    }
}

fn app_with(source: Arc<dyn RateSource>) -> Router {
    build_router(AppState::with_rate_source(&config(), source))
}

fn app() -> Router {
    app_with(Arc::new(FixedRate(Decimal::new(5, 0))))
}

async fn call(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn open_session(app: &Router) -> String {
    let (status, body) = call(app, Method::POST, "/api/sessions", None, None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

async fn login_as(app: &Router, email: &str) -> String {
    let token = open_session(app).await;
    let (status, _) = call(
        app,
        Method::POST,
        "/api/auth/login",
        Some(&token),
        Some(json!({ "email": email, "password": "qualquer" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    token
}

const PARTNER: &str = "gustavomosinho@alcidesemosinho.com";
const LAWYER: &str = "biancaporto@alcidesemosinho.com";
const SECRETARY: &str = "secretaria@alcidesemosinho.com";
const CLIENT: &str = "cliente@gmail.com";
const HEARING_LAWYER: &str = "audiencia@adv.com";
const EXTERNAL_PARTNER: &str = "parceiro@externo.com";

// =============================================================================
//  SESSÕES E AUTENTICAÇÃO
// =============================================================================

#[tokio::test]
async fn health_and_docs_are_public() {
    let app = app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, doc) = call(&app, Method::GET, "/api/docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/hearings/{id}/accept"].is_object());
    assert!(doc["components"]["securitySchemes"]["api_jwt"].is_object());
}

#[tokio::test]
async fn guarded_routes_require_a_token() {
    let app = app();

    let (status, body) = call(&app, Method::GET, "/api/navigation/menu", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "invalid_token");

    let (status, _) = call(&app, Method::GET, "/api/navigation/menu", Some("lixo"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_returns_landing_page_and_menu() {
    let app = app();
    let token = open_session(&app).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(&token),
        Some(json!({ "email": HEARING_LAWYER, "password": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "13");
    assert_eq!(body["landingPage"], "hearing-panel");
    assert_eq!(body["menu"].as_array().unwrap().len(), 4);
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn unknown_email_is_rejected_in_the_client_language() {
    let app = app();
    let token = open_session(&app).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "email": "ninguem@x.com", "password": "x" }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "invalid_credentials");
    assert_eq!(body["error"], "Invalid credentials. Try one of the test e-mails.");
}

#[tokio::test]
async fn logout_keeps_the_session_but_drops_the_user() {
    let app = app();
    let token = login_as(&app, PARTNER).await;

    let (status, _) = call(&app, Method::POST, "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app, Method::GET, "/api/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "not_authenticated");
}

#[tokio::test]
async fn closed_session_token_stops_working() {
    let app = app();
    let token = login_as(&app, PARTNER).await;

    let (status, _) = call(&app, Method::DELETE, "/api/sessions", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app, Method::GET, "/api/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "session_not_found");
}

#[tokio::test]
async fn sessions_do_not_share_mutations() {
    let app = app();
    let first = login_as(&app, PARTNER).await;
    let second = login_as(&app, PARTNER).await;

    let (status, _) = call(&app, Method::DELETE, "/api/clients/99", Some(&first), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, page) = call(&app, Method::GET, "/api/pages/clients", Some(&first), None).await;
    assert_eq!(page["clients"].as_array().unwrap().len(), 1);

    let (_, page) = call(&app, Method::GET, "/api/pages/clients", Some(&second), None).await;
    assert_eq!(page["clients"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn session_registry_refuses_new_sessions_when_full() {
    let app = build_router(AppState::with_rate_source(
        &Config { max_sessions: 2, ..config() },
        Arc::new(FixedRate(Decimal::new(5, 0))),
    ));
    let first = open_session(&app).await;
    open_session(&app).await;

    let (status, body) = call(&app, Method::POST, "/api/sessions", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "session_limit_reached");

    let (status, _) = call(&app, Method::DELETE, "/api/sessions", Some(&first), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    open_session(&app).await;
}

// =============================================================================
//  NAVEGAÇÃO
// =============================================================================

#[tokio::test]
async fn navigation_renders_the_current_page() {
    let app = app();
    let token = login_as(&app, PARTNER).await;

    let (status, page) = call(&app, Method::GET, "/api/pages/current", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pageId"], "dashboard");
    assert_eq!(page["view"], "internal-dashboard");

    let (status, page) = call(&app, Method::PUT, "/api/navigation", Some(&token), Some(json!({ "page": "finance" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["view"], "finance");

    let (_, page) = call(&app, Method::GET, "/api/pages/current", Some(&token), None).await;
    assert_eq!(page["pageId"], "finance");
}

#[tokio::test]
async fn page_outside_the_menu_is_under_construction() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    let (status, page) = call(&app, Method::GET, "/api/pages/finance", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["view"], "under-construction");
    assert_eq!(page["message"], "O módulo \"finance\" será implementado em breve.");
}

#[tokio::test]
async fn my_holding_uses_the_live_rate() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    let (status, page) = call(&app, Method::GET, "/api/pages/my-holding", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["usdQuote"]["source"], "LIVE");
    assert_eq!(page["assetsValueUsd"].as_f64(), Some(1_000_000.0));
}

#[tokio::test]
async fn my_holding_falls_back_when_the_rate_source_fails() {
    let app = app_with(Arc::new(Offline));
    let token = login_as(&app, CLIENT).await;

    let (status, page) = call(&app, Method::GET, "/api/pages/my-holding", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["usdQuote"]["source"], "FALLBACK");
    assert_eq!(page["usdQuote"]["rate"].as_f64(), Some(5.2));
}

// =============================================================================
//  AÇÕES COM GUARDA DE PÁGINA
// =============================================================================

#[tokio::test]
async fn finance_summary_is_guarded_by_page() {
    let app = app();

    let partner = login_as(&app, PARTNER).await;
    let (status, summary) = call(&app, Method::GET, "/api/finance/summary", Some(&partner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["income"].as_f64(), Some(23_200.0));
    assert_eq!(summary["expense"].as_f64(), Some(30_700.0));
    assert_eq!(summary["balance"].as_f64(), Some(-7_500.0));

    let secretary = login_as(&app, SECRETARY).await;
    let (status, body) = call(&app, Method::GET, "/api/finance/summary", Some(&secretary), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "forbidden_page");
    assert_eq!(body["details"]["page"], "finance");
}

#[tokio::test]
async fn invalid_record_returns_field_details() {
    let app = app();
    let token = login_as(&app, PARTNER).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/finance/records",
        Some(&token),
        Some(json!({ "type": "INCOME", "category": "", "amount": -1.0, "date": "2024-06-01" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation_error");
    assert!(body["details"]["category"].is_array());
    assert!(body["details"]["amount"].is_array());
}

#[tokio::test]
async fn client_pays_an_invoice() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    let (status, invoice) = call(&app, Method::POST, "/api/invoices/inv1/pay", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(invoice["status"], "PAID");

    let (status, body) = call(&app, Method::POST, "/api/invoices/nao-existe/pay", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn client_cannot_pay_another_clients_tax_guide() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    // g1 é do cliente 99
    let (status, body) = call(&app, Method::POST, "/api/tax-guides/g1/pay", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"]["entity"], "tax_guide");

    let (status, guide) = call(&app, Method::POST, "/api/tax-guides/g3/pay", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(guide["status"], "PAGO");
}

#[tokio::test]
async fn irpf_request_defaults_to_the_current_utc_year() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    let (status, request) = call(&app, Method::POST, "/api/irpf-requests", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(request["year"], Utc::now().year());
    assert_eq!(request["status"], "EM_ANALISE");
}

#[tokio::test]
async fn external_partner_sees_clients_but_cannot_manage_them() {
    let app = app();
    let token = login_as(&app, EXTERNAL_PARTNER).await;

    let (status, page) = call(&app, Method::GET, "/api/pages/clients", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["canManage"], false);

    let (status, body) = call(&app, Method::DELETE, "/api/clients/99", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["details"]["page"], "clients");

    let new_client = json!({ "type": "PF", "name": "Indicado Novo", "document": "123", "email": "novo@mail.com" });
    let (status, _) = call(&app, Method::POST, "/api/clients", Some(&token), Some(new_client)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let partner = login_as(&app, PARTNER).await;
    let (status, _) = call(&app, Method::DELETE, "/api/clients/99", Some(&partner), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn only_partners_and_admins_post_news() {
    let app = app();

    let lawyer = login_as(&app, LAWYER).await;
    let payload = json!({ "title": "Recesso", "content": "O escritório fecha na sexta-feira." });
    let (status, _) = call(&app, Method::POST, "/api/news", Some(&lawyer), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let partner = login_as(&app, PARTNER).await;
    let (status, item) = call(&app, Method::POST, "/api/news", Some(&partner), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["author"], "Gustavo Mosinho");

    let id = item["id"].as_str().unwrap();
    let (status, read) = call(&app, Method::POST, &format!("/api/news/{}/read", id), Some(&partner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["readBy"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn clients_cannot_mark_internal_news_as_read() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    let (status, body) = call(&app, Method::POST, "/api/news/n1/read", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "forbidden_page");
}

// =============================================================================
//  AUDIÊNCIAS
// =============================================================================

#[tokio::test]
async fn hearing_flow_from_acceptance_to_return() {
    let app = app();
    let audiencista = login_as(&app, HEARING_LAWYER).await;

    let (status, hearing) = call(&app, Method::POST, "/api/hearings/h1/accept", Some(&audiencista), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hearing["status"], "AGENDADA");
    assert_eq!(hearing["audiencistaId"], "13");

    // Aceitar de novo não é uma transição válida
    let (status, body) = call(&app, Method::POST, "/api/hearings/h1/accept", Some(&audiencista), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "invalid_transition");

    let (status, hearing) = call(
        &app,
        Method::POST,
        "/api/hearings/h1/return",
        Some(&audiencista),
        Some(json!({ "summary": "Acordo homologado.", "outcome": "Acordo", "minutesUrl": "ata-h1.pdf" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hearing["status"], "CONCLUIDA");
    assert_eq!(hearing["minutesUrl"], "ata-h1.pdf");

    let (_, panel) = call(&app, Method::GET, "/api/pages/hearing-panel", Some(&audiencista), None).await;
    assert!(panel["pending"].as_array().unwrap().is_empty());
    assert!(panel["mySchedule"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn lawyers_request_hearings_but_cannot_accept_them() {
    let app = app();
    let lawyer = login_as(&app, LAWYER).await;

    let (status, hearing) = call(
        &app,
        Method::POST,
        "/api/hearings",
        Some(&lawyer),
        Some(json!({
            "processId": "p1",
            "date": "2024-07-01",
            "time": "10:00",
            "location": "2ª VC/RJ",
            "mode": "VIRTUAL",
            "type": "CONCILIACAO",
            "value": 250.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", hearing);
    assert_eq!(hearing["status"], "SOLICITADA");
    assert_eq!(hearing["requesterId"], "5");

    let id = hearing["id"].as_str().unwrap();
    let (status, _) = call(&app, Method::POST, &format!("/api/hearings/{}/accept", id), Some(&lawyer), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
//  AVATAR E CHAT
// =============================================================================

#[tokio::test]
async fn avatar_accepts_png_and_refuses_other_formats() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    let upload = |bytes: Vec<u8>| {
        Request::builder()
            .method(Method::PUT)
            .uri("/api/users/me/avatar")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(Body::from(bytes))
            .unwrap()
    };

    let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
    let response = app.clone().oneshot(upload(png)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["applied"], true);
    assert!(body["user"]["avatar"].as_str().unwrap().starts_with("data:image/png;base64,"));

    let response = app.clone().oneshot(upload(b"GIF89a".to_vec())).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn chat_replies_with_the_selected_department() {
    let app = app();
    let token = login_as(&app, CLIENT).await;

    let (status, messages) = call(
        &app,
        Method::POST,
        "/api/chat/messages",
        Some(&token),
        Some(json!({ "text": "Preciso da segunda via", "department": "FINANCEIRO" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["senderId"], "10");
    assert_eq!(
        messages[1]["text"],
        "Aguarde um momento, estamos conectando você ao setor FINANCEIRO."
    );
}
