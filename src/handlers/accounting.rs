// src/handlers/accounting.rs

// Área do cliente: faturas do escritório, guias de impostos e IRPF.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{ClientAccountingPage, ClientFinancePage, RequirePage},
    },
    models::{
        accounting::{IrpfRequest, NewIrpfPayload, TaxGuide},
        finance::ClientInvoice,
    },
    services::accounting_service,
};

// POST /api/invoices/{id}/pay
#[utoipa::path(
    post,
    path = "/api/invoices/{id}/pay",
    tag = "Área do Cliente",
    params(
        ("id" = String, Path, description = "ID da fatura")
    ),
    responses(
        (status = 200, description = "Fatura paga (já paga continua paga)", body = ClientInvoice),
        (status = 404, description = "Fatura não encontrada ou de outro cliente")
    ),
    security(("api_jwt" = []))
)]
pub async fn pay_invoice(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ClientFinancePage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = guard
        .session
        .write(|store| accounting_service::pay_invoice(store, &id))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(invoice))
}

// POST /api/tax-guides/{id}/pay
#[utoipa::path(
    post,
    path = "/api/tax-guides/{id}/pay",
    tag = "Área do Cliente",
    params(
        ("id" = String, Path, description = "ID da guia")
    ),
    responses(
        (status = 200, description = "Guia marcada como PAGO", body = TaxGuide),
        (status = 404, description = "Guia não encontrada ou de outro cliente")
    ),
    security(("api_jwt" = []))
)]
pub async fn pay_tax_guide(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ClientAccountingPage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let guide = guard
        .session
        .write(|store| accounting_service::pay_tax_guide(store, &id))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(guide))
}

// POST /api/irpf-requests
#[utoipa::path(
    post,
    path = "/api/irpf-requests",
    tag = "Área do Cliente",
    request_body = NewIrpfPayload,
    responses(
        (status = 201, description = "Declaração solicitada (EM_ANALISE)", body = IrpfRequest),
        (status = 400, description = "Ano-base inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn request_irpf(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<ClientAccountingPage>,
    Json(payload): Json<NewIrpfPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let today = Utc::now().date_naive();
    let request = guard
        .session
        .write(|store| accounting_service::request_irpf(store, payload, today))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("🧾 IRPF {} solicitado por {}", request.year, guard.user.name);
    Ok((StatusCode::CREATED, Json(request)))
}
