// src/handlers/finance.rs

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
    middleware::{
        i18n::Locale,
        rbac::{FinancePage, RequirePage},
    },
    models::finance::{FinanceSummary, FinancialRecord, NewFinancialRecordPayload},
    services::finance_service,
};

// GET /api/finance/summary
#[utoipa::path(
    get,
    path = "/api/finance/summary",
    tag = "Financeiro",
    responses(
        (status = 200, description = "Receitas, despesas e saldo de todos os lançamentos", body = FinanceSummary),
        (status = 403, description = "Perfil sem acesso ao financeiro")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<FinancePage>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = guard
        .session
        .read(|store| finance_service::summary(&store.data().financial_records))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(summary))
}

// POST /api/finance/records
#[utoipa::path(
    post,
    path = "/api/finance/records",
    tag = "Financeiro",
    request_body = NewFinancialRecordPayload,
    responses(
        (status = 201, description = "Lançamento incluído no topo da lista", body = FinancialRecord),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_record(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<FinancePage>,
    Json(payload): Json<NewFinancialRecordPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let record = finance_service::build_record(payload);
    let created = guard
        .session
        .write(|store| Ok(store.add_financial_record(record).clone()))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("💰 Lançamento {} ({}) incluído", created.id, created.amount);
    Ok((StatusCode::CREATED, Json(created)))
}

// DELETE /api/finance/records/{id}
#[utoipa::path(
    delete,
    path = "/api/finance/records/{id}",
    tag = "Financeiro",
    params(
        ("id" = String, Path, description = "ID do lançamento")
    ),
    responses(
        (status = 204, description = "Lançamento removido"),
        (status = 404, description = "Lançamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_record(
    State(app_state): State<AppState>,
    locale: Locale,
    guard: RequirePage<FinancePage>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    guard
        .session
        .write(|store| store.delete_financial_record(&id))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
