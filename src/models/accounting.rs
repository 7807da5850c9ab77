// src/models/accounting.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- GUIAS DE IMPOSTO ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxGuideType {
    Darf,
    Das,
    Gps,
    Iss,
    Fgts,
    Folha,
    Honorarios,
    Outros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxGuideStatus {
    Pendente,
    Enviado,
    Pago,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxGuide {
    #[schema(example = "g1")]
    pub id: String,
    pub client_id: String,
    #[serde(rename = "type")]
    pub kind: TaxGuideType,
    pub description: String,
    #[schema(example = 1250.0)]
    pub value: Decimal,
    pub due_date: NaiveDate,
    pub status: TaxGuideStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

// --- IRPF ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IrpfStatus {
    Recebido,
    EmAnalise,
    Concluido,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IrpfRequest {
    #[schema(example = "ir1")]
    pub id: String,
    pub client_id: String,
    #[schema(example = 2024)]
    pub year: i32,
    pub status: IrpfStatus,
    pub request_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_document_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewIrpfPayload {
    // Padrão: ano corrente
    #[schema(example = 2025)]
    pub year: Option<i32>,
}
