// src/models/hearings.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HearingMode {
    Presencial,
    Virtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HearingType {
    Instrucao,
    Conciliacao,
    Inicial,
}

// SOLICITADA -> AGENDADA -> CONCLUIDA. A recusa remove a solicitação,
// então CANCELADA nunca é gravada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HearingStatus {
    Solicitada,
    Agendada,
    Concluida,
    Cancelada,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HearingReturn {
    pub summary: String,
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HearingRequest {
    #[schema(example = "h1")]
    pub id: String,
    pub process_id: String,
    // Colaborador que pediu
    pub requester_id: String,
    // Quem aceitou
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audiencista_id: Option<String>,
    pub date: NaiveDate,
    #[schema(example = "14:00")]
    pub time: String,
    pub location: String,
    pub mode: HearingMode,
    #[serde(rename = "type")]
    pub kind: HearingType,
    // Valor a ser pago ao audiencista
    #[schema(example = 300.0)]
    pub value: Decimal,
    pub status: HearingStatus,
    // Ata da audiência
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_form: Option<HearingReturn>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewHearingPayload {
    #[serde(default)]
    #[schema(example = "p1")]
    pub process_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    #[schema(example = "14:00")]
    pub time: String,
    #[serde(default)]
    #[schema(example = "1ª VT/RJ")]
    pub location: String,
    pub mode: HearingMode,
    #[serde(rename = "type")]
    pub kind: HearingType,
    #[schema(example = 300.0)]
    pub value: Decimal,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HearingReturnPayload {
    #[serde(default)]
    #[schema(example = "Audiência realizada, acordo homologado.")]
    pub summary: String,
    #[serde(default)]
    pub outcome: String,
    // Referência à ata enviada (PDF)
    #[serde(default)]
    #[schema(example = "ata-h1.pdf")]
    pub minutes_url: String,
}
