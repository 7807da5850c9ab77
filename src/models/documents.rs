// src/models/documents.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Contrato,
    Procuracao,
    Peticao,
    Outros,
    Irpf,
    Fiscal,
    Trabalhista,
    Financeiro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentStatus {
    Validado,
    Pendente,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDocument {
    #[schema(example = "d1")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DocumentType,
    pub date: NaiveDate,
    pub url: String,
    pub visible_to_client: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDocumentPayload {
    #[validate(length(min = 1, message = "Informe o título do documento."))]
    #[schema(example = "Contrato Social")]
    pub title: String,

    #[serde(rename = "type")]
    pub kind: DocumentType,

    // Padrão: hoje
    pub date: Option<NaiveDate>,

    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub visible_to_client: bool,

    pub status: Option<DocumentStatus>,
}

fn default_url() -> String {
    "#".to_string()
}

// Contrato de parceria (parceiros externos)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContract {
    #[schema(example = "pc1")]
    pub id: String,
    pub partner_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub url: String,
}
