// src/models/crm.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// --- ENUMS ---

// Pessoa física ou jurídica
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientKind {
    Pf,
    Pj,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientStatus {
    Ativo,
    Inativo,
}

// --- CLIENTE ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[schema(example = "10")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ClientKind,

    pub name: String,     // Nome ou Razão Social
    pub document: String, // CPF ou CNPJ
    pub email: String,
    pub phone: String,
    pub address: String,

    // Campos PF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    // Campos PJ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,

    pub status: ClientStatus,

    // ID do parceiro externo que indicou o cliente
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClientPayload {
    #[serde(rename = "type")]
    pub kind: ClientKind,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Maria Souza")]
    pub name: String,

    #[validate(length(min = 1, message = "Informe o CPF ou CNPJ."))]
    #[schema(example = "987.654.321-00")]
    pub document: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,

    pub rg: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub representative: Option<String>,

    // Padrão: ATIVO
    pub status: Option<ClientStatus>,
    pub partner_id: Option<String>,
}
