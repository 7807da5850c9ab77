// src/models/chat.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Setores disponíveis no filtro "Falar com..."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    Socios,
    Financeiro,
    Contabil,
    Colaborador,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Socios => "SOCIOS",
            Department::Financeiro => "FINANCEIRO",
            Department::Contabil => "CONTABIL",
            Department::Colaborador => "COLABORADOR",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    // Mensagens automáticas do atendente virtual
    #[serde(default)]
    pub is_system: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendChatPayload {
    #[serde(default)]
    #[schema(example = "Preciso falar sobre minha fatura")]
    pub text: String,
    pub department: Option<Department>,
}
