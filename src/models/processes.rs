// src/models/processes.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- PROCESSOS JUDICIAIS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProcessCategory {
    Trabalhista,
    #[serde(rename = "Cível")]
    Civel,
    #[serde(rename = "Previdenciário")]
    Previdenciario,
    #[serde(rename = "Tributário")]
    Tributario,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[schema(example = "p1")]
    pub id: String,
    #[schema(example = "0012345-88.2024.5.01.0001")]
    pub cnj: String,
    pub client_name: String,
    pub client_id: String,
    #[serde(rename = "type")]
    pub category: ProcessCategory,
    // Texto livre (ex: "Aguardando Audiência")
    pub status: String,
    // Pasta no Google Drive
    pub drive_folder_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_deadline: Option<NaiveDate>,
    // Andamentos (somente inclusão)
    pub events: Vec<ProcessEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessEvent {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
}

// --- PRAZOS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeadlineStatus {
    Pending,
    Done,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDeadline {
    pub id: String,
    pub process_id: String,
    // CNJ copiado do processo no momento do cadastro ("N/A" se o processo não existir)
    pub cnj: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    // IDs dos destinatários
    pub assignees: Vec<String>,
    // Nomes copiados na criação (não acompanham renomeações)
    pub assignee_names: Vec<String>,
    pub status: DeadlineStatus,
}

// O formulário chega com campos possivelmente vazios. A validação fica no serviço.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDeadlinePayload {
    #[schema(example = "p1")]
    pub process_id: Option<String>,
    #[serde(default)]
    #[schema(example = "Réplica à Contestação")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[schema(example = "2024-06-15")]
    pub due_date: Option<String>,
    #[serde(default)]
    #[schema(example = json!(["5"]))]
    pub assignees: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProcessEventPayload {
    #[schema(example = "Audiência designada")]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
