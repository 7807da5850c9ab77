// src/models/agenda.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeetingType {
    Internal,
    Client,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingMinutes {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[schema(example = "m1")]
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[schema(example = "14:00")]
    pub time: String,
    #[serde(rename = "type")]
    pub kind: MeetingType,
    // IDs dos participantes; os nomes são resolvidos na renderização
    pub participant_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<MeetingMinutes>,
}

impl Meeting {
    pub fn includes(&self, user_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == user_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeetingRequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    pub id: String,
    // Quem pediu a reunião (usuário logado)
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_partner_id: Option<String>,
    pub subject: String,
    pub reason: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub status: MeetingRequestStatus,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMeetingRequestPayload {
    pub target_partner_id: Option<String>,
    #[serde(default)]
    #[schema(example = "Revisão contratual")]
    pub subject: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    #[schema(example = "2024-06-10")]
    pub preferred_date: String,
    #[serde(default)]
    #[schema(example = "10:00")]
    pub preferred_time: String,
}
