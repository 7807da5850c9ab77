// src/models/news.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::rbac::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Text,
    Video,
    Link,
    File,
}

// Confirmação de leitura (somente inclusão)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadReceipt {
    pub user_id: String,
    pub name: String,
    pub date: DateTime<Utc>,
}

// --- MURAL INTERNO ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[schema(example = "n1")]
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
    // Perfis que podem ver o comunicado
    pub audience: Vec<Role>,
    pub read_by: Vec<ReadReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl NewsItem {
    pub fn is_read_by(&self, user_id: &str) -> bool {
        self.read_by.iter().any(|r| r.user_id == user_id)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsPayload {
    #[serde(default)]
    #[schema(example = "Recesso de fim de ano")]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub media_type: Option<MediaType>,
    pub media_url: Option<String>,
}

// --- NOTÍCIAS JURÍDICAS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Tribunal {
    #[serde(rename = "STF")]
    Stf,
    #[serde(rename = "STJ")]
    Stj,
    #[serde(rename = "TST")]
    Tst,
    #[serde(rename = "TRT-1")]
    Trt1,
    #[serde(rename = "TJRJ")]
    Tjrj,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegalNews {
    pub id: String,
    pub tribunal: Tribunal,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    pub url: String,
}
