// src/services/document_service.rs

use chrono::Utc;

use crate::{
    common::ids::generate_id,
    models::documents::{ClientDocument, DocumentStatus, NewDocumentPayload},
};

/// Documento novo a partir do formulário (já validado). Sem data, vale hoje.
pub fn build_document(payload: NewDocumentPayload) -> ClientDocument {
    ClientDocument {
        id: generate_id("doc"),
        title: payload.title.trim().to_string(),
        kind: payload.kind,
        date: payload.date.unwrap_or_else(|| Utc::now().date_naive()),
        url: payload.url,
        visible_to_client: payload.visible_to_client,
        status: Some(payload.status.unwrap_or(DocumentStatus::Pendente)),
    }
}
