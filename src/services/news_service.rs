// src/services/news_service.rs

use chrono::Utc;

use crate::{
    common::{error::AppError, ids::generate_id},
    db::PortalStore,
    models::{
        news::{MediaType, NewNewsPayload, NewsItem},
        rbac::{PageId, Role},
    },
    services::access_policy,
};

const SUMMARY_CHARS: usize = 50;

fn summarize(content: &str) -> String {
    let head: String = content.chars().take(SUMMARY_CHARS).collect();
    format!("{}...", head)
}

/// Publica no mural. Só sócios e administrativo podem postar.
/// O comunicado entra no topo, visível para todos os perfis.
pub fn publish(store: &mut PortalStore, payload: NewNewsPayload) -> Result<NewsItem, AppError> {
    let author = store.require_user()?;
    if !access_policy::can_post_news(author.role) {
        return Err(AppError::ForbiddenPage(PageId::InternalNews.as_str().to_string()));
    }

    let title = payload.title.trim();
    let content = payload.content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(AppError::Form("form.news_incomplete"));
    }

    let item = NewsItem {
        id: generate_id("n"),
        title: title.to_string(),
        summary: summarize(content),
        content: content.to_string(),
        date: Utc::now().date_naive(),
        author: author.name.clone(),
        audience: Role::ALL.to_vec(),
        read_by: Vec::new(),
        media_type: Some(payload.media_type.unwrap_or(MediaType::Text)),
        media_url: payload.media_url.filter(|url| !url.trim().is_empty()),
    };

    let created = store.add_news(item).clone();
    tracing::info!("📰 Comunicado {} publicado por {}", created.id, created.author);
    Ok(created)
}
