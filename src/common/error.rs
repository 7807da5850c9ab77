// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Erros de domínio. Cada variante tem uma chave de tradução e um status HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Erro de formulário: a string é a chave de tradução da mensagem.
    #[error("Formulário inválido: {0}")]
    Form(&'static str),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Sessão não encontrada")]
    SessionNotFound,

    #[error("Limite de sessões abertas atingido")]
    SessionLimitReached,

    #[error("Nenhum usuário logado")]
    NotAuthenticated,

    #[error("Acesso negado à página {0}")]
    ForbiddenPage(String),

    // O campo indica a coleção ("client", "invoice", ...)
    #[error("Registro não encontrado: {0}")]
    NotFound(&'static str),

    #[error("Transição de estado inválida")]
    InvalidTransition,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Formato de imagem não suportado")]
    UnsupportedMedia,

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Código estável, usado pelo front-end para decidir o que mostrar.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::Form(_) => "invalid_form",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::InvalidToken => "invalid_token",
            AppError::SessionNotFound => "session_not_found",
            AppError::SessionLimitReached => "session_limit_reached",
            AppError::NotAuthenticated => "not_authenticated",
            AppError::ForbiddenPage(_) => "forbidden_page",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidTransition => "invalid_transition",
            AppError::EmailAlreadyExists => "email_already_exists",
            AppError::UnsupportedMedia => "unsupported_media",
            AppError::BcryptError(_)
            | AppError::JwtError(_)
            | AppError::InternalServerError(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::Form(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::InvalidToken
            | AppError::SessionNotFound
            | AppError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenPage(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidTransition | AppError::EmailAlreadyExists => StatusCode::CONFLICT,
            AppError::UnsupportedMedia => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::SessionLimitReached => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BcryptError(_)
            | AppError::JwtError(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converte o erro de domínio na resposta HTTP, já traduzida para o idioma do cliente.
    pub fn to_api_error(self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let status = self.status();
        let code = self.code();
        let lang = locale.0.as_str();

        let (error, details) = match &self {
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                (i18n.translate(lang, "error.validation", &[]), Some(json!(details)))
            }
            AppError::Form(key) => (i18n.translate(lang, key, &[]), None),
            AppError::ForbiddenPage(page) => (
                i18n.translate(lang, "error.forbidden_page", &[page.as_str()]),
                Some(json!({ "page": page })),
            ),
            AppError::NotFound(entity) => (
                i18n.translate(lang, "error.not_found", &[*entity]),
                Some(json!({ "entity": entity })),
            ),
            AppError::BcryptError(_) | AppError::JwtError(_) | AppError::InternalServerError(_) => {
                // O detalhe fica no log, o cliente recebe a mensagem genérica.
                tracing::error!("Erro Interno do Servidor: {:?}", self);
                (i18n.translate(lang, "error.internal", &[]), None)
            }
            other => (i18n.translate(lang, &format!("error.{}", other.code()), &[]), None),
        };

        ApiError { status, code, error, details }
    }
}

// Rejeições de extratores usam a tradução padrão (pt).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let store = I18nStore::new();
        self.to_api_error(&Locale::default(), &store).into_response()
    }
}

// A resposta de erro que vai para o cliente.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "code": self.code, "error": self.error, "details": details }),
            None => json!({ "code": self.code, "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_http_status() {
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::ForbiddenPage("finance".into()).status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::InvalidTransition.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::UnsupportedMedia.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn translates_according_to_locale() {
        let store = I18nStore::new();
        let pt = AppError::InvalidCredentials.to_api_error(&Locale("pt".into()), &store);
        let en = AppError::InvalidCredentials.to_api_error(&Locale("en".into()), &store);

        assert_eq!(pt.code, "invalid_credentials");
        assert_eq!(pt.error, "Credenciais inválidas. Tente um dos emails de teste.");
        assert_eq!(en.error, "Invalid credentials. Try one of the test e-mails.");
    }

    #[test]
    fn forbidden_page_carries_the_page_id() {
        let store = I18nStore::new();
        let api = AppError::ForbiddenPage("finance".into()).to_api_error(&Locale::default(), &store);

        assert_eq!(api.details, Some(json!({ "page": "finance" })));
        assert!(api.error.contains("finance"));
    }
}
