pub mod access_policy;
pub mod accounting_service;
pub mod agenda_service;
pub mod auth;
pub mod chat_service;
pub mod crm_service;
pub mod document_service;
pub mod finance_service;
pub mod hearing_service;
pub mod news_service;
pub mod process_service;
pub mod rate_provider;
pub mod view_dispatcher;
