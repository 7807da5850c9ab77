pub mod accounting;
pub mod agenda;
pub mod auth;
pub mod chat;
pub mod crm;
pub mod documents;
pub mod finance;
pub mod hearings;
pub mod navigation;
pub mod news;
pub mod processes;
