pub mod accounting;
pub mod agenda;
pub mod auth;
pub mod catalog;
pub mod chat;
pub mod crm;
pub mod documents;
pub mod finance;
pub mod hearings;
pub mod news;
pub mod processes;
pub mod rbac;
pub mod views;
