// src/services/chat_service.rs

use chrono::Utc;

use crate::{
    common::{error::AppError, ids::generate_id},
    db::PortalStore,
    models::chat::{ChatMessage, Department, SendChatPayload},
};

const ATTENDANT_ID: &str = "system";
const ATTENDANT_NAME: &str = "Atendente Virtual";
const GREETING: &str =
    "Olá! Bem-vindo ao chat da Alcides & Mosinho. Como posso ajudar? Selecione um departamento para iniciar.";

pub const DEPARTMENTS: [Department; 4] = [
    Department::Socios,
    Department::Financeiro,
    Department::Contabil,
    Department::Colaborador,
];

fn attendant(text: String) -> ChatMessage {
    ChatMessage {
        id: generate_id("msg"),
        sender_id: ATTENDANT_ID.to_string(),
        sender_name: ATTENDANT_NAME.to_string(),
        text,
        timestamp: Utc::now(),
        is_system: true,
    }
}

/// Conversa da sessão. Enquanto ninguém escreveu, mostra só a saudação.
pub fn thread(store: &PortalStore) -> Vec<ChatMessage> {
    if store.chat().is_empty() {
        return vec![attendant(GREETING.to_string())];
    }
    store.chat().to_vec()
}

/// Grava a mensagem do usuário e a resposta automática.
/// Retorna as duas mensagens novas.
pub fn send(store: &mut PortalStore, payload: SendChatPayload) -> Result<Vec<ChatMessage>, AppError> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::Form("form.chat_empty"));
    }
    let user = store.require_user()?;

    let message = ChatMessage {
        id: generate_id("msg"),
        sender_id: user.id.clone(),
        sender_name: user.name.clone(),
        text: text.to_string(),
        timestamp: Utc::now(),
        is_system: false,
    };

    let reply = attendant(match payload.department {
        Some(dept) => format!("Aguarde um momento, estamos conectando você ao setor {}.", dept.as_str()),
        None => "Por favor, selecione quem você deseja contatar no filtro acima.".to_string(),
    });

    // A saudação entra no histórico junto com a primeira mensagem
    if store.chat().is_empty() {
        store.push_chat_message(attendant(GREETING.to_string()));
    }
    store.push_chat_message(message.clone());
    store.push_chat_message(reply.clone());

    Ok(vec![message, reply])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> PortalStore {
        let mut store = PortalStore::seeded();
        store.login("cliente@gmail.com", "x").unwrap();
        store
    }

    #[test]
    fn empty_thread_shows_greeting() {
        let store = logged_in();
        let messages = thread(&store);

        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_system);
        assert!(messages[0].text.starts_with("Olá! Bem-vindo ao chat"));
    }

    #[test]
    fn send_appends_message_and_department_reply() {
        let mut store = logged_in();
        let sent = send(
            &mut store,
            SendChatPayload { text: "Dúvida sobre boleto".into(), department: Some(Department::Financeiro) },
        )
        .unwrap();

        assert_eq!(sent[0].sender_id, "10");
        assert_eq!(sent[1].text, "Aguarde um momento, estamos conectando você ao setor FINANCEIRO.");
        // saudação + mensagem + resposta
        assert_eq!(thread(&store).len(), 3);
    }

    #[test]
    fn reply_asks_for_department_when_none_selected() {
        let mut store = logged_in();
        let sent = send(&mut store, SendChatPayload { text: "Oi".into(), department: None }).unwrap();

        assert_eq!(sent[1].text, "Por favor, selecione quem você deseja contatar no filtro acima.");
    }

    #[test]
    fn blank_message_is_refused() {
        let mut store = logged_in();
        let err = send(&mut store, SendChatPayload { text: "   ".into(), department: None }).unwrap_err();

        assert!(matches!(err, AppError::Form("form.chat_empty")));
        assert!(store.chat().is_empty());
    }
}
