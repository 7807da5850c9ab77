// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANG: &str = "pt";

// Catálogo de mensagens: (chave, português, inglês)
const MESSAGES: &[(&str, &str, &str)] = &[
    // --- Erros genéricos ---
    ("error.validation", "Um ou mais campos são inválidos.", "One or more fields are invalid."),
    (
        "error.invalid_credentials",
        "Credenciais inválidas. Tente um dos emails de teste.",
        "Invalid credentials. Try one of the test e-mails.",
    ),
    (
        "error.invalid_token",
        "Token de autenticação inválido ou ausente.",
        "Authentication token is invalid or missing.",
    ),
    (
        "error.session_not_found",
        "Sessão expirada ou encerrada. Abra uma nova sessão.",
        "Session expired or closed. Open a new session.",
    ),
    (
        "error.session_limit_reached",
        "O servidor atingiu o limite de sessões abertas. Tente mais tarde.",
        "The server reached its limit of open sessions. Try again later.",
    ),
    ("error.not_authenticated", "Faça login para continuar.", "Please log in to continue."),
    (
        "error.forbidden_page",
        "Seu perfil não tem acesso à página '{0}'.",
        "Your role cannot access the page '{0}'.",
    ),
    ("error.not_found", "Registro não encontrado ({0}).", "Record not found ({0})."),
    (
        "error.invalid_transition",
        "Esta ação não é permitida no estado atual do registro.",
        "This action is not allowed in the record's current state.",
    ),
    ("error.email_already_exists", "Este e-mail já está em uso.", "This e-mail is already in use."),
    (
        "error.unsupported_media",
        "Envie uma imagem PNG ou JPEG.",
        "Please upload a PNG or JPEG image.",
    ),
    ("error.internal", "Ocorreu um erro inesperado.", "An unexpected error occurred."),
    // --- Formulários ---
    (
        "form.deadline_incomplete",
        "Preencha todos os campos obrigatórios e selecione ao menos um destinatário.",
        "Fill in every required field and select at least one assignee.",
    ),
    (
        "form.meeting_incomplete",
        "Informe assunto, motivo, data e horário da reunião.",
        "Provide the meeting subject, reason, date and time.",
    ),
    (
        "form.news_incomplete",
        "Informe título e conteúdo do comunicado.",
        "Provide the title and content of the announcement.",
    ),
    ("form.chat_empty", "Digite uma mensagem.", "Type a message."),
    (
        "form.hearing_incomplete",
        "Informe processo, data, horário e local da audiência.",
        "Provide the process, date, time and location of the hearing.",
    ),
    (
        "form.hearing_return_incomplete",
        "Informe o resumo da audiência e anexe a ata.",
        "Provide the hearing summary and attach the minutes.",
    ),
    ("form.invalid_date", "Data inválida. Use o formato AAAA-MM-DD.", "Invalid date. Use the YYYY-MM-DD format."),
    ("form.process_event_empty", "Descreva o andamento.", "Describe the case event."),
    ("form.irpf_year", "Ano-base inválido.", "Invalid base year."),
    ("form.user_role", "Selecione o perfil do usuário.", "Select the user's role."),
];

/// Traduções carregadas em memória, indexadas por idioma.
pub struct I18nStore {
    catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut pt = HashMap::new();
        let mut en = HashMap::new();
        for (key, pt_msg, en_msg) in MESSAGES {
            pt.insert(*key, *pt_msg);
            en.insert(*key, *en_msg);
        }

        let mut catalogs = HashMap::new();
        catalogs.insert("pt", pt);
        catalogs.insert("en", en);
        Self { catalogs }
    }

    /// Busca a mensagem no idioma pedido, cai para o português e, por último, devolve a própria chave.
    /// Parâmetros substituem `{0}`, `{1}`, ...
    pub fn translate(&self, lang: &str, key: &str, params: &[&str]) -> String {
        let template = self
            .catalogs
            .get(lang)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| self.catalogs.get(DEFAULT_LANG).and_then(|c| c.get(key)))
            .copied()
            .unwrap_or(key);

        params
            .iter()
            .enumerate()
            .fold(template.to_string(), |msg, (i, value)| {
                msg.replace(&format!("{{{}}}", i), value)
            })
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_portuguese_for_unknown_language() {
        let store = I18nStore::new();
        assert_eq!(
            store.translate("es", "error.not_authenticated", &[]),
            "Faça login para continuar."
        );
    }

    #[test]
    fn substitutes_positional_parameters() {
        let store = I18nStore::new();
        assert_eq!(
            store.translate("en", "error.forbidden_page", &["finance"]),
            "Your role cannot access the page 'finance'."
        );
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let store = I18nStore::new();
        assert_eq!(store.translate("pt", "nope.missing", &[]), "nope.missing");
    }
}
