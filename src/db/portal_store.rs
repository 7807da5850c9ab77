// src/db/portal_store.rs

// Estado de uma sessão do portal: usuário logado, página atual e todas as
// coleções em memória. Toda operação valida antes de mutar, então um erro
// nunca deixa a coleção pela metade.

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::fixtures,
    models::{
        accounting::{IrpfRequest, TaxGuide, TaxGuideStatus},
        agenda::{Meeting, MeetingRequest},
        auth::User,
        catalog::{HoldingData, Product, ServiceItem},
        chat::ChatMessage,
        crm::Client,
        documents::{ClientDocument, PartnerContract},
        finance::{ClientInvoice, FinancialRecord, InvoiceStatus},
        hearings::HearingRequest,
        news::{LegalNews, NewsItem, ReadReceipt},
        processes::{Process, ProcessDeadline, ProcessEvent},
        rbac::PageId,
    },
    services::access_policy,
};

pub const LOGIN_ERROR_MESSAGE: &str = "Credenciais inválidas. Tente um dos emails de teste.";

// Coleções da sessão
#[derive(Debug, Clone, Default)]
pub struct PortalData {
    pub users: Vec<User>,
    pub clients: Vec<Client>,
    pub news: Vec<NewsItem>,
    pub legal_news: Vec<LegalNews>,
    pub documents: Vec<ClientDocument>,
    pub financial_records: Vec<FinancialRecord>,
    pub meetings: Vec<Meeting>,
    pub processes: Vec<Process>,
    pub deadlines: Vec<ProcessDeadline>,
    pub invoices: Vec<ClientInvoice>,
    pub meeting_requests: Vec<MeetingRequest>,
    pub tax_guides: Vec<TaxGuide>,
    pub irpf_requests: Vec<IrpfRequest>,
    pub hearings: Vec<HearingRequest>,
    pub partner_contracts: Vec<PartnerContract>,
    pub products: Vec<Product>,
    pub services: Vec<ServiceItem>,
    pub holding: HoldingData,
}

impl PortalData {
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        let wanted = email.trim();
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(wanted))
    }
}

/// Ficha de uma atualização de avatar em andamento.
/// Só a ficha mais recente consegue gravar (a última escrita vence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarTicket {
    pub seq: u64,
    pub user_id: String,
}

#[derive(Debug)]
pub struct PortalStore {
    data: PortalData,
    current_user: Option<User>,
    current_page: String,
    // Rascunho do formulário de login
    login_email: String,
    login_error: Option<String>,
    chat: Vec<ChatMessage>,
    avatar_seq: u64,
}

impl PortalStore {
    pub fn new(data: PortalData) -> Self {
        Self {
            data,
            current_user: None,
            current_page: PageId::Dashboard.as_str().to_string(),
            login_email: String::new(),
            login_error: None,
            chat: Vec::new(),
            avatar_seq: 0,
        }
    }

    /// Sessão nova com a massa de dados inicial.
    pub fn seeded() -> Self {
        Self::new(fixtures::seed())
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub fn data(&self) -> &PortalData {
        &self.data
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn require_user(&self) -> Result<&User, AppError> {
        self.current_user.as_ref().ok_or(AppError::NotAuthenticated)
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn login_email(&self) -> &str {
        &self.login_email
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    // =========================================================================
    //  LOGIN / NAVEGAÇÃO
    // =========================================================================

    /// A senha não é conferida aqui: quem tem hash cadastrado é verificado pelo
    /// AuthService antes de chegar no store.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        self.login_email = email.trim().to_string();

        let found = if password.is_empty() {
            None
        } else {
            self.data.find_user_by_email(email).cloned()
        };

        match found {
            Some(user) => {
                self.current_page = access_policy::landing_page_for(user.role).as_str().to_string();
                self.login_error = None;
                self.current_user = Some(user.clone());
                Ok(user)
            }
            None => Err(self.reject_login(email)),
        }
    }

    /// Registra a falha de login no formulário. Usado também quando a senha
    /// com hash é recusada pelo AuthService.
    pub fn reject_login(&mut self, email: &str) -> AppError {
        self.login_email = email.trim().to_string();
        self.login_error = Some(LOGIN_ERROR_MESSAGE.to_string());
        AppError::InvalidCredentials
    }

    /// Limpa usuário e formulário de login. As coleções mantêm as alterações da sessão.
    pub fn logout(&mut self) {
        self.current_user = None;
        self.login_email.clear();
        self.login_error = None;
        self.current_page = PageId::Dashboard.as_str().to_string();
    }

    // Qualquer id é aceito; a política de acesso decide o que renderizar.
    pub fn navigate(&mut self, page: &str) {
        self.current_page = page.trim().to_string();
    }

    // =========================================================================
    //  CADASTROS (inserção no fim)
    // =========================================================================

    pub fn add_client(&mut self, client: Client) -> &Client {
        self.data.clients.push(client);
        &self.data.clients[self.data.clients.len() - 1]
    }

    // Sem cascata: processos e faturas do cliente continuam existindo.
    pub fn delete_client(&mut self, id: &str) -> Result<Client, AppError> {
        let pos = self
            .data
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound("client"))?;
        Ok(self.data.clients.remove(pos))
    }

    pub fn add_user(&mut self, user: User) -> Result<&User, AppError> {
        if self.data.find_user_by_email(&user.email).is_some() {
            return Err(AppError::EmailAlreadyExists);
        }
        self.data.users.push(user);
        Ok(&self.data.users[self.data.users.len() - 1])
    }

    pub fn add_deadline(&mut self, deadline: ProcessDeadline) -> &ProcessDeadline {
        self.data.deadlines.push(deadline);
        &self.data.deadlines[self.data.deadlines.len() - 1]
    }

    pub fn add_hearing(&mut self, hearing: HearingRequest) -> &HearingRequest {
        self.data.hearings.push(hearing);
        &self.data.hearings[self.data.hearings.len() - 1]
    }

    // Andamentos são somente inclusão
    pub fn append_process_event(&mut self, process_id: &str, event: ProcessEvent) -> Result<&Process, AppError> {
        let process = self
            .data
            .processes
            .iter_mut()
            .find(|p| p.id == process_id)
            .ok_or(AppError::NotFound("process"))?;
        process.events.push(event);
        Ok(process)
    }

    // =========================================================================
    //  FEEDS (inserção no início, mais recente primeiro)
    // =========================================================================

    pub fn add_news(&mut self, item: NewsItem) -> &NewsItem {
        self.data.news.insert(0, item);
        &self.data.news[0]
    }

    pub fn add_financial_record(&mut self, record: FinancialRecord) -> &FinancialRecord {
        self.data.financial_records.insert(0, record);
        &self.data.financial_records[0]
    }

    pub fn delete_financial_record(&mut self, id: &str) -> Result<FinancialRecord, AppError> {
        let pos = self
            .data
            .financial_records
            .iter()
            .position(|f| f.id == id)
            .ok_or(AppError::NotFound("financial_record"))?;
        Ok(self.data.financial_records.remove(pos))
    }

    pub fn add_document(&mut self, doc: ClientDocument) -> &ClientDocument {
        self.data.documents.insert(0, doc);
        &self.data.documents[0]
    }

    pub fn delete_document(&mut self, id: &str) -> Result<ClientDocument, AppError> {
        let pos = self
            .data
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(AppError::NotFound("document"))?;
        Ok(self.data.documents.remove(pos))
    }

    pub fn request_meeting(&mut self, request: MeetingRequest) -> &MeetingRequest {
        self.data.meeting_requests.insert(0, request);
        &self.data.meeting_requests[0]
    }

    pub fn request_irpf(&mut self, request: IrpfRequest) -> &IrpfRequest {
        self.data.irpf_requests.insert(0, request);
        &self.data.irpf_requests[0]
    }

    // =========================================================================
    //  ATUALIZAÇÕES
    // =========================================================================

    /// Marca o comunicado como lido pelo usuário logado. Chamar de novo não muda nada.
    pub fn mark_news_read(&mut self, news_id: &str) -> Result<&NewsItem, AppError> {
        let user = self.current_user.as_ref().ok_or(AppError::NotAuthenticated)?;
        let item = self
            .data
            .news
            .iter_mut()
            .find(|n| n.id == news_id)
            .ok_or(AppError::NotFound("news"))?;

        if !item.is_read_by(&user.id) {
            item.read_by.push(ReadReceipt {
                user_id: user.id.clone(),
                name: user.name.clone(),
                date: Utc::now(),
            });
        }
        Ok(item)
    }

    /// PENDING/OVERDUE -> PAID. Fatura já paga fica como está.
    pub fn pay_invoice(&mut self, id: &str) -> Result<&ClientInvoice, AppError> {
        let invoice = self
            .data
            .invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(AppError::NotFound("invoice"))?;

        if invoice.status != InvoiceStatus::Paid {
            invoice.status = InvoiceStatus::Paid;
        }
        Ok(invoice)
    }

    pub fn pay_tax_guide(&mut self, id: &str) -> Result<&TaxGuide, AppError> {
        let guide = self
            .data
            .tax_guides
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(AppError::NotFound("tax_guide"))?;
        guide.status = TaxGuideStatus::Pago;
        Ok(guide)
    }

    pub fn hearing_mut(&mut self, id: &str) -> Result<&mut HearingRequest, AppError> {
        self.data
            .hearings
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(AppError::NotFound("hearing"))
    }

    pub fn remove_hearing(&mut self, id: &str) -> Result<HearingRequest, AppError> {
        let pos = self
            .data
            .hearings
            .iter()
            .position(|h| h.id == id)
            .ok_or(AppError::NotFound("hearing"))?;
        Ok(self.data.hearings.remove(pos))
    }

    pub fn financial_record_for_hearing_mut(&mut self, hearing_id: &str) -> Option<&mut FinancialRecord> {
        self.data
            .financial_records
            .iter_mut()
            .find(|f| f.related_hearing_id.as_deref() == Some(hearing_id))
    }

    pub fn push_chat_message(&mut self, message: ChatMessage) {
        self.chat.push(message);
    }

    // =========================================================================
    //  AVATAR (a última escrita vence)
    // =========================================================================

    pub fn begin_avatar_update(&mut self) -> Result<AvatarTicket, AppError> {
        let user_id = self.require_user()?.id.clone();
        self.avatar_seq += 1;
        Ok(AvatarTicket { seq: self.avatar_seq, user_id })
    }

    /// Grava o avatar se a ficha ainda for a mais recente para o mesmo usuário logado.
    /// Retorna `false` quando outra atualização já tomou o lugar desta.
    pub fn finish_avatar_update(&mut self, ticket: &AvatarTicket, data_uri: String) -> Result<bool, AppError> {
        // Logout ou troca de usuário durante a codificação também descartam a ficha
        let Some(user) = self.current_user.as_mut().filter(|u| u.id == ticket.user_id) else {
            return Ok(false);
        };
        if ticket.seq != self.avatar_seq {
            return Ok(false);
        }

        user.avatar = Some(data_uri.clone());
        if let Some(entry) = self.data.users.iter_mut().find(|u| u.id == ticket.user_id) {
            entry.avatar = Some(data_uri);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        agenda::MeetingRequestStatus,
        crm::{ClientKind, ClientStatus},
        documents::DocumentType,
        finance::{RecordKind, RecordStatus},
        rbac::Role,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn logged_in(email: &str) -> PortalStore {
        let mut store = PortalStore::seeded();
        store.login(email, "x").unwrap();
        store
    }

    fn client(id: &str) -> Client {
        Client {
            id: id.into(),
            kind: ClientKind::Pf,
            name: format!("Cliente {id}"),
            document: "000".into(),
            email: format!("{id}@mail.com"),
            phone: String::new(),
            address: String::new(),
            rg: None,
            birth_date: None,
            representative: None,
            status: ClientStatus::Ativo,
            partner_id: None,
        }
    }

    fn document(id: &str) -> ClientDocument {
        ClientDocument {
            id: id.into(),
            title: format!("Documento {id}"),
            kind: DocumentType::Outros,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            url: "#".into(),
            visible_to_client: false,
            status: None,
        }
    }

    fn meeting_request(id: &str) -> MeetingRequest {
        MeetingRequest {
            id: id.into(),
            client_id: "10".into(),
            target_partner_id: None,
            subject: "Revisão".into(),
            reason: "Contrato".into(),
            preferred_date: "2024-06-10".into(),
            preferred_time: "10:00".into(),
            status: MeetingRequestStatus::Pending,
        }
    }

    fn news(id: &str) -> NewsItem {
        NewsItem {
            id: id.into(),
            title: id.into(),
            summary: String::new(),
            content: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            author: "TI".into(),
            audience: Role::ALL.to_vec(),
            read_by: Vec::new(),
            media_type: None,
            media_url: None,
        }
    }

    // --- Login ---

    #[test]
    fn login_with_known_email_sets_user_and_landing_page() {
        let mut store = PortalStore::seeded();
        let user = store.login("biancaporto@alcidesemosinho.com", "qualquer").unwrap();

        assert_eq!(user.id, "5");
        assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("5"));
        assert_eq!(store.current_page(), "dashboard");
        assert_eq!(store.login_error(), None);
    }

    #[test]
    fn hearing_lawyer_lands_on_hearing_panel() {
        let store = logged_in("audiencia@adv.com");
        assert_eq!(store.current_page(), "hearing-panel");
    }

    #[test]
    fn login_is_case_insensitive_and_trimmed() {
        let mut store = PortalStore::seeded();
        assert!(store.login("  Cliente@Gmail.com ", "x").is_ok());
    }

    #[test]
    fn login_with_unknown_email_fails_and_keeps_user_unset() {
        let mut store = PortalStore::seeded();
        let err = store.login("ninguem@nada.com", "x").unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
        assert!(store.current_user().is_none());
        assert_eq!(store.login_error(), Some(LOGIN_ERROR_MESSAGE));
        assert_eq!(store.login_email(), "ninguem@nada.com");
    }

    #[test]
    fn login_with_empty_password_fails() {
        let mut store = PortalStore::seeded();
        assert!(store.login("cliente@gmail.com", "").is_err());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn logout_clears_user_and_form_but_keeps_mutations() {
        let mut store = logged_in("gustavomosinho@alcidesemosinho.com");
        store.add_client(client("c-new"));
        store.navigate("finance");

        store.logout();

        assert!(store.current_user().is_none());
        assert_eq!(store.current_page(), "dashboard");
        assert_eq!(store.login_email(), "");
        assert!(store.data().clients.iter().any(|c| c.id == "c-new"));
    }

    // --- Ordem de inserção ---

    #[test]
    fn news_are_head_inserted_and_clients_tail_inserted() {
        let mut store = PortalStore::seeded();

        store.add_news(news("N1"));
        store.add_news(news("N2"));
        let first_two: Vec<_> = store.data().news.iter().take(2).map(|n| n.id.as_str()).collect();
        assert_eq!(first_two, vec!["N2", "N1"]);

        store.add_client(client("C1"));
        store.add_client(client("C2"));
        let last_two: Vec<_> = store.data().clients.iter().rev().take(2).rev().map(|c| c.id.as_str()).collect();
        assert_eq!(last_two, vec!["C1", "C2"]);
    }

    #[test]
    fn financial_records_and_documents_are_head_inserted() {
        let mut store = PortalStore::seeded();
        let record = FinancialRecord::new(
            "f-new",
            RecordKind::Income,
            "Honorários",
            Decimal::new(10, 0),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            "",
            RecordStatus::Pending,
        );
        store.add_financial_record(record);

        assert_eq!(store.data().financial_records[0].id, "f-new");

        store.add_document(document("D1"));
        store.add_document(document("D2"));
        let first_two: Vec<_> = store.data().documents.iter().take(2).map(|d| d.id.as_str()).collect();
        assert_eq!(first_two, vec!["D2", "D1"]);
    }

    #[test]
    fn users_are_tail_inserted() {
        let mut store = PortalStore::seeded();

        store.add_user(User::new("U1", "Primeira", "u1@mail.com", Role::Lawyer)).unwrap();
        store.add_user(User::new("U2", "Segunda", "u2@mail.com", Role::Client)).unwrap();
        let last_two: Vec<_> = store.data().users.iter().rev().take(2).rev().map(|u| u.id.as_str()).collect();
        assert_eq!(last_two, vec!["U1", "U2"]);
    }

    #[test]
    fn meeting_requests_are_head_inserted() {
        let mut store = PortalStore::seeded();

        store.request_meeting(meeting_request("M1"));
        store.request_meeting(meeting_request("M2"));
        let first_two: Vec<_> = store.data().meeting_requests.iter().take(2).map(|m| m.id.as_str()).collect();
        assert_eq!(first_two, vec!["M2", "M1"]);
    }

    #[test]
    fn delete_client_does_not_cascade() {
        let mut store = PortalStore::seeded();
        store.delete_client("10").unwrap();

        assert!(store.data().clients.iter().all(|c| c.id != "10"));
        assert!(store.data().processes.iter().any(|p| p.client_id == "10"));
        assert!(store.data().invoices.iter().any(|i| i.client_id == "10"));
    }

    #[test]
    fn delete_unknown_id_is_not_found_and_changes_nothing() {
        let mut store = PortalStore::seeded();
        let before = store.data().documents.len();

        assert!(matches!(store.delete_document("nope"), Err(AppError::NotFound("document"))));
        assert_eq!(store.data().documents.len(), before);
    }

    #[test]
    fn add_user_rejects_duplicate_email() {
        let mut store = PortalStore::seeded();
        let dup = User::new("x", "Outro", "CLIENTE@gmail.com", Role::Client);

        assert!(matches!(store.add_user(dup), Err(AppError::EmailAlreadyExists)));
    }

    // --- Mural ---

    #[test]
    fn mark_news_read_is_idempotent() {
        let mut store = logged_in("biancaporto@alcidesemosinho.com");

        store.mark_news_read("n1").unwrap();
        let once = store.data().news[0].read_by.clone();
        store.mark_news_read("n1").unwrap();
        let twice = &store.data().news[0].read_by;

        assert_eq!(once.len(), 1);
        assert_eq!(&once, twice);
        assert_eq!(twice[0].name, "Bianca Porto");
    }

    #[test]
    fn mark_news_read_requires_login() {
        let mut store = PortalStore::seeded();
        assert!(matches!(store.mark_news_read("n1"), Err(AppError::NotAuthenticated)));
    }

    // --- Pagamentos ---

    #[test]
    fn pay_invoice_transitions_once_and_is_idempotent() {
        let mut store = PortalStore::seeded();

        assert_eq!(store.pay_invoice("inv1").unwrap().status, InvoiceStatus::Paid);
        assert_eq!(store.pay_invoice("inv1").unwrap().status, InvoiceStatus::Paid);
        assert_eq!(store.pay_invoice("inv3").unwrap().status, InvoiceStatus::Paid);
    }

    #[test]
    fn pay_tax_guide_sets_pago() {
        let mut store = PortalStore::seeded();
        assert_eq!(store.pay_tax_guide("g1").unwrap().status, TaxGuideStatus::Pago);
        assert!(store.pay_tax_guide("g9").is_err());
    }

    // --- Avatar ---

    #[test]
    fn latest_avatar_update_wins() {
        let mut store = logged_in("cliente@gmail.com");

        let first = store.begin_avatar_update().unwrap();
        let second = store.begin_avatar_update().unwrap();

        assert!(store.finish_avatar_update(&second, "data:image/png;base64,BBB".into()).unwrap());
        assert!(!store.finish_avatar_update(&first, "data:image/png;base64,AAA".into()).unwrap());

        assert_eq!(store.current_user().unwrap().avatar.as_deref(), Some("data:image/png;base64,BBB"));
        assert_eq!(store.data().user("10").unwrap().avatar.as_deref(), Some("data:image/png;base64,BBB"));
    }

    #[test]
    fn avatar_update_is_dropped_after_user_switch() {
        let mut store = logged_in("cliente@gmail.com");
        let ticket = store.begin_avatar_update().unwrap();

        store.logout();
        store.login("parceiro@externo.com", "x").unwrap();

        assert!(!store.finish_avatar_update(&ticket, "data:image/png;base64,AAA".into()).unwrap());
        assert!(store.data().user("10").unwrap().avatar.is_none());
    }

    #[test]
    fn avatar_update_is_dropped_after_logout() {
        let mut store = logged_in("cliente@gmail.com");
        let ticket = store.begin_avatar_update().unwrap();

        store.logout();

        assert!(!store.finish_avatar_update(&ticket, "data:image/png;base64,AAA".into()).unwrap());
        assert!(store.data().user("10").unwrap().avatar.is_none());
    }
}
