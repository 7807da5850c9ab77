// src/models/views.rs

// Cada página do portal vira um JSON identificado pelo campo "view".
// O front-end escolhe o componente a partir dele.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
    accounting::{IrpfRequest, TaxGuide},
    agenda::{MeetingMinutes, MeetingRequest, MeetingType},
    auth::User,
    catalog::{HoldingData, Product, ServiceItem, UsdQuote},
    chat::{ChatMessage, Department},
    crm::Client,
    documents::{ClientDocument, PartnerContract},
    finance::{ClientInvoice, FinanceSummary, FinancialRecord},
    hearings::HearingRequest,
    news::{LegalNews, MediaType},
    processes::{Process, ProcessDeadline},
    rbac::PageId,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    // O id pedido, mesmo quando a página caiu em "em construção"
    pub page_id: String,
    #[serde(flatten)]
    pub view: PageView,
}

#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum PageView {
    InternalDashboard(InternalDashboardView),
    ClientDashboard(ClientDashboardView),
    PartnerDashboard(PartnerDashboardView),
    AccountingDashboard(AccountingDashboardView),
    HearingPanel(HearingPanelView),
    InternalNews(NewsFeedView),
    LegalNews(LegalNewsView),
    Clients(ClientsView),
    Processes(ProcessesView),
    Finance(FinanceView),
    Agenda(AgendaView),
    Documents(DocumentsView),
    MyDocuments(MyDocumentsView),
    SendDocuments(SendDocumentsView),
    ClientFinance(ClientFinanceView),
    ClientAccounting(ClientAccountingView),
    PartnersManagement(PartnersManagementView),
    PartnerContract(PartnerContractView),
    MyHolding(MyHoldingView),
    Store(StoreView),
    Services(ServicesView),
    Chat(ChatView),
    HearingsManage(HearingsManageView),
    People(PeopleView),
    MyProfile(MyProfileView),
    UnderConstruction(UnderConstructionView),
}

// --- DASHBOARDS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_processes: usize,
    pub deadlines_today: usize,
    pub meetings: usize,
    pub pending_documents: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalDashboardView {
    pub stats: DashboardStats,
    // Os comunicados não lidos mais recentes
    pub latest_news: Vec<NewsCard>,
    pub shortcuts: Vec<Shortcut>,
    pub drive_url: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub page_id: PageId,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDashboardView {
    pub greeting: String,
    pub processes: Vec<Process>,
    pub pending_invoices: usize,
    pub visible_documents: usize,
    pub featured_service: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDashboardView {
    pub title: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingDashboardView {
    pub guides_issued: usize,
    pub pending_guides: usize,
    pub irpf_requests: usize,
}

// --- AUDIÊNCIAS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingPanelView {
    // Somente SOLICITADA
    pub pending: Vec<HearingRequest>,
    // Somente AGENDADA aceitas pelo usuário logado
    pub my_schedule: Vec<HearingRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingsManageView {
    pub requests: Vec<HearingRequest>,
    pub processes: Vec<Process>,
}

// --- MURAL E NOTÍCIAS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    // Nomes de quem já leu (visível só para sócios)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_by: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeedView {
    pub items: Vec<NewsCard>,
    pub can_post: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalNewsView {
    pub items: Vec<LegalNews>,
}

// --- CLIENTES E PROCESSOS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsView {
    pub clients: Vec<Client>,
    pub partners: Vec<User>,
    pub can_manage: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignableUsers {
    pub partners: Vec<User>,
    pub lawyers: Vec<User>,
    pub finance: Vec<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessesView {
    pub processes: Vec<Process>,
    pub deadlines: Vec<ProcessDeadline>,
    pub assignable: AssignableUsers,
    pub can_edit: bool,
}

// --- FINANCEIRO ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceView {
    pub summary: FinanceSummary,
    pub records: Vec<FinancialRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFinanceView {
    pub invoices: Vec<ClientInvoice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAccountingView {
    pub guides: Vec<TaxGuide>,
    pub irpf_requests: Vec<IrpfRequest>,
}

// --- AGENDA ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCard {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: MeetingType,
    // Nomes resolvidos a partir dos IDs no momento da renderização
    pub participants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<MeetingMinutes>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaView {
    pub meetings: Vec<MeetingCard>,
    pub requests: Vec<MeetingRequest>,
}

// --- DOCUMENTOS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsView {
    pub documents: Vec<ClientDocument>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyDocumentsView {
    pub documents: Vec<ClientDocument>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendDocumentsView {
    pub accepted_formats: Vec<&'static str>,
    pub max_size_mb: u32,
}

// --- PARCEIROS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRow {
    pub user: User,
    // "Vigente" ou "Pendente"
    pub contract_status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnersManagementView {
    pub partners: Vec<PartnerRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContractView {
    pub contract: Option<PartnerContract>,
}

// --- CLIENTE PREMIUM ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyHoldingView {
    pub holding: HoldingData,
    pub usd_quote: UsdQuote,
    // Patrimônio convertido pela cotação do momento
    pub assets_value_usd: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreView {
    pub products: Vec<Product>,
    pub insurance: Vec<Product>,
    pub can_manage: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesView {
    pub services: Vec<ServiceItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    pub messages: Vec<ChatMessage>,
    pub departments: Vec<Department>,
}

// --- PESSOAS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleView {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyProfileView {
    pub user: User,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderConstructionView {
    pub message: String,
}
