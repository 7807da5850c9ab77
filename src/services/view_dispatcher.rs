// src/services/view_dispatcher.rs

// Monta a visão de uma página para o usuário logado. A página passa sempre
// pela política de acesso: id desconhecido ou fora do menu do perfil vira
// "em construção" e nunca devolve dados de outro perfil.

use anyhow::anyhow;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{PortalData, PortalStore},
    models::{
        accounting::TaxGuideStatus,
        agenda::Meeting,
        auth::User,
        catalog::{ProductType, UsdQuote},
        documents::DocumentStatus,
        finance::InvoiceStatus,
        news::NewsItem,
        processes::DeadlineStatus,
        rbac::{PageId, Role},
        views::*,
    },
    services::{access_policy, chat_service, finance_service, hearing_service},
};

const DRIVE_URL: &str = "https://drive.google.com/drive/folders/1PgXyXUN12zakG8P5Md7sE8Oz70a4dici?usp=drive_link";

/// Dados externos à sessão usados por algumas páginas.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub today: NaiveDate,
    // Só é buscada quando a página é "my-holding"
    pub usd_quote: Option<UsdQuote>,
}

impl RenderContext {
    pub fn now(usd_quote: Option<UsdQuote>) -> Self {
        Self { today: Utc::now().date_naive(), usd_quote }
    }
}

/// Página efetivamente renderizada para o id pedido.
pub fn target(store: &PortalStore, requested: &str) -> Result<Option<PageId>, AppError> {
    let user = store.require_user()?;
    Ok(access_policy::resolve_page(user.role, requested.trim()))
}

pub fn needs_usd_quote(store: &PortalStore, requested: &str) -> Result<bool, AppError> {
    Ok(target(store, requested)? == Some(PageId::MyHolding))
}

pub fn render_current(store: &PortalStore, ctx: RenderContext) -> Result<RenderedPage, AppError> {
    render(store, store.current_page(), ctx)
}

pub fn render(store: &PortalStore, requested: &str, ctx: RenderContext) -> Result<RenderedPage, AppError> {
    let requested = requested.trim();
    let user = store.require_user()?;
    let data = store.data();

    let view = match access_policy::resolve_page(user.role, requested) {
        None => under_construction(requested),
        Some(page) => render_page(store, data, user, page, ctx)?,
    };

    Ok(RenderedPage { page_id: requested.to_string(), view })
}

fn under_construction(page: &str) -> PageView {
    PageView::UnderConstruction(UnderConstructionView {
        message: format!("O módulo \"{}\" será implementado em breve.", page),
    })
}

fn render_page(
    store: &PortalStore,
    data: &PortalData,
    user: &User,
    page: PageId,
    ctx: RenderContext,
) -> Result<PageView, AppError> {
    let view = match page {
        PageId::Dashboard => dashboard(data, user, ctx),
        PageId::HearingPanel => hearing_panel(data, user),
        PageId::InternalNews => PageView::InternalNews(news_feed(data, user)),
        PageId::LegalNews => PageView::LegalNews(LegalNewsView { items: data.legal_news.clone() }),
        PageId::Clients => PageView::Clients(clients(data, user)),
        PageId::Processes => PageView::Processes(processes(data, user)),
        PageId::Finance => PageView::Finance(FinanceView {
            summary: finance_service::summary(&data.financial_records),
            records: data.financial_records.clone(),
        }),
        PageId::Meetings => PageView::Agenda(AgendaView {
            meetings: data.meetings.iter().map(|m| meeting_card(data, m)).collect(),
            requests: data.meeting_requests.clone(),
        }),
        PageId::ClientAgenda | PageId::PartnerAgenda => PageView::Agenda(AgendaView {
            meetings: data
                .meetings
                .iter()
                .filter(|m| m.includes(&user.id))
                .map(|m| meeting_card(data, m))
                .collect(),
            requests: data
                .meeting_requests
                .iter()
                .filter(|r| r.client_id == user.id)
                .cloned()
                .collect(),
        }),
        PageId::Documents => PageView::Documents(DocumentsView { documents: data.documents.clone() }),
        PageId::MyDocuments => PageView::MyDocuments(MyDocumentsView {
            documents: data.documents.iter().filter(|d| d.visible_to_client).cloned().collect(),
        }),
        PageId::SendDocuments => PageView::SendDocuments(SendDocumentsView {
            accepted_formats: vec!["PDF", "JPG", "PNG"],
            max_size_mb: 10,
        }),
        PageId::ClientFinance => PageView::ClientFinance(ClientFinanceView {
            invoices: data.invoices.iter().filter(|i| i.client_id == user.id).cloned().collect(),
        }),
        PageId::ClientAccounting => PageView::ClientAccounting(ClientAccountingView {
            guides: data.tax_guides.iter().filter(|g| g.client_id == user.id).cloned().collect(),
            irpf_requests: data.irpf_requests.iter().filter(|r| r.client_id == user.id).cloned().collect(),
        }),
        PageId::PartnersManagement => PageView::PartnersManagement(PartnersManagementView {
            partners: external_partners(data)
                .into_iter()
                .map(|partner| {
                    let has_contract = data.partner_contracts.iter().any(|c| c.partner_id == partner.id);
                    PartnerRow {
                        user: partner,
                        contract_status: if has_contract { "Vigente" } else { "Pendente" },
                    }
                })
                .collect(),
        }),
        PageId::PartnerContract => PageView::PartnerContract(PartnerContractView {
            contract: data.partner_contracts.iter().find(|c| c.partner_id == user.id).cloned(),
        }),
        PageId::MyHolding => {
            let usd_quote = ctx
                .usd_quote
                .ok_or_else(|| AppError::InternalServerError(anyhow!("Cotação do dólar não carregada")))?;
            let assets_value_usd = data
                .holding
                .assets_value_brl
                .checked_div(usd_quote.rate)
                .unwrap_or(Decimal::ZERO)
                .round_dp(2);
            PageView::MyHolding(MyHoldingView { holding: data.holding.clone(), usd_quote, assets_value_usd })
        }
        PageId::Store | PageId::StoreAdmin => {
            let (insurance, products): (Vec<_>, Vec<_>) = data
                .products
                .iter()
                .cloned()
                .partition(|p| p.kind == ProductType::Seguro);
            PageView::Store(StoreView { products, insurance, can_manage: page == PageId::StoreAdmin })
        }
        PageId::Services => PageView::Services(ServicesView { services: data.services.clone() }),
        PageId::Chat => PageView::Chat(ChatView {
            messages: chat_service::thread(store),
            departments: chat_service::DEPARTMENTS.to_vec(),
        }),
        PageId::HearingsManage => PageView::HearingsManage(HearingsManageView {
            requests: data.hearings.clone(),
            processes: data.processes.clone(),
        }),
        PageId::People => PageView::People(PeopleView { users: data.users.clone() }),
        PageId::MyProfile => PageView::MyProfile(MyProfileView { user: user.clone() }),
        PageId::AccountingClients
        | PageId::AccountingDocs
        | PageId::AccountingTaxes
        | PageId::AccountingReports => under_construction(page.as_str()),
    };
    Ok(view)
}

// =============================================================================
//  DASHBOARDS
// =============================================================================

fn dashboard(data: &PortalData, user: &User, ctx: RenderContext) -> PageView {
    match user.role {
        Role::Client => PageView::ClientDashboard(ClientDashboardView {
            greeting: format!("Olá, {}", user.name),
            processes: data.processes.iter().filter(|p| p.client_id == user.id).cloned().collect(),
            pending_invoices: data
                .invoices
                .iter()
                .filter(|i| i.client_id == user.id && i.status != InvoiceStatus::Paid)
                .count(),
            visible_documents: data.documents.iter().filter(|d| d.visible_to_client).count(),
            featured_service: "Proteção Patrimonial",
        }),
        Role::ExternalPartner => PageView::PartnerDashboard(PartnerDashboardView {
            title: "Portal do Parceiro",
            shortcuts: vec![
                Shortcut {
                    page_id: PageId::Clients,
                    title: "Meus Indicados",
                    description: "Acompanhe os clientes que você indicou.",
                },
                Shortcut {
                    page_id: PageId::Processes,
                    title: "Processos",
                    description: "Status dos processos vinculados a sua parceria.",
                },
                Shortcut {
                    page_id: PageId::PartnerContract,
                    title: "Contrato & Comissões",
                    description: "Acesse seu contrato e regras de comissionamento.",
                },
            ],
        }),
        Role::Accounting => PageView::AccountingDashboard(AccountingDashboardView {
            guides_issued: data.tax_guides.len(),
            pending_guides: data
                .tax_guides
                .iter()
                .filter(|g| g.status == TaxGuideStatus::Pendente)
                .count(),
            irpf_requests: data.irpf_requests.len(),
        }),
        Role::HearingLawyer => hearing_panel(data, user),
        _ => internal_dashboard(data, user, ctx.today),
    }
}

fn internal_dashboard(data: &PortalData, user: &User, today: NaiveDate) -> PageView {
    let stats = DashboardStats {
        active_processes: data.processes.len(),
        deadlines_today: data
            .deadlines
            .iter()
            .filter(|d| d.due_date == today && d.status != DeadlineStatus::Done)
            .count(),
        meetings: data.meetings.len(),
        pending_documents: data
            .documents
            .iter()
            .filter(|d| d.status == Some(DocumentStatus::Pendente))
            .count(),
    };

    let mut latest_news = news_feed(data, user).items;
    latest_news.truncate(3);

    PageView::InternalDashboard(InternalDashboardView {
        stats,
        latest_news,
        shortcuts: vec![
            Shortcut { page_id: PageId::Clients, title: "Consultar Clientes", description: "Cadastro de clientes PF e PJ." },
            Shortcut { page_id: PageId::Processes, title: "Consultar Processo", description: "Processos e prazos do escritório." },
            Shortcut { page_id: PageId::Meetings, title: "Minha Agenda", description: "Reuniões internas e com clientes." },
        ],
        drive_url: DRIVE_URL,
    })
}

fn hearing_panel(data: &PortalData, user: &User) -> PageView {
    PageView::HearingPanel(HearingPanelView {
        pending: hearing_service::pending(&data.hearings),
        my_schedule: hearing_service::schedule_of(&data.hearings, &user.id),
    })
}

// =============================================================================
//  MURAL
// =============================================================================

fn news_card(item: &NewsItem, show_readers: bool) -> NewsCard {
    NewsCard {
        id: item.id.clone(),
        title: item.title.clone(),
        summary: item.summary.clone(),
        content: item.content.clone(),
        date: item.date,
        author: item.author.clone(),
        media_type: item.media_type,
        media_url: item.media_url.clone(),
        read_by: show_readers.then(|| item.read_by.iter().map(|r| r.name.clone()).collect()),
    }
}

/// Só os comunicados ainda não lidos pelo usuário, mais recentes primeiro.
fn news_feed(data: &PortalData, user: &User) -> NewsFeedView {
    let show_readers = user.role == Role::Partner;

    let mut unread: Vec<&NewsItem> = data.news.iter().filter(|n| !n.is_read_by(&user.id)).collect();
    // sort_by é estável: empates mantêm a ordem de inserção
    unread.sort_by(|a, b| b.date.cmp(&a.date));

    NewsFeedView {
        items: unread.into_iter().map(|n| news_card(n, show_readers)).collect(),
        can_post: access_policy::can_post_news(user.role),
    }
}

// =============================================================================
//  CLIENTES, PROCESSOS E AGENDA
// =============================================================================

fn external_partners(data: &PortalData) -> Vec<User> {
    data.users
        .iter()
        .filter(|u| u.role == Role::ExternalPartner)
        .cloned()
        .collect()
}

fn users_with_role(data: &PortalData, role: Role) -> Vec<User> {
    data.users.iter().filter(|u| u.role == role).cloned().collect()
}

fn clients(data: &PortalData, user: &User) -> ClientsView {
    let is_partner = user.role == Role::ExternalPartner;

    ClientsView {
        // Parceiro externo só vê os clientes que indicou
        clients: data
            .clients
            .iter()
            .filter(|c| !is_partner || c.partner_id.as_deref() == Some(user.id.as_str()))
            .cloned()
            .collect(),
        partners: external_partners(data),
        can_manage: !is_partner,
    }
}

fn processes(data: &PortalData, user: &User) -> ProcessesView {
    let visible: Vec<_> = if user.role == Role::ExternalPartner {
        let referred: Vec<&str> = data
            .clients
            .iter()
            .filter(|c| c.partner_id.as_deref() == Some(user.id.as_str()))
            .map(|c| c.id.as_str())
            .collect();
        data.processes
            .iter()
            .filter(|p| referred.contains(&p.client_id.as_str()))
            .cloned()
            .collect()
    } else {
        data.processes.clone()
    };

    let deadlines = data
        .deadlines
        .iter()
        .filter(|d| visible.iter().any(|p| p.id == d.process_id) || user.role != Role::ExternalPartner)
        .cloned()
        .collect();

    ProcessesView {
        processes: visible,
        deadlines,
        assignable: AssignableUsers {
            partners: users_with_role(data, Role::Partner),
            lawyers: users_with_role(data, Role::Lawyer),
            finance: users_with_role(data, Role::Finance),
        },
        can_edit: access_policy::can_edit_processes(user.role),
    }
}

fn meeting_card(data: &PortalData, meeting: &Meeting) -> MeetingCard {
    MeetingCard {
        id: meeting.id.clone(),
        title: meeting.title.clone(),
        date: meeting.date,
        time: meeting.time.clone(),
        kind: meeting.kind,
        participants: meeting
            .participant_ids
            .iter()
            .filter_map(|id| data.user(id).map(|u| u.name.clone()))
            .collect(),
        link: meeting.link.clone(),
        minutes: meeting.minutes.clone(),
    }
}
