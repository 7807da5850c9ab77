// src/services/access_policy.rs

// Política de acesso: qual menu cada perfil vê e em qual página cai após o login.
// A tabela abaixo é a única fonte da verdade. A ordem das linhas é a ordem do menu.

use crate::{
    common::error::AppError,
    models::rbac::{MenuEntry, PageId, Role},
};

struct MenuRow {
    page: PageId,
    label: &'static str,
    icon: &'static str,
    roles: &'static [Role],
}

const ALL: &[Role] = &Role::ALL;
const STAFF: &[Role] = &Role::STAFF;
const CLIENT: &[Role] = &[Role::Client];
const EXTERNAL: &[Role] = &[Role::ExternalPartner];
const HEARING: &[Role] = &[Role::HearingLawyer];
const ACCOUNTING: &[Role] = &[Role::Accounting];

const fn row(page: PageId, label: &'static str, icon: &'static str, roles: &'static [Role]) -> MenuRow {
    MenuRow { page, label, icon, roles }
}

const MENU: &[MenuRow] = &[
    row(PageId::Dashboard, "Dashboard", "layout-dashboard", ALL),
    // --- Cliente ---
    row(PageId::MyHolding, "My Holding", "building", CLIENT),
    row(PageId::MyDocuments, "Meus Documentos", "folder-open", CLIENT),
    row(PageId::SendDocuments, "Enviar Documentos", "file-text", CLIENT),
    row(PageId::ClientFinance, "Financeiro", "dollar-sign", CLIENT),
    row(PageId::ClientAccounting, "Contabilidade", "calculator", CLIENT),
    row(PageId::ClientAgenda, "Agenda & Reuniões", "calendar", CLIENT),
    row(PageId::Store, "Produtos A&M", "shopping-bag", CLIENT),
    row(PageId::Services, "Serviços", "briefcase", CLIENT),
    row(PageId::Chat, "Chat VIP", "message-square", CLIENT),
    // --- Parceiro externo ---
    row(PageId::Clients, "Meus Clientes", "user-check", EXTERNAL),
    row(PageId::Processes, "Processos Vinculados", "briefcase", EXTERNAL),
    row(PageId::PartnerAgenda, "Agenda & Reuniões", "calendar", EXTERNAL),
    row(PageId::PartnerContract, "Nosso Contrato", "handshake", EXTERNAL),
    row(PageId::Store, "Produtos A&M", "shopping-bag", EXTERNAL),
    // --- Audiencista ---
    row(PageId::HearingPanel, "Painel Audiencista", "mic", HEARING),
    row(PageId::MyProfile, "Área do Prestador", "user", HEARING),
    row(PageId::Chat, "Chat", "message-square", HEARING),
    // --- Contábil ---
    row(PageId::InternalNews, "Mural Interno", "newspaper", ACCOUNTING),
    row(PageId::AccountingClients, "Clientes Contábeis", "users", ACCOUNTING),
    row(PageId::AccountingDocs, "Gestão de Documentos", "folder-open", ACCOUNTING),
    row(PageId::AccountingTaxes, "Emissão de Guias", "file-text", ACCOUNTING),
    row(PageId::AccountingReports, "Relatórios Contábeis", "calculator", ACCOUNTING),
    row(PageId::Chat, "Chat", "message-square", ACCOUNTING),
    // --- Equipe interna ---
    row(PageId::InternalNews, "Mural Interno", "newspaper", STAFF),
    row(PageId::LegalNews, "Notícias Jurídicas", "scale", STAFF),
    row(PageId::Clients, "Clientes", "user-check", STAFF),
    row(PageId::Processes, "Processos Judiciais", "briefcase", STAFF),
    row(PageId::Meetings, "Agenda & Reuniões", "calendar", STAFF),
    row(PageId::Documents, "Gestão Documentos", "folder-open", STAFF),
    row(PageId::Finance, "Financeiro", "dollar-sign", &[Role::Partner, Role::Finance]),
    row(PageId::PartnersManagement, "Meus Parceiros", "user-cog", &[Role::Partner]),
    row(PageId::StoreAdmin, "Gestão Loja", "shopping-bag", &[Role::Partner]),
    row(PageId::People, "Cadastro Pessoas", "users", &[Role::Partner, Role::Admin, Role::Finance]),
    row(PageId::HearingsManage, "Audiencistas", "mic", &[Role::Partner, Role::Lawyer]),
    row(PageId::Chat, "Chat", "message-square", STAFF),
    row(PageId::MyProfile, "Área do Prestador", "user", STAFF),
];

/// Menu lateral do perfil, na ordem de exibição.
pub fn menu_for(role: Role) -> Vec<MenuEntry> {
    MENU.iter()
        .filter(|r| r.roles.contains(&role))
        .map(|r| MenuEntry { page_id: r.page, label: r.label, icon: r.icon })
        .collect()
}

pub fn landing_page_for(role: Role) -> PageId {
    match role {
        Role::HearingLawyer => PageId::HearingPanel,
        _ => PageId::Dashboard,
    }
}

pub fn can_access(role: Role, page: PageId) -> bool {
    MENU.iter().any(|r| r.page == page && r.roles.contains(&role))
}

/// Resolve o id pedido. `None` quando o id é desconhecido ou fora do menu do perfil.
pub fn resolve_page(role: Role, requested: &str) -> Option<PageId> {
    requested
        .parse::<PageId>()
        .ok()
        .filter(|page| can_access(role, *page))
}

// Ações restritas dentro de páginas compartilhadas pela equipe
pub fn can_post_news(role: Role) -> bool {
    matches!(role, Role::Partner | Role::Admin)
}

pub fn can_edit_processes(role: Role) -> bool {
    matches!(role, Role::Partner | Role::Finance | Role::Lawyer)
}

// Parceiro externo só consulta os próprios indicados
pub fn can_manage_clients(role: Role) -> bool {
    can_access(role, PageId::Clients) && role != Role::ExternalPartner
}

/// Guarda das mutações: o perfil precisa alcançar ao menos uma das páginas.
pub fn require_any(role: Role, pages: &[PageId]) -> Result<(), AppError> {
    if pages.iter().any(|p| can_access(role, *p)) {
        return Ok(());
    }
    let wanted = pages
        .iter()
        .map(PageId::as_str)
        .collect::<Vec<_>>()
        .join(" | ");
    Err(AppError::ForbiddenPage(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(role: Role) -> Vec<&'static str> {
        menu_for(role).iter().map(|e| e.page_id.as_str()).collect()
    }

    const STAFF_CORE: [&str; 7] = [
        "dashboard",
        "internal-news",
        "legal-news",
        "clients",
        "processes",
        "meetings",
        "documents",
    ];

    fn staff(extra: &[&'static str]) -> Vec<&'static str> {
        let mut v = STAFF_CORE.to_vec();
        v.extend_from_slice(extra);
        v.extend_from_slice(&["chat", "my-profile"]);
        v
    }

    #[test]
    fn client_menu() {
        assert_eq!(
            ids(Role::Client),
            vec![
                "dashboard",
                "my-holding",
                "my-documents",
                "send-documents",
                "client-finance",
                "client-accounting",
                "client-agenda",
                "store",
                "services",
                "chat",
            ]
        );
    }

    #[test]
    fn external_partner_menu() {
        assert_eq!(
            ids(Role::ExternalPartner),
            vec!["dashboard", "clients", "processes", "partner-agenda", "partner-contract", "store"]
        );
    }

    #[test]
    fn hearing_lawyer_menu() {
        assert_eq!(ids(Role::HearingLawyer), vec!["dashboard", "hearing-panel", "my-profile", "chat"]);
    }

    #[test]
    fn accounting_menu() {
        assert_eq!(
            ids(Role::Accounting),
            vec![
                "dashboard",
                "internal-news",
                "accounting-clients",
                "accounting-docs",
                "accounting-taxes",
                "accounting-reports",
                "chat",
            ]
        );
    }

    #[test]
    fn staff_menus() {
        assert_eq!(
            ids(Role::Partner),
            staff(&["finance", "partners-management", "store-admin", "people", "hearings-manage"])
        );
        assert_eq!(ids(Role::Finance), staff(&["finance", "people"]));
        assert_eq!(ids(Role::Admin), staff(&["people"]));
        assert_eq!(ids(Role::Lawyer), staff(&["hearings-manage"]));
        assert_eq!(ids(Role::Secretary), staff(&[]));
        assert_eq!(ids(Role::Analyst), staff(&[]));
    }

    #[test]
    fn labels_depend_on_the_role() {
        let client_chat = menu_for(Role::Client).into_iter().find(|e| e.page_id == PageId::Chat).unwrap();
        let staff_clients = menu_for(Role::Secretary).into_iter().find(|e| e.page_id == PageId::Clients).unwrap();
        let partner_clients = menu_for(Role::ExternalPartner).into_iter().find(|e| e.page_id == PageId::Clients).unwrap();

        assert_eq!(client_chat.label, "Chat VIP");
        assert_eq!(staff_clients.label, "Clientes");
        assert_eq!(partner_clients.label, "Meus Clientes");
    }

    #[test]
    fn every_menu_starts_with_dashboard_and_has_no_duplicates() {
        for role in Role::ALL {
            let menu = ids(role);
            assert_eq!(menu[0], "dashboard", "{role}");
            let unique: HashSet<_> = menu.iter().collect();
            assert_eq!(unique.len(), menu.len(), "{role}");
        }
    }

    #[test]
    fn landing_pages() {
        assert_eq!(landing_page_for(Role::HearingLawyer).as_str(), "hearing-panel");
        for role in Role::ALL.into_iter().filter(|r| *r != Role::HearingLawyer) {
            assert_eq!(landing_page_for(role).as_str(), "dashboard", "{role}");
        }
    }

    #[test]
    fn landing_page_is_always_in_the_menu() {
        for role in Role::ALL {
            assert!(can_access(role, landing_page_for(role)));
        }
    }

    #[test]
    fn resolve_page_rejects_unknown_and_foreign_pages() {
        assert_eq!(resolve_page(Role::Finance, "finance"), Some(PageId::Finance));
        assert_eq!(resolve_page(Role::Lawyer, "finance"), None);
        assert_eq!(resolve_page(Role::Client, "does-not-exist"), None);
    }

    #[test]
    fn restricted_actions() {
        assert!(can_post_news(Role::Admin));
        assert!(!can_post_news(Role::Lawyer));
        assert!(can_edit_processes(Role::Finance));
        assert!(!can_edit_processes(Role::Secretary));
        assert!(can_manage_clients(Role::Secretary));
        assert!(!can_manage_clients(Role::ExternalPartner));
        assert!(!can_manage_clients(Role::Client));
    }

    #[test]
    fn require_any_reports_forbidden_pages() {
        assert!(require_any(Role::Client, &[PageId::Meetings, PageId::ClientAgenda]).is_ok());
        let err = require_any(Role::Secretary, &[PageId::Finance]).unwrap_err();
        assert!(matches!(err, AppError::ForbiddenPage(p) if p == "finance"));
    }
}
