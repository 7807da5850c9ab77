// src/models/rbac.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

// --- Perfis de acesso ---

// Os valores serializados são os mesmos usados pelo front-end do escritório.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[serde(rename = "SOCIO")]
    Partner,
    #[serde(rename = "FINANCEIRO")]
    Finance,
    #[serde(rename = "ADMINISTRATIVO")]
    Admin,
    #[serde(rename = "ADVOGADO")]
    Lawyer,
    #[serde(rename = "SECRETARIO")]
    Secretary,
    #[serde(rename = "ANALISTA")]
    Analyst,
    #[serde(rename = "CLIENTE")]
    Client,
    #[serde(rename = "PARCEIRO")]
    ExternalPartner,
    #[serde(rename = "CONTABIL")]
    Accounting,
    #[serde(rename = "AUDIENCISTA")]
    HearingLawyer,
}

impl Role {
    pub const ALL: [Role; 10] = [
        Role::Partner,
        Role::Finance,
        Role::Admin,
        Role::Lawyer,
        Role::Secretary,
        Role::Analyst,
        Role::Client,
        Role::ExternalPartner,
        Role::Accounting,
        Role::HearingLawyer,
    ];

    /// Equipe interna (sócios, advogados, administrativo, financeiro, secretaria, analistas).
    pub const STAFF: [Role; 6] = [
        Role::Partner,
        Role::Lawyer,
        Role::Admin,
        Role::Finance,
        Role::Secretary,
        Role::Analyst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Partner => "SOCIO",
            Role::Finance => "FINANCEIRO",
            Role::Admin => "ADMINISTRATIVO",
            Role::Lawyer => "ADVOGADO",
            Role::Secretary => "SECRETARIO",
            Role::Analyst => "ANALISTA",
            Role::Client => "CLIENTE",
            Role::ExternalPartner => "PARCEIRO",
            Role::Accounting => "CONTABIL",
            Role::HearingLawyer => "AUDIENCISTA",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Páginas do portal ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Dashboard,
    // Cliente
    MyHolding,
    MyDocuments,
    SendDocuments,
    ClientFinance,
    ClientAccounting,
    ClientAgenda,
    Store,
    Services,
    Chat,
    // Parceiro externo
    Clients,
    Processes,
    PartnerAgenda,
    PartnerContract,
    // Audiencista
    HearingPanel,
    MyProfile,
    // Contábil
    InternalNews,
    AccountingClients,
    AccountingDocs,
    AccountingTaxes,
    AccountingReports,
    // Equipe interna
    LegalNews,
    Meetings,
    Documents,
    Finance,
    PartnersManagement,
    StoreAdmin,
    People,
    HearingsManage,
}

impl PageId {
    pub const ALL: [PageId; 29] = [
        PageId::Dashboard,
        PageId::MyHolding,
        PageId::MyDocuments,
        PageId::SendDocuments,
        PageId::ClientFinance,
        PageId::ClientAccounting,
        PageId::ClientAgenda,
        PageId::Store,
        PageId::Services,
        PageId::Chat,
        PageId::Clients,
        PageId::Processes,
        PageId::PartnerAgenda,
        PageId::PartnerContract,
        PageId::HearingPanel,
        PageId::MyProfile,
        PageId::InternalNews,
        PageId::AccountingClients,
        PageId::AccountingDocs,
        PageId::AccountingTaxes,
        PageId::AccountingReports,
        PageId::LegalNews,
        PageId::Meetings,
        PageId::Documents,
        PageId::Finance,
        PageId::PartnersManagement,
        PageId::StoreAdmin,
        PageId::People,
        PageId::HearingsManage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::MyHolding => "my-holding",
            PageId::MyDocuments => "my-documents",
            PageId::SendDocuments => "send-documents",
            PageId::ClientFinance => "client-finance",
            PageId::ClientAccounting => "client-accounting",
            PageId::ClientAgenda => "client-agenda",
            PageId::Store => "store",
            PageId::Services => "services",
            PageId::Chat => "chat",
            PageId::Clients => "clients",
            PageId::Processes => "processes",
            PageId::PartnerAgenda => "partner-agenda",
            PageId::PartnerContract => "partner-contract",
            PageId::HearingPanel => "hearing-panel",
            PageId::MyProfile => "my-profile",
            PageId::InternalNews => "internal-news",
            PageId::AccountingClients => "accounting-clients",
            PageId::AccountingDocs => "accounting-docs",
            PageId::AccountingTaxes => "accounting-taxes",
            PageId::AccountingReports => "accounting-reports",
            PageId::LegalNews => "legal-news",
            PageId::Meetings => "meetings",
            PageId::Documents => "documents",
            PageId::Finance => "finance",
            PageId::PartnersManagement => "partners-management",
            PageId::StoreAdmin => "store-admin",
            PageId::People => "people",
            PageId::HearingsManage => "hearings-manage",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Página desconhecida (o id não pertence ao portal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

// O que o menu lateral recebe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    #[schema(example = "dashboard")]
    pub page_id: PageId,

    #[schema(example = "Dashboard")]
    pub label: &'static str,

    // Nome do ícone (lucide) usado pelo front-end
    #[schema(example = "layout-dashboard")]
    pub icon: &'static str,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigatePayload {
    #[schema(example = "finance")]
    pub page: String,
}
