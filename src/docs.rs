// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Sessões ---
        handlers::auth::open_session,
        handlers::auth::close_session,

        // --- Auth ---
        handlers::auth::login,
        handlers::auth::logout,

        // --- Usuários ---
        handlers::auth::get_me,
        handlers::auth::update_avatar,

        // --- Navegação ---
        handlers::navigation::get_menu,
        handlers::navigation::navigate,
        handlers::navigation::get_current_page,
        handlers::navigation::get_page,

        // --- CRM ---
        handlers::crm::create_client,
        handlers::crm::delete_client,
        handlers::crm::create_person,
        handlers::crm::create_partner,

        // --- Mural ---
        handlers::news::publish_news,
        handlers::news::mark_news_read,

        // --- Financeiro ---
        handlers::finance::get_summary,
        handlers::finance::create_record,
        handlers::finance::delete_record,

        // --- Documentos ---
        handlers::documents::create_document,
        handlers::documents::delete_document,

        // --- Processos ---
        handlers::processes::create_deadline,
        handlers::processes::add_process_event,

        // --- Agenda ---
        handlers::agenda::request_meeting,

        // --- Área do Cliente ---
        handlers::accounting::pay_invoice,
        handlers::accounting::pay_tax_guide,
        handlers::accounting::request_irpf,

        // --- Audiências ---
        handlers::hearings::request_hearing,
        handlers::hearings::accept_hearing,
        handlers::hearings::reject_hearing,
        handlers::hearings::submit_hearing_return,

        // --- Chat ---
        handlers::chat::send_message,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::NewUserPayload,
            models::auth::SessionResponse,
            models::auth::LoginResponse,
            models::auth::AvatarResponse,

            // --- RBAC ---
            models::rbac::Role,
            models::rbac::PageId,
            models::rbac::MenuEntry,
            models::rbac::NavigatePayload,

            // --- CRM ---
            models::crm::ClientKind,
            models::crm::ClientStatus,
            models::crm::Client,
            models::crm::NewClientPayload,

            // --- Processos ---
            models::processes::ProcessCategory,
            models::processes::Process,
            models::processes::ProcessEvent,
            models::processes::DeadlineStatus,
            models::processes::ProcessDeadline,
            models::processes::NewDeadlinePayload,
            models::processes::NewProcessEventPayload,

            // --- Financeiro ---
            models::finance::RecordKind,
            models::finance::RecordStatus,
            models::finance::FeeType,
            models::finance::FinancialRecord,
            models::finance::FinanceSummary,
            models::finance::NewFinancialRecordPayload,
            models::finance::InvoiceStatus,
            models::finance::ClientInvoice,

            // --- Documentos ---
            models::documents::DocumentType,
            models::documents::DocumentStatus,
            models::documents::ClientDocument,
            models::documents::NewDocumentPayload,
            models::documents::PartnerContract,

            // --- Mural e notícias ---
            models::news::MediaType,
            models::news::ReadReceipt,
            models::news::NewsItem,
            models::news::NewNewsPayload,
            models::news::Tribunal,
            models::news::LegalNews,

            // --- Agenda ---
            models::agenda::MeetingType,
            models::agenda::MeetingMinutes,
            models::agenda::Meeting,
            models::agenda::MeetingRequestStatus,
            models::agenda::MeetingRequest,
            models::agenda::NewMeetingRequestPayload,

            // --- Contabilidade ---
            models::accounting::TaxGuideType,
            models::accounting::TaxGuideStatus,
            models::accounting::TaxGuide,
            models::accounting::IrpfStatus,
            models::accounting::IrpfRequest,
            models::accounting::NewIrpfPayload,

            // --- Audiências ---
            models::hearings::HearingMode,
            models::hearings::HearingType,
            models::hearings::HearingStatus,
            models::hearings::HearingReturn,
            models::hearings::HearingRequest,
            models::hearings::NewHearingPayload,
            models::hearings::HearingReturnPayload,

            // --- Loja e holding ---
            models::catalog::ProductType,
            models::catalog::Product,
            models::catalog::ServiceItem,
            models::catalog::Investment,
            models::catalog::HoldingData,
            models::catalog::QuoteSource,
            models::catalog::UsdQuote,

            // --- Chat ---
            models::chat::Department,
            models::chat::ChatMessage,
            models::chat::SendChatPayload,
        )
    ),
    tags(
        (name = "Sessões", description = "Abertura e descarte das sessões (cada uma com seus dados)"),
        (name = "Autenticação", description = "Login e logout dentro da sessão"),
        (name = "Usuários", description = "Usuário logado e avatar"),
        (name = "Navegação", description = "Menu por perfil e renderização das páginas"),
        (name = "Clientes", description = "Cadastro de clientes"),
        (name = "Pessoas", description = "Equipe interna e parceiros externos"),
        (name = "Mural", description = "Comunicados internos"),
        (name = "Financeiro", description = "Lançamentos e resumo financeiro"),
        (name = "Documentos", description = "Documentos do escritório"),
        (name = "Processos", description = "Prazos e andamentos"),
        (name = "Agenda", description = "Solicitações de reunião"),
        (name = "Área do Cliente", description = "Faturas, guias e IRPF"),
        (name = "Audiências", description = "Fluxo de audiências e audiencistas"),
        (name = "Chat", description = "Atendimento virtual")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
