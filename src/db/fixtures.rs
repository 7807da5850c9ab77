// src/db/fixtures.rs

// Massa de dados inicial de cada sessão. Os ids são fixos para que o front-end
// e os testes possam referenciar os registros diretamente.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    db::portal_store::PortalData,
    models::{
        accounting::{IrpfRequest, IrpfStatus, TaxGuide, TaxGuideStatus, TaxGuideType},
        agenda::{Meeting, MeetingType},
        auth::User,
        catalog::{HoldingData, Investment, Product, ProductType, ServiceItem},
        crm::{Client, ClientKind, ClientStatus},
        documents::{ClientDocument, DocumentStatus, DocumentType, PartnerContract},
        finance::{ClientInvoice, FinancialRecord, InvoiceStatus, RecordKind, RecordStatus},
        hearings::{HearingMode, HearingRequest, HearingStatus, HearingType},
        news::{LegalNews, MediaType, NewsItem, Tribunal},
        processes::{DeadlineStatus, Process, ProcessCategory, ProcessDeadline, ProcessEvent},
        rbac::Role,
    },
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn brl(value: i64) -> Decimal {
    Decimal::new(value, 0)
}

pub fn seed() -> PortalData {
    PortalData {
        users: users(),
        clients: clients(),
        news: news(),
        legal_news: legal_news(),
        documents: documents(),
        financial_records: financial_records(),
        meetings: meetings(),
        processes: processes(),
        deadlines: deadlines(),
        invoices: invoices(),
        meeting_requests: Vec::new(),
        tax_guides: tax_guides(),
        irpf_requests: irpf_requests(),
        hearings: hearings(),
        partner_contracts: partner_contracts(),
        products: products(),
        services: services(),
        holding: holding(),
    }
}

// =============================================================================
//  PESSOAS
// =============================================================================

fn users() -> Vec<User> {
    let mut audiencista = User::new("13", "Dr. João Audiencista", "audiencia@adv.com", Role::HearingLawyer);
    audiencista.oab = Some("123456".into());
    audiencista.uf_oab = Some("RJ".into());
    audiencista.whatsapp = Some("21988887777".into());

    vec![
        User::new("1", "Gustavo Mosinho", "gustavomosinho@alcidesemosinho.com", Role::Partner),
        User::new("2", "Matheus Mosinho", "matheusmosinho@alcidesemosinho.com", Role::Partner),
        User::new("3", "Vitor Mosinho", "vitormosinho@alcidesemosinho.com", Role::Partner),
        User::new("4", "Alex Borchevski", "alexborchevski@alcidesemosinho.com", Role::Partner),
        User::new("5", "Bianca Porto", "biancaporto@alcidesemosinho.com", Role::Lawyer),
        User::new("6", "Larissa Bittencourt", "larissabitencourt@alcidesemosinho.com", Role::Lawyer),
        User::new("7", "Rodrigo Bafica", "rodrigobafica@alcidesemosinho.com", Role::Lawyer),
        User::new("8", "Financeiro", "financeiro@alcidesemosinho.com", Role::Finance),
        User::new("9", "Secretaria", "secretaria@alcidesemosinho.com", Role::Secretary),
        User::new("10", "João Cliente", "cliente@gmail.com", Role::Client),
        User::new("11", "Dr. Parceiro Externo", "parceiro@externo.com", Role::ExternalPartner),
        User::new("12", "Setor Contábil", "contabil@alcidesemosinho.com", Role::Accounting),
        audiencista,
    ]
}

fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "10".into(),
            kind: ClientKind::Pf,
            name: "João Cliente".into(),
            document: "123.456.789-00".into(),
            email: "cliente@gmail.com".into(),
            phone: "(21) 99999-9999".into(),
            address: "Rua das Flores, 123, Centro - RJ".into(),
            rg: Some("12.345.678-9".into()),
            birth_date: Some(date(1985, 5, 20)),
            representative: None,
            status: ClientStatus::Ativo,
            partner_id: Some("11".into()),
        },
        Client {
            id: "99".into(),
            kind: ClientKind::Pj,
            name: "Construtora XYZ Ltda".into(),
            document: "12.345.678/0001-99".into(),
            email: "contato@construtoraxyz.com.br".into(),
            phone: "(21) 3333-4444".into(),
            address: "Av. das Américas, 5000, Barra - RJ".into(),
            rg: None,
            birth_date: None,
            representative: Some("Carlos Construtor".into()),
            status: ClientStatus::Ativo,
            partner_id: None,
        },
    ]
}

fn partner_contracts() -> Vec<PartnerContract> {
    vec![PartnerContract {
        id: "pc1".into(),
        partner_id: "11".into(),
        title: "Contrato de Parceria Jurídica - 2024".into(),
        date: date(2024, 1, 15),
        url: "#".into(),
    }]
}

// =============================================================================
//  COMUNICAÇÃO
// =============================================================================

fn news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "n1".into(),
            title: "Nova Política de Honorários".into(),
            summary: "Atualização na tabela de honorários mínimos para 2024.".into(),
            content: "Caros colaboradores, a tabela de honorários foi reajustada conforme a OAB/RJ...".into(),
            date: date(2024, 5, 20),
            author: "Dr. Gustavo Mosinho".into(),
            audience: vec![Role::Partner, Role::Lawyer, Role::Finance, Role::Accounting],
            read_by: Vec::new(),
            media_type: Some(MediaType::Text),
            media_url: None,
        },
        NewsItem {
            id: "n2".into(),
            title: "Tutorial do Novo Sistema".into(),
            summary: "Vídeo explicativo sobre o cadastro de processos.".into(),
            content: "Assistam o vídeo abaixo para entender as mudanças.".into(),
            date: date(2024, 5, 22),
            author: "TI".into(),
            audience: vec![Role::Partner, Role::Lawyer, Role::Admin, Role::Secretary],
            read_by: Vec::new(),
            media_type: Some(MediaType::Video),
            media_url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ".into()),
        },
    ]
}

fn legal_news() -> Vec<LegalNews> {
    vec![
        LegalNews {
            id: "ln1".into(),
            tribunal: Tribunal::Stf,
            title: "STF valida regime de separação de bens para maiores de 70 anos".into(),
            summary: "Decisão tem repercussão geral e afeta sucessões e divórcios.".into(),
            date: date(2024, 5, 21),
            url: "#".into(),
        },
        LegalNews {
            id: "ln2".into(),
            tribunal: Tribunal::Stj,
            title: "Terceira Turma define competência para julgar dissolução de sociedade".into(),
            summary: "Entendimento pacifica conflitos entre juízos cíveis e empresariais.".into(),
            date: date(2024, 5, 20),
            url: "#".into(),
        },
        LegalNews {
            id: "ln3".into(),
            tribunal: Tribunal::Tst,
            title: "Empresa é condenada por exigir certidão de antecedentes criminais".into(),
            summary: "Prática foi considerada discriminatória pela corte trabalhista.".into(),
            date: date(2024, 5, 19),
            url: "#".into(),
        },
    ]
}

fn meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: "m1".into(),
            title: "Reunião de Sócios".into(),
            date: date(2024, 5, 25),
            time: "14:00".into(),
            kind: MeetingType::Internal,
            participant_ids: vec!["1".into(), "2".into(), "3".into()],
            link: Some("https://meet.google.com/abc-defg-hij".into()),
            minutes: None,
        },
        Meeting {
            id: "m2".into(),
            title: "Atendimento: João Cliente".into(),
            date: date(2024, 5, 26),
            time: "10:00".into(),
            kind: MeetingType::Client,
            participant_ids: vec!["5".into(), "10".into()],
            link: Some("https://meet.google.com/xyz-wdwd-wed".into()),
            minutes: None,
        },
        Meeting {
            id: "m3".into(),
            title: "Alinhamento com Parceiro".into(),
            date: date(2024, 5, 27),
            time: "15:00".into(),
            kind: MeetingType::Client,
            participant_ids: vec!["1".into(), "11".into()],
            link: Some("https://meet.google.com/parceiro-link".into()),
            minutes: None,
        },
    ]
}

// =============================================================================
//  FINANCEIRO
// =============================================================================

fn financial_records() -> Vec<FinancialRecord> {
    vec![
        FinancialRecord::new("f1", RecordKind::Income, "Honorários", brl(15000), date(2024, 5, 1), "Cliente João Silva - Inicial", RecordStatus::Paid),
        FinancialRecord::new("f2", RecordKind::Expense, "Aluguel", brl(4500), date(2024, 5, 5), "Aluguel Escritório Centro", RecordStatus::Paid),
        FinancialRecord::new("f3", RecordKind::Income, "Sucumbência", brl(8200), date(2024, 5, 10), "Proc. 00234-99", RecordStatus::Pending),
        FinancialRecord::new("f4", RecordKind::Expense, "Software", brl(1200), date(2024, 5, 15), "Licença Sistema Jurídico", RecordStatus::Paid),
        FinancialRecord::new("f5", RecordKind::Expense, "Folha", brl(25000), date(2024, 5, 30), "Pagamento Colaboradores", RecordStatus::Pending),
    ]
}

fn invoices() -> Vec<ClientInvoice> {
    let invoice = |id: &str, description: &str, cents: i64, due: NaiveDate, status| ClientInvoice {
        id: id.into(),
        client_id: "10".into(),
        description: description.into(),
        amount: Decimal::new(cents, 2),
        due_date: due,
        status,
        payment_url: None,
    };

    vec![
        invoice("inv1", "Honorários Mensais - 05/2024", 250000, date(2024, 5, 10), InvoiceStatus::Pending),
        invoice("inv2", "Diligência Processual", 35000, date(2024, 5, 15), InvoiceStatus::Pending),
        invoice("inv3", "Honorários Iniciais", 500000, date(2024, 4, 10), InvoiceStatus::Paid),
    ]
}

// =============================================================================
//  PROCESSOS
// =============================================================================

fn processes() -> Vec<Process> {
    vec![
        Process {
            id: "p1".into(),
            cnj: "0012345-88.2024.5.01.0001".into(),
            client_name: "João Cliente".into(),
            client_id: "10".into(),
            category: ProcessCategory::Trabalhista,
            status: "Aguardando Audiência".into(),
            drive_folder_id: "folder_abc_123".into(),
            next_deadline: Some(date(2024, 6, 15)),
            events: vec![
                ProcessEvent {
                    id: "e1".into(),
                    date: date(2024, 1, 10),
                    title: "Distribuição".into(),
                    description: "Processo distribuído para 1ª VT/RJ".into(),
                },
                ProcessEvent {
                    id: "e2".into(),
                    date: date(2024, 2, 15),
                    title: "Notificação".into(),
                    description: "Reclamada notificada".into(),
                },
            ],
        },
        Process {
            id: "p2".into(),
            cnj: "0098765-11.2023.8.19.0001".into(),
            client_name: "Construtora XYZ".into(),
            client_id: "99".into(),
            category: ProcessCategory::Civel,
            status: "Concluso para Sentença".into(),
            drive_folder_id: "folder_xyz_999".into(),
            next_deadline: None,
            events: Vec::new(),
        },
    ]
}

fn deadlines() -> Vec<ProcessDeadline> {
    vec![ProcessDeadline {
        id: "dl1".into(),
        process_id: "p1".into(),
        cnj: "0012345-88.2024.5.01.0001".into(),
        title: "Réplica à Contestação".into(),
        description: "Apresentar réplica referente à defesa da reclamada.".into(),
        due_date: date(2024, 6, 15),
        assignees: vec!["5".into()],
        assignee_names: vec!["Bianca Porto".into()],
        status: DeadlineStatus::Pending,
    }]
}

fn hearings() -> Vec<HearingRequest> {
    vec![HearingRequest {
        id: "h1".into(),
        process_id: "p1".into(),
        requester_id: "5".into(),
        audiencista_id: None,
        date: date(2024, 6, 1),
        time: "14:00".into(),
        location: "1ª VT/RJ".into(),
        mode: HearingMode::Presencial,
        kind: HearingType::Instrucao,
        value: brl(300),
        status: HearingStatus::Solicitada,
        minutes_url: None,
        return_form: None,
    }]
}

// =============================================================================
//  DOCUMENTOS E CONTÁBIL
// =============================================================================

fn documents() -> Vec<ClientDocument> {
    let doc = |id: &str, title: &str, kind, day: NaiveDate, visible: bool| ClientDocument {
        id: id.into(),
        title: title.into(),
        kind,
        date: day,
        url: "#".into(),
        visible_to_client: visible,
        status: Some(DocumentStatus::Validado),
    };

    vec![
        doc("d1", "Contrato de Honorários", DocumentType::Contrato, date(2024, 1, 5), true),
        doc("d2", "Procuração Ad Judicia", DocumentType::Procuracao, date(2024, 1, 5), true),
        doc("d3", "Petição Inicial", DocumentType::Peticao, date(2024, 1, 10), false),
    ]
}

fn tax_guides() -> Vec<TaxGuide> {
    let guide = |id: &str, client: &str, kind, description: &str, cents: i64, due: NaiveDate, status| TaxGuide {
        id: id.into(),
        client_id: client.into(),
        kind,
        description: description.into(),
        value: Decimal::new(cents, 2),
        due_date: due,
        status,
        file_url: None,
    };

    vec![
        guide("g1", "99", TaxGuideType::Das, "Simples Nacional - 05/2024", 125000, date(2024, 5, 20), TaxGuideStatus::Pendente),
        guide("g2", "99", TaxGuideType::Fgts, "FGTS Folha 04/2024", 89000, date(2024, 5, 7), TaxGuideStatus::Pago),
        guide("g3", "10", TaxGuideType::Darf, "Carnê Leão", 15000, date(2024, 5, 30), TaxGuideStatus::Enviado),
    ]
}

fn irpf_requests() -> Vec<IrpfRequest> {
    vec![IrpfRequest {
        id: "ir1".into(),
        client_id: "10".into(),
        year: 2024,
        status: IrpfStatus::EmAnalise,
        request_date: date(2024, 3, 15),
        final_document_url: None,
    }]
}

// =============================================================================
//  LOJA, SERVIÇOS E HOLDING
// =============================================================================

fn products() -> Vec<Product> {
    let product = |id: &str, kind, title: &str, description: &str, price: i64| Product {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        price: brl(price),
        kind,
        image_url: None,
    };

    vec![
        product("prod1", ProductType::Ebook, "Guia de Proteção Patrimonial", "Aprenda como blindar seu patrimônio.", 97),
        product("prod2", ProductType::Video, "Curso de Holding Familiar", "Aulas completas sobre constituição de holding.", 497),
        product("prod3", ProductType::Seguro, "Seguro de Responsabilidade Civil", "Proteção para profissionais liberais.", 1500),
    ]
}

fn services() -> Vec<ServiceItem> {
    [
        ("s1", "Direito Tributário", "Defesa em execuções e planejamento tributário."),
        ("s2", "Holding Familiar", "Planejamento sucessório e proteção de bens."),
        ("s3", "Compliance Empresarial", "Adequação legal para sua empresa."),
        ("s4", "Recuperação de Crédito Tributário", "Análise de impostos pagos a maior."),
        ("s5", "Revisão de Contrato Bancário", "Reduza juros abusivos de financiamentos."),
        ("s6", "Perícia Grafotécnica", "Análise de autenticidade de assinaturas."),
        ("s7", "Audiencista", "Advogado correspondente para audiências."),
        ("s8", "Investimento", "Fale com um parceiro especializado."),
    ]
    .into_iter()
    .map(|(id, name, description)| ServiceItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
    })
    .collect()
}

fn holding() -> HoldingData {
    HoldingData {
        assets_value_brl: brl(5_000_000),
        investments: vec![
            Investment { kind: "Imóveis".into(), value: brl(3_500_000) },
            Investment { kind: "Fundos de Inv.".into(), value: brl(1_000_000) },
            Investment { kind: "Exterior".into(), value: brl(500_000) },
        ],
        dre_url: "#".into(),
    }
}
