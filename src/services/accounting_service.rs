// src/services/accounting_service.rs

use chrono::{Datelike, NaiveDate};

use crate::{
    common::{error::AppError, ids::generate_id},
    db::PortalStore,
    models::{
        accounting::{IrpfRequest, IrpfStatus, NewIrpfPayload, TaxGuide},
        finance::ClientInvoice,
    },
};

// Ano-base aceito para declarações
const FIRST_YEAR: i32 = 2000;

/// Solicitação de IRPF do cliente logado, já em análise.
pub fn request_irpf(store: &mut PortalStore, payload: NewIrpfPayload, today: NaiveDate) -> Result<IrpfRequest, AppError> {
    let client_id = store.require_user()?.id.clone();

    let year = payload.year.unwrap_or_else(|| today.year());
    if !(FIRST_YEAR..=today.year()).contains(&year) {
        return Err(AppError::Form("form.irpf_year"));
    }

    let request = IrpfRequest {
        id: generate_id("ir"),
        client_id,
        year,
        status: IrpfStatus::EmAnalise,
        request_date: today,
        final_document_url: None,
    };

    let created = store.request_irpf(request).clone();
    tracing::info!("🧾 IRPF {} solicitado ({})", created.year, created.client_id);
    Ok(created)
}

// =============================================================================
//  PAGAMENTOS
// =============================================================================

// Registro de outro cliente é tratado como inexistente, igual à tela que não o lista
fn require_owner(store: &PortalStore, client_id: Option<&str>, entity: &'static str) -> Result<(), AppError> {
    let user_id = store.require_user()?.id.as_str();
    match client_id {
        Some(owner) if owner == user_id => Ok(()),
        _ => Err(AppError::NotFound(entity)),
    }
}

/// Paga uma fatura do cliente logado.
pub fn pay_invoice(store: &mut PortalStore, id: &str) -> Result<ClientInvoice, AppError> {
    let owner = store
        .data()
        .invoices
        .iter()
        .find(|i| i.id == id)
        .map(|i| i.client_id.clone());
    require_owner(store, owner.as_deref(), "invoice")?;

    let invoice = store.pay_invoice(id)?.clone();
    tracing::info!("💳 Fatura {} paga ({})", invoice.id, invoice.client_id);
    Ok(invoice)
}

/// Marca como paga uma guia do cliente logado.
pub fn pay_tax_guide(store: &mut PortalStore, id: &str) -> Result<TaxGuide, AppError> {
    let owner = store
        .data()
        .tax_guides
        .iter()
        .find(|g| g.id == id)
        .map(|g| g.client_id.clone());
    require_owner(store, owner.as_deref(), "tax_guide")?;

    let guide = store.pay_tax_guide(id)?.clone();
    tracing::info!("🧾 Guia {} paga ({})", guide.id, guide.client_id);
    Ok(guide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{accounting::TaxGuideStatus, auth::User, finance::InvoiceStatus, rbac::Role};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn logged_in() -> PortalStore {
        let mut store = PortalStore::seeded();
        store.login("cliente@gmail.com", "x").unwrap();
        store
    }

    #[test]
    fn defaults_to_current_year_and_goes_to_the_top() {
        let mut store = logged_in();
        let created = request_irpf(&mut store, NewIrpfPayload { year: None }, today()).unwrap();

        assert_eq!(created.year, 2025);
        assert_eq!(created.status, IrpfStatus::EmAnalise);
        assert_eq!(store.data().irpf_requests[0].id, created.id);
    }

    #[test]
    fn future_year_is_refused() {
        let mut store = logged_in();
        let err = request_irpf(&mut store, NewIrpfPayload { year: Some(2030) }, today()).unwrap_err();
        assert!(matches!(err, AppError::Form("form.irpf_year")));
    }

    // --- Pagamentos ---

    #[test]
    fn client_pays_only_own_tax_guides() {
        let mut store = logged_in();

        // g1 é do cliente 99
        assert!(matches!(pay_tax_guide(&mut store, "g1"), Err(AppError::NotFound("tax_guide"))));
        let untouched = store.data().tax_guides.iter().find(|g| g.id == "g1").unwrap();
        assert_eq!(untouched.status, TaxGuideStatus::Pendente);

        assert_eq!(pay_tax_guide(&mut store, "g3").unwrap().status, TaxGuideStatus::Pago);
    }

    #[test]
    fn invoices_of_another_client_stay_pending() {
        let mut store = PortalStore::seeded();
        store
            .add_user(User::new("77", "Outra Cliente", "outra@cliente.com", Role::Client))
            .unwrap();
        store.login("outra@cliente.com", "x").unwrap();

        assert!(matches!(pay_invoice(&mut store, "inv1"), Err(AppError::NotFound("invoice"))));
        let inv1 = store.data().invoices.iter().find(|i| i.id == "inv1").unwrap();
        assert_eq!(inv1.status, InvoiceStatus::Pending);
    }

    #[test]
    fn paying_requires_login() {
        let mut store = PortalStore::seeded();
        assert!(matches!(pay_invoice(&mut store, "inv1"), Err(AppError::NotAuthenticated)));
    }
}
