// src/services/hearing_service.rs

// Fluxo do audiencista:
//   SOLICITADA --aceitar--> AGENDADA --retorno--> CONCLUIDA
//   SOLICITADA --recusar--> (removida)

use crate::{
    common::{error::AppError, ids::generate_id},
    db::PortalStore,
    models::{
        finance::RecordStatus,
        hearings::{HearingRequest, HearingReturn, HearingReturnPayload, HearingStatus, NewHearingPayload},
    },
    services::finance_service,
};

/// Solicitações abertas (painel "Solicitações de Audiência").
pub fn pending(hearings: &[HearingRequest]) -> Vec<HearingRequest> {
    hearings
        .iter()
        .filter(|h| h.status == HearingStatus::Solicitada)
        .cloned()
        .collect()
}

/// Agenda do audiencista: só as AGENDADA aceitas por ele. CONCLUIDA não aparece.
pub fn schedule_of(hearings: &[HearingRequest], audiencista_id: &str) -> Vec<HearingRequest> {
    hearings
        .iter()
        .filter(|h| h.status == HearingStatus::Agendada && h.audiencista_id.as_deref() == Some(audiencista_id))
        .cloned()
        .collect()
}

pub fn request(store: &mut PortalStore, requester_id: &str, payload: NewHearingPayload) -> Result<HearingRequest, AppError> {
    let process_id = payload.process_id.trim();
    if process_id.is_empty() || payload.time.trim().is_empty() || payload.location.trim().is_empty() {
        return Err(AppError::Form("form.hearing_incomplete"));
    }
    if payload.value.is_sign_negative() {
        return Err(AppError::Form("form.hearing_incomplete"));
    }
    if !store.data().processes.iter().any(|p| p.id == process_id) {
        return Err(AppError::NotFound("process"));
    }

    let hearing = HearingRequest {
        id: generate_id("hr"),
        process_id: process_id.to_string(),
        requester_id: requester_id.to_string(),
        audiencista_id: None,
        date: payload.date,
        time: payload.time.trim().to_string(),
        location: payload.location.trim().to_string(),
        mode: payload.mode,
        kind: payload.kind,
        value: payload.value,
        status: HearingStatus::Solicitada,
        minutes_url: None,
        return_form: None,
    };

    let created = store.add_hearing(hearing).clone();
    tracing::info!("⚖️ Audiência {} solicitada para o processo {}", created.id, created.process_id);
    Ok(created)
}

/// Aceite: agenda a audiência e informa o financeiro com uma despesa bloqueada.
pub fn accept(store: &mut PortalStore, hearing_id: &str, audiencista_id: &str) -> Result<HearingRequest, AppError> {
    let hearing = store.hearing_mut(hearing_id)?;
    if hearing.status != HearingStatus::Solicitada {
        return Err(AppError::InvalidTransition);
    }
    hearing.status = HearingStatus::Agendada;
    hearing.audiencista_id = Some(audiencista_id.to_string());
    let accepted = hearing.clone();

    let cnj = store
        .data()
        .processes
        .iter()
        .find(|p| p.id == accepted.process_id)
        .map(|p| p.cnj.clone())
        .unwrap_or_else(|| accepted.process_id.clone());
    store.add_financial_record(finance_service::hearing_expense(
        &accepted.id,
        &cnj,
        accepted.value,
        accepted.date,
    ));

    tracing::info!("✅ Audiência {} aceita por {}", accepted.id, audiencista_id);
    Ok(accepted)
}

/// Recusa: a solicitação sai da lista (CANCELADA não é gravada).
pub fn reject(store: &mut PortalStore, hearing_id: &str) -> Result<HearingRequest, AppError> {
    let hearing = store.hearing_mut(hearing_id)?;
    if hearing.status != HearingStatus::Solicitada {
        return Err(AppError::InvalidTransition);
    }
    let removed = store.remove_hearing(hearing_id)?;
    tracing::info!("❌ Audiência {} recusada", removed.id);
    Ok(removed)
}

/// Retorno: conclui a audiência e libera a despesa para pagamento manual (PENDING).
pub fn submit_return(
    store: &mut PortalStore,
    hearing_id: &str,
    audiencista_id: &str,
    payload: HearingReturnPayload,
) -> Result<HearingRequest, AppError> {
    let summary = payload.summary.trim();
    let minutes_url = payload.minutes_url.trim();

    let hearing = store.hearing_mut(hearing_id)?;
    if hearing.status != HearingStatus::Agendada
        || hearing.audiencista_id.as_deref() != Some(audiencista_id)
    {
        return Err(AppError::InvalidTransition);
    }
    if summary.is_empty() || minutes_url.is_empty() {
        return Err(AppError::Form("form.hearing_return_incomplete"));
    }

    hearing.status = HearingStatus::Concluida;
    hearing.minutes_url = Some(minutes_url.to_string());
    hearing.return_form = Some(HearingReturn {
        summary: summary.to_string(),
        outcome: payload.outcome.trim().to_string(),
    });
    let concluded = hearing.clone();

    if let Some(record) = store.financial_record_for_hearing_mut(hearing_id) {
        record.status = RecordStatus::Pending;
    }

    tracing::info!("📄 Retorno da audiência {} enviado", concluded.id);
    Ok(concluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hearings::{HearingMode, HearingType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn return_payload() -> HearingReturnPayload {
        HearingReturnPayload {
            summary: "Acordo homologado".into(),
            outcome: "ACORDO".into(),
            minutes_url: "ata-h1.pdf".into(),
        }
    }

    #[test]
    fn accept_schedules_and_records_blocked_expense() {
        let mut store = PortalStore::seeded();
        let h = accept(&mut store, "h1", "13").unwrap();

        assert_eq!(h.status, HearingStatus::Agendada);
        assert_eq!(h.audiencista_id.as_deref(), Some("13"));

        let expense = &store.data().financial_records[0];
        assert_eq!(expense.related_hearing_id.as_deref(), Some("h1"));
        assert_eq!(expense.status, RecordStatus::Blocked);
        assert_eq!(expense.amount, Decimal::new(300, 0));
    }

    #[test]
    fn reject_removes_the_request() {
        let mut store = PortalStore::seeded();
        let before = store.data().financial_records.len();

        reject(&mut store, "h1").unwrap();

        assert!(store.data().hearings.iter().all(|h| h.id != "h1"));
        assert_eq!(store.data().financial_records.len(), before);
    }

    #[test]
    fn submit_return_concludes_and_releases_payment() {
        let mut store = PortalStore::seeded();
        accept(&mut store, "h1", "13").unwrap();

        let h = submit_return(&mut store, "h1", "13", return_payload()).unwrap();

        assert_eq!(h.status, HearingStatus::Concluida);
        assert_eq!(h.minutes_url.as_deref(), Some("ata-h1.pdf"));
        let expense = store.financial_record_for_hearing_mut("h1").unwrap();
        assert_eq!(expense.status, RecordStatus::Pending);
    }

    #[test]
    fn invalid_transitions_are_refused() {
        let mut store = PortalStore::seeded();

        // Retorno antes do aceite
        assert!(matches!(
            submit_return(&mut store, "h1", "13", return_payload()),
            Err(AppError::InvalidTransition)
        ));

        accept(&mut store, "h1", "13").unwrap();
        assert!(matches!(accept(&mut store, "h1", "13"), Err(AppError::InvalidTransition)));
        assert!(matches!(reject(&mut store, "h1"), Err(AppError::InvalidTransition)));

        // Só quem aceitou envia o retorno
        assert!(matches!(
            submit_return(&mut store, "h1", "99", return_payload()),
            Err(AppError::InvalidTransition)
        ));
    }

    #[test]
    fn return_requires_summary_and_minutes() {
        let mut store = PortalStore::seeded();
        accept(&mut store, "h1", "13").unwrap();

        let mut p = return_payload();
        p.minutes_url = String::new();

        assert!(matches!(
            submit_return(&mut store, "h1", "13", p),
            Err(AppError::Form("form.hearing_return_incomplete"))
        ));
        assert_eq!(store.data().hearings[0].status, HearingStatus::Agendada);
    }

    #[test]
    fn panel_lists_follow_status() {
        let mut store = PortalStore::seeded();
        let new = request(
            &mut store,
            "5",
            NewHearingPayload {
                process_id: "p2".into(),
                date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                time: "09:00".into(),
                location: "TJRJ".into(),
                mode: HearingMode::Virtual,
                kind: HearingType::Conciliacao,
                value: Decimal::new(250, 0),
            },
        )
        .unwrap();
        accept(&mut store, "h1", "13").unwrap();

        let hearings = &store.data().hearings;
        let pending_ids: Vec<_> = pending(hearings).into_iter().map(|h| h.id).collect();
        let mine: Vec<_> = schedule_of(hearings, "13").into_iter().map(|h| h.id).collect();

        assert_eq!(pending_ids, vec![new.id]);
        assert_eq!(mine, vec!["h1".to_string()]);
    }

    #[test]
    fn concluded_hearings_leave_both_lists() {
        let mut store = PortalStore::seeded();
        accept(&mut store, "h1", "13").unwrap();
        submit_return(&mut store, "h1", "13", return_payload()).unwrap();

        let hearings = &store.data().hearings;
        assert!(pending(hearings).is_empty());
        assert!(schedule_of(hearings, "13").is_empty());
    }
}
