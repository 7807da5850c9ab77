// src/services/agenda_service.rs

use crate::{
    common::{error::AppError, ids::generate_id},
    db::PortalStore,
    models::agenda::{MeetingRequest, MeetingRequestStatus, NewMeetingRequestPayload},
};

/// Pedido de reunião do usuário logado. Entra no topo como PENDING.
pub fn request_meeting(store: &mut PortalStore, payload: NewMeetingRequestPayload) -> Result<MeetingRequest, AppError> {
    let requester_id = store.require_user()?.id.clone();

    let fields = [&payload.subject, &payload.reason, &payload.preferred_date, &payload.preferred_time];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(AppError::Form("form.meeting_incomplete"));
    }

    let request = MeetingRequest {
        id: generate_id("req"),
        client_id: requester_id,
        target_partner_id: payload.target_partner_id.filter(|id| !id.trim().is_empty()),
        subject: payload.subject.trim().to_string(),
        reason: payload.reason.trim().to_string(),
        preferred_date: payload.preferred_date.trim().to_string(),
        preferred_time: payload.preferred_time.trim().to_string(),
        status: MeetingRequestStatus::Pending,
    };

    let created = store.request_meeting(request).clone();
    tracing::info!("📅 Pedido de reunião {} registrado por {}", created.id, created.client_id);
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NewMeetingRequestPayload {
        NewMeetingRequestPayload {
            target_partner_id: Some("1".into()),
            subject: "Revisão contratual".into(),
            reason: "Dúvidas sobre cláusulas".into(),
            preferred_date: "2024-06-10".into(),
            preferred_time: "10:00".into(),
        }
    }

    #[test]
    fn request_is_pending_and_head_inserted() {
        let mut store = PortalStore::seeded();
        store.login("cliente@gmail.com", "x").unwrap();

        request_meeting(&mut store, payload()).unwrap();
        let second = request_meeting(&mut store, payload()).unwrap();

        let requests = &store.data().meeting_requests;
        assert_eq!(requests[0].id, second.id);
        assert_eq!(requests[0].status, MeetingRequestStatus::Pending);
        assert_eq!(requests[0].client_id, "10");
    }

    #[test]
    fn incomplete_request_is_refused() {
        let mut store = PortalStore::seeded();
        store.login("cliente@gmail.com", "x").unwrap();
        let mut p = payload();
        p.preferred_time = String::new();

        assert!(matches!(request_meeting(&mut store, p), Err(AppError::Form("form.meeting_incomplete"))));
        assert!(store.data().meeting_requests.is_empty());
    }
}
