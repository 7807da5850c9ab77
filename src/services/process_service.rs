// src/services/process_service.rs

use chrono::{NaiveDate, Utc};

use crate::{
    common::{error::AppError, ids::generate_id},
    db::PortalStore,
    models::processes::{
        DeadlineStatus, NewDeadlinePayload, NewProcessEventPayload, Process, ProcessDeadline,
        ProcessEvent,
    },
};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Cadastra um prazo. Recusa sem mutar quando falta processo, assunto, data
/// ou destinatário. Os nomes dos destinatários são copiados neste momento.
pub fn create_deadline(store: &mut PortalStore, payload: NewDeadlinePayload) -> Result<ProcessDeadline, AppError> {
    // 1. Campos obrigatórios
    let process_id = non_empty(payload.process_id.as_deref());
    let title = non_empty(Some(payload.title.as_str()));
    let due_date = non_empty(payload.due_date.as_deref());

    let (Some(process_id), Some(title), Some(due_date)) = (process_id, title, due_date) else {
        return Err(AppError::Form("form.deadline_incomplete"));
    };
    if payload.assignees.is_empty() {
        return Err(AppError::Form("form.deadline_incomplete"));
    }

    let due_date = NaiveDate::parse_from_str(due_date, "%Y-%m-%d")
        .map_err(|_| AppError::Form("form.invalid_date"))?;

    // 2. Snapshot de CNJ e nomes (na ordem do cadastro de usuários)
    let data = store.data();
    let cnj = data
        .processes
        .iter()
        .find(|p| p.id == process_id)
        .map(|p| p.cnj.clone())
        .unwrap_or_else(|| "N/A".to_string());

    let assignee_names: Vec<String> = data
        .users
        .iter()
        .filter(|u| payload.assignees.contains(&u.id))
        .map(|u| u.name.clone())
        .collect();

    let deadline = ProcessDeadline {
        id: generate_id("dl"),
        process_id: process_id.to_string(),
        cnj,
        title: title.to_string(),
        description: payload.description.trim().to_string(),
        due_date,
        assignees: payload.assignees.clone(),
        assignee_names,
        status: DeadlineStatus::Pending,
    };

    // 3. Inserção no fim da lista
    let created = store.add_deadline(deadline).clone();
    tracing::info!(
        "⏰ Prazo {} incluído para {} destinatários",
        created.id,
        created.assignee_names.len()
    );
    Ok(created)
}

/// Registra um andamento datado de hoje.
pub fn add_event(store: &mut PortalStore, process_id: &str, payload: NewProcessEventPayload) -> Result<Process, AppError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::Form("form.process_event_empty"));
    }

    let event = ProcessEvent {
        id: generate_id("ev"),
        date: Utc::now().date_naive(),
        title: title.to_string(),
        description: payload.description.trim().to_string(),
    };

    Ok(store.append_process_event(process_id, event)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(assignees: &[&str]) -> NewDeadlinePayload {
        NewDeadlinePayload {
            process_id: Some("p1".into()),
            title: "Contrarrazões".into(),
            description: "Prazo de 8 dias".into(),
            due_date: Some("2024-07-01".into()),
            assignees: assignees.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_assignee_list_is_rejected_without_mutation() {
        let mut store = PortalStore::seeded();
        let before = store.data().deadlines.len();

        let err = create_deadline(&mut store, payload(&[])).unwrap_err();

        assert!(matches!(err, AppError::Form("form.deadline_incomplete")));
        assert_eq!(store.data().deadlines.len(), before);
    }

    #[test]
    fn missing_process_title_or_date_is_rejected() {
        let mut store = PortalStore::seeded();

        let mut no_process = payload(&["5"]);
        no_process.process_id = Some("  ".into());
        let mut no_title = payload(&["5"]);
        no_title.title = String::new();
        let mut no_date = payload(&["5"]);
        no_date.due_date = None;

        for p in [no_process, no_title, no_date] {
            assert!(create_deadline(&mut store, p).is_err());
        }
        assert_eq!(store.data().deadlines.len(), 1);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut store = PortalStore::seeded();
        let mut p = payload(&["5"]);
        p.due_date = Some("01/07/2024".into());

        assert!(matches!(create_deadline(&mut store, p), Err(AppError::Form("form.invalid_date"))));
    }

    #[test]
    fn names_are_resolved_from_users() {
        let mut store = PortalStore::seeded();
        let created = create_deadline(&mut store, payload(&["5"])).unwrap();

        assert_eq!(created.assignee_names, vec!["Bianca Porto".to_string()]);
        assert_eq!(created.cnj, "0012345-88.2024.5.01.0001");
        assert_eq!(created.status, DeadlineStatus::Pending);
        assert_eq!(store.data().deadlines.last().unwrap().id, created.id);
    }

    #[test]
    fn names_follow_user_order_and_skip_unknown_ids() {
        let mut store = PortalStore::seeded();
        let created = create_deadline(&mut store, payload(&["8", "ghost", "1"])).unwrap();

        assert_eq!(created.assignee_names, vec!["Gustavo Mosinho".to_string(), "Financeiro".to_string()]);
    }

    #[test]
    fn unknown_process_keeps_na_cnj() {
        let mut store = PortalStore::seeded();
        let mut p = payload(&["5"]);
        p.process_id = Some("p-x".into());

        assert_eq!(create_deadline(&mut store, p).unwrap().cnj, "N/A");
    }

    #[test]
    fn events_are_appended() {
        let mut store = PortalStore::seeded();
        let process = add_event(
            &mut store,
            "p1",
            NewProcessEventPayload { title: "Audiência designada".into(), description: String::new() },
        )
        .unwrap();

        assert_eq!(process.events.len(), 3);
        assert_eq!(process.events[2].title, "Audiência designada");
        assert!(add_event(&mut store, "p1", NewProcessEventPayload { title: " ".into(), description: String::new() }).is_err());
    }
}
