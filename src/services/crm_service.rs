// src/services/crm_service.rs

// Cadastros de clientes, pessoas e parceiros externos.

use crate::{
    common::{error::AppError, ids::generate_id},
    models::{
        auth::{NewUserPayload, User},
        crm::{Client, ClientStatus, NewClientPayload},
        rbac::Role,
    },
    services::auth::AuthService,
};

pub fn build_client(payload: NewClientPayload) -> Client {
    Client {
        id: generate_id("cli"),
        kind: payload.kind,
        name: payload.name.trim().to_string(),
        document: payload.document.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone: payload.phone,
        address: payload.address,
        rg: payload.rg,
        birth_date: payload.birth_date,
        representative: payload.representative,
        status: payload.status.unwrap_or(ClientStatus::Ativo),
        partner_id: payload.partner_id.filter(|id| !id.trim().is_empty()),
    }
}

/// Monta um usuário novo. Com `forced_role` o perfil do payload é ignorado
/// (cadastro de parceiros). A senha, quando enviada, vira hash bcrypt.
pub async fn build_user(payload: NewUserPayload, forced_role: Option<Role>) -> Result<User, AppError> {
    let role = forced_role
        .or(payload.role)
        .ok_or(AppError::Form("form.user_role"))?;

    let password_hash = match payload.password.as_deref() {
        Some(password) => Some(AuthService::hash_password(password).await?),
        None => None,
    };

    let mut user = User::new(&generate_id("usr"), payload.name.trim(), payload.email.trim(), role);
    user.oab = payload.oab;
    user.uf_oab = payload.uf_oab;
    user.whatsapp = payload.whatsapp;
    user.password_hash = password_hash;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::crm::ClientKind;

    fn user_payload(role: Option<Role>) -> NewUserPayload {
        NewUserPayload {
            name: " Carla Souza ".into(),
            email: "carla@alcidesemosinho.com".into(),
            role,
            password: None,
            oab: None,
            uf_oab: None,
            whatsapp: None,
        }
    }

    #[test]
    fn client_defaults_to_active() {
        let client = build_client(NewClientPayload {
            kind: ClientKind::Pj,
            name: "Empresa X".into(),
            document: "00.000.000/0001-00".into(),
            email: "contato@x.com".into(),
            phone: String::new(),
            address: String::new(),
            rg: None,
            birth_date: None,
            representative: Some("Ana".into()),
            status: None,
            partner_id: Some("".into()),
        });

        assert_eq!(client.status, ClientStatus::Ativo);
        assert!(client.partner_id.is_none());
        assert!(client.id.starts_with("cli-"));
    }

    #[tokio::test]
    async fn forced_role_wins_over_payload() {
        let user = build_user(user_payload(Some(Role::Partner)), Some(Role::ExternalPartner)).await.unwrap();

        assert_eq!(user.role, Role::ExternalPartner);
        assert_eq!(user.name, "Carla Souza");
        assert!(user.password_hash.is_none());
    }

    #[tokio::test]
    async fn role_is_required_for_people() {
        let err = build_user(user_payload(None), None).await.unwrap_err();
        assert!(matches!(err, AppError::Form("form.user_role")));
    }
}
