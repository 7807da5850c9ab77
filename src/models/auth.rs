// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::rbac::{MenuEntry, PageId, Role};

// Representa um usuário do portal (equipe, cliente, parceiro ou audiencista)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "5")]
    pub id: String,
    #[schema(example = "Bianca Porto")]
    pub name: String,
    #[schema(example = "biancaporto@alcidesemosinho.com")]
    pub email: String,
    pub role: Role,

    // Data URI da foto de perfil
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    // Campos específicos do audiencista
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uf_oab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,

    // Usuários da massa inicial não têm senha cadastrada.
    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: Option<String>,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: None,
            oab: None,
            uf_oab: None,
            whatsapp: None,
            password_hash: None,
        }
    }
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "biancaporto@alcidesemosinho.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Informe a senha."))]
    #[schema(example = "qualquer")]
    pub password: String,
}

// Cadastro de pessoa (Cadastro Pessoas / Meus Parceiros)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUserPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Carla Souza")]
    pub name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "carla@alcidesemosinho.com")]
    pub email: String,

    // Ignorado no cadastro de parceiros (sempre PARCEIRO)
    pub role: Option<Role>,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: Option<String>,

    pub oab: Option<String>,
    pub uf_oab: Option<String>,
    pub whatsapp: Option<String>,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // ID da sessão
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

// Resposta da abertura de sessão com o token
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub session_id: Uuid,
    #[schema(example = 604800)]
    pub expires_in: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub landing_page: PageId,
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarResponse {
    // false quando uma atualização mais recente já foi iniciada
    pub applied: bool,
    pub user: User,
}
