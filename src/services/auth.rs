// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{SessionHandle, SessionRepository},
    models::auth::{Claims, LoginPayload, LoginResponse, SessionResponse},
    services::access_policy,
};

#[derive(Clone)]
pub struct AuthService {
    sessions: SessionRepository,
    jwt_secret: String,
    session_ttl: chrono::Duration,
}

impl AuthService {
    pub fn new(sessions: SessionRepository, jwt_secret: String, session_ttl_hours: i64) -> Self {
        Self {
            sessions,
            jwt_secret,
            session_ttl: chrono::Duration::hours(session_ttl_hours),
        }
    }

    // =========================================================================
    //  SESSÕES
    // =========================================================================

    /// Abre uma sessão com a massa de dados inicial e devolve o token dela.
    pub fn open_session(&self) -> Result<SessionResponse, AppError> {
        let now = Utc::now();
        let expires_at = now + self.session_ttl;

        let handle = self.sessions.open(expires_at)?;
        let token = self.create_token(handle.id, now, expires_at)?;

        tracing::info!("🆕 Sessão {} aberta ({} ativas)", handle.id, self.sessions.len());
        Ok(SessionResponse {
            token,
            session_id: handle.id,
            expires_in: self.session_ttl.num_seconds(),
        })
    }

    /// Token -> sessão. Token inválido ou vencido vira `InvalidToken`;
    /// sessão encerrada ou expirada vira `SessionNotFound`.
    pub fn resolve_session(&self, token: &str) -> Result<SessionHandle, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.sessions
            .get(token_data.claims.sub)?
            .ok_or(AppError::SessionNotFound)
    }

    /// Descarta a sessão e tudo o que foi alterado nela.
    pub fn close_session(&self, session_id: Uuid) -> Result<(), AppError> {
        if !self.sessions.close(session_id)? {
            return Err(AppError::SessionNotFound);
        }
        tracing::info!("👋 Sessão {} encerrada", session_id);
        Ok(())
    }

    // =========================================================================
    //  LOGIN
    // =========================================================================

    pub async fn login(&self, session: &SessionHandle, payload: &LoginPayload) -> Result<LoginResponse, AppError> {
        // 1. Usuários cadastrados com senha têm o hash conferido fora do lock
        let stored_hash = session.read(|store| {
            store
                .data()
                .find_user_by_email(&payload.email)
                .and_then(|u| u.password_hash.clone())
        })?;

        if let Some(password_hash) = stored_hash {
            let password = payload.password.clone();
            let is_password_valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

            if !is_password_valid {
                tracing::warn!("🔒 Senha recusada para {}", payload.email.trim());
                let rejected = session.write(|store| Ok(store.reject_login(&payload.email)))?;
                return Err(rejected);
            }
        }

        // 2. Login no store da sessão (página inicial conforme o perfil)
        let result = session.write(|store| store.login(&payload.email, &payload.password));
        let user = match result {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("🔒 Login recusado para {}", payload.email.trim());
                return Err(e);
            }
        };

        tracing::info!("✅ {} ({}) entrou na sessão {}", user.name, user.role, session.id);
        Ok(LoginResponse {
            landing_page: access_policy::landing_page_for(user.role),
            menu: access_policy::menu_for(user.role),
            user,
        })
    }

    pub async fn hash_password(password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    fn create_token(
        &self,
        session_id: Uuid,
        now: chrono::DateTime<Utc>,
        expires_at: chrono::DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: session_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{auth::User, rbac::Role};

    fn service() -> AuthService {
        AuthService::new(SessionRepository::new(8), "segredo-de-teste".into(), 1)
    }

    fn login_payload(email: &str, password: &str) -> LoginPayload {
        LoginPayload { email: email.into(), password: password.into() }
    }

    #[test]
    fn opened_session_resolves_from_its_token() {
        let auth = service();
        let opened = auth.open_session().unwrap();

        let handle = auth.resolve_session(&opened.token).unwrap();
        assert_eq!(handle.id, opened.session_id);
        assert_eq!(opened.expires_in, 3600);
    }

    #[test]
    fn garbage_token_is_invalid() {
        let auth = service();
        assert!(matches!(auth.resolve_session("nao-e-um-jwt"), Err(AppError::InvalidToken)));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let auth = service();
        let other = AuthService::new(SessionRepository::new(8), "outro".into(), 1);
        let opened = other.open_session().unwrap();

        assert!(matches!(auth.resolve_session(&opened.token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn closed_session_is_not_found() {
        let auth = service();
        let opened = auth.open_session().unwrap();

        auth.close_session(opened.session_id).unwrap();

        assert!(matches!(auth.resolve_session(&opened.token), Err(AppError::SessionNotFound)));
        assert!(matches!(auth.close_session(opened.session_id), Err(AppError::SessionNotFound)));
    }

    #[tokio::test]
    async fn login_returns_menu_and_landing_page() {
        let auth = service();
        let opened = auth.open_session().unwrap();
        let session = auth.resolve_session(&opened.token).unwrap();

        let response = auth.login(&session, &login_payload("audiencia@adv.com", "x")).await.unwrap();

        assert_eq!(response.user.id, "13");
        assert_eq!(response.landing_page.as_str(), "hearing-panel");
        assert_eq!(response.menu.len(), 4);
    }

    #[tokio::test]
    async fn hashed_password_is_verified() {
        let auth = service();
        let opened = auth.open_session().unwrap();
        let session = auth.resolve_session(&opened.token).unwrap();

        let password_hash = AuthService::hash_password("segredo123").await.unwrap();
        session
            .write(|store| {
                let mut user = User::new("u-1", "Carla Souza", "carla@alcidesemosinho.com", Role::Admin);
                user.password_hash = Some(password_hash);
                store.add_user(user).map(|_| ())
            })
            .unwrap();

        let wrong = auth.login(&session, &login_payload("carla@alcidesemosinho.com", "errada")).await;
        assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
        assert!(session.read(|s| s.login_error().is_some()).unwrap());

        let ok = auth.login(&session, &login_payload("carla@alcidesemosinho.com", "segredo123")).await;
        assert_eq!(ok.unwrap().user.id, "u-1");
    }
}
