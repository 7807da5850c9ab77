// src/db/session_repo.rs

use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use uuid::Uuid;

use crate::{common::error::AppError, db::portal_store::PortalStore};

/// Acesso ao store de uma sessão. Clonar é barato (só o Arc).
#[derive(Clone)]
pub struct SessionHandle {
    pub id: Uuid,
    store: Arc<RwLock<PortalStore>>,
}

impl SessionHandle {
    pub fn new(id: Uuid, store: PortalStore) -> Self {
        Self { id, store: Arc::new(RwLock::new(store)) }
    }

    /// Leitura com o lock compartilhado.
    pub fn read<T>(&self, f: impl FnOnce(&PortalStore) -> T) -> Result<T, AppError> {
        let guard = self
            .store
            .read()
            .map_err(|_| anyhow::anyhow!("Lock da sessão {} envenenado", self.id))?;
        Ok(f(&guard))
    }

    /// Mutação com o lock exclusivo: a operação inteira acontece antes de qualquer leitura seguinte.
    pub fn write<T>(&self, f: impl FnOnce(&mut PortalStore) -> Result<T, AppError>) -> Result<T, AppError> {
        let mut guard = self
            .store
            .write()
            .map_err(|_| anyhow::anyhow!("Lock da sessão {} envenenado", self.id))?;
        f(&mut guard)
    }
}

struct SessionEntry {
    handle: SessionHandle,
    expires_at: DateTime<Utc>,
}

// Registro das sessões abertas. Cada sessão tem sua própria cópia dos dados.
#[derive(Clone)]
pub struct SessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    max_sessions: usize,
}

impl SessionRepository {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::default(),
            max_sessions,
        }
    }

    /// Abre uma sessão com a massa inicial e remove as expiradas.
    /// Com o registro cheio, recusa a abertura em vez de derrubar sessões vivas.
    pub fn open(&self, expires_at: DateTime<Utc>) -> Result<SessionHandle, AppError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| anyhow::anyhow!("Lock do registro de sessões envenenado"))?;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, entry| entry.expires_at > now);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!("🧹 {} sessões expiradas removidas", purged);
        }

        if sessions.len() >= self.max_sessions {
            tracing::warn!("⛔ Limite de {} sessões atingido", self.max_sessions);
            return Err(AppError::SessionLimitReached);
        }

        let id = Uuid::new_v4();
        let handle = SessionHandle::new(id, PortalStore::seeded());
        sessions.insert(id, SessionEntry { handle: handle.clone(), expires_at });
        Ok(handle)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<SessionHandle>, AppError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| anyhow::anyhow!("Lock do registro de sessões envenenado"))?;

        Ok(sessions
            .get(&id)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.handle.clone()))
    }

    /// Retorna `true` se a sessão existia.
    pub fn close(&self, id: Uuid) -> Result<bool, AppError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| anyhow::anyhow!("Lock do registro de sessões envenenado"))?;
        Ok(sessions.remove(&id).is_some())
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
