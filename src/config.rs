// src/config.rs

use anyhow::Context;
use rust_decimal::Decimal;
use std::{env, str::FromStr, sync::Arc, time::Duration};

use crate::{
    common::i18n::I18nStore,
    db::SessionRepository,
    services::{
        auth::AuthService,
        rate_provider::{AwesomeApiRateSource, DEFAULT_RATE_URL, RateProvider, RateSource},
    },
};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_TTL_HOURS: i64 = 24 * 7;
const DEFAULT_MAX_SESSIONS: usize = 1000;
const DEFAULT_RATE_FALLBACK: &str = "5.20";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    // Sessões vivas ao mesmo tempo; cada uma carrega uma cópia da massa de dados
    pub max_sessions: usize,
    pub rate_provider_url: String,
    pub rate_fallback: Decimal,
    // None = timeouts padrão do ureq
    pub rate_timeout: Option<Duration>,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Lê o `.env` (se existir) e as variáveis de ambiente.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let session_ttl_hours = var_or("SESSION_TTL_HOURS", &DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse::<i64>()
            .context("SESSION_TTL_HOURS deve ser um número inteiro de horas")?;
        if session_ttl_hours <= 0 {
            anyhow::bail!("SESSION_TTL_HOURS deve ser maior que zero");
        }

        let max_sessions = var_or("MAX_SESSIONS", &DEFAULT_MAX_SESSIONS.to_string())
            .parse::<usize>()
            .context("MAX_SESSIONS deve ser um número inteiro")?;
        if max_sessions == 0 {
            anyhow::bail!("MAX_SESSIONS deve ser maior que zero");
        }

        let rate_fallback = Decimal::from_str(&var_or("RATE_FALLBACK_BRL", DEFAULT_RATE_FALLBACK))
            .context("RATE_FALLBACK_BRL deve ser um número decimal (ex: 5.20)")?;
        if rate_fallback <= Decimal::ZERO {
            anyhow::bail!("RATE_FALLBACK_BRL deve ser positivo");
        }

        let rate_timeout = match env::var("RATE_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(
                secs.parse::<u64>().context("RATE_TIMEOUT_SECS deve ser um número de segundos")?,
            )),
            Err(_) => None,
        };

        Ok(Self {
            addr: var_or("PORTAL_ADDR", DEFAULT_ADDR),
            jwt_secret,
            session_ttl_hours,
            max_sessions,
            rate_provider_url: var_or("RATE_PROVIDER_URL", DEFAULT_RATE_URL),
            rate_fallback,
            rate_timeout,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub rate_provider: RateProvider,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let source = AwesomeApiRateSource::new(config.rate_provider_url.clone(), config.rate_timeout);
        Self::with_rate_source(config, Arc::new(source))
    }

    /// Monta o estado com uma fonte de cotação qualquer (testes usam uma fixa).
    pub fn with_rate_source(config: &Config, source: Arc<dyn RateSource>) -> Self {
        // --- Monta o gráfico de dependências ---
        let auth_service = AuthService::new(
            SessionRepository::new(config.max_sessions),
            config.jwt_secret.clone(),
            config.session_ttl_hours,
        );

        Self {
            auth_service,
            rate_provider: RateProvider::new(source, config.rate_fallback),
            i18n_store: Arc::new(I18nStore::new()),
        }
    }
}
