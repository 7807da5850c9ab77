// src/services/rate_provider.rs

// Cotação USD -> BRL para o My Holding. Uma tentativa por renderização,
// sem cache. Qualquer falha cai no valor fixo configurado.

use std::{str::FromStr, sync::Arc, time::Duration};

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::catalog::{QuoteSource, UsdQuote};

pub const DEFAULT_RATE_URL: &str = "https://economia.awesomeapi.com.br/last/USD-BRL";

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Quantos reais vale um dólar (lance de compra).
    async fn fetch_usd_brl(&self) -> anyhow::Result<Decimal>;
}

// --- AwesomeAPI ---

#[derive(Debug, Deserialize)]
struct AwesomeApiResponse {
    #[serde(rename = "USDBRL")]
    usd_brl: AwesomeApiQuote,
}

#[derive(Debug, Deserialize)]
struct AwesomeApiQuote {
    // A API devolve o número como texto
    bid: String,
}

fn parse_bid(body: AwesomeApiResponse) -> anyhow::Result<Decimal> {
    let rate = Decimal::from_str(body.usd_brl.bid.trim())
        .with_context(|| format!("Cotação inválida: '{}'", body.usd_brl.bid))?;
    if rate <= Decimal::ZERO {
        return Err(anyhow!("Cotação não positiva: {}", rate));
    }
    Ok(rate)
}

pub struct AwesomeApiRateSource {
    url: String,
    timeout: Option<Duration>,
}

impl AwesomeApiRateSource {
    pub fn new(url: String, timeout: Option<Duration>) -> Self {
        Self { url, timeout }
    }

    fn fetch_blocking(url: &str, timeout: Option<Duration>) -> anyhow::Result<Decimal> {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder
            .build()
            .get(url)
            .set("Accept", "application/json")
            .call()
            .with_context(|| format!("Falha ao consultar {}", url))?;

        let body: AwesomeApiResponse =
            serde_json::from_reader(response.into_reader()).context("Resposta da cotação fora do formato")?;
        parse_bid(body)
    }
}

#[async_trait]
impl RateSource for AwesomeApiRateSource {
    async fn fetch_usd_brl(&self) -> anyhow::Result<Decimal> {
        let url = self.url.clone();
        let timeout = self.timeout;

        // ureq é síncrono: roda fora do executor
        tokio::task::spawn_blocking(move || Self::fetch_blocking(&url, timeout))
            .await
            .context("Tarefa de cotação interrompida")?
    }
}

// --- Provider com fallback ---

#[derive(Clone)]
pub struct RateProvider {
    source: Arc<dyn RateSource>,
    fallback: Decimal,
}

impl RateProvider {
    pub fn new(source: Arc<dyn RateSource>, fallback: Decimal) -> Self {
        Self { source, fallback }
    }

    /// Nunca falha: sem cotação ao vivo, devolve o valor fixo marcado como FALLBACK.
    pub async fn current_rate(&self) -> UsdQuote {
        match self.source.fetch_usd_brl().await {
            Ok(rate) => UsdQuote { rate, source: QuoteSource::Live },
            Err(e) => {
                tracing::warn!("⚠️ Cotação do dólar indisponível, usando {}: {:#}", self.fallback, e);
                UsdQuote { rate: self.fallback, source: QuoteSource::Fallback }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        result: Option<Decimal>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RateSource for FixedSource {
        async fn fetch_usd_brl(&self) -> anyhow::Result<Decimal> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.ok_or_else(|| anyhow!("offline"))
        }
    }

    fn provider(result: Option<Decimal>) -> (RateProvider, Arc<FixedSource>) {
        let source = Arc::new(FixedSource { result, calls: AtomicUsize::new(0) });
        (RateProvider::new(source.clone(), Decimal::new(520, 2)), source)
    }

    #[tokio::test]
    async fn live_rate_is_used_when_available() {
        let (provider, _) = provider(Some(Decimal::new(5431, 3)));
        let quote = provider.current_rate().await;

        assert_eq!(quote.rate, Decimal::new(5431, 3));
        assert_eq!(quote.source, QuoteSource::Live);
    }

    #[tokio::test]
    async fn failure_falls_back_after_a_single_attempt() {
        let (provider, source) = provider(None);
        let quote = provider.current_rate().await;

        assert_eq!(quote.rate, Decimal::new(520, 2));
        assert_eq!(quote.source, QuoteSource::Fallback);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn every_call_fetches_again() {
        let (provider, source) = provider(Some(Decimal::ONE));
        provider.current_rate().await;
        provider.current_rate().await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn bid_is_parsed_from_text() {
        let body: AwesomeApiResponse =
            serde_json::from_str(r#"{"USDBRL":{"code":"USD","codein":"BRL","bid":"5.4312"}}"#).unwrap();
        assert_eq!(parse_bid(body).unwrap(), Decimal::new(54312, 4));
    }

    #[test]
    fn non_positive_or_garbage_bid_is_an_error() {
        let zero: AwesomeApiResponse = serde_json::from_str(r#"{"USDBRL":{"bid":"0"}}"#).unwrap();
        let garbage: AwesomeApiResponse = serde_json::from_str(r#"{"USDBRL":{"bid":"abc"}}"#).unwrap();

        assert!(parse_bid(zero).is_err());
        assert!(parse_bid(garbage).is_err());
    }
}
