//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use portal_backend::{
    build_router,
    config::{AppState, Config},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG manda; sem ele, info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Sem configuração válida a aplicação não deve iniciar
    let config = Config::from_env()?;
    let app_state = AppState::new(&config);
    tracing::info!("✅ Configuração carregada (sessões de {}h)", config.session_ttl_hours);

    let app = build_router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&config.addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
