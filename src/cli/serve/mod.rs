//! Serve command - runs the catalog API server

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router_with_state;
use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Run the API server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state();
    let app = create_router_with_state(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting LLM catalog API on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_addr_defaults() {
        let addr = build_socket_addr(&AppConfig::default()).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_build_socket_addr_rejects_bad_host() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();
        assert!(build_socket_addr(&config).is_err());
    }
}
