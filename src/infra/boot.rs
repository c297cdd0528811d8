use std::net::SocketAddr;
use std::sync::Arc;

use crate::clients::microcms::MicroCmsClient;
use crate::core::source::ContentSource;
use crate::infra::config::{Config, Mode};

/// Load configuration and serve. A configuration error returns before any transport is opened.
pub async fn run_from_env() -> anyhow::Result<()> {
    let cfg = Config::from_env()?;
    run_server(cfg).await
}

pub async fn run_server(cfg: Config) -> anyhow::Result<()> {
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        base_url = %cfg.base_url,
        "BOOT microcms-mcp-gateway"
    );

    let source: Arc<dyn ContentSource> = Arc::new(MicroCmsClient::from_config(&cfg)?);

    match cfg.mode {
        Mode::Stdio => {
            crate::infra::runtime::mcp_transport::serve_stdio(crate::tools::content::factory(source))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Mode::Http => {
            let app = crate::infra::http_app::build_app(source);
            let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                })
                .await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ConfigError;
    use crate::infra::config::tests::clear_env;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn missing_api_key_stops_before_serving() {
        clear_env();
        let err = run_from_env().await.unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::MissingApiKey));
    }
}
