use content_mcp_gateway::config::GatewayConfig;
use content_mcp_gateway::server::McpGateway;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_mcp_gateway=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let gateway = match McpGateway::new(config) {
        Ok(g) => g,
        Err(e) => {
            error!("tool catalog error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = gateway.run().await {
        error!("fatal error: {e}");
        std::process::exit(1);
    }
}
