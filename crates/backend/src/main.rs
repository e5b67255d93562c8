use orgchart_backend::shared::config;
use orgchart_backend::shared::state::AppState;
use orgchart_backend::{routes, system};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    if config.latency.enabled {
        tracing::info!(
            "Simulated latency: {}..{} ms",
            config.latency.min_delay_ms,
            config.latency.max_delay_ms
        );
    }

    let state = AppState::from_config(&config);
    let app = routes::configure_routes(state);

    let addr = config::get_bind_address(&config)?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
