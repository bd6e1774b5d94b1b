use anyhow::Context;
use classbook::router::init_router;
use classbook::state::init_app_state;
use classbook_config::{CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use classbook_observability::{init_metrics, init_tracing, metrics_app, shutdown_tracer};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(&LoggingConfig::from_env())?;
    let metrics_handle = init_metrics()?;

    let server = ServerConfig::from_env();
    let state = init_app_state(&DatabaseConfig::from_env()?, CorsConfig::from_env()).await?;

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let address = server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(%address, "Server listening");
    println!("🚀 Server running on http://{address}");
    println!("📚 Swagger UI available at http://{address}/swagger-ui");
    println!("📖 Scalar UI available at http://{address}/scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
