//! 供应商未清项服务入口

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use voi_config::AppConfig;
use voi_telemetry::{init_metrics, init_tracing, init_tracing_json};
use voi_vendor_items::api::build_router;
use voi_vendor_items::api::csrf::CsrfTokens;
use voi_vendor_items::application::ServiceHandler;
use voi_vendor_items::infrastructure::persistence::memory::{
    InMemoryGroupRepository, InMemoryUserRepository,
};
use voi_vendor_items::infrastructure::sap::{LineItemSource, SapGatewayClient};
use voi_vendor_items::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR")
        .unwrap_or_else(|_| "services/vendor-items/config".to_string());
    let config = AppConfig::load(&config_dir)?;

    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    let metrics_handle = init_metrics();

    info!(app = %config.app_name, env = %config.app_env, "Starting service");

    let source: Arc<dyn LineItemSource> = Arc::new(SapGatewayClient::new(config.sap.clone()));
    let handler = Arc::new(ServiceHandler::new(
        source,
        Arc::new(InMemoryGroupRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    ));

    let state = AppState {
        handler,
        csrf: CsrfTokens::new(),
        metrics: metrics_handle,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
