use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::dashboard_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use earth_twin::config::AppConfig;
use earth_twin::dashboard::Catalog;
use earth_twin::error::AppError;
use earth_twin::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));

    // Catalog loads once; every request recomputes its views from this
    // shared read-only value.
    let catalog = Catalog::demo();
    let app_state = AppState::new(
        readiness_flag.clone(),
        Arc::new(prometheus_handle),
        catalog,
    );

    let app = dashboard_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "earth twin dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
