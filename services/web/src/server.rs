use crate::cli::ServeArgs;
use crate::infra::{site_state, AppState};
use crate::routes::with_service_routes;
use arc_site::config::AppConfig;
use arc_site::error::AppError;
use arc_site::relay::build_transport;
use arc_site::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        assets: Arc::new(config.site.asset_dir.clone()),
    };

    let transport = build_transport(&config.relay)?;
    info!(
        contract = config.relay.contract.as_str(),
        transport = transport.contract(),
        endpoint = config.relay.endpoint.as_ref().map(|url| url.as_str()),
        "enquiry relay configured"
    );

    let app = with_service_routes(site_state(transport, &config.site))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "landing site ready");

    axum::serve(listener, app).await?;
    Ok(())
}
