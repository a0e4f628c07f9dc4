use crate::cli::ServeArgs;
use crate::infra::{load_roster, AppState, DashboardState, InMemoryOutreachOutbox};
use crate::routes::with_upsell_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use upsell_engine::config::AppConfig;
use upsell_engine::error::AppError;
use upsell_engine::telemetry;
use upsell_engine::upsell::outreach::OutreachService;

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
    };

    let roster = Arc::new(load_roster(config.upsell.roster_csv.as_deref())?);
    let dashboard_state = DashboardState::new(roster.clone(), config.upsell.hot_threshold);
    let outbox = Arc::new(InMemoryOutreachOutbox::default());
    let outreach_service = Arc::new(OutreachService::with_engine(
        roster.clone(),
        outbox,
        dashboard_state.engine,
    ));

    let app = with_upsell_routes(outreach_service)
        .layer(Extension(app_state))
        .layer(Extension(dashboard_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        users = roster.len(),
        hot_threshold = config.upsell.hot_threshold,
        "upsell engine ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
