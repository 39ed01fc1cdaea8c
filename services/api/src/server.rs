use crate::cli::ServeArgs;
use crate::infra::{build_catalog, AppState, InMemorySubmissionSink};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use course_match::config::AppConfig;
use course_match::error::AppError;
use course_match::matching::{CourseCatalog, CourseMatchingService, ScoringConfig};
use course_match::telemetry;
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

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(build_catalog(&config.catalog)?);
    let course_count = catalog.all()?.len();
    let submissions = Arc::new(InMemorySubmissionSink::default());
    let service = Arc::new(CourseMatchingService::new(
        catalog,
        submissions,
        ScoringConfig::default(),
    ));

    let app = with_operational_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, course_count, "course matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
