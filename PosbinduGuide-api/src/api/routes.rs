use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use posbindu_guide_domain::health::HealthServiceTrait;

use crate::api::handlers::{health, risk};
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router with the standard rule set
pub async fn create_app(config: AppConfig) -> Router {
    debug!("Creating application router");

    // Create risk service using factory function
    let risk_service = risk::create_service();

    // Health reporting reads the same service the handlers use
    let health_service = health::create_health_service(risk_service.clone());

    create_app_with_services(risk_service, health_service, config)
}

/// Create the application router around the given services
pub fn create_app_with_services(
    risk_service: risk::SharedRiskService,
    health_service: Arc<dyn HealthServiceTrait + Send + Sync>,
    config: AppConfig,
) -> Router {
    let api_routes = Router::new()
        .route("/risk/classify", post(risk::classify_risk))
        .route("/risk/suggestion", post(risk::suggest_assessment));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(Arc::new(config)));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(risk_service);

    debug!("API routes nested");

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}
