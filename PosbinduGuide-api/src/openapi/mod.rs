use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Risk endpoints
        crate::api::handlers::risk::classify_risk,
        crate::api::handlers::risk::suggest_assessment,
    ),
    components(
        schemas(
            // Request and response bodies
            crate::entities::risk::ClassifyRiskRequest,
            crate::entities::risk::ClassifyRiskResponse,
            crate::entities::risk::VitalsInput,
            crate::entities::risk::LabInput,
            crate::entities::risk::PriorAssessmentInput,
            crate::entities::common::ErrorResponse,

            // Domain payloads
            posbindu_guide_domain::entities::ClassificationResult,
            posbindu_guide_domain::entities::Indicator,
            posbindu_guide_domain::entities::Severity,
            posbindu_guide_domain::entities::SuggestedAction,
            posbindu_guide_domain::entities::AssessmentCategory,
            posbindu_guide_domain::entities::FollowUpForm,
            posbindu_guide_domain::services::AlertBanner,
            posbindu_guide_domain::services::IndicatorDetail,
            posbindu_guide_domain::services::AssessmentSuggestion,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "risk", description = "Clinical risk classification endpoints")
    ),
    info(
        title = "PosbinduGuide API",
        version = "0.1.0",
        description = "Rule-based risk classification for community health post screening",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
