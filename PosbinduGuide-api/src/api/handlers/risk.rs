use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

// Import domain entities and services
use posbindu_guide_domain::entities::EvaluationInput;
use posbindu_guide_domain::error::RiskServiceError;
use posbindu_guide_domain::services::{create_default_risk_service, AssessmentSuggestion, RiskServiceTrait};

// Import our entities
use crate::entities::common::ErrorResponse;
use crate::entities::risk::{ClassifyRiskRequest, ClassifyRiskResponse};

/// Service type for dependency injection
pub type SharedRiskService = Arc<dyn RiskServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> SharedRiskService {
    Arc::new(create_default_risk_service())
}

/// Classify a patient's latest records into an assessment category
#[utoipa::path(
    post,
    path = "/api/v1/risk/classify",
    request_body = ClassifyRiskRequest,
    responses(
        (status = 200, description = "Classification result", body = ClassifyRiskResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "risk"
)]
#[instrument(skip(service, payload))]
pub async fn classify_risk(
    State(service): State<SharedRiskService>,
    payload: Result<Json<ClassifyRiskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    info!("Classification requested");

    let input = prepare_input(payload)?;

    match service.classify(&input) {
        Ok(result) => Ok((StatusCode::OK, Json(ClassifyRiskResponse::from(result)))),
        Err(e) => Err(service_error(e)),
    }
}

/// Pre-fill a new assessment form from a patient's latest records
#[utoipa::path(
    post,
    path = "/api/v1/risk/suggestion",
    request_body = ClassifyRiskRequest,
    responses(
        (status = 200, description = "Suggested assessment values", body = AssessmentSuggestion),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "risk"
)]
#[instrument(skip(service, payload))]
pub async fn suggest_assessment(
    State(service): State<SharedRiskService>,
    payload: Result<Json<ClassifyRiskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    info!("Assessment suggestion requested");

    let input = prepare_input(payload)?;

    match service.suggest_assessment(&input) {
        Ok(suggestion) => Ok((StatusCode::OK, Json(suggestion))),
        Err(e) => Err(service_error(e)),
    }
}

/// Turn the request body into a domain input or an error response
fn prepare_input(payload: Result<Json<ClassifyRiskRequest>, JsonRejection>) -> Result<EvaluationInput, Response> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "Rejected request body");
        (rejection.status(), Json(ErrorResponse::bad_request(&rejection.body_text()))).into_response()
    })?;

    if let Err(errors) = request.validate() {
        let response = ErrorResponse::from_validation_errors(&errors);
        warn!("Invalid classification request: {}", response.message);
        return Err(response.into_response());
    }

    request
        .to_evaluation_input(Utc::now().date_naive())
        .map_err(service_error)
}

/// Map a domain error to an HTTP error response
fn service_error(err: RiskServiceError) -> Response {
    warn!(field = err.field().unwrap_or("input"), "Classification rejected");
    let details = err.field().map(|field| serde_json::json!({ "field": field }));
    ErrorResponse::validation_error(&err.to_string(), details).into_response()
}
