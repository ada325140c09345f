use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use posbindu_guide_api::api::create_application;
use posbindu_guide_api::config::AppConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    create_application(AppConfig::default()).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().await.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

fn titles(json: &Value) -> Vec<String> {
    json["indicators"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_classifier_ready() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["environment"], "development");
    assert_eq!(json["components"]["classifier"]["message"], "5 evaluators loaded");
}

#[tokio::test]
async fn severe_hypertension_is_referral() {
    let (status, json) = post(
        "/api/v1/risk/classify",
        json!({ "vitals": { "systolicBP": 180, "diastolicBP": 70 }, "ageYears": 50 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Hipertensi Berat"]);
    assert_eq!(json["indicators"][0]["severity"], "critical");
    assert_eq!(json["indicators"][0]["suggestedAction"], "referral");
    assert_eq!(json["suggestedCategory"], "rujukan");
    assert_eq!(json["alert"]["criticalCount"], 1);
}

#[tokio::test]
async fn elderly_hypotension_from_birth_date() {
    let (status, json) = post(
        "/api/v1/risk/classify",
        json!({ "vitals": { "systolicBP": 85, "diastolicBP": 60 }, "birthDate": "1940-01-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Hipotensi pada Lansia"]);
    assert_eq!(json["suggestedCategory"], "perlu_perhatian");
    assert_eq!(json["alert"]["headline"], "1 peringatan terdeteksi");
}

#[tokio::test]
async fn empty_bundle_is_normal_without_alert() {
    let (status, json) = post("/api/v1/risk/classify", json!({ "ageYears": 50 })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["indicators"].as_array().unwrap().is_empty());
    assert_eq!(json["suggestedCategory"], "normal");
    assert_eq!(json["warningCount"], 0);
    assert!(json.get("alert").is_none());
}

#[tokio::test]
async fn same_bundle_same_notification_key() {
    let body = json!({
        "vitals": { "systolicBP": 165, "diastolicBP": 95, "heightCm": 150, "weightKg": 90 },
        "lab": { "glucoseMgDl": 65 },
        "ageYears": 58
    });

    let (_, first) = post("/api/v1/risk/classify", body.clone()).await;
    let (_, second) = post("/api/v1/risk/classify", body).await;

    assert_eq!(first, second);
    assert_eq!(
        titles(&first),
        vec!["Hipertensi Sedang", "Obesitas Berat", "Hipoglikemia"]
    );
}

#[tokio::test]
async fn future_birth_date_is_rejected() {
    let (status, json) = post("/api/v1/risk/classify", json!({ "birthDate": "2999-01-01" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn suggestion_prefills_form() {
    let (status, json) = post(
        "/api/v1/risk/suggestion",
        json!({ "lab": { "glucoseMgDl": 320 }, "priorAssessment": { "category": "rujukan" }, "ageYears": 66 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "rujukan");

    let findings: Vec<&str> = json["findings"].as_str().unwrap().lines().collect();
    assert_eq!(findings.len(), 2);
    assert!(findings[0].starts_with("Gula Darah Sangat Tinggi: "));
    assert!(findings[1].starts_with("Kategori Rujukan: "));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/v1/risk/classify"].is_object());
}
