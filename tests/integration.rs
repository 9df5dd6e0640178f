//! HTTP integration tests for the personnel manager.
//!
//! This test suite covers:
//! - Manager and worker registration, including every rule violation
//! - Absent (`null`) and malformed request bodies
//! - Lookups by id and by name
//! - The merged, sorted employee listing
//! - The unsupported salary endpoints

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use personnel_manager::api::{AppState, create_router};
use personnel_manager::config::ConfigLoader;
use personnel_manager::service::{EmployeeService, FixedClock};
use personnel_manager::store::InMemoryStore;
use personnel_manager::validation::RegistrationPolicy;

// =============================================================================
// Test Helpers
// =============================================================================

/// Every test runs as if today were 2026-10-14, making the horizon 2027-01-14.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/registration.yaml").expect("Failed to load config");
    let policy = RegistrationPolicy::from_rules(config.rules()).expect("Invalid rules");
    let service = EmployeeService::new(Arc::new(InMemoryStore::new()), policy)
        .with_clock(FixedClock(today()));
    create_router(AppState::new(service))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn cadre_body(nom: &str, prenom: &str, date_embauche: &str, salaire: &str) -> Value {
    json!({
        "nom": nom,
        "prenom": prenom,
        "date_embauche": date_embauche,
        "salaire_mensuel": salaire
    })
}

fn ouvrier_body(nom: &str, prenom: &str, date_embauche: &str, taux: &str) -> Value {
    json!({
        "nom": nom,
        "prenom": prenom,
        "date_embauche": date_embauche,
        "taux_horaire": taux
    })
}

fn assert_rule_error(status: StatusCode, body: &Value, code: &str, message: &str) {
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
    assert_eq!(body["code"], code);
    assert_eq!(body["message"], message);
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_valid_cadre() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "Gerard", "2026-10-14", "1500"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap();

    let (status, cadre) = get_json(&router, &format!("/cadres/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cadre["nom"], "Dupont");
    assert_eq!(cadre["prenom"], "Gerard");
    assert_eq!(cadre["salaire_mensuel"], "1500");
}

#[tokio::test]
async fn test_register_valid_ouvrier() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Martin", "Lucie", "2015-06-01", "12.50"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap();

    let (status, ouvrier) = get_json(&router, &format!("/ouvriers/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ouvrier["taux_horaire"], "12.50");
}

#[tokio::test]
async fn test_null_cadre_is_invalid_argument() {
    let router = create_router_for_test();

    let (status, body) = post_json(&router, "/cadres", Value::Null).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_null_ouvrier_is_invalid_argument() {
    let router = create_router_for_test();

    let (status, body) = post_json(&router, "/ouvriers", Value::Null).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_cadre_hired_in_1920_rejected() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "Gérard", "1920-12-31", "1500"),
    )
    .await;

    assert_rule_error(status, &body, "HIRE_YEAR", "hire date must be after 1920");
}

#[tokio::test]
async fn test_ouvrier_hired_in_1920_rejected() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Dupont", "Gérard", "1920-12-31", "12"),
    )
    .await;

    assert_rule_error(status, &body, "HIRE_YEAR", "hire date must be after 1920");
}

#[tokio::test]
async fn test_hire_date_on_horizon_rejected_for_both_kinds() {
    let router = create_router_for_test();
    let message = "hire date must not be more than 3 months in the future";

    let (status, body) = post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "Gérard", "2027-01-14", "1500"),
    )
    .await;
    assert_rule_error(status, &body, "HIRE_HORIZON", message);

    let (status, body) = post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Dupont", "Gérard", "2027-01-14", "12"),
    )
    .await;
    assert_rule_error(status, &body, "HIRE_HORIZON", message);
}

#[tokio::test]
async fn test_hire_date_day_before_horizon_accepted() {
    let router = create_router_for_test();

    let (status, _) = post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "Gérard", "2027-01-13", "1500"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_negative_salary_rejected() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "Gérard", "2026-10-14", "-2500"),
    )
    .await;

    assert_rule_error(
        status,
        &body,
        "NEGATIVE_SALARY",
        "a manager's salary cannot be negative",
    );
}

#[tokio::test]
async fn test_negative_rate_reported_before_hire_date() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Dupont", "Gérard", "2027-01-14", "-12"),
    )
    .await;

    assert_rule_error(
        status,
        &body,
        "NON_POSITIVE_HOURLY_RATE",
        "a worker's hourly rate cannot be negative",
    );
}

#[tokio::test]
async fn test_zero_rate_rejected() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Dupont", "Gérard", "2026-10-14", "0"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "NON_POSITIVE_HOURLY_RATE");
}

#[tokio::test]
async fn test_cadre_name_with_special_characters_rejected() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "Gérard#1", "2026-10-14", "1500"),
    )
    .await;

    assert_rule_error(
        status,
        &body,
        "NAME_SHAPE",
        "name/first name must not contain special characters",
    );
}

#[tokio::test]
async fn test_missing_names_rejected_by_rules() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/ouvriers",
        json!({ "date_embauche": "2026-10-14", "taux_horaire": "12" }),
    )
    .await;

    assert_rule_error(
        status,
        &body,
        "MISSING_NAME",
        "name and first name are required",
    );
}

#[tokio::test]
async fn test_hire_year_reported_before_missing_name() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/cadres",
        cadre_body("", "Gerard", "1900-01-01", "1500"),
    )
    .await;

    assert_rule_error(status, &body, "HIRE_YEAR", "hire date must be after 1920");
}

#[tokio::test]
async fn test_rejected_registration_stores_nothing() {
    let router = create_router_for_test();

    post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "Gérard", "1900-01-01", "1500"),
    )
    .await;
    post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Dupont", "Gérard", "2026-10-14", "-1"),
    )
    .await;

    let (status, body) = get_json(&router, "/employees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Malformed requests
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_bad_request() {
    let router = create_router_for_test();

    let (status, body) = send(
        &router,
        Request::builder()
            .method("POST")
            .uri("/cadres")
            .header("Content-Type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_hire_date_is_validation_error() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        &router,
        "/cadres",
        json!({ "nom": "Dupont", "prenom": "Gerard", "salaire_mensuel": "1500" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let router = create_router_for_test();

    let (status, body) = send(
        &router,
        Request::builder()
            .method("POST")
            .uri("/ouvriers")
            .body(Body::from(
                ouvrier_body("Martin", "Lucie", "2020-01-01", "12").to_string(),
            ))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// Lookups and listing
// =============================================================================

#[tokio::test]
async fn test_unknown_ids_return_not_found() {
    let router = create_router_for_test();
    let id = uuid::Uuid::new_v4();

    let (status, body) = get_json(&router, &format!("/cadres/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = get_json(&router, &format!("/ouvriers/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_find_ouvrier_by_name_returns_first_match() {
    let router = create_router_for_test();
    post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Martin", "Lucie", "2020-01-01", "12"),
    )
    .await;
    post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Martin", "Paul", "2021-01-01", "13"),
    )
    .await;

    let (status, body) = get_json(&router, "/ouvriers?nom=Martin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prenom"], "Lucie");

    let (status, _) = get_json(&router, "/ouvriers?nom=Durand").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_employees_sorted_by_nom_then_prenom() {
    let router = create_router_for_test();
    post_json(
        &router,
        "/cadres",
        cadre_body("Zidane", "A", "2020-01-01", "4000"),
    )
    .await;
    post_json(
        &router,
        "/ouvriers",
        ouvrier_body("Dupont", "B", "2020-01-01", "12"),
    )
    .await;
    post_json(
        &router,
        "/cadres",
        cadre_body("Dupont", "A", "2020-01-01", "3000"),
    )
    .await;

    let (status, body) = get_json(&router, "/employees").await;
    assert_eq!(status, StatusCode::OK);

    let listed: Vec<(String, String, String)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["nom"].as_str().unwrap().to_string(),
                e["prenom"].as_str().unwrap().to_string(),
                e["kind"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        listed,
        vec![
            ("Dupont".into(), "A".into(), "cadre".into()),
            ("Dupont".into(), "B".into(), "ouvrier".into()),
            ("Zidane".into(), "A".into(), "cadre".into()),
        ]
    );
}

// =============================================================================
// Salary endpoints
// =============================================================================

#[tokio::test]
async fn test_salary_endpoints_not_implemented() {
    let router = create_router_for_test();
    let id = uuid::Uuid::new_v4();

    let (status, body) =
        get_json(&router, &format!("/cadres/{}/salaires?mois=2026-09-01", id)).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["code"], "NOT_SUPPORTED");

    let (status, body) =
        get_json(&router, &format!("/ouvriers/{}/salaires?mois=2026-09-01", id)).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["code"], "NOT_SUPPORTED");
}
