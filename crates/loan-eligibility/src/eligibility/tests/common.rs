use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::eligibility::domain::{RawApplication, ValidatedApplication};
use crate::eligibility::evaluation::EligibilityEngine;
use crate::eligibility::router::eligibility_router;
use crate::eligibility::validation::validate;

pub(super) fn raw(
    name: &str,
    age: &str,
    monthly_salary: &str,
    existing_emi: &str,
    loan_amount: &str,
) -> RawApplication {
    RawApplication::new(name, age, monthly_salary, existing_emi, loan_amount)
}

/// Salaried applicant comfortably inside every rule.
pub(super) fn eligible_raw() -> RawApplication {
    raw("Asha Rao", "30", "50000", "2000", "300000")
}

pub(super) fn blank_raw() -> RawApplication {
    RawApplication::default()
}

pub(super) fn validated(raw: RawApplication) -> ValidatedApplication {
    validate(&raw).expect("fixture passes intake validation")
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::standard()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn router() -> axum::Router {
    eligibility_router(Arc::new(engine()))
}

pub(super) fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("valid request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
