use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use super::domain::{RawApplication, ValidatedApplication};
use super::evaluation::{EligibilityDecision, EligibilityEngine, LendingTerms};
use super::validation::{validate, FieldErrors, IntakeLimits};
use crate::error::AppError;

/// Fixed terms published so a form can describe the product up front.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsResponse {
    pub lending: LendingTerms,
    pub intake: IntakeLimits,
}

/// Router exposing validation and eligibility checks over HTTP.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/loan/eligibility", post(eligibility_handler))
        .route("/api/v1/loan/validate", post(validate_handler))
        .route("/api/v1/loan/terms", get(terms_handler))
        .with_state(engine)
}

pub(crate) async fn eligibility_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(raw): Json<RawApplication>,
) -> Result<Json<EligibilityDecision>, AppError> {
    let decision = engine.check(&raw).map_err(log_rejection)?;

    info!(
        eligible = decision.is_eligible(),
        failed_rules = decision.reasons().len(),
        "eligibility decision issued"
    );

    Ok(Json(decision))
}

pub(crate) async fn validate_handler(
    Json(raw): Json<RawApplication>,
) -> Result<Json<ValidatedApplication>, AppError> {
    let application = validate(&raw).map_err(log_rejection)?;
    Ok(Json(application))
}

pub(crate) async fn terms_handler(
    State(engine): State<Arc<EligibilityEngine>>,
) -> Json<TermsResponse> {
    Json(TermsResponse {
        lending: *engine.terms(),
        intake: IntakeLimits::STANDARD,
    })
}

fn log_rejection(errors: FieldErrors) -> AppError {
    let fields: Vec<&'static str> = errors.iter().map(|(field, _)| field.key()).collect();
    info!(?fields, "application failed intake validation");
    AppError::Validation(errors)
}
