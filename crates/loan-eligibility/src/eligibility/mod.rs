//! Intake validation and eligibility evaluation for personal loan applications.
//!
//! Callers run [`validate`] on the raw form fields first and pass the result to
//! [`evaluate`]. Both are pure; the only state lives in the caller.

pub mod currency;
pub mod domain;
pub(crate) mod evaluation;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use currency::format_inr;
pub use domain::{ApplicationField, RawApplication, ValidatedApplication};
pub use evaluation::{
    monthly_installment, EligibilityDecision, EligibilityEngine, EligibilityRule,
    IneligibilityReason, LendingTerms,
};
pub use router::eligibility_router;
pub use validation::{validate, FieldError, FieldErrorKind, FieldErrors, IntakeLimits};

/// Evaluate a validated application against the standard lending terms.
pub fn evaluate(application: &ValidatedApplication) -> EligibilityDecision {
    EligibilityEngine::standard().evaluate(application)
}
