mod amortization;
mod policy;
mod rules;

pub use amortization::monthly_installment;
pub use policy::{IneligibilityReason, LendingTerms};
pub use rules::EligibilityRule;

use super::domain::{RawApplication, ValidatedApplication};
use super::validation::{validate, FieldErrors};
use policy::decide_outcome;
use serde::Serialize;
use tracing::debug;

/// Stateless evaluator that applies the fixed lending terms to an application.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    terms: LendingTerms,
}

impl EligibilityEngine {
    pub fn standard() -> Self {
        Self {
            terms: LendingTerms::STANDARD,
        }
    }

    pub fn terms(&self) -> &LendingTerms {
        &self.terms
    }

    /// Run every rule against an already validated application.
    pub fn evaluate(&self, application: &ValidatedApplication) -> EligibilityDecision {
        let affordability = rules::assess_affordability(application, &self.terms);
        let decision = decide_outcome(application, &self.terms, &affordability);

        debug!(
            eligible = decision.is_eligible,
            failed_rules = decision.reasons.len(),
            dti = decision.dti,
            proposed_emi = decision.proposed_emi,
            "loan application evaluated"
        );

        decision
    }

    /// Validate raw form input and, when it passes, evaluate it.
    pub fn check(&self, raw: &RawApplication) -> Result<EligibilityDecision, FieldErrors> {
        let application = validate(raw)?;
        Ok(self.evaluate(&application))
    }
}

/// Eligibility verdict together with the repayment figures behind it.
///
/// The figures are filled in whether or not the applicant is eligible, so a
/// renderer can always show them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityDecision {
    is_eligible: bool,
    reasons: Vec<IneligibilityReason>,
    dti: f64,
    #[serde(rename = "proposedEMI")]
    proposed_emi: f64,
    total_payable: f64,
    interest_payable: f64,
}

impl EligibilityDecision {
    pub fn is_eligible(&self) -> bool {
        self.is_eligible
    }

    /// Failed rules, in rule order. Empty exactly when the applicant is eligible.
    pub fn reasons(&self) -> &[IneligibilityReason] {
        &self.reasons
    }

    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    pub fn failed_rules(&self) -> Vec<EligibilityRule> {
        self.reasons.iter().map(IneligibilityReason::rule).collect()
    }

    /// Debt-to-income ratio in percent, rounded to two places.
    pub fn dti(&self) -> f64 {
        self.dti
    }

    pub fn proposed_emi(&self) -> f64 {
        self.proposed_emi
    }

    pub fn total_payable(&self) -> f64 {
        self.total_payable
    }

    pub fn interest_payable(&self) -> f64 {
        self.interest_payable
    }
}
