use std::fmt;

use serde::{Serialize, Serializer};

use super::super::currency::format_inr;
use super::super::domain::ValidatedApplication;
use super::amortization::round_to_cents;
use super::rules::{Affordability, EligibilityRule};
use super::EligibilityDecision;

/// Fixed lending terms for the personal loan product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingTerms {
    /// Annual interest rate as a fraction.
    pub annual_interest_rate: f64,
    pub tenure_months: u32,
    pub min_age: u8,
    pub max_age: u8,
    /// Maximum loan as a multiple of monthly salary.
    pub income_multiple: f64,
    /// Debt-to-income ceiling, in percent.
    pub max_dti_percent: f64,
    pub high_value_loan_threshold: f64,
    pub high_value_min_salary: f64,
}

impl LendingTerms {
    pub const STANDARD: LendingTerms = LendingTerms {
        annual_interest_rate: 0.105,
        tenure_months: 60,
        min_age: 21,
        max_age: 65,
        income_multiple: 15.0,
        max_dti_percent: 50.0,
        high_value_loan_threshold: 500_000.0,
        high_value_min_salary: 25_000.0,
    };
}

impl Default for LendingTerms {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Why an otherwise valid application was turned down.
#[derive(Debug, Clone, PartialEq)]
pub enum IneligibilityReason {
    AgeOutOfBounds {
        min_age: u8,
        max_age: u8,
    },
    LoanExceedsIncomeMultiple {
        income_multiple: f64,
        max_loan_amount: f64,
    },
    DebtToIncomeTooHigh {
        dti: f64,
        max_dti_percent: f64,
    },
    HighValueSalaryFloor {
        loan_threshold: f64,
        minimum_salary: f64,
    },
}

impl IneligibilityReason {
    pub fn rule(&self) -> EligibilityRule {
        match self {
            IneligibilityReason::AgeOutOfBounds { .. } => EligibilityRule::AgeBounds,
            IneligibilityReason::LoanExceedsIncomeMultiple { .. } => {
                EligibilityRule::LoanToIncomeCap
            }
            IneligibilityReason::DebtToIncomeTooHigh { .. } => EligibilityRule::DebtToIncome,
            IneligibilityReason::HighValueSalaryFloor { .. } => {
                EligibilityRule::HighValueSalaryFloor
            }
        }
    }
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibilityReason::AgeOutOfBounds { min_age, max_age } => {
                write!(f, "Age must be between {min_age} and {max_age} years")
            }
            IneligibilityReason::LoanExceedsIncomeMultiple {
                income_multiple,
                max_loan_amount,
            } => write!(
                f,
                "Loan amount cannot exceed {income_multiple} times your monthly salary (Maximum: ₹{})",
                // Floored so the shown maximum never exceeds the cap.
                format_inr(max_loan_amount.floor())
            ),
            IneligibilityReason::DebtToIncomeTooHigh {
                dti,
                max_dti_percent,
            } => write!(
                f,
                "Debt-to-Income Ratio ({dti:.2}%) exceeds {max_dti_percent}% limit"
            ),
            IneligibilityReason::HighValueSalaryFloor {
                loan_threshold,
                minimum_salary,
            } => write!(
                f,
                "For loans above ₹{}, minimum salary should be ₹{} per month",
                format_inr(*loan_threshold),
                format_inr(*minimum_salary)
            ),
        }
    }
}

impl Serialize for IneligibilityReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) fn decide_outcome(
    application: &ValidatedApplication,
    terms: &LendingTerms,
    affordability: &Affordability,
) -> EligibilityDecision {
    let reasons: Vec<IneligibilityReason> = EligibilityRule::ORDERED
        .iter()
        .filter_map(|rule| rule.check(application, terms, affordability))
        .collect();

    let proposed_emi = round_to_cents(affordability.proposed_emi);
    let total_payable = round_to_cents(proposed_emi * f64::from(terms.tenure_months));
    let interest_payable = round_to_cents(total_payable - application.loan_amount());

    EligibilityDecision {
        is_eligible: reasons.is_empty(),
        reasons,
        dti: round_to_cents(affordability.dti),
        proposed_emi,
        total_payable,
        interest_payable,
    }
}
