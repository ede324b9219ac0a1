use serde::{Deserialize, Serialize};

use super::super::domain::ValidatedApplication;
use super::amortization::{monthly_installment, round_to_cents};
use super::policy::{IneligibilityReason, LendingTerms};

/// Eligibility checks, listed in the order their reasons are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityRule {
    AgeBounds,
    LoanToIncomeCap,
    DebtToIncome,
    HighValueSalaryFloor,
}

/// Unrounded repayment figures shared by the rules and the decision.
pub(crate) struct Affordability {
    pub proposed_emi: f64,
    pub dti: f64,
    pub max_loan_amount: f64,
}

pub(crate) fn assess_affordability(
    application: &ValidatedApplication,
    terms: &LendingTerms,
) -> Affordability {
    let proposed_emi = monthly_installment(
        application.loan_amount(),
        terms.annual_interest_rate,
        terms.tenure_months,
    );
    let dti = (application.existing_emi() + proposed_emi) / application.monthly_salary() * 100.0;

    Affordability {
        proposed_emi,
        dti,
        max_loan_amount: terms.income_multiple * application.monthly_salary(),
    }
}

impl EligibilityRule {
    pub const ORDERED: [EligibilityRule; 4] = [
        EligibilityRule::AgeBounds,
        EligibilityRule::LoanToIncomeCap,
        EligibilityRule::DebtToIncome,
        EligibilityRule::HighValueSalaryFloor,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EligibilityRule::AgeBounds => "age bounds",
            EligibilityRule::LoanToIncomeCap => "loan-to-income cap",
            EligibilityRule::DebtToIncome => "debt-to-income ratio",
            EligibilityRule::HighValueSalaryFloor => "high-value salary floor",
        }
    }

    pub(crate) fn check(
        self,
        application: &ValidatedApplication,
        terms: &LendingTerms,
        affordability: &Affordability,
    ) -> Option<IneligibilityReason> {
        match self {
            EligibilityRule::AgeBounds => {
                let age = application.age();
                (age < terms.min_age || age > terms.max_age).then_some(
                    IneligibilityReason::AgeOutOfBounds {
                        min_age: terms.min_age,
                        max_age: terms.max_age,
                    },
                )
            }
            EligibilityRule::LoanToIncomeCap => (application.loan_amount()
                > affordability.max_loan_amount)
                .then_some(IneligibilityReason::LoanExceedsIncomeMultiple {
                    income_multiple: terms.income_multiple,
                    max_loan_amount: affordability.max_loan_amount,
                }),
            EligibilityRule::DebtToIncome => (affordability.dti > terms.max_dti_percent)
                .then(|| IneligibilityReason::DebtToIncomeTooHigh {
                    dti: round_to_cents(affordability.dti),
                    max_dti_percent: terms.max_dti_percent,
                }),
            EligibilityRule::HighValueSalaryFloor => (application.monthly_salary()
                < terms.high_value_min_salary
                && application.loan_amount() > terms.high_value_loan_threshold)
                .then_some(IneligibilityReason::HighValueSalaryFloor {
                    loan_threshold: terms.high_value_loan_threshold,
                    minimum_salary: terms.high_value_min_salary,
                }),
        }
    }
}
