use loan_eligibility::eligibility::{format_inr, EligibilityDecision, FieldErrors, LendingTerms};
use std::fmt::Write;

/// Text rendering of a decision, mirroring the eligible and ineligible panels
/// of the application form.
pub(crate) fn render_decision(decision: &EligibilityDecision, terms: &LendingTerms) -> String {
    let mut out = String::new();

    if decision.is_eligible() {
        writeln!(out, "✓ Eligible for Loan").expect("write headline");
        writeln!(out, "Congratulations! You are eligible for the loan.").expect("write summary");
        writeln!(out, "\nLoan Details:").expect("write details header");
        writeln!(out, "- Debt-to-Income Ratio: {:.2}%", decision.dti()).expect("write dti");
        writeln!(
            out,
            "- Proposed Monthly EMI: {}",
            rupees(decision.proposed_emi())
        )
        .expect("write emi");
        writeln!(out, "- Loan Tenure: {}", tenure_label(terms.tenure_months))
            .expect("write tenure");
        writeln!(
            out,
            "- Interest Rate: {}% per annum",
            annual_rate_percent(terms.annual_interest_rate)
        )
        .expect("write rate");
        writeln!(
            out,
            "- Total Interest Payable: {}",
            rupees(decision.interest_payable())
        )
        .expect("write interest");
        write!(
            out,
            "- Total Amount Payable: {}",
            rupees(decision.total_payable())
        )
        .expect("write total");
    } else {
        writeln!(out, "✗ Not Eligible for Loan").expect("write headline");
        writeln!(
            out,
            "Sorry, you are not eligible for the loan due to the following reasons:"
        )
        .expect("write summary");
        for reason in decision.reasons() {
            writeln!(out, "- {reason}").expect("write reason");
        }
        write!(out, "Current DTI Ratio: {:.2}%", decision.dti()).expect("write dti");
    }

    out
}

pub(crate) fn render_field_errors(errors: &FieldErrors) -> String {
    let mut out = String::from("Please correct the following fields:");
    for (field, error) in errors.iter() {
        write!(out, "\n- {}: {}", field.key(), error).expect("write field error");
    }
    out
}

fn rupees(amount: f64) -> String {
    format!("₹{}", format_inr(amount))
}

fn tenure_label(months: u32) -> String {
    if months % 12 == 0 {
        format!("{} years ({} months)", months / 12, months)
    } else {
        format!("{months} months")
    }
}

fn annual_rate_percent(rate: f64) -> f64 {
    (rate * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_eligibility::eligibility::{validate, EligibilityEngine, RawApplication};

    fn decide(age: &str, salary: &str, existing_emi: &str, loan: &str) -> EligibilityDecision {
        let raw = RawApplication::new("Asha Rao", age, salary, existing_emi, loan);
        let application = validate(&raw).expect("valid fixture");
        EligibilityEngine::standard().evaluate(&application)
    }

    #[test]
    fn eligible_decision_lists_loan_details() {
        let decision = decide("30", "50000", "2000", "300000");
        let text = render_decision(&decision, &LendingTerms::STANDARD);

        assert!(text.starts_with("✓ Eligible for Loan"));
        assert!(text.contains("- Debt-to-Income Ratio: 16.90%"));
        assert!(text.contains("- Proposed Monthly EMI: ₹6,448"));
        assert!(text.contains("- Loan Tenure: 5 years (60 months)"));
        assert!(text.contains("- Interest Rate: 10.5% per annum"));
        assert!(text.contains("- Total Interest Payable: ₹86,890"));
        assert!(text.ends_with("- Total Amount Payable: ₹3,86,890"));
    }

    #[test]
    fn ineligible_decision_lists_reasons_and_dti() {
        let decision = decide("35", "20000", "8000", "200000");
        let text = render_decision(&decision, &LendingTerms::STANDARD);

        assert!(text.starts_with("✗ Not Eligible for Loan"));
        assert!(text.contains("- Debt-to-Income Ratio (61.49%) exceeds 50% limit"));
        assert!(text.ends_with("Current DTI Ratio: 61.49%"));
    }

    #[test]
    fn field_errors_are_listed_by_field() {
        let errors = validate(&RawApplication::new("Asha Rao", "", "14999", "0", "300000"))
            .expect_err("invalid fixture");
        let text = render_field_errors(&errors);

        assert_eq!(
            text,
            "Please correct the following fields:\n- age: Age is required\n- monthlySalary: Minimum monthly salary should be ₹15,000"
        );
    }

    #[test]
    fn tenure_label_handles_partial_years() {
        assert_eq!(tenure_label(60), "5 years (60 months)");
        assert_eq!(tenure_label(18), "18 months");
    }
}
