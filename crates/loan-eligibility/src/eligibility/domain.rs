use serde::{Deserialize, Serialize};

/// Form fields exactly as the applicant typed them.
///
/// Missing JSON keys deserialize to empty strings so the validator reports
/// them as required rather than the request failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawApplication {
    pub name: String,
    pub age: String,
    pub monthly_salary: String,
    #[serde(rename = "existingEMI")]
    pub existing_emi: String,
    pub loan_amount: String,
}

impl RawApplication {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        monthly_salary: impl Into<String>,
        existing_emi: impl Into<String>,
        loan_amount: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            monthly_salary: monthly_salary.into(),
            existing_emi: existing_emi.into(),
            loan_amount: loan_amount.into(),
        }
    }

    pub fn value(&self, field: ApplicationField) -> &str {
        match field {
            ApplicationField::Name => &self.name,
            ApplicationField::Age => &self.age,
            ApplicationField::MonthlySalary => &self.monthly_salary,
            ApplicationField::ExistingEmi => &self.existing_emi,
            ApplicationField::LoanAmount => &self.loan_amount,
        }
    }
}

/// Fields collected by the application form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApplicationField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "monthlySalary")]
    MonthlySalary,
    #[serde(rename = "existingEMI")]
    ExistingEmi,
    #[serde(rename = "loanAmount")]
    LoanAmount,
}

impl ApplicationField {
    pub const ALL: [ApplicationField; 5] = [
        ApplicationField::Name,
        ApplicationField::Age,
        ApplicationField::MonthlySalary,
        ApplicationField::ExistingEmi,
        ApplicationField::LoanAmount,
    ];

    /// Wire name used in JSON payloads and error maps.
    pub const fn key(self) -> &'static str {
        match self {
            ApplicationField::Name => "name",
            ApplicationField::Age => "age",
            ApplicationField::MonthlySalary => "monthlySalary",
            ApplicationField::ExistingEmi => "existingEMI",
            ApplicationField::LoanAmount => "loanAmount",
        }
    }

    /// Sentence-case label used at the start of error messages.
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationField::Name => "Name",
            ApplicationField::Age => "Age",
            ApplicationField::MonthlySalary => "Monthly salary",
            ApplicationField::ExistingEmi => "Existing EMI",
            ApplicationField::LoanAmount => "Loan amount",
        }
    }
}

/// Applicant data that passed every intake check.
///
/// Only the validator builds these; the evaluator relies on the numeric
/// ranges without checking them again. No `Deserialize` impl.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedApplication {
    name: String,
    age: u8,
    monthly_salary: f64,
    #[serde(rename = "existingEMI")]
    existing_emi: f64,
    loan_amount: f64,
}

impl ValidatedApplication {
    pub(crate) fn new(
        name: String,
        age: u8,
        monthly_salary: f64,
        existing_emi: f64,
        loan_amount: f64,
    ) -> Self {
        Self {
            name,
            age,
            monthly_salary,
            existing_emi,
            loan_amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn monthly_salary(&self) -> f64 {
        self.monthly_salary
    }

    pub fn existing_emi(&self) -> f64 {
        self.existing_emi
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }
}
