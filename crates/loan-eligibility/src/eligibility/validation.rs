use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::currency::format_inr;
use super::domain::{ApplicationField, RawApplication, ValidatedApplication};

/// Intake thresholds checked before any eligibility rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeLimits {
    pub min_name_chars: usize,
    pub min_age: u8,
    pub max_age: u8,
    pub min_monthly_salary: f64,
    pub min_loan_amount: f64,
}

impl IntakeLimits {
    pub const STANDARD: IntakeLimits = IntakeLimits {
        min_name_chars: 2,
        min_age: 1,
        max_age: 120,
        min_monthly_salary: 15_000.0,
        min_loan_amount: 50_000.0,
    };
}

/// Broad class of an input problem, for callers that style errors by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Missing,
    Format,
    Range,
    Sign,
}

/// A single user-correctable problem with one form field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Missing(ApplicationField),
    #[error("{} must be a valid number", .0.label())]
    NotANumber(ApplicationField),
    #[error("{} cannot be negative", .0.label())]
    Negative(ApplicationField),
    #[error("Name must be at least {min_chars} characters long")]
    NameTooShort { min_chars: usize },
    #[error("Age must be between {min} and {max}")]
    AgeOutOfRange { min: u8, max: u8 },
    #[error("Minimum monthly salary should be ₹{}", rupees(.minimum))]
    SalaryBelowMinimum { minimum: f64 },
    #[error("Minimum loan amount is ₹{}", rupees(.minimum))]
    LoanBelowMinimum { minimum: f64 },
}

fn rupees(amount: &f64) -> String {
    format_inr(*amount)
}

impl FieldError {
    pub fn field(&self) -> ApplicationField {
        match self {
            FieldError::Missing(field)
            | FieldError::NotANumber(field)
            | FieldError::Negative(field) => *field,
            FieldError::NameTooShort { .. } => ApplicationField::Name,
            FieldError::AgeOutOfRange { .. } => ApplicationField::Age,
            FieldError::SalaryBelowMinimum { .. } => ApplicationField::MonthlySalary,
            FieldError::LoanBelowMinimum { .. } => ApplicationField::LoanAmount,
        }
    }

    pub fn kind(&self) -> FieldErrorKind {
        match self {
            FieldError::Missing(_) => FieldErrorKind::Missing,
            FieldError::NotANumber(_) => FieldErrorKind::Format,
            FieldError::Negative(_) => FieldErrorKind::Sign,
            FieldError::NameTooShort { .. }
            | FieldError::AgeOutOfRange { .. }
            | FieldError::SalaryBelowMinimum { .. }
            | FieldError::LoanBelowMinimum { .. } => FieldErrorKind::Range,
        }
    }
}

/// Every field problem found in one application, at most one per field.
///
/// Serializes as `{"<field key>": "<message>"}` so a form can show each
/// message next to its input.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("{} application field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<ApplicationField, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: ApplicationField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: ApplicationField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: ApplicationField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ApplicationField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().map(|error| (error.field(), error)).collect())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.key(), &error.to_string())?;
        }
        map.end()
    }
}

/// Check all five fields and coerce them to numbers.
///
/// Every field is checked even after an earlier one fails, so the caller
/// gets the full set of problems in one pass. The result is either a complete
/// [`ValidatedApplication`] or a non-empty [`FieldErrors`].
pub fn validate(raw: &RawApplication) -> Result<ValidatedApplication, FieldErrors> {
    let limits = IntakeLimits::STANDARD;

    let name = check_name(&raw.name, &limits);
    let age = check_age(&raw.age, &limits);
    let monthly_salary = check_amount(ApplicationField::MonthlySalary, &raw.monthly_salary)
        .and_then(|salary| {
            at_least(
                salary,
                limits.min_monthly_salary,
                FieldError::SalaryBelowMinimum {
                    minimum: limits.min_monthly_salary,
                },
            )
        });
    let existing_emi = check_amount(ApplicationField::ExistingEmi, &raw.existing_emi);
    let loan_amount =
        check_amount(ApplicationField::LoanAmount, &raw.loan_amount).and_then(|amount| {
            at_least(
                amount,
                limits.min_loan_amount,
                FieldError::LoanBelowMinimum {
                    minimum: limits.min_loan_amount,
                },
            )
        });

    match (name, age, monthly_salary, existing_emi, loan_amount) {
        (Ok(name), Ok(age), Ok(monthly_salary), Ok(existing_emi), Ok(loan_amount)) => Ok(
            ValidatedApplication::new(name, age, monthly_salary, existing_emi, loan_amount),
        ),
        (name, age, monthly_salary, existing_emi, loan_amount) => Err([
            name.err(),
            age.err(),
            monthly_salary.err(),
            existing_emi.err(),
            loan_amount.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

fn check_name(raw: &str, limits: &IntakeLimits) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing(ApplicationField::Name));
    }
    // Length in UTF-16 code units, as browser forms measure it.
    if trimmed.encode_utf16().count() < limits.min_name_chars {
        return Err(FieldError::NameTooShort {
            min_chars: limits.min_name_chars,
        });
    }
    Ok(trimmed.to_string())
}

fn check_age(raw: &str, limits: &IntakeLimits) -> Result<u8, FieldError> {
    let age = parse_number(ApplicationField::Age, raw)?;
    if age < f64::from(limits.min_age) || age > f64::from(limits.max_age) {
        return Err(FieldError::AgeOutOfRange {
            min: limits.min_age,
            max: limits.max_age,
        });
    }
    // Bounded to 1..=120 above, so the cast cannot wrap.
    Ok(age.trunc() as u8)
}

fn check_amount(field: ApplicationField, raw: &str) -> Result<f64, FieldError> {
    let amount = parse_number(field, raw)?;
    if amount < 0.0 {
        return Err(FieldError::Negative(field));
    }
    Ok(amount)
}

fn at_least(value: f64, minimum: f64, error: FieldError) -> Result<f64, FieldError> {
    if value < minimum {
        Err(error)
    } else {
        Ok(value)
    }
}

fn parse_number(field: ApplicationField, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing(field));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(FieldError::NotANumber(field))
}
