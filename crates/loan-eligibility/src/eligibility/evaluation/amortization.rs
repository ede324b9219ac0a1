/// Equated monthly instalment for a reducing-balance loan.
///
/// `annual_rate` is a fraction (`0.105` for 10.5%). A zero rate spreads the
/// principal evenly and a zero tenure leaves the whole principal due at once.
pub fn monthly_installment(principal: f64, annual_rate: f64, tenure_months: u32) -> f64 {
    if tenure_months == 0 {
        return principal;
    }

    let months = f64::from(tenure_months);
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / months;
    }

    let factor = (1.0 + monthly_rate).powf(months);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// Values at or above this magnitude carry no sub-cent part.
const WHOLE_CENTS_THRESHOLD: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Round half away from zero to two decimal places.
///
/// Large magnitudes are returned unchanged so the scaling never overflows.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= WHOLE_CENTS_THRESHOLD {
        return value;
    }
    (value * 100.0).round() / 100.0
}
