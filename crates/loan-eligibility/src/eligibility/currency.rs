/// Format a rupee amount with Indian digit grouping and no decimals.
///
/// The last three digits form one group and every group above it has two
/// (`1234567.4` becomes `12,34,567`). Fractions round half away from zero.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let rounded = amount.round();
    let grouped = group_digits(&format!("{:.0}", rounded.abs()));

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (upper, thousands) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::with_capacity(upper.len() / 2 + 1);
    let mut end = upper.len();
    while end > 2 {
        groups.push(&upper[end - 2..end]);
        end -= 2;
    }
    groups.push(&upper[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), thousands)
}

#[cfg(test)]
mod tests {
    use super::format_inr;

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(7.0), "7");
        assert_eq!(format_inr(999.0), "999");
    }

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(format_inr(1_000.0), "1,000");
        assert_eq!(format_inr(15_000.0), "15,000");
        assert_eq!(format_inr(500_000.0), "5,00,000");
        assert_eq!(format_inr(750_000.0), "7,50,000");
        assert_eq!(format_inr(12_345_678.0), "1,23,45,678");
        assert_eq!(format_inr(123_456_789.0), "12,34,56,789");
    }

    #[test]
    fn drops_fraction_digits() {
        assert_eq!(format_inr(6448.17), "6,448");
        assert_eq!(format_inr(86_890.5), "86,891");
        assert_eq!(format_inr(225_007.49), "2,25,007");
    }

    #[test]
    fn keeps_sign_for_negative_amounts() {
        assert_eq!(format_inr(-150_000.0), "-1,50,000");
        assert_eq!(format_inr(-0.4), "0");
    }
}
