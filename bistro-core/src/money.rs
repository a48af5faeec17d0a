/// Render an amount in cents with the given currency symbol, e.g. `$14.40` or `-$7.00`
pub fn format_money(cents: i64, symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
}

pub fn format_cents(cents: i64) -> String {
    format_money(cents, "$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1800), "$18.00");
        assert_eq!(format_cents(1440), "$14.40");
        assert_eq!(format_cents(-700), "-$7.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_money(1000, "€"), "€10.00");
    }
}
