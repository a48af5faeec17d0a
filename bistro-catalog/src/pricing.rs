use serde::{Deserialize, Serialize};

/// Anything with a raw total price (in cents)
pub trait Priced {
    fn total_price_cents(&self) -> i64;
}

/// Pluggable discount applied on top of a raw total
pub trait DiscountStrategy: Send + Sync {
    /// Discounted total (in cents). Not clamped: may be negative.
    fn apply_discount(&self, priced: &dyn Priced) -> i64;

    fn describe(&self) -> String;
}

/// Reduces the total by a percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    percentage: f64,
}

impl PercentageDiscount {
    /// `percentage` is expected in [0, 100] but is taken as-is.
    /// A non-finite percentage leaves the total unchanged.
    pub fn new(percentage: f64) -> Self {
        Self { percentage }
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn apply_discount(&self, priced: &dyn Priced) -> i64 {
        let total = priced.total_price_cents();
        if !self.percentage.is_finite() {
            tracing::warn!("Ignoring non-finite discount percentage {}", self.percentage);
            return total;
        }
        // Float to int casts saturate at the i64 bounds
        let discounted = (total as f64 * (1.0 - self.percentage / 100.0)).round() as i64;

        tracing::debug!("Applied {}% discount: {} -> {}", self.percentage, total, discounted);
        discounted
    }

    fn describe(&self) -> String {
        format!("{}% off", self.percentage)
    }
}

/// Subtracts a flat amount from the total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAmountDiscount {
    amount_cents: i64,
}

impl FixedAmountDiscount {
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }
}

impl DiscountStrategy for FixedAmountDiscount {
    fn apply_discount(&self, priced: &dyn Priced) -> i64 {
        let total = priced.total_price_cents();
        let discounted = total.saturating_sub(self.amount_cents);

        if discounted < 0 {
            tracing::debug!("Fixed discount of {} exceeds total {}", self.amount_cents, total);
        }
        discounted
    }

    fn describe(&self) -> String {
        format!("{} cents off", self.amount_cents)
    }
}

/// Serializable description of a discount (e.g. from configuration)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountSpec {
    Percentage { percentage: f64 },
    FixedAmount { amount_cents: i64 },
}

impl DiscountSpec {
    pub fn into_strategy(self) -> Box<dyn DiscountStrategy> {
        match self {
            DiscountSpec::Percentage { percentage } => Box::new(PercentageDiscount::new(percentage)),
            DiscountSpec::FixedAmount { amount_cents } => Box::new(FixedAmountDiscount::new(amount_cents)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Total(i64);

    impl Priced for Total {
        fn total_price_cents(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_percentage_discount() {
        // Burger (10) + salad (8)
        let discounted = PercentageDiscount::new(20.0).apply_discount(&Total(1800));
        assert_eq!(discounted, 1440);
    }

    #[test]
    fn test_percentage_out_of_range() {
        assert_eq!(PercentageDiscount::new(150.0).apply_discount(&Total(1000)), -500);
        assert_eq!(PercentageDiscount::new(-10.0).apply_discount(&Total(1000)), 1100);
    }

    #[test]
    fn test_fixed_amount_can_go_negative() {
        let discounted = FixedAmountDiscount::new(2500).apply_discount(&Total(1800));
        assert_eq!(discounted, -700);
    }

    #[test]
    fn test_non_finite_percentage_leaves_total() {
        assert_eq!(PercentageDiscount::new(f64::NAN).apply_discount(&Total(1800)), 1800);
        assert_eq!(PercentageDiscount::new(f64::INFINITY).apply_discount(&Total(1800)), 1800);
    }

    #[test]
    fn test_fixed_amount_saturates() {
        assert_eq!(FixedAmountDiscount::new(i64::MIN).apply_discount(&Total(1800)), i64::MAX);
        assert_eq!(FixedAmountDiscount::new(i64::MAX).apply_discount(&Total(-1800)), i64::MIN);
    }

    #[test]
    fn test_spec_from_json() {
        let spec: DiscountSpec = serde_json::from_str(r#"{"type":"percentage","percentage":10.0}"#).unwrap();
        assert_eq!(spec, DiscountSpec::Percentage { percentage: 10.0 });
        assert_eq!(spec.into_strategy().apply_discount(&Total(1000)), 900);

        let spec: DiscountSpec = serde_json::from_str(r#"{"type":"fixed_amount","amount_cents":300}"#).unwrap();
        assert_eq!(spec.into_strategy().apply_discount(&Total(1000)), 700);
    }
}
