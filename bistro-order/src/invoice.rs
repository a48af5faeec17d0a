use bistro_catalog::DiscountStrategy;
use bistro_core::format_money;
use std::fmt::Write;

use crate::models::Order;

/// Renders a plain-text invoice from an order's current state
pub struct Invoice {
    currency_symbol: String,
}

impl Invoice {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn generate_invoice(&self, order: &Order) -> String {
        self.render(order, None)
    }

    /// Same as `generate_invoice`, with a discounted total line appended
    pub fn generate_invoice_with_discount(&self, order: &Order, discount: &dyn DiscountStrategy) -> String {
        self.render(order, Some(discount))
    }

    pub fn get_total_amount(&self, order: &Order) -> i64 {
        order.get_total_price()
    }

    fn render(&self, order: &Order, discount: Option<&dyn DiscountStrategy>) -> String {
        let mut invoice = format!("Invoice for {}:\n", order.customer().get_name());

        for (index, dish) in order.dishes().iter().enumerate() {
            // Writing to a String cannot fail
            let _ = writeln!(
                invoice,
                "{}. {} with ingredients: {} - Price: {}",
                index + 1,
                dish.kind(),
                dish.show_ingredients().join(", "),
                self.money(dish.show_price())
            );
        }

        let _ = writeln!(invoice, "Total: {}", self.money(self.get_total_amount(order)));

        if let Some(discount) = discount {
            let _ = writeln!(
                invoice,
                "Discounted total ({}): {}",
                discount.describe(),
                self.money(order.total_with_discount(discount))
            );
        }

        invoice
    }

    fn money(&self, cents: i64) -> String {
        format_money(cents, &self.currency_symbol)
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new("$")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_catalog::{Dish, DishKind, PercentageDiscount};
    use bistro_core::Customer;
    use std::sync::Arc;

    fn order() -> Order {
        let mut order = Order::new(Arc::new(Customer::new("Alice")));
        order.add_dish(Arc::new(Dish::new(
            DishKind::CheeseBurger,
            vec!["bun".to_string(), "cheddar".to_string()],
        )));
        order.add_dish(Arc::new(Dish::new(DishKind::Salad, vec!["lettuce".to_string()])));
        order
    }

    #[test]
    fn test_invoice_lines() {
        let invoice = Invoice::default().generate_invoice(&order());

        assert_eq!(
            invoice,
            "Invoice for Alice:\n\
             1. CheeseBurger with ingredients: bun, cheddar - Price: $10.00\n\
             2. Salad with ingredients: lettuce - Price: $8.00\n\
             Total: $18.00\n"
        );
    }

    #[test]
    fn test_invoice_with_discount() {
        let invoice = Invoice::new("€").generate_invoice_with_discount(&order(), &PercentageDiscount::new(20.0));

        assert!(invoice.contains("Total: €18.00\n"));
        assert!(invoice.ends_with("Discounted total (20% off): €14.40\n"));
    }

    #[test]
    fn test_empty_order_invoice() {
        let order = Order::new(Arc::new(Customer::new("Bob")));
        let invoice = Invoice::default();

        assert_eq!(invoice.generate_invoice(&order), "Invoice for Bob:\nTotal: $0.00\n");
        assert_eq!(invoice.get_total_amount(&order), 0);
    }
}
