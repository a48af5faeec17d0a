use bistro_catalog::Dish;
use bistro_core::Customer;
use std::sync::Arc;

use crate::models::Order;
use crate::updater::OrderError;
use crate::observer::OrderObserver;

impl OrderObserver for Customer {
    fn on_order_change(&self, order: &Order) -> String {
        format!("Your order is now: {}", order.status())
    }
}

/// Order commands a customer initiates
pub trait CustomerActions {
    fn start_order(&self) -> Order;

    fn add_dish_to_order(&self, order: &mut Order, dish: Arc<Dish>);

    fn remove_dish_from_order(&self, order: &mut Order, dish: &Arc<Dish>);

    fn order_total_price(&self, order: &Order) -> i64;

    /// Subscribe to the order, validate it, and return this customer's notice
    fn validate_order(&self, order: &mut Order) -> Result<String, OrderError>;
}

impl CustomerActions for Arc<Customer> {
    fn start_order(&self) -> Order {
        Order::new(self.clone())
    }

    fn add_dish_to_order(&self, order: &mut Order, dish: Arc<Dish>) {
        order.add_dish(dish);
    }

    fn remove_dish_from_order(&self, order: &mut Order, dish: &Arc<Dish>) {
        order.remove_dish(dish);
    }

    fn order_total_price(&self, order: &Order) -> i64 {
        order.get_total_price()
    }

    fn validate_order(&self, order: &mut Order) -> Result<String, OrderError> {
        order.add_observer(self.clone());
        order.validate_order()?;
        Ok(self.on_order_change(order))
    }
}
