use bistro_core::TransitionPolicy;

use crate::models::{Order, OrderStatus};
use crate::observer::OrderObserver;
use crate::updater::{OrderError, StatusChange, StatusUpdater};

/// The kitchen follows orders and drives them through preparation
#[derive(Debug, Default)]
pub struct Kitchen {
    updater: StatusUpdater,
}

/// Outcome of a kitchen-driven status change
#[derive(Debug, Clone)]
pub struct KitchenUpdate {
    /// The kitchen's own notice
    pub notice: String,
    /// The change, including every subscriber's message
    pub change: StatusChange,
}

impl Kitchen {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            updater: StatusUpdater::new(policy),
        }
    }

    /// Set the order status and report both the kitchen's notice and the fan-out
    pub fn update_order_status(&self, order: &mut Order, status: OrderStatus) -> Result<KitchenUpdate, OrderError> {
        let change = self.updater.update_status(order, status)?;
        Ok(self.report(order, change))
    }

    pub fn advance(&self, order: &mut Order) -> Result<KitchenUpdate, OrderError> {
        let change = self.updater.advance(order)?;
        Ok(self.report(order, change))
    }

    fn report(&self, order: &Order, change: StatusChange) -> KitchenUpdate {
        KitchenUpdate {
            notice: self.on_order_change(order),
            change,
        }
    }
}

impl OrderObserver for Kitchen {
    fn on_order_change(&self, order: &Order) -> String {
        format!(
            "Order for customer \"{}\" is \"{}\"",
            order.customer().get_name(),
            order.status()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CustomerActions;
    use bistro_core::Customer;
    use std::sync::Arc;

    #[test]
    fn test_kitchen_message() {
        let kitchen = Kitchen::default();
        let mut order = Order::new(Arc::new(Customer::new("Alice")));

        let update = kitchen.update_order_status(&mut order, OrderStatus::InPreparation).unwrap();

        assert!(update.notice.contains("Alice"));
        assert!(update.notice.contains("In preparation"));
        assert_eq!(update.change.from, OrderStatus::NotValidated);
        assert_eq!(update.change.to, OrderStatus::InPreparation);
    }

    #[test]
    fn test_strict_kitchen_refuses_skipping_validation() {
        let kitchen = Kitchen::new(TransitionPolicy::Strict);
        let mut order = Order::new(Arc::new(Customer::new("Bob")));

        assert!(kitchen.advance(&mut order).is_ok());
        assert_eq!(order.status(), OrderStatus::Validated);

        let err = kitchen.update_order_status(&mut order, OrderStatus::Completed).unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidTransition {
                from: OrderStatus::Validated,
                to: OrderStatus::Completed
            }
        );
    }

    #[test]
    fn test_completed_strict_order_cannot_be_reopened() {
        let kitchen = Kitchen::new(TransitionPolicy::Strict);
        let alice = Arc::new(Customer::new("Alice"));
        let mut order = Order::new(alice.clone()).with_transition_policy(TransitionPolicy::Strict);

        alice.validate_order(&mut order).unwrap();
        for _ in 0..3 {
            kitchen.advance(&mut order).unwrap();
        }
        assert_eq!(order.status(), OrderStatus::Completed);

        assert!(matches!(
            alice.validate_order(&mut order),
            Err(OrderError::InvalidTransition { from: OrderStatus::Completed, .. })
        ));
        assert!(kitchen.update_order_status(&mut order, OrderStatus::InPreparation).is_err());
        assert_eq!(order.status(), OrderStatus::Completed);
    }

    #[test]
    fn test_update_carries_every_subscriber_message() {
        let kitchen = Arc::new(Kitchen::default());
        let alice = Arc::new(Customer::new("Alice"));
        let mut order = Order::new(alice.clone());
        alice.validate_order(&mut order).unwrap();
        order.add_observer(kitchen.clone());

        let update = kitchen.update_order_status(&mut order, OrderStatus::Ready).unwrap();

        assert_eq!(
            update.change.messages,
            vec![
                "Your order is now: Ready".to_string(),
                "Order for customer \"Alice\" is \"Ready\"".to_string(),
            ]
        );
        assert_eq!(update.notice, "Order for customer \"Alice\" is \"Ready\"");
    }
}
