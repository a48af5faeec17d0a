use bistro_catalog::{DiscountStrategy, Dish, Priced};
use bistro_core::{Customer, NotificationMode, TransitionPolicy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::observer::{ObserverRegistry, OrderObserver};
use crate::updater::{OrderError, StatusUpdater};

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    NotValidated,
    Validated,
    InPreparation,
    Ready,
    Completed,
}

impl OrderStatus {
    /// Statuses whose entry is announced to subscribers
    pub fn is_notifying(&self) -> bool {
        matches!(self, OrderStatus::Validated | OrderStatus::InPreparation | OrderStatus::Ready)
    }

    /// Next status in the kitchen workflow, `None` once completed
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::NotValidated => Some(OrderStatus::Validated),
            OrderStatus::Validated => Some(OrderStatus::InPreparation),
            OrderStatus::InPreparation => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == OrderStatus::Completed
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::NotValidated => "Not validated",
            OrderStatus::Validated => "Validated",
            OrderStatus::InPreparation => "In preparation",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A customer's order: dishes, status, and the parties watching it
pub struct Order {
    pub id: Uuid,
    customer: Arc<Customer>,
    dishes: Vec<Arc<Dish>>,
    status: OrderStatus,
    observers: ObserverRegistry,
    notification_mode: NotificationMode,
    transition_policy: TransitionPolicy,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer: Arc<Customer>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer,
            dishes: Vec::new(),
            status: OrderStatus::NotValidated,
            observers: ObserverRegistry::new(),
            notification_mode: NotificationMode::All,
            transition_policy: TransitionPolicy::Permissive,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_notification_mode(mut self, mode: NotificationMode) -> Self {
        self.notification_mode = mode;
        self
    }

    /// Policy applied when the order is validated
    pub fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }

    pub fn transition_policy(&self) -> TransitionPolicy {
        self.transition_policy
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn dishes(&self) -> &[Arc<Dish>] {
        &self.dishes
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn add_dish(&mut self, dish: Arc<Dish>) {
        self.dishes.push(dish);
        self.updated_at = Utc::now();
    }

    /// Remove the first occurrence of this exact dish. Returns whether anything was removed.
    pub fn remove_dish(&mut self, dish: &Arc<Dish>) -> bool {
        match self.dishes.iter().position(|d| Arc::ptr_eq(d, dish)) {
            Some(index) => {
                self.dishes.remove(index);
                self.updated_at = Utc::now();
                true
            }
            None => {
                tracing::debug!("Order {}: dish {} not present, nothing removed", self.id, dish.kind());
                false
            }
        }
    }

    /// Sum of the current dishes' prices (in cents)
    pub fn get_total_price(&self) -> i64 {
        self.dishes.iter().map(|dish| dish.show_price()).sum()
    }

    pub fn total_with_discount(&self, discount: &dyn DiscountStrategy) -> i64 {
        discount.apply_discount(self)
    }

    /// Mark the order as validated and notify subscribers.
    /// Always accepted under the permissive policy; strict orders only validate from
    /// `NotValidated` or `Validated`.
    pub fn validate_order(&mut self) -> Result<Vec<String>, OrderError> {
        let change = StatusUpdater::new(self.transition_policy).update_status(self, OrderStatus::Validated)?;
        Ok(change.messages)
    }

    pub fn add_observer(&mut self, observer: Arc<dyn OrderObserver>) {
        if !self.observers.add(observer) {
            tracing::debug!("Order {}: observer already subscribed", self.id);
        }
    }

    pub fn remove_observer<T: OrderObserver + ?Sized>(&mut self, observer: &Arc<T>) {
        self.observers.remove(observer);
    }

    /// Invoke subscribers while the status is active, collecting their messages
    pub fn notify_observers(&self) -> Vec<String> {
        if !self.status.is_notifying() {
            return Vec::new();
        }

        let limit = match self.notification_mode {
            NotificationMode::All => usize::MAX,
            NotificationMode::FirstOnly => 1,
        };

        self.observers
            .iter()
            .take(limit)
            .map(|observer| observer.on_order_change(self))
            .collect()
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            id: self.id,
            customer_name: self.customer.name.clone(),
            dishes: self.dishes.iter().map(|dish| Dish::clone(dish)).collect(),
            status: self.status,
            total_cents: self.get_total_price(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Only the status updater writes the status
    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

impl Priced for Order {
    fn total_price_cents(&self) -> i64 {
        self.get_total_price()
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("customer", &self.customer.name)
            .field("dishes", &self.dishes)
            .field("status", &self.status)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Serializable point-in-time view of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: Uuid,
    pub customer_name: String,
    pub dishes: Vec<Dish>,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
