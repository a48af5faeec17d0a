use std::sync::Arc;

use crate::models::Order;

/// A party interested in an order's status
pub trait OrderObserver: Send + Sync {
    /// React to the order's current state, returning a human-readable message
    fn on_order_change(&self, order: &Order) -> String;
}

/// Subscribers of one order, kept in subscription order
#[derive(Default, Clone)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn OrderObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Subscribe; returns `false` if this observer is already subscribed
    pub fn add(&mut self, observer: Arc<dyn OrderObserver>) -> bool {
        if self.position(&observer).is_some() {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Unsubscribe; returns `false` if the observer was not subscribed
    pub fn remove<T: OrderObserver + ?Sized>(&mut self, observer: &Arc<T>) -> bool {
        match self.position(observer) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn OrderObserver>> {
        self.observers.iter()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    // Identity is the data pointer; vtable pointers are not stable across codegen units.
    fn position<T: OrderObserver + ?Sized>(&self, observer: &Arc<T>) -> Option<usize> {
        let target = Arc::as_ptr(observer) as *const ();
        self.observers
            .iter()
            .position(|o| Arc::as_ptr(o) as *const () == target)
    }
}
