use bistro_core::TransitionPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Order, OrderStatus};

/// Record of one status change and what the subscribers answered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub order_id: Uuid,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub at: DateTime<Utc>,
    pub messages: Vec<String>,
}

/// The only way an order's status changes
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusUpdater {
    policy: TransitionPolicy,
}

impl StatusUpdater {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self { policy }
    }

    /// Set the status and notify subscribers.
    /// The workflow table is enforced when either this updater or the order is strict.
    pub fn update_status(&self, order: &mut Order, new_status: OrderStatus) -> Result<StatusChange, OrderError> {
        let strict = self.policy == TransitionPolicy::Strict
            || order.transition_policy() == TransitionPolicy::Strict;

        if strict && !is_allowed(order.status(), new_status) {
            tracing::warn!(
                "Order {}: rejected transition {:?} -> {:?}",
                order.id,
                order.status(),
                new_status
            );
            return Err(OrderError::InvalidTransition {
                from: order.status(),
                to: new_status,
            });
        }

        Ok(apply_status(order, new_status))
    }

    /// Move to the next workflow status
    pub fn advance(&self, order: &mut Order) -> Result<StatusChange, OrderError> {
        let next = order
            .status()
            .next()
            .ok_or(OrderError::AlreadyCompleted(order.id))?;

        self.update_status(order, next)
    }
}

/// Transitions accepted under the strict policy
pub fn is_allowed(from: OrderStatus, to: OrderStatus) -> bool {
    use OrderStatus::*;

    if from.is_terminal() {
        return false;
    }

    matches!(
        (from, to),
        (NotValidated, Validated)
            | (Validated, Validated)
            | (Validated, InPreparation)
            | (InPreparation, Ready)
            | (Ready, Completed)
    )
}

fn apply_status(order: &mut Order, new_status: OrderStatus) -> StatusChange {
    let from = order.status();
    order.set_status(new_status);
    tracing::info!("Order {} status {:?} -> {:?}", order.id, from, new_status);

    StatusChange {
        order_id: order.id,
        from,
        to: new_status,
        at: order.updated_at,
        messages: order.notify_observers(),
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order already completed: {0}")]
    AlreadyCompleted(Uuid),
}
