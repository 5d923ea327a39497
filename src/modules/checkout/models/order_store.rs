use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::modules::gateway::models::Order;

/// Local checkout state for an order.
///
/// The provider remains the source of truth; this mirror only tracks where
/// each order sits in the checkout funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutState {
    Created,
    Paid,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackedOrder {
    pub order_id: String,
    pub receipt: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub state: CheckoutState,
}

/// In-process mirror of checkout state, keyed by provider order id.
///
/// State may only be mutated after the triggering event passed signature
/// verification; callers enforce that ordering.
#[derive(Default)]
pub struct OrderStore {
    inner: Mutex<HashMap<String, TrackedOrder>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a freshly created order
    pub fn track(&self, order: &Order) {
        let tracked = TrackedOrder {
            order_id: order.id.clone(),
            receipt: order.receipt.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            state: CheckoutState::Created,
        };
        self.lock().insert(order.id.clone(), tracked);
    }

    /// Transition a tracked order; returns false for unknown orders.
    ///
    /// Re-applying the current state is a no-op, which keeps replayed
    /// webhook deliveries harmless.
    pub fn mark(&self, order_id: &str, state: CheckoutState) -> bool {
        match self.lock().get_mut(order_id) {
            Some(tracked) => {
                tracked.state = state;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, order_id: &str) -> Option<TrackedOrder> {
        self.lock().get(order_id).cloned()
    }

    pub fn state(&self, order_id: &str) -> Option<CheckoutState> {
        self.lock().get(order_id).map(|tracked| tracked.state)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, TrackedOrder>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
