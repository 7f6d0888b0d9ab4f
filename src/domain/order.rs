use super::cart::{CartLine, CartTotals};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Profile data the ordering flow needs: where to deliver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub delivery_address: String,
}

impl UserProfile {
    pub fn new(delivery_address: impl Into<String>) -> Self {
        Self {
            delivery_address: delivery_address.into(),
        }
    }
}

/// Phase of an order within its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    #[default]
    Draft,
    Validated,
    Confirmed,
}

/// Read-only view of the order at checkout. Recomputed on every request,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
    pub delivery_address: String,
}

/// Unique identifier of a confirmed order, e.g. `ORD-000042`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issued once payment clears.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub message: String,
    pub estimated_delivery: String,
}

/// Hands out unique order ids.
///
/// Clones share the underlying sequence, so sessions constructed from the
/// same instance never collide.
#[derive(Debug, Clone, Default)]
pub struct OrderIdSequence {
    next: Arc<AtomicU64>,
}

impl OrderIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> OrderId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        OrderId(format!("ORD-{n:06}"))
    }
}
