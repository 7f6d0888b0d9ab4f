use super::config::PricingConfig;
use super::money::Money;
use crate::error::{OrderError, Result};
use serde::Serialize;

/// A priced, quantified line item in the cart.
///
/// Identity is the item name, case-sensitive and exact. Prices and
/// quantities are stored as given; validating them is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn update_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// One row of the cart view snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub name: String,
    pub quantity: i64,
    pub subtotal: Money,
}

/// Monetary breakdown of a cart, recomputed fresh on every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

/// A shopping cart owned by one logical session.
///
/// Items keep insertion order and are unique by name: adding an existing
/// name increments its quantity instead of appending a second entry.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    pricing: PricingConfig,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pricing(pricing: PricingConfig) -> Self {
        Self {
            items: Vec::new(),
            pricing,
        }
    }

    /// Adds quantity to an existing item or appends a new entry.
    pub fn add_item(&mut self, name: &str, unit_price: Money, quantity: i64) -> String {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.update_quantity(item.quantity + quantity);
            format!("Updated {name} quantity to {}", item.quantity)
        } else {
            self.items.push(CartItem::new(name, unit_price, quantity));
            format!("Added {name} to cart")
        }
    }

    /// Removes every entry matching `name`; reports removal even when the
    /// name was never in the cart.
    pub fn remove_item(&mut self, name: &str) -> String {
        self.items.retain(|item| item.name != name);
        format!("Removed {name} from cart")
    }

    /// Sets the quantity of an existing item. Zero and negative values are
    /// not special-cased.
    pub fn update_item_quantity(&mut self, name: &str, quantity: i64) -> Result<String> {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.update_quantity(quantity);
                Ok(format!("Updated {name} quantity to {quantity}"))
            }
            None => Err(OrderError::NotFound(name.to_string())),
        }
    }

    /// Subtotal, tax, delivery fee and total for the current contents.
    ///
    /// Each component is rounded per [`Money::round`] before the total is
    /// summed from the rounded parts, so the breakdown always adds up to the
    /// total a receipt would show.
    pub fn calculate_total(&self) -> CartTotals {
        let subtotal = self
            .items
            .iter()
            .map(CartItem::subtotal)
            .sum::<Money>()
            .round();
        let tax = (subtotal * self.pricing.tax_rate).round();
        let delivery_fee = self.pricing.delivery_fee.round();
        let total = (subtotal + tax + delivery_fee).round();
        CartTotals {
            subtotal,
            tax,
            delivery_fee,
            total,
        }
    }

    /// Snapshot of the cart contents: name, quantity and line subtotal.
    pub fn view_cart(&self) -> Vec<CartLine> {
        self.items
            .iter()
            .map(|item| CartLine {
                name: item.name.clone(),
                quantity: item.quantity,
                subtotal: item.subtotal(),
            })
            .collect()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }
}
