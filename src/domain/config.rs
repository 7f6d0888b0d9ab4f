use super::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Pricing knobs for one ordering session.
///
/// Owned explicitly by the cart rather than living in module-level state, so
/// each session carries its own rates and the defaults stay test-friendly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Tax rate applied to the cart subtotal.
    pub tax_rate: Decimal,
    /// Flat delivery fee added to every order.
    pub delivery_fee: Money,
    /// Delivery estimate quoted on confirmed orders, in minutes.
    pub estimated_delivery_minutes: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: dec!(0.10),
            delivery_fee: Money::new(dec!(5.00)),
            estimated_delivery_minutes: 45,
        }
    }
}
