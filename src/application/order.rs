use crate::domain::cart::Cart;
use crate::domain::order::{
    CheckoutSummary, OrderConfirmation, OrderIdSequence, OrderState, UserProfile,
};
use crate::domain::payment::PaymentMethod;
use crate::domain::ports::{MenuProviderBox, PaymentGatewayBox};
use crate::error::{OrderError, Result};
use tracing::{debug, info, instrument};

/// Drives one order through its session: Draft → Validated → Confirmed.
///
/// Owns the cart and the user's profile; menu availability and charging are
/// delegated to the ports. A failed validation drops the order back to
/// Draft, and a declined charge leaves it Validated but unconfirmed.
pub struct OrderPlacement {
    cart: Cart,
    profile: UserProfile,
    menu: MenuProviderBox,
    gateway: PaymentGatewayBox,
    order_ids: OrderIdSequence,
    state: OrderState,
}

impl OrderPlacement {
    pub fn new(
        cart: Cart,
        profile: UserProfile,
        menu: MenuProviderBox,
        gateway: PaymentGatewayBox,
    ) -> Self {
        Self::with_order_ids(cart, profile, menu, gateway, OrderIdSequence::new())
    }

    /// Sessions that must not reuse order ids pass clones of one sequence.
    pub fn with_order_ids(
        cart: Cart,
        profile: UserProfile,
        menu: MenuProviderBox,
        gateway: PaymentGatewayBox,
        order_ids: OrderIdSequence,
    ) -> Self {
        Self {
            cart,
            profile,
            menu,
            gateway,
            order_ids,
            state: OrderState::Draft,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Checks the cart against the menu.
    ///
    /// Empty carts fail, and the first item the menu cannot serve
    /// short-circuits the scan; later unavailable items are not reported.
    pub async fn validate_order(&mut self) -> Result<()> {
        match self.check_cart().await {
            Ok(()) => {
                self.state = OrderState::Validated;
                Ok(())
            }
            Err(err) => {
                self.state = OrderState::Draft;
                debug!(%err, "order validation failed");
                Err(err)
            }
        }
    }

    async fn check_cart(&self) -> Result<()> {
        if self.cart.is_empty() {
            return Err(OrderError::Validation("Cart is empty".to_string()));
        }
        for item in self.cart.items() {
            if !self.menu.is_item_available(&item.name).await {
                return Err(OrderError::Validation(format!(
                    "{} is not available",
                    item.name
                )));
            }
        }
        Ok(())
    }

    /// Pure read: recomputes totals and snapshots the cart.
    ///
    /// Never mutates state and may be called any number of times.
    pub fn proceed_to_checkout(&self) -> CheckoutSummary {
        CheckoutSummary {
            items: self.cart.view_cart(),
            totals: self.cart.calculate_total(),
            delivery_address: self.profile.delivery_address.clone(),
        }
    }

    /// Re-validates, charges the gateway with the cart total and issues a
    /// confirmation carrying a fresh unique order id.
    ///
    /// Validation failures exit before anything is charged. A declined
    /// charge surfaces as `GatewayDeclined` and the order stays unconfirmed.
    #[instrument(skip(self, method), fields(method = method.name()))]
    pub async fn confirm_order(&mut self, method: &PaymentMethod) -> Result<OrderConfirmation> {
        self.validate_order().await?;

        let total = self.cart.calculate_total().total;
        let response = self.gateway.charge(method, total).await?;
        if !response.is_success() {
            let reason = response
                .message
                .unwrap_or_else(|| "please try again".to_string());
            debug!(%reason, "gateway declined charge");
            return Err(OrderError::GatewayDeclined(reason));
        }

        self.state = OrderState::Confirmed;
        let order_id = self.order_ids.next_id();
        info!(%order_id, %total, "order confirmed");
        Ok(OrderConfirmation {
            order_id,
            message: "Order confirmed".to_string(),
            estimated_delivery: format!(
                "{} minutes",
                self.cart.pricing().estimated_delivery_minutes
            ),
        })
    }
}
