use super::money::Money;
use super::payment::{GatewayResponse, PaymentMethod};
use super::restaurant::RestaurantRecord;
use super::user::UserRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Answers whether a restaurant can currently serve an item.
#[async_trait]
pub trait MenuProvider: Send + Sync {
    async fn is_item_available(&self, item_name: &str) -> bool;
}

/// External payment collaborator.
///
/// Simulated in this crate; a live client would add timeouts and retries on
/// top of this contract.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, method: &PaymentMethod, amount: Money) -> Result<GatewayResponse>;
}

/// Read-only source of restaurant listings.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn list_restaurants(&self) -> Result<Vec<RestaurantRecord>>;
}

/// Registry of user records keyed by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(&self, email: &str) -> Result<Option<UserRecord>>;
    async fn store(&self, user: UserRecord) -> Result<()>;
}

pub type MenuProviderBox = Box<dyn MenuProvider>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type RestaurantStoreBox = Box<dyn RestaurantStore>;
pub type UserStoreBox = Box<dyn UserStore>;
