use crate::domain::money::Money;
use crate::domain::payment::{GatewayResponse, PaymentMethod};
use crate::domain::ports::{PaymentGateway, RestaurantStore, UserStore};
use crate::domain::restaurant::{PriceRange, RestaurantRecord};
use crate::domain::user::UserRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Card number the mock gateway always declines.
pub const DECLINED_CARD_NUMBER: &str = "1111222233334444";

/// A thread-safe in-memory restaurant datastore.
///
/// Uses `Arc<RwLock<Vec<RestaurantRecord>>>` for shared concurrent access.
/// Ideal for tests or seed data where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryRestaurantStore {
    restaurants: Arc<RwLock<Vec<RestaurantRecord>>>,
}

impl InMemoryRestaurantStore {
    pub fn new(restaurants: Vec<RestaurantRecord>) -> Self {
        Self {
            restaurants: Arc::new(RwLock::new(restaurants)),
        }
    }

    /// The five-listing dataset used across the test suites.
    pub fn with_sample_data() -> Self {
        let record = |name: &str, cuisine: &str, location: &str, rating, price_range, delivery| {
            RestaurantRecord {
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                location: location.to_string(),
                rating,
                price_range,
                delivery,
            }
        };
        Self::new(vec![
            record("Italian Bistro", "Italian", "Downtown", 4.5, PriceRange::Moderate, true),
            record("Sushi House", "Japanese", "Midtown", 4.8, PriceRange::Premium, false),
            record("Burger King", "Fast Food", "Uptown", 4.0, PriceRange::Budget, true),
            record("Taco Town", "Mexican", "Downtown", 4.2, PriceRange::Budget, true),
            record("Pizza Palace", "Italian", "Uptown", 3.9, PriceRange::Moderate, true),
        ])
    }

    pub async fn push(&self, record: RestaurantRecord) {
        self.restaurants.write().await.push(record);
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn list_restaurants(&self) -> Result<Vec<RestaurantRecord>> {
        Ok(self.restaurants.read().await.clone())
    }
}

/// A thread-safe in-memory user registry keyed by email.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn store(&self, user: UserRecord) -> Result<()> {
        self.users.write().await.insert(user.email.clone(), user);
        Ok(())
    }
}

/// Deterministic gateway stand-in.
///
/// The sentinel card number always declines, non-positive amounts decline,
/// everything else is approved with a synthetic transaction id.
#[derive(Default)]
pub struct MockPaymentGateway {
    next_transaction: AtomicU64,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, method: &PaymentMethod, amount: Money) -> Result<GatewayResponse> {
        if let PaymentMethod::CreditCard(details) = method
            && details.card_number == DECLINED_CARD_NUMBER
        {
            return Ok(GatewayResponse::declined("Card declined"));
        }
        if !amount.is_positive() {
            return Ok(GatewayResponse::declined("Nothing to charge"));
        }
        let n = self.next_transaction.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(GatewayResponse::approved(format!("txn-{n:06}")))
    }
}
