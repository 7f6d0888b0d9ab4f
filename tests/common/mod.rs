use mealflow::domain::menu::RestaurantMenu;
use mealflow::domain::payment::CardDetails;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs the env-filter subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

#[allow(dead_code)]
pub fn sample_menu() -> RestaurantMenu {
    RestaurantMenu::new(["Burger", "Pizza", "Salad"])
}

#[allow(dead_code)]
pub fn valid_card() -> CardDetails {
    CardDetails::new("1234567812345678", "12/25", "123")
}
