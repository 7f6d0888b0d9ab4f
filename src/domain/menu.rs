use super::ports::MenuProvider;
use async_trait::async_trait;
use std::collections::HashSet;

/// The set of item names a restaurant can currently serve.
///
/// Immutable once built; membership is an exact, case-sensitive match.
#[derive(Debug, Clone, Default)]
pub struct RestaurantMenu {
    available_items: HashSet<String>,
}

impl RestaurantMenu {
    pub fn new<I, S>(available_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_items: available_items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, item_name: &str) -> bool {
        self.available_items.contains(item_name)
    }
}

#[async_trait]
impl MenuProvider for RestaurantMenu {
    async fn is_item_available(&self, item_name: &str) -> bool {
        self.contains(item_name)
    }
}
