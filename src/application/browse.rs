use crate::domain::ports::RestaurantStoreBox;
use crate::domain::restaurant::{RestaurantRecord, SearchFilters};
use crate::error::Result;

/// Read-side queries over the restaurant datastore.
pub struct RestaurantBrowsing {
    store: RestaurantStoreBox,
}

impl RestaurantBrowsing {
    pub fn new(store: RestaurantStoreBox) -> Self {
        Self { store }
    }

    pub async fn search_by_cuisine(&self, cuisine: &str) -> Result<Vec<RestaurantRecord>> {
        self.search(SearchFilters {
            cuisine: Some(cuisine.to_string()),
            ..SearchFilters::default()
        })
        .await
    }

    pub async fn search_by_location(&self, location: &str) -> Result<Vec<RestaurantRecord>> {
        self.search(SearchFilters {
            location: Some(location.to_string()),
            ..SearchFilters::default()
        })
        .await
    }

    pub async fn search_by_min_rating(&self, min_rating: f32) -> Result<Vec<RestaurantRecord>> {
        self.search(SearchFilters {
            min_rating: Some(min_rating),
            ..SearchFilters::default()
        })
        .await
    }

    /// Applies every supplied filter conjunctively; `None` filters are
    /// skipped.
    pub async fn search(&self, filters: SearchFilters) -> Result<Vec<RestaurantRecord>> {
        let restaurants = self.store.list_restaurants().await?;
        Ok(restaurants
            .into_iter()
            .filter(|record| filters.matches(record))
            .collect())
    }
}
