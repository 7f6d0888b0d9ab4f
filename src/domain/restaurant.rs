use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative pricing bucket of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Premium => "$$$",
        };
        f.write_str(symbol)
    }
}

/// A read-only restaurant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: f32,
    pub price_range: PriceRange,
    pub delivery: bool,
}

/// Conjunctive search criteria.
///
/// `None` means the predicate is not applied at all, so a zero minimum
/// rating is a real filter rather than "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f32>,
}

impl SearchFilters {
    /// Whether a record passes every supplied filter.
    ///
    /// Cuisine and location are case-insensitive exact matches; the rating
    /// bound is inclusive.
    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        self.cuisine
            .as_deref()
            .is_none_or(|cuisine| record.cuisine.eq_ignore_ascii_case(cuisine))
            && self
                .location
                .as_deref()
                .is_none_or(|location| record.location.eq_ignore_ascii_case(location))
            && self
                .min_rating
                .is_none_or(|min_rating| record.rating >= min_rating)
    }
}
