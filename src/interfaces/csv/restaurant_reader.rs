use crate::domain::restaurant::RestaurantRecord;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads restaurant listings from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<RestaurantRecord>`. It handles whitespace trimming and flexible
/// record lengths automatically, so a host can seed a restaurant store from
/// any `Read` source.
pub struct RestaurantReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RestaurantReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes listings.
    pub fn records(self) -> impl Iterator<Item = Result<RestaurantRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
