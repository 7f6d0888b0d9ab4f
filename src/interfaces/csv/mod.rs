mod restaurant_reader;

pub use restaurant_reader::RestaurantReader;
