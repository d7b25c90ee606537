pub mod constants;
pub mod filter;
pub mod queries;

pub use constants::HIGH_CALORIE_THRESHOLD;
pub use filter::CalorieFilter;
pub use queries::{describe_total, total_calories, CalorieCatalog};
