pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;

pub use catalog::{describe_total, total_calories, CalorieCatalog, CalorieFilter};
pub use error::{CaloriasError, Result};
pub use models::FoodEntry;
