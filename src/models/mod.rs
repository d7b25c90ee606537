mod food;

pub use food::FoodEntry;
