use std::sync::LazyLock;

use crate::models::FoodEntry;

/// Calories above which a food counts as "high calorie".
///
/// The boundary is exclusive: a food at exactly 500 falls in the low bucket.
pub const HIGH_CALORIE_THRESHOLD: u32 = 500;

/// The fixed reference catalog, in display order.
pub static REFERENCE_FOODS: LazyLock<Vec<FoodEntry>> = LazyLock::new(|| {
    vec![
        FoodEntry::new("Pizza", 800),
        FoodEntry::new("Ensalada", 200),
        FoodEntry::new("Hamburguesa", 700),
        FoodEntry::new("Manzana", 100),
        FoodEntry::new("Helado", 300),
        FoodEntry::new("Pasta", 600),
        FoodEntry::new("Yogurt", 150),
    ]
});
