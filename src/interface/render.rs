use crate::catalog::{describe_total, CalorieFilter};
use crate::models::FoodEntry;

/// Print the active subset as a list, followed by its total-calories sentence.
pub fn display_subset(subset: &[&FoodEntry], filter: CalorieFilter) {
    println!();
    println!("=== Lista de Alimentos ({}) ===", filter.label());
    println!();

    if subset.is_empty() {
        println!("  (ninguno)");
    } else {
        for entry in subset {
            println!("  {}: {} calorías", entry.name, entry.calories);
        }
    }

    println!();
    println!("{}", describe_total(subset, filter.label()));
    println!();
}

/// Print a single food with its calorie bucket.
pub fn display_food(entry: &FoodEntry) {
    let bucket = if entry.is_high_calorie() {
        "alto en calorías"
    } else {
        "bajo en calorías"
    };
    println!("{}: {} calorías ({})", entry.name, entry.calories, bucket);
}
