use crate::catalog::constants::REFERENCE_FOODS;
use crate::catalog::filter::CalorieFilter;
use crate::models::FoodEntry;

/// The fixed food catalog.
///
/// Owns an ordered list of entries, immutable after construction. All query
/// operations return order-preserving borrowed views; nothing here mutates
/// or performs I/O.
#[derive(Debug, Clone)]
pub struct CalorieCatalog {
    entries: Vec<FoodEntry>,
}

impl CalorieCatalog {
    /// Build a catalog from an ordered list of entries.
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        Self { entries }
    }

    /// The built-in reference catalog (Pizza through Yogurt).
    pub fn reference() -> Self {
        Self::new(REFERENCE_FOODS.clone())
    }

    /// The full catalog, in original order.
    pub fn all(&self) -> Vec<&FoodEntry> {
        self.entries.iter().collect()
    }

    /// Entries with more than 500 calories, in original order.
    pub fn filter_high(&self) -> Vec<&FoodEntry> {
        self.subset(CalorieFilter::High)
    }

    /// Entries with 500 calories or fewer, in original order.
    pub fn filter_low(&self) -> Vec<&FoodEntry> {
        self.subset(CalorieFilter::Low)
    }

    /// The subset selected by `filter`, in original order.
    pub fn subset(&self, filter: CalorieFilter) -> Vec<&FoodEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Look up an entry by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodEntry> {
        let key = name.to_lowercase();
        self.entries.iter().find(|e| e.key() == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sum of calories across a subset. Zero for an empty subset.
pub fn total_calories(subset: &[&FoodEntry]) -> u32 {
    subset.iter().map(|e| e.calories).sum()
}

/// Format the total-calories sentence for a subset.
pub fn describe_total(subset: &[&FoodEntry], label: &str) -> String {
    format!(
        "Total de calorías en {}: {} calorías.",
        label,
        total_calories(subset)
    )
}
