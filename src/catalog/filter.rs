use clap::ValueEnum;

use crate::models::FoodEntry;

/// The current display selection: which slice of the catalog is shown.
///
/// Switching selection is a stateless re-derivation from the catalog; there
/// is no transition history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CalorieFilter {
    /// The full catalog.
    #[default]
    All,

    /// Foods with more than 500 calories.
    High,

    /// Foods with 500 calories or fewer.
    Low,
}

impl CalorieFilter {
    /// Whether an entry belongs to this selection.
    pub fn matches(&self, entry: &FoodEntry) -> bool {
        match self {
            CalorieFilter::All => true,
            CalorieFilter::High => entry.is_high_calorie(),
            CalorieFilter::Low => !entry.is_high_calorie(),
        }
    }

    /// Spanish label used in the total-calories sentence.
    pub fn label(&self) -> &'static str {
        match self {
            CalorieFilter::All => "todos los productos",
            CalorieFilter::High => "productos altos en calorías",
            CalorieFilter::Low => "productos bajos en calorías",
        }
    }
}
