use serde::{Deserialize, Serialize};

use crate::catalog::constants::HIGH_CALORIE_THRESHOLD;

/// A food item in the fixed catalog: a name and its calorie count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: u32,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }

    /// Strictly above the 500-calorie threshold. Exactly 500 counts as low.
    #[inline]
    pub fn is_high_calorie(&self) -> bool {
        self.calories > HIGH_CALORIE_THRESHOLD
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
