use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::catalog::{CalorieCatalog, CalorieFilter};
use crate::error::Result;
use crate::models::FoodEntry;

/// One round of the interactive filter menu.
///
/// Returns `None` when the user picks "Salir".
pub fn prompt_filter(current: CalorieFilter) -> Result<Option<CalorieFilter>> {
    let items = ["Todos", "Alto en Calorías", "Bajo en Calorías", "Salir"];

    let default = match current {
        CalorieFilter::All => 0,
        CalorieFilter::High => 1,
        CalorieFilter::Low => 2,
    };

    let selection = Select::new()
        .with_prompt("Filtrar alimentos")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(match selection {
        0 => Some(CalorieFilter::All),
        1 => Some(CalorieFilter::High),
        2 => Some(CalorieFilter::Low),
        _ => None,
    })
}

/// Resolve a possibly misspelled food name against the catalog.
///
/// Tries an exact case-insensitive match first, then fuzzy matching with
/// confirmation. Returns `None` when nothing matches or the user rejects
/// every suggestion.
pub fn resolve_food_name(catalog: &CalorieCatalog, input: &str) -> Result<Option<String>> {
    if let Some(entry) = catalog.get(input) {
        return Ok(Some(entry.name.clone()));
    }

    let needle = input.to_lowercase();
    let mut candidates: Vec<(&FoodEntry, f64)> = catalog
        .all()
        .into_iter()
        .map(|e| (e, jaro_winkler(&e.key(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0.name.clone();
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(name) } else { None });
    }

    // Multiple matches - let the user pick
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(e, _)| e.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(if selection < options.len() {
        Some(options[selection].clone())
    } else {
        None
    })
}
