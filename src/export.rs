use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::catalog::{total_calories, CalorieFilter};
use crate::error::Result;
use crate::models::FoodEntry;

/// Output format for the `export` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// Write a subset and its total to `path` in the given format.
pub fn write_subset(
    path: &Path,
    subset: &[&FoodEntry],
    filter: CalorieFilter,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Json => write_json(path, subset, filter),
        ExportFormat::Csv => write_csv(path, subset),
    }
}

/// Write the subset as a JSON document with its label and total.
pub fn write_json(path: &Path, subset: &[&FoodEntry], filter: CalorieFilter) -> Result<()> {
    let doc = serde_json::json!({
        "label": filter.label(),
        "foods": subset,
        "total_calories": total_calories(subset),
    });

    fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

/// Write the subset as a two-column CSV file.
pub fn write_csv(path: &Path, subset: &[&FoodEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "calories"])?;

    for entry in subset {
        wtr.write_record([entry.name.clone(), entry.calories.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CalorieCatalog;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_json_includes_total() {
        let catalog = CalorieCatalog::reference();
        let subset = catalog.filter_high();

        let file = NamedTempFile::new().unwrap();
        write_json(file.path(), &subset, CalorieFilter::High).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(doc["label"], "productos altos en calorías");
        assert_eq!(doc["total_calories"], 2100);
        assert_eq!(doc["foods"].as_array().unwrap().len(), 3);
        assert_eq!(doc["foods"][0]["Name"], "Pizza");
    }

    #[test]
    fn test_write_csv_rows() {
        let catalog = CalorieCatalog::reference();
        let subset = catalog.filter_low();

        let file = NamedTempFile::new().unwrap();
        write_csv(file.path(), &subset).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "name,calories");
        assert_eq!(lines[1], "Ensalada,200");
        assert_eq!(lines.len(), 5);
    }
}
