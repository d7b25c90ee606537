use std::path::Path;

use clap::Parser;

use calorias_rs::catalog::{CalorieCatalog, CalorieFilter};
use calorias_rs::cli::{Cli, Command};
use calorias_rs::error::{CaloriasError, Result};
use calorias_rs::export::{write_subset, ExportFormat};
use calorias_rs::interface::{display_food, display_subset, prompt_filter, resolve_food_name};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let catalog = CalorieCatalog::reference();

    match command {
        Command::List { filter } => cmd_list(&catalog, filter),
        Command::Show { name } => cmd_show(&catalog, &name),
        Command::Interactive => cmd_interactive(&catalog),
        Command::Export {
            filter,
            format,
            output,
        } => cmd_export(&catalog, filter, format, &output),
    }
}

/// Print the selected subset and its calorie total.
fn cmd_list(catalog: &CalorieCatalog, filter: CalorieFilter) -> Result<()> {
    display_subset(&catalog.subset(filter), filter);
    Ok(())
}

/// Look up one food, with fuzzy suggestions on a miss.
fn cmd_show(catalog: &CalorieCatalog, name: &str) -> Result<()> {
    let resolved = resolve_food_name(catalog, name)?
        .ok_or_else(|| CaloriasError::FoodNotFound(name.to_string()))?;

    // resolve_food_name only returns names present in the catalog
    if let Some(entry) = catalog.get(&resolved) {
        display_food(entry);
    }

    Ok(())
}

/// Filter menu loop: one selection variable, re-derived subset on each pick.
fn cmd_interactive(catalog: &CalorieCatalog) -> Result<()> {
    let mut selection = CalorieFilter::All;
    display_subset(&catalog.subset(selection), selection);

    while let Some(next) = prompt_filter(selection)? {
        selection = next;
        display_subset(&catalog.subset(selection), selection);
    }

    Ok(())
}

/// Write the selected subset to a file.
fn cmd_export(
    catalog: &CalorieCatalog,
    filter: CalorieFilter,
    format: ExportFormat,
    output: &Path,
) -> Result<()> {
    let subset = catalog.subset(filter);
    write_subset(output, &subset, filter, format)?;

    println!(
        "Exported {} foods ({}) to {}",
        subset.len(),
        filter.label(),
        output.display()
    );

    Ok(())
}
