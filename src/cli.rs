use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::CalorieFilter;
use crate::export::ExportFormat;

/// Calorias — list a fixed food catalog and filter it by calorie level.
#[derive(Parser, Debug)]
#[command(name = "calorias")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the catalog subset selected by the filter.
    List {
        /// Which foods to show.
        #[arg(short, long, value_enum, default_value_t)]
        filter: CalorieFilter,
    },

    /// Look up a single food by name.
    Show {
        /// Food name (case-insensitive; close misspellings are suggested).
        name: String,
    },

    /// Browse the catalog with an interactive filter menu.
    Interactive,

    /// Write a catalog subset to a file.
    Export {
        /// Which foods to export.
        #[arg(short, long, value_enum, default_value_t)]
        filter: CalorieFilter,

        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: ExportFormat,

        /// Destination path.
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
