//! Command line interface.

pub mod command;

use std::path::PathBuf;
use std::time::Duration;

use clap::{command, Parser, Subcommand};
use indicatif::ProgressBar;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    /// Without a subcommand, runs the interactive prompt
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic two-year daily weather dataset
    Generate {
        /// Location name written to every row
        #[arg(long, default_value = crate::generate::DEFAULT_LOCATION)]
        location: String,
        /// Where to write the CSV
        #[arg(long, default_value = crate::generate::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Chart the highs and lows from a weather CSV file
    Plot {
        /// The CSV file to read
        file: PathBuf,
        /// Where to write the chart (defaults to the input with a .png extension)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
