mod chart;
mod cli;
mod error;
mod generate;
mod reading;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Generate { location, output }) => {
            match command::generate(output, location) {
                Ok(filename) => println!("File saved to `{}`", filename),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Some(Commands::Plot { file, output }) => {
            match command::plot(file, output.as_deref()) {
                Ok(chart_file) => println!("Chart saved to `{}`", chart_file.display()),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        None => command::interactive()?,
    }

    Ok(())
}
