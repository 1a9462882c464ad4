//! The prompt-driven flow: chart an existing file, or simulate one and
//! chart that.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::error::WeatherError;
use crate::generate::{DEFAULT_LOCATION, DEFAULT_OUTPUT};

use super::{generate, plot};

#[derive(Debug, PartialEq)]
enum Choice {
    Yes,
    No,
}

/// Runs the interactive session on stdin/stdout.
pub fn interactive() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    match prompt_choice(&mut input)? {
        Some(Choice::Yes) => prompt_for_file(&mut input),
        Some(Choice::No) => simulate_and_plot(),
        None => {
            println!("Invalid choice. Please enter 'yes' or 'no'.");
            Ok(())
        }
    }
}

fn prompt_choice(input: &mut impl BufRead) -> Result<Option<Choice>> {
    let answer = prompt(input, "Do you have a weather data file? (yes/no): ")?;

    Ok(parse_choice(&answer))
}

// Keeps asking for a filename until a file charts cleanly, the user
// types the exit sentinel, or an unrecoverable error occurs.
fn prompt_for_file(input: &mut impl BufRead) -> Result<()> {
    loop {
        let filename = prompt(
            input,
            "Enter the filename (e.g., new_york_weather_data.csv) or type 'exit' to quit: ",
        )?;
        if filename.is_empty() || filename.eq_ignore_ascii_case("exit") {
            println!("Exiting the program.");
            return Ok(());
        }

        match plot(Path::new(&filename), None) {
            Ok(chart_file) => {
                println!("Chart saved to `{}`", chart_file.display());
                return Ok(());
            }
            Err(e) => match e.downcast_ref::<WeatherError>() {
                Some(WeatherError::FileNotFound(_)) => {
                    eprintln!("{e}");
                    println!("Please try again.");
                }
                Some(_) => {
                    eprintln!("{e}");
                    println!("Please check the file and try again.");
                }
                None => return Err(e),
            },
        }
    }
}

// The generator and the re-read use the same path, so the fresh file is
// always the one charted.
fn simulate_and_plot() -> Result<()> {
    let data_file = generate(Path::new(DEFAULT_OUTPUT), DEFAULT_LOCATION)?;
    println!("Simulated weather data has been saved as '{data_file}'.");

    match plot(Path::new(&data_file), None) {
        Ok(chart_file) => println!("Chart saved to `{}`", chart_file.display()),
        Err(e) if e.downcast_ref::<WeatherError>().is_some() => {
            eprintln!("{e}");
            println!("There was an issue processing the simulated data.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

fn parse_choice(answer: &str) -> Option<Choice> {
    match answer.to_lowercase().as_str() {
        "yes" | "y" => Some(Choice::Yes),
        "no" | "n" => Some(Choice::No),
        _ => None,
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_string())
}

// -- Tests -------------------------------------------------------------------
