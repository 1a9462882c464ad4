use std::path::Path;

use anyhow::Result;

use crate::cli::create_spinner;
use crate::generate;

/// Runs the generator with a spinner and returns the saved file name.
pub fn generate(output: &Path, location: &str) -> Result<String> {
    let bar = create_spinner("Simulating weather data...".to_string());
    let rows = generate::generate(output, location, &mut rand::rng())?;
    bar.finish_with_message(format!("Simulated {} days of weather data", rows));

    Ok(output.to_string_lossy().to_string())
}
