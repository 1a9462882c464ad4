use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::chart;
use crate::reading::WeatherSeries;

use super::make_chart_file_name;

/// Parses the file and renders the chart, returning the chart path.
pub fn plot(file: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let series = WeatherSeries::load(file)?;
    let chart_file = match output {
        Some(path) => path.to_path_buf(),
        None => make_chart_file_name(file),
    };

    chart::render(&series, &chart_file)?;

    Ok(chart_file)
}

// -- Tests -------------------------------------------------------------------
