//! Recoverable errors the interactive driver needs to tell apart.

use std::path::PathBuf;

use thiserror::Error;

/// Errors a user can fix by supplying a different file. Everything else
/// (io, malformed csv structure) stays an opaque `anyhow` error and
/// aborts the program.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No valid data to plot.")]
    NoValidData,
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_name_missing_fields_in_message() {
        let err = WeatherError::MissingColumns(vec!["date".to_string(), "min_temp".to_string()]);
        assert_eq!(err.to_string(), "Missing required columns: date, min_temp");
    }
}
