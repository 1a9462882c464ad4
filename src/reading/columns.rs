//! Fuzzy header-to-field matching.
//!
//! Input files come from arbitrary sources, so headers are matched by
//! case-insensitive substring rather than exact text: "Max Temperature
//! (F)", "MAX TEMP", and "Tmax" all resolve the max_temp field.

use csv::StringRecord;

use crate::error::WeatherError;

/// The logical fields the plotting path needs, each with the header
/// substrings that resolve it. Order matches the reporting order in the
/// missing-columns error.
const REQUIRED_FIELDS: [(&str, &[&str]); 4] = [
    ("name", &["name", "city", "location"]),
    ("date", &["date"]),
    ("max_temp", &["max"]),
    ("min_temp", &["min"]),
];

/// Column indices for the four required fields, resolved once per file.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    pub name: usize,
    pub date: usize,
    pub max_temp: usize,
    pub min_temp: usize,
}

impl ColumnMapping {
    /// Resolves each field to the first header cell containing one of
    /// its substrings, ignoring case. Extra columns are ignored. Fails
    /// with the names of every field that did not resolve.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, WeatherError> {
        let find = |needles: &[&str]| {
            headers.iter().position(|header| {
                let header = header.to_lowercase();
                needles.iter().any(|needle| header.contains(needle))
            })
        };

        let mut resolved = [None; 4];
        let mut missing = Vec::new();
        for (slot, (field, needles)) in resolved.iter_mut().zip(REQUIRED_FIELDS) {
            match find(needles) {
                Some(index) => *slot = Some(index),
                None => missing.push(field.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(WeatherError::MissingColumns(missing));
        }

        Ok(ColumnMapping {
            name: resolved[0].unwrap(),
            date: resolved[1].unwrap(),
            max_temp: resolved[2].unwrap(),
            min_temp: resolved[3].unwrap(),
        })
    }
}

// -- Tests -------------------------------------------------------------------
