//! Parsing rows into the plottable series.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use csv::StringRecord;

use crate::error::WeatherError;
use crate::reading::ColumnMapping;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates, highs and lows in row order (always the same length), plus
/// the location taken from the first valid row.
#[derive(Debug, Clone)]
pub struct WeatherSeries {
    pub location: String,
    pub dates: Vec<NaiveDate>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
}

impl WeatherSeries {
    /// Loads and parses a weather CSV file. Rows that fail to parse are
    /// skipped with a diagnostic; a file with no surviving rows is an
    /// error, as is one whose header lacks a required column.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                anyhow::Error::from(WeatherError::FileNotFound(path.to_path_buf()))
            }
            _ => anyhow::Error::from(e),
        })?;

        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mapping = ColumnMapping::from_headers(reader.headers()?)?;

        let mut location = None;
        let mut dates = Vec::new();
        let mut highs = Vec::new();
        let mut lows = Vec::new();

        for record in reader.records() {
            let record = record?;
            match parse_row(&record, &mapping) {
                Ok((date, high, low, name)) => {
                    location.get_or_insert(name);
                    dates.push(date);
                    highs.push(high);
                    lows.push(low);
                }
                Err(_) => {
                    let cells: Vec<&str> = record.iter().collect();
                    println!("Skipping invalid row: {:?}", cells);
                }
            }
        }

        match location {
            Some(location) => Ok(WeatherSeries {
                location,
                dates,
                highs,
                lows,
            }),
            None => Err(WeatherError::NoValidData.into()),
        }
    }

    /// Chart title naming the location and the year span of the data.
    pub fn title(&self) -> String {
        let start_year = self.dates.first().map(|d| d.year()).unwrap_or_default();
        let end_year = self.dates.last().map(|d| d.year()).unwrap_or_default();

        if start_year == end_year {
            format!(
                "Daily High and Low Temperatures in {} - {}",
                self.location, start_year
            )
        } else {
            format!(
                "Daily High and Low Temperatures in {} - {}-{}",
                self.location, start_year, end_year
            )
        }
    }
}

// A row is valid only if all four mapped cells are present and the
// date/temperature cells parse.
fn parse_row(
    record: &StringRecord,
    mapping: &ColumnMapping,
) -> Result<(NaiveDate, f64, f64, String)> {
    let cell = |index: usize| {
        record
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("row too short for column {index}"))
    };

    let date = NaiveDate::parse_from_str(cell(mapping.date)?, DATE_FORMAT)?;
    let high: f64 = cell(mapping.max_temp)?.parse()?;
    let low: f64 = cell(mapping.min_temp)?.parse()?;
    let name = cell(mapping.name)?.to_string();

    Ok((date, high, low, name))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use std::io::Cursor;

    use rand::SeedableRng;

    use super::*;

    fn parse(csv: &str) -> Result<WeatherSeries> {
        WeatherSeries::from_reader(Cursor::new(csv.to_string()))
    }

    #[test]
    fn should_parse_valid_rows_in_order() {
        let series = parse(
            "Name,Date,Max Temperature (F),Min Temperature (F)\n\
             Boston,2022-01-01,41.3,30.1\n\
             Boston,2022-01-02,39.0,28.4\n",
        )
        .unwrap();

        assert_eq!(series.location, "Boston");
        assert_eq!(
            series.dates,
            vec![
                NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2022, 1, 2).unwrap()
            ]
        );
        assert_eq!(series.highs, vec![41.3, 39.0]);
        assert_eq!(series.lows, vec![30.1, 28.4]);
    }

    #[test]
    fn should_skip_row_with_non_numeric_temperature() {
        let series = parse(
            "City,Date,Max Temperature (F),Min Temperature (F)\n\
             Boston,2022-01-01,41.3,30.1\n\
             Boston,2022-01-02,N/A,28.4\n",
        )
        .unwrap();

        assert_eq!(series.dates.len(), 1);
        assert_eq!(series.highs, vec![41.3]);
        assert_eq!(series.lows, vec![30.1]);
    }

    #[test]
    fn should_skip_row_with_bad_date_or_missing_cells() {
        let series = parse(
            "Name,Date,Max Temp,Min Temp\n\
             Boston,01/02/2022,41.3,30.1\n\
             Boston,2022-01-02\n\
             Boston,2022-01-03,44.0,31.9\n",
        )
        .unwrap();

        assert_eq!(series.dates, vec![NaiveDate::from_ymd_opt(2022, 1, 3).unwrap()]);
    }

    #[test]
    fn should_take_location_from_first_valid_row() {
        let series = parse(
            "Name,Date,Max Temp,Min Temp\n\
             Springfield,not-a-date,10.0,5.0\n\
             Shelbyville,2022-06-01,80.2,61.0\n",
        )
        .unwrap();

        assert_eq!(series.location, "Shelbyville");
    }

    #[test]
    fn should_error_on_header_only_file() {
        let err = parse("Name,Date,Max Temp,Min Temp\n").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WeatherError>(),
            Some(WeatherError::NoValidData)
        ));
    }

    #[test]
    fn should_error_on_missing_column() {
        let err = parse("Name,Date,Max Temp\nBoston,2022-01-01,41.3\n").unwrap_err();

        match err.downcast_ref::<WeatherError>() {
            Some(WeatherError::MissingColumns(missing)) => {
                assert_eq!(missing, &vec!["min_temp".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn should_error_on_missing_file() {
        let err = WeatherSeries::load(Path::new("no_such_file.csv")).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WeatherError>(),
            Some(WeatherError::FileNotFound(_))
        ));
    }

    #[test]
    fn should_read_back_a_generated_dataset() {
        let tmp_dir = tempfile::TempDir::new().unwrap();
        let csv_file = tmp_dir.path().join("weather.csv");
        crate::generate::generate(
            &csv_file,
            "Testville",
            &mut rand::rngs::StdRng::seed_from_u64(7),
        )
        .unwrap();

        let series = WeatherSeries::load(&csv_file).unwrap();

        assert_eq!(series.location, "Testville");
        assert_eq!(series.dates.len(), 730);
        for (high, low) in series.highs.iter().zip(&series.lows) {
            assert!(low < high);
        }
        assert_eq!(
            series.title(),
            "Daily High and Low Temperatures in Testville - 2022-2023"
        );
    }

    #[test]
    fn should_title_with_single_year_or_span() {
        let mut series = parse(
            "Name,Date,Max Temp,Min Temp\n\
             Boston,2022-01-01,41.3,30.1\n\
             Boston,2022-12-31,38.0,27.2\n",
        )
        .unwrap();
        assert_eq!(
            series.title(),
            "Daily High and Low Temperatures in Boston - 2022"
        );

        series.dates[1] = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(
            series.title(),
            "Daily High and Low Temperatures in Boston - 2022-2023"
        );
    }
}
