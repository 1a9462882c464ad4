//! Reading user-supplied weather CSV files.

pub mod columns;
pub mod series;

pub use columns::ColumnMapping;
pub use series::WeatherSeries;
