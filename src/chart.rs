//! Chart rendering with `plotters`.
//!
//! Highs in red and lows in blue at half alpha, with a light grey band
//! filling the gap between the two series.

use std::path::Path;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;

use crate::reading::WeatherSeries;

const CHART_SIZE: (u32, u32) = (1500, 900);
const Y_PADDING_F: f64 = 5.0;

/// Renders the series to a PNG at `output`. The series must hold at
/// least one row; loading guarantees that.
pub fn render(series: &WeatherSeries, output: &Path) -> Result<()> {
    let root = BitMapBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = axis_ranges(series);

    let mut chart = ChartBuilder::on(&root)
        .caption(series.title(), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .y_desc("Temperature (F)")
        .x_label_formatter(&|date: &NaiveDate| date.format("%b %Y").to_string())
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    chart.draw_series(std::iter::once(Polygon::new(band(series), BLACK.mix(0.1))))?;

    chart
        .draw_series(LineSeries::new(
            series.dates.iter().copied().zip(series.highs.iter().copied()),
            RED.mix(0.5),
        ))?
        .label("Highs")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.5)));

    chart
        .draw_series(LineSeries::new(
            series.dates.iter().copied().zip(series.lows.iter().copied()),
            BLUE.mix(0.5),
        ))?
        .label("Lows")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.5)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;

    Ok(())
}

// Axis ranges padded so the lines don't sit on the frame. A single-day
// series still gets a non-empty date range.
fn axis_ranges(
    series: &WeatherSeries,
) -> (std::ops::Range<NaiveDate>, std::ops::Range<f64>) {
    let first = series.dates.iter().min().copied().unwrap_or_default();
    let mut last = series.dates.iter().max().copied().unwrap_or_default();
    if first == last {
        last += Duration::days(1);
    }

    let coldest = series.lows.iter().copied().fold(f64::INFINITY, f64::min);
    let warmest = series.highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    (
        first..last,
        (coldest - Y_PADDING_F)..(warmest + Y_PADDING_F),
    )
}

// Closed outline of the region between the two lines: highs forward,
// lows back.
fn band(series: &WeatherSeries) -> Vec<(NaiveDate, f64)> {
    let forward = series.dates.iter().copied().zip(series.highs.iter().copied());
    let back = series
        .dates
        .iter()
        .copied()
        .zip(series.lows.iter().copied())
        .rev();

    forward.chain(back).collect()
}

// -- Tests -------------------------------------------------------------------
