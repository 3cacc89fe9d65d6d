//! Forecast rendering

use std::fmt::Write;

use clap::ValueEnum;
use integration_stormglass::ForecastPoint;

/// How forecast points are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One aligned line per hour
    Table,
}

/// Render `points` in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(points: &[ForecastPoint], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(points),
        OutputFormat::Table => Ok(render_table(points)),
    }
}

fn render_table(points: &[ForecastPoint]) -> String {
    if points.is_empty() {
        return "No forecast hours with complete data".to_string();
    }

    let mut out = format!(
        "{:<16}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}",
        "time (UTC)", "wave", "wave°", "swell", "period", "swell°", "wind", "wind°"
    );
    for point in points {
        let time = point.time_utc().map_or_else(
            |_| point.time.clone(),
            |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
        );
        let _ = write!(
            out,
            "\n{:<16}  {:>6.2}  {:>6.0}  {:>6.2}  {:>6.1}  {:>6.0}  {:>6.1}  {:>6.0}",
            time,
            point.wave_height,
            point.wave_direction,
            point.swell_height,
            point.swell_period,
            point.swell_direction,
            point.wind_speed,
            point.wind_direction,
        );
    }
    out
}
