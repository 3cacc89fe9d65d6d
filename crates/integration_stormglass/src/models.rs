//! StormGlass data models
//!
//! Raw point-forecast records as returned by the API and the flattened
//! [`ForecastPoint`] handed to callers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A physical quantity tracked for each forecast hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Direction swell is coming from, degrees (0 = north)
    SwellDirection,
    /// Swell height in meters
    SwellHeight,
    /// Swell period in seconds
    SwellPeriod,
    /// Direction waves are coming from, degrees (0 = north)
    WaveDirection,
    /// Significant wave height in meters
    WaveHeight,
    /// Direction of wind at 10m above sea level, degrees (0 = north)
    WindDirection,
    /// Wind speed at 10m above sea level in meters per second
    WindSpeed,
}

impl Quantity {
    /// Every tracked quantity, in the order it is requested upstream
    pub const ALL: [Self; 7] = [
        Self::SwellDirection,
        Self::SwellHeight,
        Self::SwellPeriod,
        Self::WaveDirection,
        Self::WaveHeight,
        Self::WindDirection,
        Self::WindSpeed,
    ];

    /// Parameter name understood by the StormGlass API
    #[must_use]
    pub const fn param_name(&self) -> &'static str {
        match self {
            Self::SwellDirection => "swellDirection",
            Self::SwellHeight => "swellHeight",
            Self::SwellPeriod => "swellPeriod",
            Self::WaveDirection => "waveDirection",
            Self::WaveHeight => "waveHeight",
            Self::WindDirection => "windDirection",
            Self::WindSpeed => "windSpeed",
        }
    }

    /// Comma-joined list of all parameter names, as sent in `params`
    #[must_use]
    pub fn request_params() -> String {
        Self::ALL
            .iter()
            .map(Self::param_name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.param_name())
    }
}

/// Values of one quantity keyed by forecast model (e.g. `noaa`, `sg`)
///
/// Values are kept as raw JSON so one model sending `null` or a non-numeric
/// value only affects reads for that model; either reads as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSource(HashMap<String, Value>);

impl PointSource {
    /// Value reported by `source`, if any
    #[must_use]
    pub fn get(&self, source: &str) -> Option<f64> {
        self.0.get(source).and_then(Value::as_f64)
    }

    /// Value reported by `source` if it is truthy
    ///
    /// Zero (of either sign) and NaN count as missing.
    #[must_use]
    pub fn truthy(&self, source: &str) -> Option<f64> {
        self.get(source).filter(|value| value.abs() > 0.0)
    }

    /// Set the value reported by `source`
    pub fn insert(&mut self, source: impl Into<String>, value: f64) {
        self.0.insert(source.into(), Value::from(value));
    }

    /// Number of models reporting this quantity
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no model reports this quantity
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PointSource {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(source, value)| (source.into(), Value::from(value)))
                .collect(),
        )
    }
}

/// One forecast hour as returned by the API
///
/// Every field is optional: the API omits quantities it has no data for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormGlassPoint {
    /// Forecast time stamp (ISO 8601, UTC)
    #[serde(default)]
    pub time: Option<String>,
    /// Swell direction per model
    #[serde(default)]
    pub swell_direction: Option<PointSource>,
    /// Swell height per model
    #[serde(default)]
    pub swell_height: Option<PointSource>,
    /// Swell period per model
    #[serde(default)]
    pub swell_period: Option<PointSource>,
    /// Wave direction per model
    #[serde(default)]
    pub wave_direction: Option<PointSource>,
    /// Wave height per model
    #[serde(default)]
    pub wave_height: Option<PointSource>,
    /// Wind direction per model
    #[serde(default)]
    pub wind_direction: Option<PointSource>,
    /// Wind speed per model
    #[serde(default)]
    pub wind_speed: Option<PointSource>,
}

impl StormGlassPoint {
    /// Per-model values for `quantity`
    #[must_use]
    pub const fn source_for(&self, quantity: Quantity) -> Option<&PointSource> {
        match quantity {
            Quantity::SwellDirection => self.swell_direction.as_ref(),
            Quantity::SwellHeight => self.swell_height.as_ref(),
            Quantity::SwellPeriod => self.swell_period.as_ref(),
            Quantity::WaveDirection => self.wave_direction.as_ref(),
            Quantity::WaveHeight => self.wave_height.as_ref(),
            Quantity::WindDirection => self.wind_direction.as_ref(),
            Quantity::WindSpeed => self.wind_speed.as_ref(),
        }
    }

    /// Mutable per-model values for `quantity`, created if absent
    pub fn source_for_mut(&mut self, quantity: Quantity) -> &mut PointSource {
        let slot = match quantity {
            Quantity::SwellDirection => &mut self.swell_direction,
            Quantity::SwellHeight => &mut self.swell_height,
            Quantity::SwellPeriod => &mut self.swell_period,
            Quantity::WaveDirection => &mut self.wave_direction,
            Quantity::WaveHeight => &mut self.wave_height,
            Quantity::WindDirection => &mut self.wind_direction,
            Quantity::WindSpeed => &mut self.wind_speed,
        };
        slot.get_or_insert_with(PointSource::default)
    }
}

/// Body of a point-forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Forecast hours in upstream order
    pub hours: Vec<StormGlassPoint>,
}

/// A forecast hour with one value per quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Forecast time stamp, copied verbatim from the API
    pub time: String,
    /// Significant wave height in meters
    pub wave_height: f64,
    /// Swell direction in degrees
    pub swell_direction: f64,
    /// Swell height in meters
    pub swell_height: f64,
    /// Swell period in seconds
    pub swell_period: f64,
    /// Wave direction in degrees
    pub wave_direction: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Wind speed in meters per second
    pub wind_speed: f64,
}

impl ForecastPoint {
    /// Value of `quantity` at this hour
    #[must_use]
    pub const fn value(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::SwellDirection => self.swell_direction,
            Quantity::SwellHeight => self.swell_height,
            Quantity::SwellPeriod => self.swell_period,
            Quantity::WaveDirection => self.wave_direction,
            Quantity::WaveHeight => self.wave_height,
            Quantity::WindDirection => self.wind_direction,
            Quantity::WindSpeed => self.wind_speed,
        }
    }

    /// Parse the time stamp as an RFC 3339 instant
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream time stamp is not RFC 3339.
    pub fn time_utc(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.time).map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_params() {
        assert_eq!(
            Quantity::request_params(),
            "swellDirection,swellHeight,swellPeriod,waveDirection,waveHeight,windDirection,windSpeed"
        );
    }

    #[test]
    fn test_quantity_display_matches_param_name() {
        for quantity in Quantity::ALL {
            assert_eq!(quantity.to_string(), quantity.param_name());
        }
    }

    #[test]
    fn test_point_source_null_reads_as_missing() {
        let source: PointSource =
            serde_json::from_str(r#"{"noaa": null, "sg": 1.5}"#).expect("should parse");
        assert_eq!(source.get("noaa"), None);
        assert_eq!(source.get("sg"), Some(1.5));
        assert_eq!(source.get("icon"), None);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_point_source_non_numeric_reads_as_missing() {
        let source: PointSource =
            serde_json::from_str(r#"{"noaa": 1.0, "meteo": "n/a", "icon": {"v": 2}}"#)
                .expect("should parse");
        assert_eq!(source.get("noaa"), Some(1.0));
        assert_eq!(source.get("meteo"), None);
        assert_eq!(source.get("icon"), None);
        assert_eq!(source.truthy("meteo"), None);
    }

    #[test]
    fn test_point_source_truthy() {
        let source: PointSource = [("a", 0.0), ("b", -0.0), ("c", f64::NAN), ("d", -2.5)]
            .into_iter()
            .collect();
        assert_eq!(source.truthy("a"), None);
        assert_eq!(source.truthy("b"), None);
        assert_eq!(source.truthy("c"), None);
        assert_eq!(source.truthy("d"), Some(-2.5));
        assert_eq!(source.truthy("missing"), None);
    }

    #[test]
    fn test_raw_point_deserialization() {
        let json = r#"{
            "time": "2020-04-26T00:00:00+00:00",
            "swellHeight": {"noaa": 2.13, "sg": 1.99},
            "windSpeed": {"icon": 5.2},
            "airTemperature": {"noaa": 21.0}
        }"#;

        let point: StormGlassPoint = serde_json::from_str(json).expect("should parse");
        assert_eq!(point.time.as_deref(), Some("2020-04-26T00:00:00+00:00"));
        assert_eq!(
            point
                .source_for(Quantity::SwellHeight)
                .and_then(|s| s.get("noaa")),
            Some(2.13)
        );
        assert!(point.source_for(Quantity::WaveHeight).is_none());
        assert_eq!(
            point
                .source_for(Quantity::WindSpeed)
                .and_then(|s| s.get("noaa")),
            None
        );
    }

    #[test]
    fn test_response_requires_hours() {
        let result = serde_json::from_str::<ForecastResponse>(r#"{"meta": {}}"#);
        assert!(result.is_err());

        let response: ForecastResponse =
            serde_json::from_str(r#"{"hours": [], "meta": {"cost": 1}}"#).expect("should parse");
        assert!(response.hours.is_empty());
    }

    #[test]
    fn test_source_for_mut_creates_missing_mapping() {
        let mut point = StormGlassPoint::default();
        point.source_for_mut(Quantity::WindSpeed).insert("noaa", 7.0);
        assert_eq!(
            point
                .source_for(Quantity::WindSpeed)
                .and_then(|s| s.get("noaa")),
            Some(7.0)
        );
    }

    #[test]
    fn test_forecast_point_serializes_camel_case() {
        let point = ForecastPoint {
            time: "2020-04-26T00:00:00+00:00".to_string(),
            wave_height: 1.0,
            swell_direction: 2.0,
            swell_height: 3.0,
            swell_period: 4.0,
            wave_direction: 5.0,
            wind_direction: 6.0,
            wind_speed: 7.0,
        };

        let json = serde_json::to_value(&point).expect("should serialize");
        assert_eq!(json["waveHeight"], 1.0);
        assert_eq!(json["swellPeriod"], 4.0);
        assert_eq!(json["windSpeed"], 7.0);
        assert_eq!(json["time"], "2020-04-26T00:00:00+00:00");
        assert!((point.value(Quantity::WindDirection) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_time_utc() {
        let point = ForecastPoint {
            time: "2020-04-26T03:00:00+02:00".to_string(),
            wave_height: 1.0,
            swell_direction: 1.0,
            swell_height: 1.0,
            swell_period: 1.0,
            wave_direction: 1.0,
            wind_direction: 1.0,
            wind_speed: 1.0,
        };
        let dt = point.time_utc().expect("should parse");
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2020-04-26 01:00");

        let invalid = ForecastPoint {
            time: "yesterday".to_string(),
            ..point
        };
        assert!(invalid.time_utc().is_err());
    }
}
