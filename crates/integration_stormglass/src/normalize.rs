//! Point validation and flattening

use crate::models::{ForecastPoint, Quantity, StormGlassPoint};

/// Selects one forecast model's values out of raw StormGlass points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointNormalizer {
    source: String,
}

impl PointNormalizer {
    /// Create a normalizer reading values reported by `source`
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Model name values are taken from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether `point` can be flattened without losing any quantity
    ///
    /// Requires a non-empty time stamp and a truthy value from the configured
    /// model for every [`Quantity`]. A reading of exactly zero is treated as
    /// missing, so a calm hour with `windSpeed = 0` is rejected.
    #[must_use]
    pub fn is_valid_point(&self, point: &StormGlassPoint) -> bool {
        point.time.as_deref().is_some_and(|time| !time.is_empty())
            && Quantity::ALL
                .iter()
                .all(|&quantity| self.value_of(point, quantity).is_some())
    }

    /// Keep the valid points, in order, and flatten each to a [`ForecastPoint`]
    #[must_use]
    pub fn normalize(&self, points: Vec<StormGlassPoint>) -> Vec<ForecastPoint> {
        points
            .into_iter()
            .filter_map(|point| self.to_forecast_point(point))
            .collect()
    }

    fn value_of(&self, point: &StormGlassPoint, quantity: Quantity) -> Option<f64> {
        point
            .source_for(quantity)
            .and_then(|values| values.truthy(&self.source))
    }

    fn to_forecast_point(&self, point: StormGlassPoint) -> Option<ForecastPoint> {
        if !self.is_valid_point(&point) {
            return None;
        }

        Some(ForecastPoint {
            wave_height: self.value_of(&point, Quantity::WaveHeight)?,
            swell_direction: self.value_of(&point, Quantity::SwellDirection)?,
            swell_height: self.value_of(&point, Quantity::SwellHeight)?,
            swell_period: self.value_of(&point, Quantity::SwellPeriod)?,
            wave_direction: self.value_of(&point, Quantity::WaveDirection)?,
            wind_direction: self.value_of(&point, Quantity::WindDirection)?,
            wind_speed: self.value_of(&point, Quantity::WindSpeed)?,
            time: point.time?,
        })
    }
}
