//! Scale at the center of a map view
//!
//! Two points 100 pixels apart are sampled horizontally around the view
//! center, carried through view -> map -> geodetic space, and the ratio of
//! their projected distance to their ground distance calibrates the map's own
//! scale into screen pixels per ground meter.

use crate::{
    core::{
        constants::{CM_TO_METER, DEFAULT_DPI, INCH_TO_CM, RATIO_PRECISION, SAMPLE_HALF_SPAN},
        geo::Point,
        geodesy::EllipsoidalGeodesy,
    },
    traits::{Geodesy, MapView},
    Error, Result,
};

/// Rounds to 8 decimals so an unchanged view always yields the same value.
fn truncate(value: f64) -> f64 {
    (value * RATIO_PRECISION).round() / RATIO_PRECISION
}

/// Computes screen pixels per ground meter at the center of a map view
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCalculator<G = EllipsoidalGeodesy> {
    geodesy: G,
    dpi: f64,
}

impl ScaleCalculator<EllipsoidalGeodesy> {
    /// A calculator on the WGS84 ellipsoid at 96 DPI
    pub fn new() -> Self {
        Self::with_geodesy(EllipsoidalGeodesy)
    }
}

impl Default for ScaleCalculator<EllipsoidalGeodesy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Geodesy> ScaleCalculator<G> {
    pub fn with_geodesy(geodesy: G) -> Self {
        Self {
            geodesy,
            dpi: DEFAULT_DPI,
        }
    }

    /// Sets the screen resolution; non-positive values are rejected
    pub fn with_dpi(mut self, dpi: f64) -> Result<Self> {
        if !(dpi.is_finite() && dpi > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "dpi must be positive, got {}",
                dpi
            )));
        }
        self.dpi = dpi;
        Ok(self)
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn geodesy(&self) -> &G {
        &self.geodesy
    }

    /// Screen pixels per ground meter at the view center
    ///
    /// When the samples coincide or leave the map's domain, the ground ratio
    /// falls back to `1.0` and the result is the DPI-scaled map scale alone,
    /// not a literal `1.0`.
    pub fn pixels_per_meter<M: MapView + ?Sized>(&self, map: &M) -> Result<f64> {
        let ratio = self.map_unit_per_meter_ratio(map)?;
        let pixels_per_meter =
            map.map_scale() * (self.dpi / INCH_TO_CM) * CM_TO_METER * ratio;
        log::debug!(
            "scale at map center: {:.6} px/m (ratio {}, dpi {})",
            pixels_per_meter,
            ratio,
            self.dpi
        );
        Ok(pixels_per_meter)
    }

    /// Map units per ground meter around the view center
    ///
    /// Falls back to `1.0` when the samples coincide on the ground or fall
    /// outside the transformation's domain; other failures propagate.
    pub fn map_unit_per_meter_ratio<M: MapView + ?Sized>(&self, map: &M) -> Result<f64> {
        match self.sample_ratio(map) {
            Err(Error::OutOfBounds(reason)) => {
                log::debug!("scale sample out of bounds ({}), using unit ratio", reason);
                Ok(1.0)
            }
            other => other,
        }
    }

    fn sample_ratio<M: MapView + ?Sized>(&self, map: &M) -> Result<f64> {
        let size = map.view_size();
        let center = Point::new(size.x / 2.0, size.y / 2.0);

        let map_left = map.view_to_map(Point::new(center.x - SAMPLE_HALF_SPAN, center.y))?;
        let map_right = map.view_to_map(Point::new(center.x + SAMPLE_HALF_SPAN, center.y))?;

        let model_left = map.map_to_geodetic(map_left)?;
        let model_right = map.map_to_geodetic(map_right)?;

        let distance_in_meters = self.geodesy.distance(model_left, model_right)?;
        if distance_in_meters == 0.0 {
            // Zoomed in so far that both samples land on the same coordinate
            return Ok(1.0);
        }

        let map_distance = map_left.distance_to(&map_right);
        Ok(truncate(map_distance / distance_in_meters))
    }
}

/// Screen pixels per ground meter at the center of `map`, on the WGS84 ellipsoid
pub fn pixels_per_meter<M: MapView + ?Sized>(map: &M, dpi: f64) -> Result<f64> {
    ScaleCalculator::new().with_dpi(dpi)?.pixels_per_meter(map)
}
