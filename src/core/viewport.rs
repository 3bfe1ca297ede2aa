use crate::{
    core::{
        constants::{
            CM_TO_METER, DEFAULT_DPI, INCH_TO_CM, MAX_ZOOM, MIN_ZOOM, TILE_SIZE,
            WGS84_SEMI_MAJOR_AXIS,
        },
        geo::{LatLng, Point},
    },
    traits::MapView,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Half the extent of the Web Mercator square, in meters
const MERCATOR_EXTENT: f64 = PI * WGS84_SEMI_MAJOR_AXIS;

/// Manages the current view of the map: center, zoom, and screen dimensions
///
/// Map space is Web Mercator (EPSG:3857) meters; view space is pixels with the
/// origin in the top-left corner and `y` pointing down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Sets the center of the viewport, clamped to the projection's range
    pub fn set_center(&mut self, center: LatLng) {
        self.center = Self::clamp_center(center);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    /// Gets the resolution in map meters per pixel at the current zoom level
    pub fn resolution(&self) -> f64 {
        2.0 * MERCATOR_EXTENT / (TILE_SIZE as f64 * self.scale())
    }

    /// Converts a view pixel into Web Mercator meters
    pub fn pixel_to_map(&self, pixel: &Point) -> Point {
        let center = self.center.to_mercator();
        let resolution = self.resolution();
        Point::new(
            center.x + (pixel.x - self.size.x / 2.0) * resolution,
            center.y - (pixel.y - self.size.y / 2.0) * resolution,
        )
    }

    /// Converts Web Mercator meters into a view pixel
    pub fn map_to_pixel(&self, map_point: &Point) -> Point {
        let center = self.center.to_mercator();
        let resolution = self.resolution();
        Point::new(
            (map_point.x - center.x) / resolution + self.size.x / 2.0,
            (center.y - map_point.y) / resolution + self.size.y / 2.0,
        )
    }

    /// Converts a geographical coordinate to screen pixel coordinates
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        self.map_to_pixel(&lat_lng.to_mercator())
    }

    /// Converts screen pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        LatLng::from_mercator(self.pixel_to_map(pixel))
    }

    /// Pans the viewport by the given pixel offset and returns the new center
    pub fn pan(&mut self, delta: Point) -> LatLng {
        let center = self.center.to_mercator();
        let resolution = self.resolution();
        let moved = Point::new(center.x + delta.x * resolution, center.y - delta.y * resolution);
        self.set_center(LatLng::from_mercator(moved));
        self.center
    }

    /// Zooms the viewport to a specific level, keeping `focus_point` fixed on screen
    pub fn zoom_to(&mut self, zoom: f64, focus_point: Option<Point>) {
        let new_zoom = zoom.clamp(self.min_zoom, self.max_zoom);

        // No-op if zoom does not change significantly
        if (new_zoom - self.zoom).abs() < 0.001 {
            return;
        }

        match focus_point {
            Some(focus) => {
                let focus_map = self.pixel_to_map(&focus);
                self.zoom = new_zoom;
                let resolution = self.resolution();
                let center = Point::new(
                    focus_map.x - (focus.x - self.size.x / 2.0) * resolution,
                    focus_map.y + (focus.y - self.size.y / 2.0) * resolution,
                );
                self.set_center(LatLng::from_mercator(center));
            }
            None => self.zoom = new_zoom,
        }
    }

    /// Clamps center to the Web Mercator world
    fn clamp_center(center: LatLng) -> LatLng {
        LatLng::new(
            LatLng::clamp_lat(center.lat),
            center.lng.clamp(-180.0, 180.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

impl MapView for Viewport {
    fn view_size(&self) -> Point {
        self.size
    }

    fn map_scale(&self) -> f64 {
        let screen_meters_per_pixel = INCH_TO_CM / CM_TO_METER / DEFAULT_DPI;
        screen_meters_per_pixel / self.resolution()
    }

    fn view_to_map(&self, view_point: Point) -> Result<Point> {
        if !view_point.is_finite() {
            return Err(Error::Transform(format!(
                "view point {:?} is not finite",
                view_point
            )));
        }
        Ok(self.pixel_to_map(&view_point))
    }

    fn map_to_geodetic(&self, map_point: Point) -> Result<LatLng> {
        if !map_point.is_finite()
            || map_point.x.abs() > MERCATOR_EXTENT
            || map_point.y.abs() > MERCATOR_EXTENT
        {
            return Err(Error::OutOfBounds(format!(
                "map point ({}, {}) is outside the Web Mercator domain",
                map_point.x, map_point.y
            )));
        }
        Ok(LatLng::from_mercator(map_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(
            LatLng::new(40.7128, -74.0060),
            10.0,
            Point::new(800.0, 600.0),
        );

        assert_eq!(viewport.zoom, 10.0);
        assert_eq!(viewport.center.lat, 40.7128);
        assert_eq!(viewport.size.x, 800.0);
    }

    #[test]
    fn test_coordinate_conversion() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));

        let center_pixel = Point::new(256.0, 256.0);
        let center_lat_lng = viewport.pixel_to_lat_lng(&center_pixel);

        // Should be approximately at the center (0, 0)
        assert!((center_lat_lng.lat - 0.0).abs() < 0.01);
        assert!((center_lat_lng.lng - 0.0).abs() < 0.01);

        let back = viewport.lat_lng_to_pixel(&center_lat_lng);
        assert!((back.x - 256.0).abs() < 1e-6);
        assert!((back.y - 256.0).abs() < 1e-6);
    }

    #[test]
    fn test_resolution_at_zoom_zero() {
        let viewport = Viewport::default();
        // The whole world fits in one 256 pixel tile
        assert!((viewport.resolution() * 256.0 - 2.0 * MERCATOR_EXTENT).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.min_zoom = 2.0;
        viewport.max_zoom = 15.0;

        viewport.set_zoom(1.0); // Below minimum
        assert_eq!(viewport.zoom, 2.0);

        viewport.zoom_to(20.0, None); // Above maximum
        assert_eq!(viewport.zoom, 15.0);
    }

    #[test]
    fn test_pan() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));

        let original_center = viewport.center;
        viewport.pan(Point::new(10.0, 10.0));

        // Panning right and down moves the center east and south
        assert!(viewport.center.lng > original_center.lng);
        assert!(viewport.center.lat < original_center.lat);
    }

    #[test]
    fn test_zoom_around_focus_point() {
        let mut viewport = Viewport::new(LatLng::new(48.0, 2.0), 8.0, Point::new(800.0, 600.0));
        let focus = Point::new(600.0, 200.0);
        let before = viewport.pixel_to_lat_lng(&focus);

        viewport.zoom_to(10.0, Some(focus));
        let after = viewport.pixel_to_lat_lng(&focus);

        assert_eq!(viewport.zoom, 10.0);
        assert!((before.lat - after.lat).abs() < 1e-9);
        assert!((before.lng - after.lng).abs() < 1e-9);
    }

    #[test]
    fn test_map_to_geodetic_out_of_bounds() {
        let viewport = Viewport::default();
        let err = viewport
            .map_to_geodetic(Point::new(MERCATOR_EXTENT * 2.0, 0.0))
            .unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_map_scale_inverts_resolution() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 12.0, Point::new(800.0, 600.0));
        let pixels_per_map_meter =
            viewport.map_scale() * (DEFAULT_DPI / INCH_TO_CM) * CM_TO_METER;
        assert!((pixels_per_map_meter * viewport.resolution() - 1.0).abs() < 1e-12);
    }
}
