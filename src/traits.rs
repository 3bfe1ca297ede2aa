//! Host abstractions the scale pipeline depends on
//!
//! The calculator never talks to a concrete map engine. Anything that can
//! report its view size and scale, and move points between view, map and
//! geodetic space, can be measured.

use crate::{
    core::geo::{LatLng, Point},
    Result,
};

/// Read-only access to a map view's geometry
pub trait MapView {
    /// Current view size in pixels (`x` = width, `y` = height)
    fn view_size(&self) -> Point;

    /// Ratio of on-screen distance to map distance at the reference DPI
    fn map_scale(&self) -> f64;

    /// Transform a view point (pixels) into the map's projected coordinates
    fn view_to_map(&self, view_point: Point) -> Result<Point>;

    /// Transform a map point into WGS84 geodetic coordinates
    ///
    /// Returns [`crate::Error::OutOfBounds`] when the point lies outside the
    /// domain of the transformation.
    fn map_to_geodetic(&self, map_point: Point) -> Result<LatLng>;
}

/// Shortest-path distance service over a reference ellipsoid
pub trait Geodesy {
    /// Distance in meters between two geodetic points
    fn distance(&self, from: LatLng, to: LatLng) -> Result<f64>;
}

impl<T: MapView + ?Sized> MapView for &T {
    fn view_size(&self) -> Point {
        (**self).view_size()
    }

    fn map_scale(&self) -> f64 {
        (**self).map_scale()
    }

    fn view_to_map(&self, view_point: Point) -> Result<Point> {
        (**self).view_to_map(view_point)
    }

    fn map_to_geodetic(&self, map_point: Point) -> Result<LatLng> {
        (**self).map_to_geodetic(map_point)
    }
}

impl<T: Geodesy + ?Sized> Geodesy for &T {
    fn distance(&self, from: LatLng, to: LatLng) -> Result<f64> {
        (**self).distance(from, to)
    }
}
