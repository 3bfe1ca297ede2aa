//! Geodesic distance services on the WGS84 ellipsoid

use crate::{core::geo::LatLng, traits::Geodesy, Error, Result};
use geo::GeodesicDistance;

fn check_domain(point: &LatLng) -> Result<()> {
    if point.is_valid() {
        Ok(())
    } else {
        Err(Error::OutOfBounds(format!(
            "({}, {}) is not a valid geodetic coordinate",
            point.lat, point.lng
        )))
    }
}

/// Ellipsoidal shortest distance (Karney's geodesic algorithm via `geo`)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EllipsoidalGeodesy;

impl Geodesy for EllipsoidalGeodesy {
    fn distance(&self, from: LatLng, to: LatLng) -> Result<f64> {
        check_domain(&from)?;
        check_domain(&to)?;
        if from == to {
            return Ok(0.0);
        }

        let from: geo_types::Point<f64> = from.into();
        let to: geo_types::Point<f64> = to.into();
        let distance = from.geodesic_distance(&to);
        if distance.is_finite() {
            Ok(distance)
        } else {
            Err(Error::Geodesy(format!(
                "geodesic distance did not converge between {:?} and {:?}",
                from, to
            )))
        }
    }
}

/// Great-circle distance on a sphere with the WGS84 equatorial radius
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphericalGeodesy;

impl Geodesy for SphericalGeodesy {
    fn distance(&self, from: LatLng, to: LatLng) -> Result<f64> {
        check_domain(&from)?;
        check_domain(&to)?;
        Ok(from.distance_to(&to))
    }
}
