use crate::{
    core::geo::{LatLng, Point},
    traits::MapView,
    Result,
};
use serde::{Deserialize, Serialize};

/// How a location readout prints coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationFormat {
    /// `40°42'46.08"N, 74°00'21.60"W`
    Dms,
    /// Signed decimal degrees, latitude first
    Decimal { digits: usize },
    /// Raw map coordinates, for maps without a geodetic transformation
    MapCoordinates,
}

impl Default for LocationFormat {
    fn default() -> Self {
        LocationFormat::Dms
    }
}

/// Text shown by a mouse location readout; both parts are empty when the
/// pointer is outside the map's domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationReadout {
    pub coordinates: String,
    pub height: String,
}

/// Converts pointer positions into a coordinate readout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseLocation {
    pub format: LocationFormat,
    pub display_height: bool,
}

impl MouseLocation {
    pub fn new(format: LocationFormat) -> Self {
        Self {
            format,
            display_height: false,
        }
    }

    pub fn with_height(mut self, display_height: bool) -> Self {
        self.display_height = display_height;
        self
    }

    /// Geodetic location under a view pixel, or `None` outside the map's domain
    pub fn locate<M: MapView + ?Sized>(map: &M, view_point: Point) -> Result<Option<LatLng>> {
        let located = map
            .view_to_map(view_point)
            .and_then(|map_point| map.map_to_geodetic(map_point));
        match located {
            Ok(lat_lng) => Ok(Some(lat_lng)),
            Err(e) if e.is_out_of_bounds() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Readout for a view pixel, with an optional terrain height in meters
    pub fn readout<M: MapView + ?Sized>(
        &self,
        map: &M,
        view_point: Point,
        height: Option<f64>,
    ) -> Result<LocationReadout> {
        let coordinates = match self.format {
            LocationFormat::MapCoordinates => match map.view_to_map(view_point) {
                Ok(map_point) => Some(format_map_point(&map_point)),
                Err(e) if e.is_out_of_bounds() => None,
                Err(e) => return Err(e),
            },
            _ => Self::locate(map, view_point)?.map(|lat_lng| self.format_lat_lng(&lat_lng)),
        };

        Ok(match coordinates {
            Some(coordinates) => LocationReadout {
                coordinates,
                height: self.format_height(height),
            },
            None => LocationReadout::default(),
        })
    }

    pub fn format_lat_lng(&self, lat_lng: &LatLng) -> String {
        match self.format {
            LocationFormat::Decimal { digits } => {
                format!("{:.*}, {:.*}", digits, lat_lng.lat, digits, lat_lng.lng)
            }
            LocationFormat::Dms => format!(
                "{}, {}",
                format_dms(lat_lng.lat, 'N', 'S'),
                format_dms(lat_lng.lng, 'E', 'W')
            ),
            // Geodetic input has no map coordinates; print it unconverted
            LocationFormat::MapCoordinates => {
                format_map_point(&Point::new(lat_lng.lng, lat_lng.lat))
            }
        }
    }

    fn format_height(&self, height: Option<f64>) -> String {
        match height {
            Some(z) if self.display_height && z.is_finite() => format!("{} m", z.round()),
            _ => String::new(),
        }
    }
}

fn format_map_point(point: &Point) -> String {
    format!("( x:{:.2}, y:{:.2})", point.x, point.y)
}

/// Degrees, minutes and seconds to two decimals, with a hemisphere letter
fn format_dms(value: f64, positive: char, negative: char) -> String {
    // Work in hundredths of a second so rounding carries into minutes and degrees
    let hundredths = (value.abs() * 360_000.0).round() as u64;
    let degrees = hundredths / 360_000;
    let minutes = (hundredths % 360_000) / 6_000;
    let seconds = (hundredths % 6_000) as f64 / 100.0;
    let hemisphere = if value < 0.0 { negative } else { positive };
    format!("{}°{:02}'{:05.2}\"{}", degrees, minutes, seconds, hemisphere)
}
