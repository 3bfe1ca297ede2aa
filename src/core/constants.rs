//! Core constants for scale sampling and the Web Mercator view.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Screen resolution assumed when none is given.
pub const DEFAULT_DPI: f64 = 96.0;

/// Centimeters per inch.
pub const INCH_TO_CM: f64 = 2.54;

/// Centimeters per meter.
pub const CM_TO_METER: f64 = 100.0;

/// Horizontal offset, in pixels, of each scale sample point from the view center.
pub const SAMPLE_HALF_SPAN: f64 = 50.0;

/// Map-unit-per-meter ratios are rounded to this many steps per unit (8 decimals).
pub const RATIO_PRECISION: f64 = 100_000_000.0;

/// Number of alternating foreground segments on a scale bar.
pub const DEFAULT_FOREGROUND_TICKS: usize = 2;

/// WGS84 semi-major axis in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Zoom range supported by the viewport.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 18.0;
