//! # mapscale
//!
//! Map scale computation and scale-bar formatting for interactive map views.
//!
//! The crate samples a map view at its center to find how many screen pixels
//! cover one meter of ground, then turns that ratio into a rounded,
//! human-readable scale bar. A Web Mercator [`Viewport`] and a [`Map`] host
//! with change notifications are included so the pipeline can be driven
//! without any rendering backend.

pub mod core;
pub mod input;
pub mod prelude;
pub mod scale;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{ScaleConfig, UnitSystem},
    geo::{LatLng, Point},
    geodesy::{EllipsoidalGeodesy, SphericalGeodesy},
    map::Map,
    viewport::Viewport,
};

pub use crate::input::{events::MapEvent, handler::EventManager};

pub use crate::scale::{
    calculator::ScaleCalculator,
    formatter::{ScaleBar, ScaleBarFormatter},
    units::DistanceUnit,
};

pub use crate::traits::{Geodesy, MapView};

pub use crate::ui::{
    mouse_location::{LocationFormat, LocationReadout, MouseLocation},
    scale_indicator::{ScaleIndicator, ScaleIndicatorLayout, ScaleIndicatorOptions},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A point lies outside the valid domain of a transformation.
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transform error: {0}")]
    Transform(String),

    #[error("Geodesy error: {0}")]
    Geodesy(String),

    #[error("Unknown distance unit: {0}")]
    UnknownUnit(String),
}

impl MapError {
    /// Whether this error is the recoverable out-of-domain condition.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, MapError::OutOfBounds(_))
    }
}

/// Error type alias for convenience
pub type Error = MapError;

/// Initializes `env_logger` for library consumers that don't set up logging themselves.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
