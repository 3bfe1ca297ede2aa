//! Prelude module for common mapscale types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapscale::prelude::*;`

pub use crate::core::{
    config::{ScaleConfig, UnitSystem},
    geo::{LatLng, Point},
    geodesy::{EllipsoidalGeodesy, SphericalGeodesy},
    map::Map,
    viewport::Viewport,
};

pub use crate::input::{EventManager, ListenerId, MapEvent, MapEventKind};

pub use crate::scale::{
    pixels_per_meter, DistanceUnit, ScaleBar, ScaleBarFormatter, ScaleCalculator,
};

pub use crate::traits::{Geodesy, MapView};

pub use crate::ui::{
    LocationFormat, LocationReadout, MouseLocation, ScaleIndicator, ScaleIndicatorLayout,
    ScaleIndicatorOptions, TickSegment,
};

pub use crate::{Error, MapError, Result};
