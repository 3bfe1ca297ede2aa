//! Rendering-free map controls
//!
//! These compute what a control shows; drawing it is left to the host UI.

pub mod mouse_location;
pub mod scale_indicator;

pub use mouse_location::{LocationFormat, LocationReadout, MouseLocation};
pub use scale_indicator::{
    ScaleIndicator, ScaleIndicatorLayout, ScaleIndicatorOptions, TickSegment,
};
