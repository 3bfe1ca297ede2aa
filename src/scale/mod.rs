//! Scale computation and scale-bar formatting

pub mod calculator;
pub mod formatter;
pub mod units;

pub use calculator::{pixels_per_meter, ScaleCalculator};
pub use formatter::{best_unit, find_nice, ScaleBar, ScaleBarFormatter};
pub use units::DistanceUnit;
