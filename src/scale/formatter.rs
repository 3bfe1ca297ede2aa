use crate::{scale::units::DistanceUnit, Error, Result};
use serde::{Deserialize, Serialize};

/// A rounded scale bar ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleBar {
    /// Bar length in pixels, never more than the width it was formatted for
    pub width_pixels: f64,
    /// Rounded bar length in `unit`
    pub value: f64,
    /// `value` followed by the unit symbol, e.g. `"500 m"`
    pub label: String,
    pub unit: DistanceUnit,
}

/// Turns a pixels-per-meter ratio into a rounded scale bar
///
/// The formatter holds no state: the caller keeps the unit returned by
/// [`ScaleBarFormatter::format`] and hands it back on the next call, which
/// lets metric and imperial bars step between their two units.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleBarFormatter;

impl ScaleBarFormatter {
    /// Formats a bar at most `max_width_pixels` wide
    ///
    /// Returns the bar and the unit to pass as `current_unit` next time.
    pub fn format(
        pixels_per_meter: f64,
        max_width_pixels: f64,
        current_unit: DistanceUnit,
    ) -> Result<(ScaleBar, DistanceUnit)> {
        check_positive("pixels per meter", pixels_per_meter)?;
        check_positive("maximum bar width", max_width_pixels)?;

        let bar_meters = max_width_pixels / pixels_per_meter;
        let in_current_unit = current_unit.from_standard(bar_meters);
        let unit = best_unit(current_unit, in_current_unit, bar_meters);

        let value = find_nice(unit.from_standard(bar_meters))?;
        let width_pixels = (pixels_per_meter * unit.to_standard(value)).min(max_width_pixels);

        let bar = ScaleBar {
            width_pixels,
            value,
            label: format!("{} {}", value, unit.symbol()),
            unit,
        };
        Ok((bar, unit))
    }
}

fn check_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{} must be positive and finite, got {}",
            what, value
        )))
    }
}

/// Picks the unit a bar should be labelled in.
///
/// Metre/kilometre and foot/mile are independent tiers; nautical miles never
/// switch. Thresholds have no hysteresis band.
pub fn best_unit(current: DistanceUnit, length_in_unit: f64, length_in_meters: f64) -> DistanceUnit {
    match current {
        DistanceUnit::Metre if length_in_unit > 1000.0 => DistanceUnit::Kilometre,
        DistanceUnit::Kilometre if length_in_unit < 1.0 => DistanceUnit::Metre,
        DistanceUnit::Foot if DistanceUnit::MileUs.from_standard(length_in_meters) > 1.0 => {
            DistanceUnit::MileUs
        }
        DistanceUnit::MileUs if length_in_unit < 1.0 => DistanceUnit::Foot,
        unit => unit,
    }
}

/// Rounds down to the nearest 1, 2 or 5 times a power of ten.
pub fn find_nice(value: f64) -> Result<f64> {
    check_positive("value to round", value)?;

    let lowest = 10_f64.powf(value.log10().floor());
    Ok(if value > 5.0 * lowest {
        5.0 * lowest
    } else if value > 2.0 * lowest {
        2.0 * lowest
    } else {
        lowest
    })
}
