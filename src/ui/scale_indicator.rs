use crate::{
    core::{
        constants::{DEFAULT_DPI, DEFAULT_FOREGROUND_TICKS},
        geodesy::EllipsoidalGeodesy,
    },
    scale::{DistanceUnit, ScaleBarFormatter, ScaleCalculator},
    traits::{Geodesy, MapView},
    Error, Result,
};
use serde::{Deserialize, Serialize};

/// Options for a [`ScaleIndicator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleIndicatorOptions {
    /// Unit the indicator starts in; it may later step within its tier
    pub distance_unit: DistanceUnit,
    /// Number of alternating foreground segments drawn on the bar
    pub foreground_ticks: usize,
    pub dpi: f64,
}

impl Default for ScaleIndicatorOptions {
    fn default() -> Self {
        Self {
            distance_unit: DistanceUnit::Metre,
            foreground_ticks: DEFAULT_FOREGROUND_TICKS,
            dpi: DEFAULT_DPI,
        }
    }
}

impl ScaleIndicatorOptions {
    pub fn validate(&self) -> Result<()> {
        if self.foreground_ticks == 0 {
            return Err(Error::InvalidArgument(
                "a scale indicator needs at least one foreground tick".to_string(),
            ));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "dpi must be positive, got {}",
                self.dpi
            )));
        }
        Ok(())
    }
}

/// One foreground segment, as percentages of the bar width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSegment {
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Everything a renderer needs to draw the scale bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleIndicatorLayout {
    pub bar_width: f64,
    /// Offset that centers the bar in the available width
    pub bar_left: f64,
    pub label: String,
    pub unit: DistanceUnit,
    pub pixels_per_meter: f64,
    pub ticks: Vec<TickSegment>,
}

/// Scale bar state for one map view
///
/// Keeps the unit chosen on the previous update so that the bar only steps
/// between metres and kilometres (or feet and miles) when it has to.
#[derive(Debug, Clone)]
pub struct ScaleIndicator<G = EllipsoidalGeodesy> {
    calculator: ScaleCalculator<G>,
    unit: DistanceUnit,
    ticks: Vec<TickSegment>,
    layout: Option<ScaleIndicatorLayout>,
}

impl ScaleIndicator<EllipsoidalGeodesy> {
    pub fn new(options: ScaleIndicatorOptions) -> Result<Self> {
        Self::with_geodesy(options, EllipsoidalGeodesy)
    }
}

impl<G: Geodesy> ScaleIndicator<G> {
    pub fn with_geodesy(options: ScaleIndicatorOptions, geodesy: G) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            calculator: ScaleCalculator::with_geodesy(geodesy).with_dpi(options.dpi)?,
            unit: options.distance_unit,
            ticks: tick_segments(options.foreground_ticks),
            layout: None,
        })
    }

    /// Recomputes the bar for the current state of `map`
    ///
    /// On failure the previous unit and layout are kept, so the next change
    /// notification simply tries again.
    pub fn update<M: MapView + ?Sized>(
        &mut self,
        map: &M,
        max_width_pixels: f64,
    ) -> Result<&ScaleIndicatorLayout> {
        let layout = match self.compute(map, max_width_pixels) {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("Skipping scale indicator update: {}", e);
                return Err(e);
            }
        };

        if self.unit != layout.unit {
            log::debug!("scale indicator unit {} -> {}", self.unit, layout.unit);
        }
        self.unit = layout.unit;
        Ok(&*self.layout.insert(layout))
    }

    fn compute<M: MapView + ?Sized>(
        &self,
        map: &M,
        max_width_pixels: f64,
    ) -> Result<ScaleIndicatorLayout> {
        let pixels_per_meter = self.calculator.pixels_per_meter(map)?;
        let (bar, unit) = ScaleBarFormatter::format(pixels_per_meter, max_width_pixels, self.unit)?;

        Ok(ScaleIndicatorLayout {
            bar_left: (max_width_pixels - bar.width_pixels) / 2.0,
            bar_width: bar.width_pixels,
            label: bar.label,
            unit,
            pixels_per_meter,
            ticks: self.ticks.clone(),
        })
    }

    /// The unit the next update starts from
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// The most recent successful layout
    pub fn layout(&self) -> Option<&ScaleIndicatorLayout> {
        self.layout.as_ref()
    }
}

fn tick_segments(count: usize) -> Vec<TickSegment> {
    let step = 100.0 / count as f64;
    (0..count)
        .map(|i| TickSegment {
            left_percent: i as f64 * step,
            width_percent: 100.0 / (count as f64 * 2.0),
        })
        .collect()
}
