//! Configuration for scale indicators
//!
//! Presets cover the common unit systems; a custom set of options can be
//! given instead, and either can be loaded from JSON.

use crate::{scale::DistanceUnit, ui::ScaleIndicatorOptions, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unit system a scale indicator starts in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Metres, stepping up to kilometres
    Metric,
    /// Feet, stepping up to US miles
    Imperial,
    /// Nautical miles
    Nautical,
    Custom(ScaleIndicatorOptions),
}

impl UnitSystem {
    pub fn resolve(&self) -> ScaleIndicatorOptions {
        let distance_unit = match self {
            Self::Metric => DistanceUnit::Metre,
            Self::Imperial => DistanceUnit::Foot,
            Self::Nautical => DistanceUnit::NauticalMile,
            Self::Custom(options) => return options.clone(),
        };
        ScaleIndicatorOptions {
            distance_unit,
            ..ScaleIndicatorOptions::default()
        }
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::Metric
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub units: UnitSystem,
    /// Overrides the preset's screen resolution
    pub dpi: Option<f64>,
    /// Overrides the preset's number of foreground ticks
    pub foreground_ticks: Option<usize>,
}

impl ScaleConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScaleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading scale config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The indicator options this configuration describes
    pub fn options(&self) -> ScaleIndicatorOptions {
        let mut options = self.units.resolve();
        if let Some(dpi) = self.dpi {
            options.dpi = dpi;
        }
        if let Some(ticks) = self.foreground_ticks {
            options.foreground_ticks = ticks;
        }
        options
    }

    pub fn validate(&self) -> Result<()> {
        self.options().validate()
    }
}
