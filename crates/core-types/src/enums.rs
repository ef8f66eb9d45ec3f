use serde::{Deserialize, Serialize};
use std::fmt;

/// Heating-demand band derived from the average outdoor temperature over a
/// selected period. Bands are calibrated for a Nordic climate.
///
/// The bands are ordered, non-overlapping, and left-closed/right-open except
/// for the final unbounded one: an average of exactly -15.0 is `VeryCold`,
/// exactly 5.0 is `Cool`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingDemand {
    ExtremeCold,
    VeryCold,
    Cold,
    Cool,
    Mild,
    Warm,
}

impl HeatingDemand {
    /// Classifies an average temperature into its heating-demand band.
    pub fn from_avg_temperature(avg_temperature_c: f64) -> Self {
        if avg_temperature_c < -15.0 {
            HeatingDemand::ExtremeCold
        } else if avg_temperature_c < -5.0 {
            HeatingDemand::VeryCold
        } else if avg_temperature_c < 5.0 {
            HeatingDemand::Cold
        } else if avg_temperature_c < 15.0 {
            HeatingDemand::Cool
        } else if avg_temperature_c < 25.0 {
            HeatingDemand::Mild
        } else {
            HeatingDemand::Warm
        }
    }
}

impl fmt::Display for HeatingDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HeatingDemand::ExtremeCold => "Extreme Cold (High Heating)",
            HeatingDemand::VeryCold => "Very Cold (High Heating)",
            HeatingDemand::Cold => "Cold (Moderate Heating)",
            HeatingDemand::Cool => "Cool (Low Heating)",
            HeatingDemand::Mild => "Mild (Minimal Heating)",
            HeatingDemand::Warm => "Warm (No Heating)",
        };
        f.write_str(label)
    }
}

/// Seasonal-variation band derived from the spread (max - min) of
/// temperature over a selected period.
///
/// Boundary values belong to the lower band: a spread of exactly 25.0 is
/// `Moderate`, exactly 15.0 is `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonalVariation {
    High,
    Moderate,
    Low,
}

impl SeasonalVariation {
    /// Classifies a temperature spread into its variation band.
    pub fn from_temperature_range(temperature_range_c: f64) -> Self {
        if temperature_range_c > 25.0 {
            SeasonalVariation::High
        } else if temperature_range_c > 15.0 {
            SeasonalVariation::Moderate
        } else {
            SeasonalVariation::Low
        }
    }
}

impl fmt::Display for SeasonalVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeasonalVariation::High => "High Seasonal Variation",
            SeasonalVariation::Moderate => "Moderate Variation",
            SeasonalVariation::Low => "Low Variation",
        };
        f.write_str(label)
    }
}
