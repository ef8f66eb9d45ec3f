use core_types::{HeatingDemand, SeasonalVariation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite temperature-impact classification for a selected period.
///
/// Combines the heating-demand band (from the average temperature) with the
/// seasonal-variation band (from the temperature spread). Both axes are
/// always evaluated, even when one of them sits exactly on a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureImpact {
    pub heating: HeatingDemand,
    pub variation: SeasonalVariation,
}

impl TemperatureImpact {
    /// The combined human-readable label, e.g.
    /// `"Cold (Moderate Heating), Low Variation"`. The two axes are joined
    /// with a comma-space everywhere a combined label is shown.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TemperatureImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.heating, self.variation)
    }
}

/// Maps the period's average temperature and temperature spread to its
/// composite classification.
pub fn classify(avg_temperature_c: f64, temperature_range_c: f64) -> TemperatureImpact {
    TemperatureImpact {
        heating: HeatingDemand::from_avg_temperature(avg_temperature_c),
        variation: SeasonalVariation::from_temperature_range(temperature_range_c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_both_axes_into_one_label() {
        let impact = classify(0.0, 10.0);
        assert_eq!(impact.heating, HeatingDemand::Cold);
        assert_eq!(impact.variation, SeasonalVariation::Low);
        assert_eq!(impact.label(), "Cold (Moderate Heating), Low Variation");
    }

    #[test]
    fn boundary_average_temperature_takes_the_lower_band() {
        assert_eq!(classify(-15.0, 0.0).heating, HeatingDemand::VeryCold);
        assert_eq!(classify(-15.0001, 0.0).heating, HeatingDemand::ExtremeCold);
    }

    #[test]
    fn boundary_spread_takes_the_lower_band() {
        assert_eq!(classify(0.0, 25.0).variation, SeasonalVariation::Moderate);
        assert_eq!(classify(0.0, 25.0001).variation, SeasonalVariation::High);
    }

    #[test]
    fn warm_period_with_wide_swings() {
        let impact = classify(26.0, 30.0);
        assert_eq!(
            impact.label(),
            "Warm (No Heating), High Seasonal Variation"
        );
    }
}
