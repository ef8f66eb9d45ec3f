use crate::aggregates::Aggregates;
use crate::classify::TemperatureImpact;
use crate::correlation::CorrelationMatrix;
use core_types::DateRange;
use serde::{Deserialize, Serialize};

/// A complete, immutable statistics report for one selected period.
///
/// This struct is the final output of the `MetricsEngine` and the data
/// transfer object handed to rendering collaborators. It is built fresh for
/// every query and never mutated afterwards.
///
/// Metrics that cannot be meaningfully computed for the period — efficiency
/// under a non-positive average price, correlation with fewer than two
/// samples or a constant column — are `None`, never a stand-in number. How
/// an absent value is displayed (e.g. "n/a") is the renderer's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// The requested range, echoed for renderers.
    pub range: DateRange,
    /// Calendar days covered by the range, counting both endpoints.
    pub days: i64,

    // I. Energy Consumption
    pub total_consumption_kwh: f64,
    pub daily_avg_consumption_kwh: f64,
    pub avg_hourly_consumption_kwh: f64,
    pub peak_consumption_kwh: f64,
    pub min_consumption_kwh: f64,

    // II. Financial Impact
    pub total_bill_eur: f64,
    pub daily_bill_avg_eur: f64,
    pub avg_price_cents: f64,
    pub price_volatility_cents: f64,
    pub price_range_cents: f64,

    // III. Environmental
    pub avg_temperature_c: f64,
    pub temperature_range_c: f64,
    pub temperature_impact: TemperatureImpact,

    // IV. Efficiency & Coverage
    pub efficiency_score: Option<f64>,
    pub data_points: usize,
    pub data_points_in_days: f64,

    /// Pairwise correlation between consumption, price, and temperature.
    /// Absent when the period holds fewer than two records.
    pub correlation: Option<CorrelationMatrix>,
}

impl MetricsReport {
    /// Bundles the component outputs into the final report. Pure assembly:
    /// every metric has already been computed at this point.
    pub(crate) fn assemble(
        range: DateRange,
        aggregates: Aggregates,
        temperature_impact: TemperatureImpact,
        correlation: Option<CorrelationMatrix>,
    ) -> Self {
        Self {
            range,
            days: aggregates.days,
            total_consumption_kwh: aggregates.total_consumption_kwh,
            daily_avg_consumption_kwh: aggregates.daily_avg_consumption_kwh,
            avg_hourly_consumption_kwh: aggregates.avg_hourly_consumption_kwh,
            peak_consumption_kwh: aggregates.peak_consumption_kwh,
            min_consumption_kwh: aggregates.min_consumption_kwh,
            total_bill_eur: aggregates.total_bill_eur,
            daily_bill_avg_eur: aggregates.daily_bill_avg_eur,
            avg_price_cents: aggregates.avg_price_cents,
            price_volatility_cents: aggregates.price_volatility_cents,
            price_range_cents: aggregates.price_range_cents,
            avg_temperature_c: aggregates.avg_temperature_c,
            temperature_range_c: aggregates.temperature_range_c,
            temperature_impact,
            efficiency_score: aggregates.efficiency_score,
            data_points: aggregates.data_points,
            data_points_in_days: aggregates.data_points_in_days,
            correlation,
        }
    }
}
