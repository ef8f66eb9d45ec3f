use crate::error::AnalyticsError;
use crate::report::MetricsReport;
use crate::{aggregates, classify, filter};
use crate::correlation::CorrelationMatrix;
use core_types::{DateRange, HourlyRecord};
use tracing::debug;

/// A stateless calculator deriving descriptive statistics from an hourly
/// electricity record store.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for computing a period report.
    ///
    /// # Arguments
    ///
    /// * `records` - The full record store, ordered by timestamp. The engine
    ///   only reads it; ownership stays with the data loader.
    /// * `range` - The inclusive calendar-date span to report on.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `MetricsReport` or an `AnalyticsError`.
    /// A reversed range or a range selecting no records aborts the report;
    /// metrics that are undefined for an otherwise valid period (efficiency
    /// score, correlation entries) ride inside the report as `None`.
    pub fn calculate(
        &self,
        records: &[HourlyRecord],
        range: DateRange,
    ) -> Result<MetricsReport, AnalyticsError> {
        let subset = filter::filter_by_range(records, range)?;
        debug!(
            %range,
            selected = subset.len(),
            store = records.len(),
            "filtered record store"
        );

        let aggregates = aggregates::compute(subset, range)?;
        let temperature_impact = classify::classify(
            aggregates.avg_temperature_c,
            aggregates.temperature_range_c,
        );

        // A period too short for correlation must not block the rest of the
        // report; the matrix is simply absent.
        let correlation = match CorrelationMatrix::compute(subset) {
            Ok(matrix) => Some(matrix),
            Err(AnalyticsError::UndefinedCorrelation { samples }) => {
                debug!(samples, "correlation undefined for this period");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(MetricsReport::assemble(
            range,
            aggregates,
            temperature_impact,
            correlation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::CorrelationField::{Consumption, Price, Temperature};
    use chrono::{Duration, NaiveDate};
    use core_types::{HeatingDemand, SeasonalVariation};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One week of hourly records: consumption alternating 1.0 / 2.0 kWh,
    /// price a constant 10 cents/kWh, temperature a constant 0 °C.
    fn alternating_week(start: NaiveDate) -> Vec<HourlyRecord> {
        let first = start.and_hms_opt(0, 0, 0).unwrap();
        (0..7 * 24)
            .map(|h| HourlyRecord {
                timestamp: first + Duration::hours(h),
                consumption_kwh: if h % 2 == 0 { 1.0 } else { 2.0 },
                price_cents_per_kwh: 10.0,
                bill_eur: 0.0,
                temperature_c: 0.0,
            })
            .collect()
    }

    #[test]
    fn full_week_report_matches_the_expected_figures() {
        let store = alternating_week(date(2024, 1, 1));
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 7));
        let report = MetricsEngine::new().calculate(&store, range).unwrap();

        assert!((report.total_consumption_kwh - 1.5 * 24.0 * 7.0).abs() < 1e-9);
        assert!((report.avg_price_cents - 10.0).abs() < 1e-9);
        assert_eq!(report.price_volatility_cents, 0.0);
        assert!((report.peak_consumption_kwh - 2.0).abs() < 1e-12);
        assert_eq!(report.temperature_impact.heating, HeatingDemand::Cold);
        assert_eq!(report.temperature_impact.variation, SeasonalVariation::Low);
        assert_eq!(
            report.temperature_impact.label(),
            "Cold (Moderate Heating), Low Variation"
        );

        // Price and temperature are constant columns, so every correlation
        // involving them is undefined.
        let matrix = report.correlation.unwrap();
        assert_eq!(matrix.get(Consumption, Price), None);
        assert_eq!(matrix.get(Consumption, Temperature), None);
        assert_eq!(matrix.get(Price, Temperature), None);
        assert_eq!(matrix.get(Consumption, Consumption), Some(1.0));
    }

    #[test]
    fn single_record_report_keeps_defined_metrics_and_drops_the_rest() {
        let store = vec![HourlyRecord {
            timestamp: date(2024, 7, 15).and_hms_opt(12, 0, 0).unwrap(),
            consumption_kwh: 5.0,
            price_cents_per_kwh: -20.0,
            bill_eur: 123.0, // stale; must be recomputed
            temperature_c: 30.0,
        }];
        let range = DateRange::new(date(2024, 7, 15), date(2024, 7, 15));
        let report = MetricsEngine::new().calculate(&store, range).unwrap();

        assert!((report.total_bill_eur - (-1.0)).abs() < 1e-12);
        assert!((report.avg_price_cents - (-20.0)).abs() < 1e-12);
        assert_eq!(report.efficiency_score, None);
        assert_eq!(report.temperature_impact.heating, HeatingDemand::Warm);
        assert_eq!(report.temperature_impact.variation, SeasonalVariation::Low);
        assert_eq!(report.correlation, None);
    }

    #[test]
    fn range_selecting_no_records_aborts_the_report() {
        let store = alternating_week(date(2024, 1, 1));
        let range = DateRange::new(date(2030, 1, 1), date(2030, 1, 7));
        let err = MetricsEngine::new().calculate(&store, range).unwrap_err();
        assert_eq!(err, AnalyticsError::EmptyRange { range });
    }

    #[test]
    fn reversed_range_aborts_the_report() {
        let store = alternating_week(date(2024, 1, 1));
        let range = DateRange::new(date(2024, 1, 7), date(2024, 1, 1));
        let err = MetricsEngine::new().calculate(&store, range).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::InvalidRange {
                start: date(2024, 1, 7),
                end: date(2024, 1, 1),
            }
        );
    }

    #[test]
    fn partial_week_selection_only_counts_the_window() {
        let store = alternating_week(date(2024, 1, 1));
        let range = DateRange::new(date(2024, 1, 3), date(2024, 1, 4));
        let report = MetricsEngine::new().calculate(&store, range).unwrap();

        assert_eq!(report.data_points, 48);
        assert_eq!(report.days, 2);
        assert!((report.total_consumption_kwh - 1.5 * 48.0).abs() < 1e-9);
        assert!((report.data_points_in_days - 2.0).abs() < 1e-12);
    }

    #[test]
    fn report_serializes_with_explicit_null_markers() {
        let store = vec![HourlyRecord {
            timestamp: date(2024, 7, 15).and_hms_opt(12, 0, 0).unwrap(),
            consumption_kwh: 5.0,
            price_cents_per_kwh: -20.0,
            bill_eur: 0.0,
            temperature_c: 30.0,
        }];
        let range = DateRange::new(date(2024, 7, 15), date(2024, 7, 15));
        let report = MetricsEngine::new().calculate(&store, range).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["efficiency_score"].is_null());
        assert!(json["correlation"].is_null());
        assert_eq!(json["data_points"], 1);
    }
}
