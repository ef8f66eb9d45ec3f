use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One clock hour of observed electricity data.
///
/// Records arrive from the data loader already cleaned and typed, ordered by
/// `timestamp` with no duplicates or gaps inside the covered span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Wall-clock hour the observation belongs to. Meter data carries no
    /// timezone, so this is a naive local timestamp.
    pub timestamp: NaiveDateTime,

    /// Measured load for the hour. May be zero but never negative.
    pub consumption_kwh: f64,

    /// Spot price for the hour. Negative prices denote oversupply, where the
    /// customer is credited for consuming.
    pub price_cents_per_kwh: f64,

    /// Billed cost as stored upstream. The analytics engine never trusts this
    /// value; see [`HourlyRecord::derived_bill_eur`].
    pub bill_eur: f64,

    /// Ambient outdoor temperature for the hour.
    pub temperature_c: f64,
}

impl HourlyRecord {
    /// The billed cost recomputed from consumption and price.
    ///
    /// All financial aggregates use this rather than the stored `bill_eur`,
    /// so a stale upstream column can never leak into a report. The sign
    /// follows the price sign (negative prices yield a credit).
    pub fn derived_bill_eur(&self) -> f64 {
        self.consumption_kwh * self.price_cents_per_kwh / 100.0
    }
}

/// An inclusive calendar-date span selecting a subset of records.
///
/// Both endpoints are whole dates with no time-of-day component. A range
/// whose `start` is after its `end` is a caller error; construction does not
/// reject it, but the range filter refuses to operate on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the range is well-formed (`start <= end`).
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Number of calendar days covered, counting both endpoints.
    ///
    /// A single-day range yields 1. This is the denominator for every
    /// "daily" metric, so sparse data inside a wide range still produces a
    /// sensible daily average.
    pub fn days_inclusive(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether the given calendar date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn derived_bill_ignores_stored_value() {
        let record = HourlyRecord {
            timestamp: date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
            consumption_kwh: 5.0,
            price_cents_per_kwh: -20.0,
            bill_eur: 999.0, // stale upstream value
            temperature_c: 30.0,
        };
        assert!((record.derived_bill_eur() - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn single_day_range_spans_one_day() {
        let range = DateRange::new(date(2024, 3, 15), date(2024, 3, 15));
        assert!(range.is_valid());
        assert_eq!(range.days_inclusive(), 1);
    }

    #[test]
    fn days_inclusive_counts_both_endpoints() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 7));
        assert_eq!(range.days_inclusive(), 7);
    }

    #[test]
    fn reversed_range_is_invalid() {
        let range = DateRange::new(date(2024, 2, 2), date(2024, 2, 1));
        assert!(!range.is_valid());
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = DateRange::new(date(2024, 1, 10), date(2024, 1, 20));
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 9)));
        assert!(!range.contains(date(2024, 1, 21)));
    }
}
