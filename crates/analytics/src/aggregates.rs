use crate::error::AnalyticsError;
use core_types::{DateRange, HourlyRecord};
use serde::{Deserialize, Serialize};

/// Whole-subset reductions over the filtered records.
///
/// Every "daily" metric divides by the calendar span of the *requested*
/// range, not by the number of records present, so sparse data inside a wide
/// range still yields a sensible per-day figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub total_consumption_kwh: f64,
    pub daily_avg_consumption_kwh: f64,
    pub avg_hourly_consumption_kwh: f64,
    pub peak_consumption_kwh: f64,
    pub min_consumption_kwh: f64,

    pub total_bill_eur: f64,
    pub daily_bill_avg_eur: f64,
    pub avg_price_cents: f64,
    pub price_volatility_cents: f64,
    pub price_range_cents: f64,

    pub avg_temperature_c: f64,
    pub temperature_range_c: f64,

    pub days: i64,
    pub data_points: usize,
    pub data_points_in_days: f64,

    /// Daily average consumption per cent of average price. Undefined when
    /// the average price is not positive, since dividing by a zero or
    /// negative price is not economically meaningful.
    pub efficiency_score: Option<f64>,
}

/// Computes all descriptive statistics for the filtered subset.
///
/// An empty subset is an error: silently emitting zeros would misrepresent
/// "no data" as "zero consumption". A single record is fine — its price
/// volatility is 0.0 by definition, not undefined.
pub fn compute(subset: &[HourlyRecord], range: DateRange) -> Result<Aggregates, AnalyticsError> {
    if subset.is_empty() {
        return Err(AnalyticsError::EmptyRange { range });
    }

    let n = subset.len() as f64;

    let mut total_consumption = 0.0;
    let mut total_bill = 0.0;
    let mut price_sum = 0.0;
    let mut temperature_sum = 0.0;

    let mut peak_consumption = f64::NEG_INFINITY;
    let mut min_consumption = f64::INFINITY;
    let mut price_min = f64::INFINITY;
    let mut price_max = f64::NEG_INFINITY;
    let mut temperature_min = f64::INFINITY;
    let mut temperature_max = f64::NEG_INFINITY;

    for record in subset {
        total_consumption += record.consumption_kwh;
        // The stored bill is never trusted; recompute from consumption and
        // price so a stale upstream column cannot skew the totals.
        total_bill += record.derived_bill_eur();
        price_sum += record.price_cents_per_kwh;
        temperature_sum += record.temperature_c;

        peak_consumption = peak_consumption.max(record.consumption_kwh);
        min_consumption = min_consumption.min(record.consumption_kwh);
        price_min = price_min.min(record.price_cents_per_kwh);
        price_max = price_max.max(record.price_cents_per_kwh);
        temperature_min = temperature_min.min(record.temperature_c);
        temperature_max = temperature_max.max(record.temperature_c);
    }

    let avg_price = price_sum / n;

    let days = range.days_inclusive().max(1);
    let daily_avg_consumption = total_consumption / days as f64;

    let efficiency_score = if avg_price > 0.0 {
        Some(daily_avg_consumption / avg_price)
    } else {
        None
    };

    Ok(Aggregates {
        total_consumption_kwh: total_consumption,
        daily_avg_consumption_kwh: daily_avg_consumption,
        avg_hourly_consumption_kwh: total_consumption / n,
        peak_consumption_kwh: peak_consumption,
        min_consumption_kwh: min_consumption,
        total_bill_eur: total_bill,
        daily_bill_avg_eur: total_bill / days as f64,
        avg_price_cents: avg_price,
        price_volatility_cents: price_std_dev(subset, avg_price),
        price_range_cents: price_max - price_min,
        avg_temperature_c: temperature_sum / n,
        temperature_range_c: temperature_max - temperature_min,
        days,
        data_points: subset.len(),
        data_points_in_days: subset.len() as f64 / 24.0,
        efficiency_score,
    })
}

/// Sample standard deviation (n - 1 divisor) of the hourly prices.
///
/// A single observation has no spread, so it yields 0.0 rather than an
/// undefined value. Identical prices are detected before any arithmetic so
/// the result is exactly 0.0, free of mean-rounding noise.
fn price_std_dev(subset: &[HourlyRecord], mean: f64) -> f64 {
    if subset.len() < 2 {
        return 0.0;
    }
    let first = subset[0].price_cents_per_kwh;
    if subset.iter().all(|r| r.price_cents_per_kwh == first) {
        return 0.0;
    }
    let sum_sq: f64 = subset
        .iter()
        .map(|r| {
            let d = r.price_cents_per_kwh - mean;
            d * d
        })
        .sum();
    (sum_sq / (subset.len() as f64 - 1.0)).sqrt()
}
