use crate::error::AnalyticsError;
use chrono::Datelike;
use core_types::{DateRange, HourlyRecord};

/// Selects the records whose timestamp's date component lies within `range`.
///
/// The store is ordered by timestamp, so the selection is a single contiguous
/// run located with two binary searches; the result borrows from the store
/// rather than copying it.
///
/// An empty result is not an error — downstream calculators decide how to
/// treat an empty subset. A reversed range is rejected here, before any
/// record is touched.
pub fn filter_by_range(
    records: &[HourlyRecord],
    range: DateRange,
) -> Result<&[HourlyRecord], AnalyticsError> {
    if !range.is_valid() {
        return Err(AnalyticsError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    let lo = records.partition_point(|r| r.timestamp.date() < range.start);
    let hi = records.partition_point(|r| r.timestamp.date() <= range.end);
    Ok(&records[lo..hi])
}

/// Computes the default selection for a freshly loaded store: the last whole
/// calendar month preceding the newest record, clamped to the store's span.
///
/// Falls back to the full span when the store is too short to contain that
/// month, and returns `None` only for an empty store.
pub fn default_range(records: &[HourlyRecord]) -> Option<DateRange> {
    let min_date = records.first()?.timestamp.date();
    let max_date = records.last()?.timestamp.date();
    let full_span = DateRange::new(min_date, max_date);

    // Last day of the month before the newest record, then the first day of
    // that same month.
    let Some(prev_month_end) = max_date.with_day(1).and_then(|d| d.pred_opt()) else {
        return Some(full_span);
    };
    let Some(prev_month_start) = prev_month_end.with_day(1) else {
        return Some(full_span);
    };

    let range = DateRange::new(prev_month_start.max(min_date), prev_month_end.min(max_date));
    if range.is_valid() {
        Some(range)
    } else {
        Some(full_span)
    }
}
