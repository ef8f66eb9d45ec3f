use chrono::NaiveDate;
use core_types::DateRange;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("no records fall within {range}; select a different range")]
    EmptyRange { range: DateRange },

    #[error("correlation is undefined over {samples} sample(s); at least 2 are required")]
    UndefinedCorrelation { samples: usize },
}
