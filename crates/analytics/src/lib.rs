//! # Wattline Analytics Engine
//!
//! This crate computes descriptive and derived statistics over an hourly
//! electricity time series (consumption, price, billed cost, outdoor
//! temperature) for an arbitrary date range, and classifies the period into
//! human-readable heating-demand categories.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   data loading or rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless
//!   calculator. It takes a borrowed record store and a date range as input
//!   and produces an immutable `MetricsReport` as output, which makes it
//!   highly reliable and easy to test. Every call is a pure function of
//!   `(records, range)`, so independent queries are safe to run concurrently
//!   with no coordination.
//! - **No Fabricated Numbers:** Metrics that cannot be meaningfully computed
//!   (efficiency under non-positive prices, correlation with constant
//!   columns or fewer than two samples) are reported as explicit absent
//!   values, never as a misleading `0`.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The main struct that contains the calculation logic.
//! - `MetricsReport`: The standardized struct that holds all computed
//!   metrics for one period.
//! - `AnalyticsError`: The specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod aggregates;
pub mod classify;
pub mod correlation;
pub mod engine;
pub mod error;
pub mod filter;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use classify::TemperatureImpact;
pub use correlation::{CorrelationField, CorrelationMatrix};
pub use engine::MetricsEngine;
pub use error::AnalyticsError;
pub use filter::{default_range, filter_by_range};
pub use report::MetricsReport;
