use analytics::{CorrelationField, MetricsEngine, MetricsReport};
use anyhow::Context;
use chrono::{Duration, NaiveDate, Timelike};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use core_types::{DateRange, HourlyRecord};
use std::f64::consts::TAU;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Wattline analytics application.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => {
            if let Err(e) = handle_report(args) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Descriptive statistics and heating-demand classification for hourly
/// electricity data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a metrics report over a synthetic record store.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The start of the reporting range (format: YYYY-MM-DD). Defaults,
    /// together with --end, to the last whole month of the store.
    #[arg(long)]
    start: Option<NaiveDate>,

    /// The end of the reporting range, inclusive (format: YYYY-MM-DD).
    #[arg(long)]
    end: Option<NaiveDate>,

    /// First day of the generated store (format: YYYY-MM-DD).
    #[arg(long, default_value = "2024-01-01")]
    from: NaiveDate,

    /// Number of days of hourly data to generate.
    #[arg(long, default_value_t = 365)]
    days: u32,

    /// Emit the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles the orchestration of one report: build the store, resolve the
/// range, run the engine, render.
fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let store = synthetic_store(args.from, args.days);
    tracing::info!(records = store.len(), from = %args.from, "synthetic store generated");

    let range = match (args.start, args.end) {
        (Some(start), Some(end)) => DateRange::new(start, end),
        (None, None) => {
            analytics::default_range(&store).context("the record store is empty")?
        }
        _ => anyhow::bail!("--start and --end must be given together"),
    };

    let report = MetricsEngine::new().calculate(&store, range)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", metrics_table(&report));
        if let Some(correlation) = render_correlation(&report) {
            println!("{correlation}");
        }
    }

    Ok(())
}

/// A deterministic synthetic record store: seasonal and diurnal temperature
/// swings, consumption that tracks heating demand plus an evening peak, and
/// a price with a morning/evening shape. Stands in for the external data
/// loader so the binary needs no input files.
fn synthetic_store(from: NaiveDate, days: u32) -> Vec<HourlyRecord> {
    let first = from.and_hms_opt(0, 0, 0).unwrap();

    (0..i64::from(days) * 24)
        .map(|h| {
            let timestamp = first + Duration::hours(h);
            let day = h as f64 / 24.0;
            let hour = f64::from(timestamp.hour());

            let seasonal = 14.0 * (TAU * (day - 15.0) / 365.25).sin();
            let diurnal = 3.0 * (TAU * (hour - 15.0) / 24.0).cos();
            let temperature_c = 2.0 + seasonal + diurnal;

            let heating = 0.08 * (18.0 - temperature_c).max(0.0);
            let evening_peak = if (17..=21).contains(&timestamp.hour()) {
                0.6
            } else {
                0.0
            };
            let consumption_kwh = 0.8 + heating + evening_peak;

            let price_cents_per_kwh = 8.0
                + 4.0 * (TAU * (hour - 8.0) / 24.0).sin()
                + 2.0 * (TAU * day / 365.25).sin();

            HourlyRecord {
                bill_eur: consumption_kwh * price_cents_per_kwh / 100.0,
                timestamp,
                consumption_kwh,
                price_cents_per_kwh,
                temperature_c,
            }
        })
        .collect()
}

// ==============================================================================
// Rendering
// ==============================================================================

fn metrics_table(report: &MetricsReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);

    table.add_row(vec!["Period".into(), report.range.to_string()]);
    table.add_row(vec!["Days".into(), report.days.to_string()]);
    table.add_row(vec![
        "Data Points".into(),
        format!("{} ({:.1} days)", report.data_points, report.data_points_in_days),
    ]);
    table.add_row(vec![
        "Total Consumption".into(),
        format!("{:.1} kWh", report.total_consumption_kwh),
    ]);
    table.add_row(vec![
        "Daily Average".into(),
        format!("{:.1} kWh", report.daily_avg_consumption_kwh),
    ]);
    table.add_row(vec![
        "Peak / Lowest Hour".into(),
        format!(
            "{:.1} / {:.1} kWh",
            report.peak_consumption_kwh, report.min_consumption_kwh
        ),
    ]);
    table.add_row(vec!["Total Bill".into(), render_bill(report.total_bill_eur)]);
    table.add_row(vec![
        "Daily Bill Average".into(),
        format!("{:.2} EUR", report.daily_bill_avg_eur),
    ]);
    table.add_row(vec![
        "Average Price".into(),
        format!(
            "{:.2} cents/kWh (±{:.2} std)",
            report.avg_price_cents, report.price_volatility_cents
        ),
    ]);
    table.add_row(vec![
        "Price Range".into(),
        format!("{:.2} cents", report.price_range_cents),
    ]);
    table.add_row(vec![
        "Average Temperature".into(),
        format!(
            "{:.1} °C (range {:.1} °C)",
            report.avg_temperature_c, report.temperature_range_c
        ),
    ]);
    table.add_row(vec![
        "Temperature Impact".into(),
        report.temperature_impact.label(),
    ]);
    table.add_row(vec![
        "Efficiency Score".into(),
        report
            .efficiency_score
            .map(|score| format!("{score:.1}"))
            .unwrap_or_else(|| "n/a".to_string()),
    ]);

    table
}

/// Negative totals are credits (the grid paid the customer).
fn render_bill(total_bill_eur: f64) -> String {
    if total_bill_eur < 0.0 {
        format!("{total_bill_eur:.2} EUR (Credit)")
    } else {
        format!("{total_bill_eur:.2} EUR")
    }
}

fn render_correlation(report: &MetricsReport) -> Option<Table> {
    let matrix = report.correlation?;
    let names = ["Consumption", "Price", "Temperature"];

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    let mut header = vec!["Correlation".to_string()];
    header.extend(names.iter().map(|n| n.to_string()));
    table.set_header(header);

    for (name, field) in names.iter().zip(CorrelationField::ALL) {
        let mut row = vec![name.to_string()];
        for other in CorrelationField::ALL {
            row.push(
                matrix
                    .get(field, other)
                    .map(|r| format!("{r:.3}"))
                    .unwrap_or_else(|| "n/a".to_string()),
            );
        }
        table.add_row(row);
    }

    Some(table)
}
