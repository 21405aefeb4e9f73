use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aurorawatch::{AlertReport, AuroraWatch, FeedKind, FeedSources, FileSource, Settings, Tier};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "aurorawatch")]
#[command(about = "Score aurora visibility from NOAA SWPC solar wind and K-index feeds")]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the ACE magnetometer feed (ace_mag_1m.txt)
    #[arg(long)]
    mag: Option<PathBuf>,

    /// Path to the ACE SWEPAM plasma feed (ace_swepam_1m.txt)
    #[arg(long)]
    plasma: Option<PathBuf>,

    /// Path to the Wing Kp feed (wingkp_list.txt)
    #[arg(long)]
    kp: Option<PathBuf>,

    /// Recency rank to score (0 = most recent) [default: 0]
    #[arg(short, long, conflicts_with = "window")]
    index: Option<usize>,

    /// Score this many of the most recent records instead of a single one
    #[arg(short, long)]
    window: Option<usize>,

    /// Write the latest merged record and reports to a JSON file
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut settings =
        Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(path) = args.mag.clone() {
        settings.feeds.magnetometer = path;
    }
    if let Some(path) = args.plasma.clone() {
        settings.feeds.plasma = path;
    }
    if let Some(path) = args.kp.clone() {
        settings.feeds.kindex = path;
    }

    let mut watch = AuroraWatch::new(
        FeedSources {
            magnetometer: Box::new(FileSource::new(&settings.feeds.magnetometer)),
            plasma: Box::new(FileSource::new(&settings.feeds.plasma)),
            kindex: Box::new(FileSource::new(&settings.feeds.kindex)),
        },
        settings.thresholds.clone(),
    );
    watch.reload_data()?;
    if let Some(err) = &watch.load_error {
        eprintln!("warning: {}", err);
    }

    let reports = match requested_window(&args, settings.window) {
        Some(count) => watch.window(count),
        None => vec![watch.report(args.index.unwrap_or(0))?],
    };

    for report in &reports {
        print_report(report);
    }

    if let Some(export_path) = args.export {
        export_to_file(&watch, &reports, &export_path)?;
    }

    Ok(())
}

/// Number of records to score, if more than a single one was asked for.
///
/// `--window` wins; otherwise a configured window applies only when no
/// `--index` was given, including an explicit `--index 0`.
fn requested_window(args: &Args, configured: usize) -> Option<usize> {
    args.window
        .or_else(|| (args.index.is_none() && configured > 1).then_some(configured))
}

fn print_report(report: &AlertReport) {
    println!("Aurora score (T-{}): {}", report.index, report.score);
    for outcome in &report.outcomes {
        println!(
            "  {:<8} {:>10}  {:<12} {:>+4}",
            outcome.metric,
            outcome.reading.to_string(),
            outcome.tier,
            outcome.weight
        );
    }
    if report.worst_tier() >= Tier::Orange {
        println!("  ALERT: {} conditions", report.worst_tier());
    }
}

/// Export the latest merged record and reports to a JSON file
fn export_to_file(watch: &AuroraWatch, reports: &[AlertReport], export_path: &Path) -> Result<()> {
    let feeds: serde_json::Map<String, serde_json::Value> = FeedKind::ALL
        .iter()
        .map(|kind| {
            let schema = kind.schema();
            (
                kind.label().to_string(),
                serde_json::json!({
                    "interval_secs": schema.interval.as_secs(),
                    "records": watch.data.iter().filter(|r| !r.feed(*kind).is_empty()).count(),
                }),
            )
        })
        .collect();

    let export = serde_json::json!({
        "feeds": feeds,
        "latest": watch.data.latest().ok(),
        "reports": reports,
    });

    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write(export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    info!("Exported alert state to {}", export_path.display());
    Ok(())
}
