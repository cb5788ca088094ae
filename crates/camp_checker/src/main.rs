//! Command-line entry point for the campsite availability checker.
//! Looks up every configured campground and stay on recreation.gov and prints the open sites.

use anyhow::Context;
use campground_scan::{ScanConfig, ScanExecutor};
use rec_gov::RecGovClient;

/// Campgrounds and stays to check, fixed at build time.
const CAMPGROUNDS: &str = include_str!("../config/campgrounds.json");

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config =
        ScanConfig::from_json(CAMPGROUNDS).context("Failed to load campground configuration")?;
    let client = RecGovClient::new().context("Failed to create recreation.gov client")?;
    let executor = ScanExecutor::new(client, config);

    log::info!(
        "🏕️ Loaded {} campground(s) from configuration",
        executor.config().campgrounds.len()
    );

    let reports = executor
        .run()
        .await
        .context("Availability check failed")?;

    for report in &reports {
        println!();
        print!("{}", report);
    }

    log::info!("✅ Checked {} stay(s)", reports.len());

    Ok(())
}
