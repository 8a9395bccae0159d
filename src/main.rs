use crate::booking::enrich_events;
use crate::club::ClubClient;
use crate::config::Config;
use crate::stats::dataset::Dataset;
use chrono::{Local, TimeDelta};
use clap::Parser;
use std::path::PathBuf;

mod aircraft;
mod airport;
mod booking;
mod club;
mod config;
mod error;
mod report;
mod stats;
mod time;

#[derive(Parser)]
#[command(about = "Fleet utilization statistics from the club booking calendar")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    /// Number of weeks to process, counting back from now
    #[arg(short, long, default_value_t = 6)]
    weeks: i64,

    /// Write the dataset as JSON to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Do not print the report tables
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = Config::load_from_file(&args.config)?;
    if config.aircraft.is_empty() {
        log::warn!("No aircraft configured in {}", args.config.display());
    }
    let rotation = config.rotation_schedule()?;
    let availability_airports = config.availability_airports();

    let client = ClubClient::login(&config.club.url, &config.club.username, &config.club.password)?;

    let period_end = Local::now();
    let period_start = period_end - TimeDelta::weeks(args.weeks);
    log::info!(
        "Processing {} weeks: {} to {}",
        args.weeks,
        period_start.format("%Y-%m-%d"),
        period_end.format("%Y-%m-%d")
    );

    let raw_events = client.fetch_raw_events(&config.aircraft, &period_start, &period_end)?;
    let events = enrich_events(&config.aircraft, &rotation, &raw_events)?;
    let dataset = Dataset::assemble(&events, &config.aircraft, &availability_airports)?;

    if !args.quiet {
        println!("{}", report::render(&dataset));
    }
    if let Some(path) = &args.json {
        dataset.write_json(path)?;
    }

    Ok(())
}
