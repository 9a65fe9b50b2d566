mod calendar;
mod cli;
mod config;
mod logging;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::config::HeliosConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = HeliosConfig::load(&cli.config)?;
    let observer = config.observer()?;
    let tz = config.tz()?;
    let year = config.resolve_year(cli.year)?;
    let ephemeris = config.build_ephemeris()?;
    let output = config.resolve_output(cli.output);

    info!(
        lat = observer.latitude_deg(),
        lon = observer.longitude_deg(),
        tz = %tz,
        year,
        "computing solar calendar"
    );

    let calendar = calendar::assemble(&ephemeris, &observer, tz, year)?;
    let report = report::CalendarReport::new(&observer, tz.name(), year, &calendar)?;
    report::write(&report, output.as_deref())?;

    Ok(())
}
