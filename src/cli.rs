use std::path::PathBuf;

use clap::Parser;

/// Helios solar calendar generator.
#[derive(Parser)]
#[command(
    name = "helios",
    version,
    about = "Solar calendar for a fixed observer: seasons, sunrises, sunsets, and the orbit track"
)]
pub struct Cli {
    /// Path to YAML configuration file.
    #[arg(short, long, default_value = "helios.yaml")]
    pub config: PathBuf,

    /// Override output path from config ("-" means stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override target year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
