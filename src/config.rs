use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use helios_ephem::{Observer, SolarEphemeris};
use helios_time::Tz;

/// Top-level helios configuration, read from YAML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeliosConfig {
    /// Observer site.
    pub location: LocationYaml,

    /// IANA timezone governing local civil day boundaries.
    pub timezone: String,

    /// Target civil year.
    pub year: i32,

    /// Ephemeris data source identifier.
    #[serde(default = "default_ephemeris")]
    pub ephemeris: String,

    /// Output path; "-" or absent means stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// `location:` block of the YAML file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationYaml {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Elevation in metres above sea level.
    #[serde(default)]
    pub alt: f64,
}

fn default_ephemeris() -> String {
    "builtin".to_string()
}

impl HeliosConfig {
    /// Reads and parses the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: HeliosConfig =
            serde_yaml::from_str(&yaml).context("failed to parse YAML config")?;
        Ok(config)
    }

    /// Observer built from the location block, with coordinate range
    /// validation.
    pub fn observer(&self) -> Result<Observer> {
        Ok(Observer::new(
            self.location.lat,
            self.location.lon,
            self.location.alt,
        )?)
    }

    /// Parsed IANA timezone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown IANA timezone: {}", self.timezone))
    }

    /// Target year after the CLI override, validated against oracle
    /// coverage. The search runs into the following January, so the
    /// last fully covered target year is 2099.
    pub fn resolve_year(&self, cli_year: Option<i32>) -> Result<i32> {
        let year = cli_year.unwrap_or(self.year);
        if !(1900..=2099).contains(&year) {
            bail!("year {year} outside ephemeris coverage (1900-2099)");
        }
        Ok(year)
    }

    /// Builds the configured position oracle.
    pub fn build_ephemeris(&self) -> Result<SolarEphemeris> {
        match self.ephemeris.as_str() {
            "builtin" => Ok(SolarEphemeris::new()),
            other => bail!("unknown ephemeris source {other:?} (available: builtin)"),
        }
    }

    /// Output destination after the CLI override; `None` means stdout.
    pub fn resolve_output(&self, cli_output: Option<PathBuf>) -> Option<PathBuf> {
        let path = cli_output.or_else(|| self.output.clone())?;
        if path.as_os_str() == "-" { None } else { Some(path) }
    }
}
