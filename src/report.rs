//! The output document: a single pretty-printed JSON report per run.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use helios_almanac::{Event, Season};
use helios_ephem::Observer;
use helios_time::Instant;

use crate::calendar::SolarCalendar;

/// Top-level report document.
#[derive(Debug, Serialize)]
pub struct CalendarReport {
    location: LocationReport,
    timezone: String,
    year: i32,
    seasons: Vec<SeasonReport>,
    sunrises: Vec<String>,
    sunsets: Vec<String>,
    orbit: Vec<OrbitReport>,
}

#[derive(Debug, Serialize)]
struct LocationReport {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
}

#[derive(Debug, Serialize)]
struct SeasonReport {
    index: u8,
    label: &'static str,
    utc: String,
}

#[derive(Debug, Serialize)]
struct OrbitReport {
    utc: String,
    radius_au: f64,
    angle_rad: f64,
}

impl CalendarReport {
    /// Builds the serializable document from assembled results.
    pub fn new(
        observer: &Observer,
        timezone: &str,
        year: i32,
        calendar: &SolarCalendar,
    ) -> Result<Self> {
        let seasons = calendar
            .seasons
            .iter()
            .map(season_report)
            .collect::<Result<Vec<_>>>()?;
        let sunrises = calendar
            .sunrises
            .iter()
            .map(|e| format_utc(e.instant))
            .collect::<Result<Vec<_>>>()?;
        let sunsets = calendar
            .sunsets
            .iter()
            .map(|e| format_utc(e.instant))
            .collect::<Result<Vec<_>>>()?;
        let orbit = calendar
            .orbit
            .iter()
            .map(|s| {
                Ok(OrbitReport {
                    utc: format_utc(s.instant)?,
                    radius_au: s.radius,
                    angle_rad: s.angle,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            location: LocationReport {
                latitude_deg: observer.latitude_deg(),
                longitude_deg: observer.longitude_deg(),
                elevation_m: observer.elevation_m(),
            },
            timezone: timezone.to_string(),
            year,
            seasons,
            sunrises,
            sunsets,
            orbit,
        })
    }
}

/// Serializes the report and writes it to `path`, or stdout when `None`.
pub fn write(report: &CalendarReport, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match path {
        Some(path) => std::fs::write(path, &json)
            .with_context(|| format!("failed to write report: {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn season_report(event: &Event) -> Result<SeasonReport> {
    let season = Season::from_code(event.new_value)
        .ok_or_else(|| anyhow!("unexpected season code {}", event.new_value))?;
    Ok(SeasonReport {
        index: event.new_value,
        label: season.label(),
        utc: format_utc(event.instant)?,
    })
}

/// ISO-8601 UTC with a space separator, to the second: `2019-03-20 21:58:30Z`.
fn format_utc(t: Instant) -> Result<String> {
    Ok(t.to_utc()?.format("%Y-%m-%d %H:%M:%SZ").to_string())
}
