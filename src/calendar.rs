//! Calendar assembly: one year of seasons, sunrises, sunsets, and the
//! daily orbit track for a fixed observer.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use helios_almanac::{
    Event, PositionSample, SUN_HORIZON_DEG, ScanConfig, daylight, find_events, sample_year, season,
};
use helios_ephem::{Body, Ephemeris, Observer};
use helios_time::{Duration, TimeWindow, Tz, civil};

/// Season scan: daily samples refined to the minute.
const SEASON_SCAN: ScanConfig =
    ScanConfig::new(Duration::from_days(1.0), Duration::from_days(1.0 / 1_440.0));

/// Day/night scan: six-hour samples refined to the second.
const DAY_NIGHT_SCAN: ScanConfig =
    ScanConfig::new(Duration::from_days(0.25), Duration::from_days(1.0 / 86_400.0));

/// One assembled year of solar calendar facts.
pub struct SolarCalendar {
    /// Season transitions in time order (normally four).
    pub seasons: Vec<Event>,
    /// Sunrise instants in time order.
    pub sunrises: Vec<Event>,
    /// Sunset instants in time order.
    pub sunsets: Vec<Event>,
    /// One position sample per local calendar day.
    pub orbit: Vec<PositionSample>,
}

/// Computes the full calendar for `year`: the window runs from local
/// midnight of 1 January to local midnight of the following 1 January.
pub fn assemble<E: Ephemeris>(
    ephemeris: &E,
    observer: &Observer,
    tz: Tz,
    year: i32,
) -> Result<SolarCalendar> {
    let window = TimeWindow::new(
        civil::year_start(tz, year)?,
        civil::year_start(tz, year + 1)?,
    );

    let seasons = {
        let _phase = info_span!("seasons").entered();
        let events = find_events(
            season(ephemeris, observer.body(), Body::Sun),
            window,
            &SEASON_SCAN,
        )
        .context("season search failed")?;
        info!(n_events = events.len(), "season transitions found");
        events
    };

    let (sunrises, sunsets) = {
        let _phase = info_span!("day_night").entered();
        let events = find_events(
            daylight(ephemeris, observer, Body::Sun, SUN_HORIZON_DEG),
            window,
            &DAY_NIGHT_SCAN,
        )
        .context("sunrise/sunset search failed")?;
        // The function is boolean: rising edges are sunrises.
        let (sunrises, sunsets): (Vec<Event>, Vec<Event>) =
            events.into_iter().partition(|e| e.new_value == 1);
        info!(
            n_sunrises = sunrises.len(),
            n_sunsets = sunsets.len(),
            "day/night transitions found"
        );
        (sunrises, sunsets)
    };

    let orbit = {
        let _phase = info_span!("orbit").entered();
        let samples =
            sample_year(ephemeris, observer, Body::Sun, tz, year).context("orbit sampling failed")?;
        info!(n_samples = samples.len(), "orbit track sampled");
        samples
    };

    Ok(SolarCalendar {
        seasons,
        sunrises,
        sunsets,
        orbit,
    })
}
