//! Discrete astronomical event detection and daily position sampling.
//!
//! This crate turns a continuous position oracle (the
//! [`Ephemeris`](helios_ephem::Ephemeris) trait) into calendar facts:
//! the instants at which a quantized function of time changes value,
//! and a once-a-day polar track of a body across a civil year.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`search`] | [`find_events`]: coarse scan plus bisection refinement |
//! | [`functions`] | [`daylight`] and [`season`] event function constructors |
//! | [`sample`] | [`sample_year`] daily polar sampler |
//! | [`event`] | [`Event`] and [`Season`] value types |
//! | [`config`] | [`ScanConfig`] scan resolution parameters |
//! | [`error`] | [`AlmanacError`] |
//!
//! # Quick start
//!
//! Find the 2019 equinoxes and solstices for an observer on Earth:
//!
//! ```ignore
//! use helios_almanac::{ScanConfig, Season, find_events, season};
//! use helios_ephem::{Body, SolarEphemeris};
//! use helios_time::{Duration, Instant, TimeWindow};
//!
//! let eph = SolarEphemeris::new();
//! let window = TimeWindow::new(
//!     Instant::from_ymd_hms(2019, 1, 1, 0, 0, 0)?,
//!     Instant::from_ymd_hms(2020, 1, 1, 0, 0, 0)?,
//! );
//! let config = ScanConfig::new(Duration::from_days(1.0), Duration::from_minutes(1.0));
//! let events = find_events(season(&eph, Body::Earth, Body::Sun), window, &config)?;
//! for event in &events {
//!     let season = Season::from_code(event.new_value).unwrap();
//!     println!("{} at JD {}", season.label(), event.instant.jd());
//! }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod functions;
pub mod sample;
pub mod search;

pub use config::ScanConfig;
pub use error::AlmanacError;
pub use event::{Event, Season};
pub use functions::{SUN_HORIZON_DEG, daylight, season};
pub use sample::{PositionSample, sample_year};
pub use search::find_events;
