//! Canonical timescale for the helios workspace.
//!
//! Every computation downstream runs on one time axis: UTC-based Julian
//! dates wrapped in [`Instant`], with [`Duration`] for elapsed time and
//! [`TimeWindow`] for half-open search intervals. Around that core this
//! crate provides the conversions the rest of the workspace needs:
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`civil`] | IANA-timezone local midnights, civil year lengths |
//! | [`scale`] | epoch constants, ΔT, Terrestrial Time |
//! | [`sidereal`] | Earth rotation angle, Greenwich sidereal time |
//!
//! # Quick start
//!
//! ```ignore
//! use helios_time::{Duration, Instant, TimeWindow, civil};
//!
//! let tz: civil::Tz = "America/New_York".parse()?;
//! let start = civil::year_start(tz, 2019)?;
//! let end = civil::year_start(tz, 2020)?;
//! let window = TimeWindow::new(start, end);
//! assert!(window.span() > Duration::from_days(364.0));
//! ```

pub mod civil;
mod duration;
mod error;
mod instant;
pub mod scale;
pub mod sidereal;
mod window;

pub use civil::Tz;
pub use duration::Duration;
pub use error::TimeError;
pub use instant::Instant;
pub use window::TimeWindow;
