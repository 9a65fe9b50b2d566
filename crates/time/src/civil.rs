//! Civil-calendar conversion: IANA timezones to canonical instants.
//!
//! The sampler and assembler work in local civil days, so the bridge
//! from "midnight on this date in this timezone" to an [`Instant`] lives
//! here. Daylight-saving transitions make that bridge lossy in two
//! ways, both resolved deterministically:
//!
//! - a **gap** (clocks jump forward over midnight) resolves to the first
//!   valid wall-clock instant after the gap;
//! - a **fold** (clocks fall back over midnight, midnight happens twice)
//!   resolves to the earlier of the two instants.
//!
//! Both rules keep consecutive local midnights strictly increasing.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
pub use chrono_tz::Tz;

use crate::error::TimeError;
use crate::instant::Instant;

/// Number of days in a civil year (365 or 366).
pub fn days_in_year(year: i32) -> Result<u32, TimeError> {
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(TimeError::UnrepresentableDate {
        year,
        month: 12,
        day: 31,
    })?;
    Ok(dec31.ordinal())
}

/// The instant of local midnight on `date` in `tz`.
pub fn local_midnight(tz: Tz, date: NaiveDate) -> Result<Instant, TimeError> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(Instant::from_utc(dt.with_timezone(&Utc)));
    }
    // Midnight fell in a gap. Real offset changes are at most a few
    // hours, so scan forward minute by minute for the first wall-clock
    // minute that exists, then walk the preceding minute second by
    // second: historical offset changes are not whole minutes (Bangkok
    // left +6:42:04 in 1920). Anything still missing after three hours
    // is a date erased outright (date-line realignment).
    for minutes in 1..=180 {
        let shifted = midnight + chrono::Duration::minutes(minutes);
        if tz.from_local_datetime(&shifted).earliest().is_none() {
            continue;
        }
        for seconds in 1..=60 {
            let candidate = midnight
                + chrono::Duration::minutes(minutes - 1)
                + chrono::Duration::seconds(seconds);
            if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
                return Ok(Instant::from_utc(dt.with_timezone(&Utc)));
            }
        }
    }
    Err(TimeError::NonexistentLocalTime {
        local: midnight.to_string(),
        timezone: tz.name().to_string(),
    })
}

/// The instant of local midnight on 1 January of `year` in `tz`.
pub fn year_start(tz: Tz, year: i32) -> Result<Instant, TimeError> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TimeError::UnrepresentableDate {
        year,
        month: 1,
        day: 1,
    })?;
    local_midnight(tz, jan1)
}

/// Local midnight of every day of `year` in `tz`, in calendar order.
///
/// The result has exactly [`days_in_year`] entries and is strictly
/// increasing.
pub fn year_midnights(tz: Tz, year: i32) -> Result<Vec<Instant>, TimeError> {
    let n = days_in_year(year)? as usize;
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TimeError::UnrepresentableDate {
        year,
        month: 1,
        day: 1,
    })?;

    let mut midnights = Vec::with_capacity(n);
    let mut date = jan1;
    while date.year() == year {
        midnights.push(local_midnight(tz, date)?);
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    Ok(midnights)
}
