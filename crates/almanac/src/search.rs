//! Discrete event detection over continuous time.
//!
//! The finder locates every instant at which a quantized function of
//! time changes value, in two phases: a coarse scan that brackets each
//! transition between adjacent samples, and a bisection pass that
//! shrinks each bracket to the requested tolerance. The same engine
//! serves sunrise/sunset (a boolean function sampled every few hours)
//! and season transitions (a four-valued function sampled daily).

use helios_ephem::EphemerisError;
use helios_time::{Duration, Instant, TimeWindow};

use crate::config::ScanConfig;
use crate::error::AlmanacError;
use crate::event::Event;

/// Finds every value transition of `f` within `window`, in time order.
///
/// `f` must be a pure function of the instant, defined everywhere in
/// the window, that changes value only finitely many times.
///
/// # Coarse step precondition
///
/// The scan only sees transitions that flip the value between adjacent
/// samples, so `config.coarse_step()` must be strictly smaller than the
/// minimum spacing between true transitions (well under half a day for
/// sunrise/sunset, well under a season's length for solstices). This is
/// the caller's responsibility and is not detectable internally: with a
/// step too coarse, an even number of transitions between two samples
/// cancels out and is missed entirely, while an odd number collapses
/// into a single reported event whose endpoint values still bracket the
/// whole group.
///
/// # Errors
///
/// Fails with [`AlmanacError::InvalidWindow`] if `window.start() >=
/// window.end()`, with [`AlmanacError::InvalidStep`] /
/// [`AlmanacError::InvalidTolerance`] for non-positive tunables, and
/// propagates any error from `f` unmodified, with no retry and no
/// partial result.
pub fn find_events<F>(
    f: F,
    window: TimeWindow,
    config: &ScanConfig,
) -> Result<Vec<Event>, AlmanacError>
where
    F: Fn(Instant) -> Result<u8, EphemerisError>,
{
    config.validate()?;
    if !window.is_ordered() {
        return Err(AlmanacError::InvalidWindow {
            start: window.start().jd(),
            end: window.end().jd(),
        });
    }

    let mut events = Vec::new();
    let mut t_prev = window.start();
    let mut v_prev = f(t_prev)?;

    while t_prev < window.end() {
        let stepped = t_prev + config.coarse_step();
        let t_next = if stepped < window.end() {
            stepped
        } else {
            window.end()
        };
        if t_next <= t_prev {
            break; // step below f64 resolution at this epoch; cannot advance
        }

        let v_next = f(t_next)?;
        if v_next != v_prev {
            events.push(refine(&f, t_prev, t_next, v_prev, v_next, config.tolerance())?);
        }
        t_prev = t_next;
        v_prev = v_next;
    }

    Ok(events)
}

/// Shrinks a bracket `[lo, hi]` with differing endpoint values down to
/// `tolerance` by bisection and reports the final midpoint.
///
/// Each midpoint evaluation discards the half whose endpoints agree in
/// value. The reported values are the coarse-scan pair, so even a
/// bracket that (against the precondition) hides several transitions
/// yields one event whose endpoints describe the net change.
fn refine<F>(
    f: &F,
    mut lo: Instant,
    mut hi: Instant,
    v_lo: u8,
    v_hi: u8,
    tolerance: Duration,
) -> Result<Event, AlmanacError>
where
    F: Fn(Instant) -> Result<u8, EphemerisError>,
{
    while hi - lo > tolerance {
        let mid = lo.midpoint(hi);
        if mid <= lo || hi <= mid {
            break; // bracket at f64 resolution
        }
        if f(mid)? == v_lo {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(Event {
        instant: lo.midpoint(hi),
        old_value: v_lo,
        new_value: v_hi,
    })
}
