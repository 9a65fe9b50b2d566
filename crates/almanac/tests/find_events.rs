//! Integration tests: the event finder on synthetic step functions.

use helios_almanac::{AlmanacError, ScanConfig, find_events};
use helios_ephem::EphemerisError;
use helios_time::{Duration, Instant, TimeWindow};

fn t(jd: f64) -> Instant {
    Instant::from_jd(jd)
}

fn config(step_days: f64, tol_days: f64) -> ScanConfig {
    ScanConfig::new(Duration::from_days(step_days), Duration::from_days(tol_days))
}

/// A function that never changes value yields no events.
#[test]
fn constant_function_yields_no_events() {
    let f = |_: Instant| -> Result<u8, EphemerisError> { Ok(7) };
    let window = TimeWindow::new(t(100.0), t(110.0));
    let events = find_events(f, window, &config(0.5, 1e-6)).unwrap();
    assert!(events.is_empty());
}

/// A single step is located to within the requested tolerance.
#[test]
fn single_step_is_refined_to_tolerance() {
    let f = |x: Instant| Ok(u8::from(x.jd() >= 100.25));
    let window = TimeWindow::new(t(100.0), t(101.0));
    let events = find_events(f, window, &config(0.1, 1e-6)).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!((events[0].old_value, events[0].new_value), (0, 1));
    assert!((events[0].instant.jd() - 100.25).abs() < 1e-6);
}

/// Transitions through successive values are reported in time order
/// with chained endpoint values.
#[test]
fn chained_transitions_keep_time_order() {
    let f = |x: Instant| {
        Ok(if x.jd() < 10.23 {
            0
        } else if x.jd() < 10.67 {
            1
        } else {
            2
        })
    };
    let window = TimeWindow::new(t(10.0), t(11.0));
    let events = find_events(f, window, &config(0.1, 1e-7)).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!((events[0].old_value, events[0].new_value), (0, 1));
    assert_eq!((events[1].old_value, events[1].new_value), (1, 2));
    assert!(events[0].instant < events[1].instant);
    assert!((events[0].instant.jd() - 10.23).abs() < 1e-7);
    assert!((events[1].instant.jd() - 10.67).abs() < 1e-7);
}

/// A pulse wider than the coarse step produces a rise and a fall with
/// mirrored values.
#[test]
fn pulse_produces_rise_and_fall() {
    let f = |x: Instant| Ok(u8::from((10.31..10.52).contains(&x.jd())));
    let window = TimeWindow::new(t(10.0), t(11.0));
    let events = find_events(f, window, &config(0.1, 1e-7)).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!((events[0].old_value, events[0].new_value), (0, 1));
    assert_eq!((events[1].old_value, events[1].new_value), (1, 0));
    assert!((events[0].instant.jd() - 10.31).abs() < 1e-7);
    assert!((events[1].instant.jd() - 10.52).abs() < 1e-7);
}

/// Degenerate and reversed windows are rejected before any evaluation.
#[test]
fn empty_and_reversed_windows_are_rejected() {
    let f = |_: Instant| -> Result<u8, EphemerisError> { Ok(0) };
    let tunables = config(0.5, 1e-6);

    let err = find_events(f, TimeWindow::new(t(100.0), t(100.0)), &tunables).unwrap_err();
    assert!(matches!(err, AlmanacError::InvalidWindow { .. }));

    let err = find_events(f, TimeWindow::new(t(101.0), t(100.0)), &tunables).unwrap_err();
    match err {
        AlmanacError::InvalidWindow { start, end } => {
            assert_eq!(start, 101.0);
            assert_eq!(end, 100.0);
        }
        other => panic!("expected InvalidWindow, got {other:?}"),
    }
}

/// Non-positive scan tunables are rejected.
#[test]
fn invalid_tunables_are_rejected() {
    let f = |_: Instant| -> Result<u8, EphemerisError> { Ok(0) };
    let window = TimeWindow::new(t(100.0), t(110.0));

    let err = find_events(f, window, &config(0.0, 1e-6)).unwrap_err();
    assert!(matches!(err, AlmanacError::InvalidStep { days } if days == 0.0));

    let err = find_events(f, window, &config(0.5, -1.0)).unwrap_err();
    assert!(matches!(err, AlmanacError::InvalidTolerance { days } if days == -1.0));
}

/// Oracle failures abort the search and pass through transparently.
#[test]
fn oracle_errors_propagate_unmodified() {
    let f = |x: Instant| {
        if x.jd() >= 105.0 {
            Err(EphemerisError::OutOfRange {
                jd: x.jd(),
                start: 100.0,
                end: 105.0,
            })
        } else {
            Ok(0)
        }
    };
    let window = TimeWindow::new(t(100.0), t(110.0));
    let err = find_events(f, window, &config(1.0, 1e-6)).unwrap_err();
    assert!(matches!(
        err,
        AlmanacError::Ephemeris(EphemerisError::OutOfRange { .. })
    ));
}

/// A value change exactly at the window start has no prior state inside
/// the window and is not an event.
#[test]
fn change_at_window_start_is_not_reported() {
    let f = |x: Instant| Ok(u8::from(x.jd() >= 100.0));
    let window = TimeWindow::new(t(100.0), t(101.0));
    let events = find_events(f, window, &config(0.25, 1e-6)).unwrap();
    assert!(events.is_empty());
}

/// Identical inputs give identical outputs, bit for bit.
#[test]
fn search_is_deterministic() {
    let f = |x: Instant| Ok(u8::from(x.jd() >= 100.319));
    let window = TimeWindow::new(t(100.0), t(101.0));
    let tunables = config(0.1, 1e-8);
    let first = find_events(f, window, &tunables).unwrap();
    let second = find_events(f, window, &tunables).unwrap();
    assert_eq!(first, second);
}
