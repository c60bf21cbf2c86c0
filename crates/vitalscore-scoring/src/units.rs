//! Unit normalisation for questionnaire answers.

use jiff::SignedDuration;
use jiff::civil::Time;
use vitalscore_core::models::questionnaire::ActivityAmount;

/// Weekly minutes of an activity.
///
/// A plain number is taken as already being weekly minutes; a
/// `{days, minutes}` pair is `days * minutes`. Anything else counts as 0.
pub fn activity_minutes(amount: &ActivityAmount) -> f64 {
    let minutes = match *amount {
        ActivityAmount::Plain(value) => value,
        ActivityAmount::Session { days, minutes } => days * minutes,
        ActivityAmount::Missing => 0.0,
    };
    if minutes.is_finite() { minutes } else { 0.0 }
}

/// Parses an `HH:MM` (or `H:MM`, or `HH:MM:SS`) clock string.
pub fn clock_time(clock: &str) -> Option<Time> {
    let clock = clock.trim();
    // Single-digit hours ("6:05") are padded for the ISO 8601 parser.
    if clock.find(':') == Some(1) {
        format!("0{clock}").parse().ok()
    } else {
        clock.parse().ok()
    }
}

/// Minutes past midnight for a clock string.
pub fn clock_minutes(clock: &str) -> Option<u32> {
    let time = clock_time(clock)?;
    Some(u32::from(time.hour().unsigned_abs()) * 60 + u32::from(time.minute().unsigned_abs()))
}

/// Hours slept between a bedtime and a wake time.
///
/// A wake time earlier than the bedtime is on the next day. Unparseable
/// times give 0.
pub fn sleep_hours(bedtime: &str, wake_time: &str) -> f64 {
    let (Some(bed), Some(wake)) = (clock_time(bedtime), clock_time(wake_time)) else {
        return 0.0;
    };
    let mut slept = bed.duration_until(wake);
    if slept.is_negative() {
        slept += SignedDuration::from_hours(24);
    }
    slept.as_secs_f64() / 3600.0
}
