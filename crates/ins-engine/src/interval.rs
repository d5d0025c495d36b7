//! Timeline interval parsing.
//!
//! Accepted forms, optionally prefixed with `-`:
//!
//! ```text
//! d                      days
//! [d.]hh:mm[:ss[.fffffff]]
//! d:hh:mm:ss[.fffffff]
//! ```
//!
//! Hours must be below 24, minutes and seconds below 60, and the fraction has
//! at most seven digits (100 ns ticks). `00.10:00:00` is ten hours;
//! `00.24:00:00` is rejected.

use chrono::{DateTime, TimeDelta, Utc};

/// Parse an interval string. Negative and zero results are returned as-is.
#[must_use]
pub fn parse_interval(text: &str) -> Option<TimeDelta> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return None;
    }

    let magnitude = if body.contains(':') {
        parse_clock(body)?
    } else {
        TimeDelta::try_days(parse_number(body)?)?
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// The interval a timeline is split by.
///
/// A parseable, positive request wins; otherwise the window length when the
/// window is non-empty, else one minute.
#[must_use]
pub fn effective_interval(
    requested: Option<&str>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> TimeDelta {
    requested
        .and_then(parse_interval)
        .filter(|interval| *interval > TimeDelta::zero())
        .unwrap_or_else(|| {
            if end > start {
                end - start
            } else {
                TimeDelta::minutes(1)
            }
        })
}

fn parse_clock(body: &str) -> Option<TimeDelta> {
    let parts: Vec<&str> = body.split(':').collect();
    let (days, hours, minutes, seconds) = match parts.as_slice() {
        [head, minutes] => {
            let (days, hours) = split_days(head)?;
            (days, hours, *minutes, None)
        }
        [head, minutes, seconds] => {
            let (days, hours) = split_days(head)?;
            (days, hours, *minutes, Some(*seconds))
        }
        [days, hours, minutes, seconds] => (parse_number(days)?, *hours, *minutes, Some(*seconds)),
        _ => return None,
    };

    let hours = bounded(hours, 24)?;
    let minutes = bounded(minutes, 60)?;
    let (seconds, nanos) = match seconds {
        Some(text) => parse_seconds(text)?,
        None => (0, 0),
    };

    TimeDelta::try_days(days)?
        .checked_add(&TimeDelta::try_hours(hours)?)?
        .checked_add(&TimeDelta::try_minutes(minutes)?)?
        .checked_add(&TimeDelta::try_seconds(seconds)?)?
        .checked_add(&TimeDelta::nanoseconds(nanos))
}

/// `d.hh` or `hh`.
fn split_days(head: &str) -> Option<(i64, &str)> {
    match head.split_once('.') {
        Some((days, hours)) => Some((parse_number(days)?, hours)),
        None => Some((0, head)),
    }
}

/// `ss` or `ss.fffffff`, returning whole seconds and nanoseconds.
fn parse_seconds(text: &str) -> Option<(i64, i64)> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let seconds = bounded(whole, 60)?;
    let nanos = match fraction {
        Some(digits) => {
            if digits.is_empty() || digits.len() > 7 {
                return None;
            }
            let ticks = parse_number(digits)?;
            let scale = 10_i64.pow(7 - u32::try_from(digits.len()).ok()?);
            ticks * scale * 100
        }
        None => 0,
    };
    Some((seconds, nanos))
}

fn bounded(text: &str, limit: i64) -> Option<i64> {
    parse_number(text).filter(|value| *value < limit)
}

fn parse_number(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
