use crate::{error::ValidationError, types::Slot};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

const MINUTES_PER_DAY: u64 = 24 * 60;

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles");
    static ref TIME_PATTERN: Regex =
        Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles");
}

/// Turns a raw duration into whole minutes. Numbers and numeric strings are
/// accepted as long as they hold an integral value; everything else is not a
/// number.
pub fn coerce_duration(duration: &Value) -> Option<i64> {
    let number = match duration {
        Value::Number(number) => match number.as_i64() {
            Some(integer) => return Some(integer),
            None => number.as_f64()?,
        },
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    // float to int casts saturate, so oversized values still fail the midnight rule
    if number.is_finite() && number.fract() == 0.0 {
        Some(number as i64)
    } else {
        None
    }
}

pub fn validate(date: &str, time: &str, duration: &Value) -> Result<Slot, ValidationError> {
    if !DATE_PATTERN.is_match(date) || !TIME_PATTERN.is_match(time) {
        return Err(ValidationError::Invalid);
    }
    let duration = match coerce_duration(duration) {
        Some(minutes) if minutes > 0 => minutes as u64,
        _ => return Err(ValidationError::Invalid),
    };

    // The pattern guarantees two ASCII digits on each side of the colon.
    let hours: u64 = time[..2].parse().map_err(|_| ValidationError::Invalid)?;
    let minutes: u64 = time[3..].parse().map_err(|_| ValidationError::Invalid)?;

    let start_minutes = hours * 60 + minutes;
    let end_minutes = start_minutes.saturating_add(duration);
    if end_minutes > MINUTES_PER_DAY {
        return Err(ValidationError::CrossesMidnight);
    }

    Ok(Slot {
        date: date.to_string(),
        time: time.to_string(),
        duration: duration as u32,
        start_minutes: start_minutes as u32,
        end_minutes: end_minutes as u32,
    })
}
