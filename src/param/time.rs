use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::constant::TIME_FORMAT_DISPLAY;
use crate::error::{ConfigError, ConversionError};
use crate::param::core::{Param, ValueSpec};

pub(crate) fn check_component(
    tag: &str,
    component: &'static str,
    value: u32,
    max: u32,
) -> Result<(), ConfigError> {
    if value > max {
        return Err(ConfigError::InvalidTimeComponent {
            tag: tag.to_string(),
            component,
            value,
        });
    }

    Ok(())
}

fn numeric_field(part: &str, width: usize, max: u32) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: u32 = part.parse().ok()?;
    (value <= max).then_some(value)
}

/// Expand `HH:mm[:ss[:SSS]]` into its four components, filling missing
/// seconds/milliseconds from the given defaults.  Every field is re-validated
/// digit-range after defaulting.
pub(crate) fn expand_time(
    raw: &str,
    fill_seconds: u32,
    fill_millis: u32,
) -> Option<(u32, u32, u32, u32)> {
    let parts: Vec<&str> = raw.split(':').collect();

    if parts.len() < 2 || parts.len() > 4 {
        return None;
    }

    let hours = numeric_field(parts[0], 2, 23)?;
    let minutes = numeric_field(parts[1], 2, 59)?;
    let seconds = match parts.get(2) {
        Some(part) => numeric_field(part, 2, 59)?,
        None => fill_seconds,
    };
    let millis = match parts.get(3) {
        Some(part) => numeric_field(part, 3, 999)?,
        None => fill_millis,
    };

    Some((hours, minutes, seconds, millis))
}

pub(crate) fn combine(
    date: NaiveDate,
    hours: u32,
    minutes: u32,
    seconds: u32,
    millis: u32,
) -> NaiveDateTime {
    match date.and_hms_milli_opt(hours, minutes, seconds, millis) {
        Some(instant) => instant,
        None => unreachable!("internal error - validated time components must combine"),
    }
}

/// Conversion behaviour for [`TimeParam`].
pub struct TimeSpec {
    fill_seconds: u32,
    fill_millis: u32,
    date_portion: NaiveDate,
}

impl ValueSpec for TimeSpec {
    type Value = NaiveDateTime;

    fn convert(&self, tag: &str, raw: &str) -> Result<NaiveDateTime, ConversionError> {
        let (hours, minutes, seconds, millis) =
            expand_time(raw, self.fill_seconds, self.fill_millis).ok_or_else(|| {
                ConversionError {
                    tag: tag.to_string(),
                    token: raw.to_string(),
                    expected: format!("a time matching '{TIME_FORMAT_DISPLAY}'"),
                }
            })?;

        Ok(combine(self.date_portion, hours, minutes, seconds, millis))
    }

    fn display(&self, value: &NaiveDateTime) -> String {
        value.format("%H:%M:%S%.3f").to_string()
    }
}

/// A time-of-day command line parameter, format `HH:mm[:ss[:SSS]]`.
///
/// Missing seconds/milliseconds are filled from configurable defaults
/// (0 unless changed).  The converted value is a full timestamp: the time of
/// day combined with a configurable date portion, which defaults to the
/// current date.  The date portion is mutable state separate from any parsed
/// values; changing it affects only subsequent conversions.
pub type TimeParam = Param<TimeSpec>;

impl Param<TimeSpec> {
    /// Create a time parameter with a date portion of the current date.
    pub fn new(tag: impl Into<String>, desc: impl Into<String>) -> Result<Self, ConfigError> {
        Param::build(
            TimeSpec {
                fill_seconds: 0,
                fill_millis: 0,
                date_portion: Local::now().date_naive(),
            },
            tag,
            desc,
        )
    }

    /// Set the date portion combined with parsed times.
    pub fn set_date_portion(&mut self, date: NaiveDate) {
        self.spec_mut().date_portion = date;
    }

    /// The date portion combined with parsed times.
    pub fn date_portion(&self) -> NaiveDate {
        self.spec().date_portion
    }

    /// Set the seconds default used when the user omits seconds (0-59).
    pub fn set_default_seconds(&mut self, seconds: u32) -> Result<(), ConfigError> {
        check_component(self.tag(), "seconds", seconds, 59)?;
        self.spec_mut().fill_seconds = seconds;
        Ok(())
    }

    /// Set the milliseconds default used when the user omits milliseconds (0-999).
    pub fn set_default_millis(&mut self, millis: u32) -> Result<(), ConfigError> {
        check_component(self.tag(), "milliseconds", millis, 999)?;
        self.spec_mut().fill_millis = millis;
        Ok(())
    }
}
