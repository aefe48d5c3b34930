use chrono::{NaiveDate, NaiveDateTime};

use crate::constant::DEFAULT_DATE_FORMAT;
use crate::error::{ConfigError, ConversionError};
use crate::param::core::{Param, ValueSpec};
use crate::param::time::{check_component, combine};

/// Conversion behaviour for [`DateParam`].
pub struct DateSpec {
    format: String,
    hours: u32,
    minutes: u32,
    seconds: u32,
    millis: u32,
}

impl ValueSpec for DateSpec {
    type Value = NaiveDateTime;

    fn convert(&self, tag: &str, raw: &str) -> Result<NaiveDateTime, ConversionError> {
        let date = NaiveDate::parse_from_str(raw, &self.format).map_err(|_| ConversionError {
            tag: tag.to_string(),
            token: raw.to_string(),
            expected: format!("a date matching '{}'", self.format),
        })?;

        Ok(combine(
            date,
            self.hours,
            self.minutes,
            self.seconds,
            self.millis,
        ))
    }

    fn display(&self, value: &NaiveDateTime) -> String {
        value.format(&self.format).to_string()
    }
}

/// A date command line parameter.
///
/// Parses a date-only token using a configurable pattern (default `%m/%d/%y`)
/// and combines it with a configurable default time-of-day (midnight unless
/// changed) to produce a full timestamp.
pub type DateParam = Param<DateSpec>;

impl Param<DateSpec> {
    /// Create a date parameter using the `%m/%d/%y` pattern.
    pub fn new(tag: impl Into<String>, desc: impl Into<String>) -> Result<Self, ConfigError> {
        Param::build(
            DateSpec {
                format: DEFAULT_DATE_FORMAT.to_string(),
                hours: 0,
                minutes: 0,
                seconds: 0,
                millis: 0,
            },
            tag,
            desc,
        )
    }

    /// Set the `chrono` strftime pattern used to parse date tokens.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.spec_mut().format = format.into();
        self
    }

    /// Set the time-of-day combined with parsed dates
    /// (hours 0-23, minutes/seconds 0-59, milliseconds 0-999).
    pub fn set_default_time(
        &mut self,
        hours: u32,
        minutes: u32,
        seconds: u32,
        millis: u32,
    ) -> Result<(), ConfigError> {
        check_component(self.tag(), "hours", hours, 23)?;
        check_component(self.tag(), "minutes", minutes, 59)?;
        check_component(self.tag(), "seconds", seconds, 59)?;
        check_component(self.tag(), "milliseconds", millis, 999)?;

        let spec = self.spec_mut();
        spec.hours = hours;
        spec.minutes = minutes;
        spec.seconds = seconds;
        spec.millis = millis;
        Ok(())
    }

    /// The configured default time-of-day as `(hours, minutes, seconds, milliseconds)`.
    pub fn default_time(&self) -> (u32, u32, u32, u32) {
        let spec = self.spec();
        (spec.hours, spec.minutes, spec.seconds, spec.millis)
    }
}
