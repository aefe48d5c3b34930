use chrono::{NaiveDate, NaiveDateTime};

use crate::constant::{DEFAULT_DATE_FORMAT, TIME_FORMAT_DISPLAY};
use crate::error::{ConfigError, ConversionError};
use crate::param::core::{Param, ValueSpec};
use crate::param::time::{check_component, combine, expand_time};

/// Conversion behaviour for [`DateTimeParam`].
pub struct DateTimeSpec {
    format: String,
    fill_seconds: u32,
    fill_millis: u32,
}

impl DateTimeSpec {
    fn conversion_error(&self, tag: &str, raw: &str) -> ConversionError {
        ConversionError {
            tag: tag.to_string(),
            token: raw.to_string(),
            expected: format!("a date-time matching '{} {TIME_FORMAT_DISPLAY}'", self.format),
        }
    }
}

impl ValueSpec for DateTimeSpec {
    type Value = NaiveDateTime;

    fn convert(&self, tag: &str, raw: &str) -> Result<NaiveDateTime, ConversionError> {
        let (date_part, time_part) = raw
            .split_once(' ')
            .ok_or_else(|| self.conversion_error(tag, raw))?;

        let date = NaiveDate::parse_from_str(date_part, &self.format)
            .map_err(|_| self.conversion_error(tag, raw))?;
        let (hours, minutes, seconds, millis) =
            expand_time(time_part, self.fill_seconds, self.fill_millis)
                .ok_or_else(|| self.conversion_error(tag, raw))?;

        Ok(combine(date, hours, minutes, seconds, millis))
    }

    fn display(&self, value: &NaiveDateTime) -> String {
        value.format("%m/%d/%y %H:%M:%S%.3f").to_string()
    }
}

/// A joint date-and-time command line parameter, format
/// `<date> HH:mm[:ss[:SSS]]` with a configurable date pattern
/// (default `%m/%d/%y`).  Missing seconds/milliseconds are filled from
/// configurable defaults.
pub type DateTimeParam = Param<DateTimeSpec>;

impl Param<DateTimeSpec> {
    /// Create a date-time parameter using the `%m/%d/%y` date pattern.
    pub fn new(tag: impl Into<String>, desc: impl Into<String>) -> Result<Self, ConfigError> {
        Param::build(
            DateTimeSpec {
                format: DEFAULT_DATE_FORMAT.to_string(),
                fill_seconds: 0,
                fill_millis: 0,
            },
            tag,
            desc,
        )
    }

    /// Set the `chrono` strftime pattern used for the date portion.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.spec_mut().format = format.into();
        self
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
