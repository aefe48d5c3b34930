use crate::error::{ConfigError, ConversionError, ValidationError};
use crate::param::core::{Param, ValueSpec};

/// Conversion and length behaviour for [`StringParam`].
#[derive(Debug)]
pub struct StrSpec {
    min_length: usize,
    max_length: Option<usize>,
}

impl ValueSpec for StrSpec {
    type Value = String;

    fn convert(&self, _tag: &str, raw: &str) -> Result<String, ConversionError> {
        Ok(raw.to_string())
    }

    fn validate(&self, tag: &str, value: &String) -> Result<(), ValidationError> {
        let length = value.len();

        if length < self.min_length {
            return Err(ValidationError::TooShort {
                tag: tag.to_string(),
                length,
                min: self.min_length,
            });
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::TooLong {
                    tag: tag.to_string(),
                    length,
                    max,
                });
            }
        }

        Ok(())
    }

    fn display(&self, value: &String) -> String {
        value.clone()
    }
}

/// A string command line parameter, optionally bounded in length.
/// Conversion is the identity; the raw token passes through.
pub type StringParam = Param<StrSpec>;

impl Param<StrSpec> {
    /// Create a string parameter accepting any length.
    pub fn new(tag: impl Into<String>, desc: impl Into<String>) -> Result<Self, ConfigError> {
        Param::build(
            StrSpec {
                min_length: 0,
                max_length: None,
            },
            tag,
            desc,
        )
    }

    /// Set the inclusive minimum acceptable length.
    pub fn min_length(mut self, min: usize) -> Result<Self, ConfigError> {
        if let Some(max) = self.spec().max_length {
            if min > max {
                return Err(ConfigError::InvalidBounds {
                    tag: self.tag().to_string(),
                });
            }
        }

        self.spec_mut().min_length = min;
        Ok(self)
    }

    /// Set the inclusive maximum acceptable length.
    pub fn max_length(mut self, max: usize) -> Result<Self, ConfigError> {
        if self.spec().min_length > max {
            return Err(ConfigError::InvalidBounds {
                tag: self.tag().to_string(),
            });
        }

        self.spec_mut().max_length = Some(max);
        Ok(self)
    }

    /// The configured `(min_length, max_length)` bounds.
    /// A `None` maximum means unbounded.
    pub fn length_bounds(&self) -> (usize, Option<usize>) {
        (self.spec().min_length, self.spec().max_length)
    }
}
