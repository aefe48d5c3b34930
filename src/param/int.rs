use crate::error::{ConfigError, ConversionError, ValidationError};
use crate::param::core::{Param, ValueSpec};

/// Conversion and range behaviour for [`IntParam`].
#[derive(Debug)]
pub struct IntSpec {
    min: i64,
    max: i64,
}

impl ValueSpec for IntSpec {
    type Value = i64;

    fn convert(&self, tag: &str, raw: &str) -> Result<i64, ConversionError> {
        raw.parse::<i64>().map_err(|_| ConversionError {
            tag: tag.to_string(),
            token: raw.to_string(),
            expected: format!("an integer between {} and {}", self.min, self.max),
        })
    }

    fn validate(&self, tag: &str, value: &i64) -> Result<(), ValidationError> {
        if *value < self.min || *value > self.max {
            return Err(ValidationError::OutOfRange {
                tag: tag.to_string(),
                value: *value,
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }

    fn display(&self, value: &i64) -> String {
        value.to_string()
    }
}

/// A signed integer command line parameter, optionally bounded to an
/// inclusive `[min, max]` range (defaults to the full `i64` range).
pub type IntParam = Param<IntSpec>;

impl Param<IntSpec> {
    /// Create an integer parameter accepting the full `i64` range.
    pub fn new(tag: impl Into<String>, desc: impl Into<String>) -> Result<Self, ConfigError> {
        Param::build(
            IntSpec {
                min: i64::MIN,
                max: i64::MAX,
            },
            tag,
            desc,
        )
    }

    /// Set the inclusive minimum acceptable value.
    pub fn min(mut self, min: i64) -> Result<Self, ConfigError> {
        if min > self.spec().max {
            return Err(ConfigError::InvalidBounds {
                tag: self.tag().to_string(),
            });
        }

        self.spec_mut().min = min;
        Ok(self)
    }

    /// Set the inclusive maximum acceptable value.
    pub fn max(mut self, max: i64) -> Result<Self, ConfigError> {
        if self.spec().min > max {
            return Err(ConfigError::InvalidBounds {
                tag: self.tag().to_string(),
            });
        }

        self.spec_mut().max = max;
        Ok(self)
    }

    /// The configured inclusive `(min, max)` bounds.
    pub fn bounds(&self) -> (i64, i64) {
        (self.spec().min, self.spec().max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn bounded(min: i64, max: i64) -> IntParam {
        IntParam::new("count", "the number of widgets")
            .unwrap()
            .min(min)
            .unwrap()
            .max(max)
            .unwrap()
    }

    #[rstest]
    #[case("5", 5)]
    #[case("-5", -5)]
    #[case("0", 0)]
    #[case("007", 7)]
    fn convert(#[case] raw: &str, #[case] expected: i64) {
        // Setup
        let mut param = IntParam::new("count", "the number of widgets").unwrap();

        // Execute
        param.add_str_value(raw).unwrap();

        // Verify
        assert_eq!(param.value(), Some(&expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    #[case("99999999999999999999999999")]
    fn convert_invalid(#[case] raw: &str) {
        // Setup
        let mut param = IntParam::new("count", "the number of widgets").unwrap();

        // Execute / Verify
        assert!(param.add_str_value(raw).is_err());
        assert!(!param.is_set());
    }

    #[rstest]
    #[case(1, 10, 1, true)]
    #[case(1, 10, 10, true)]
    #[case(1, 10, 5, true)]
    #[case(1, 10, 0, false)]
    #[case(1, 10, 11, false)]
    #[case(-10, -1, -5, true)]
    #[case(-10, -1, 0, false)]
    fn range(#[case] min: i64, #[case] max: i64, #[case] value: i64, #[case] expected_ok: bool) {
        // Setup
        let mut param = bounded(min, max);

        // Execute
        let result = param.add_value(value);

        // Verify
        if expected_ok {
            assert_eq!(result, Ok(()));
            assert_eq!(param.value(), Some(&value));
        } else {
            assert_matches!(
                result.unwrap_err(),
                ValidationError::OutOfRange { tag, value: v, min: lo, max: hi } => {
                    assert_eq!(tag, "count");
                    assert_eq!(v, value);
                    assert_eq!(lo, min);
                    assert_eq!(hi, max);
                }
            );
        }
    }

    #[test]
    fn range_randomized() {
        for _ in 0..100 {
            let min: i64 = thread_rng().gen_range(-1000..0);
            let max: i64 = thread_rng().gen_range(0..1000);
            let value: i64 = thread_rng().gen_range(-2000..2000);
            let mut param = bounded(min, max);

            let result = param.add_value(value);
            assert_eq!(result.is_ok(), min <= value && value <= max);
        }
    }

    #[test]
    fn invalid_bounds() {
        // Setup / Execute / Verify
        assert_matches!(
            IntParam::new("count", "the number of widgets")
                .unwrap()
                .min(10)
                .unwrap()
                .max(9),
            Err(ConfigError::InvalidBounds { .. })
        );
        assert_matches!(
            IntParam::new("count", "the number of widgets")
                .unwrap()
                .max(9)
                .unwrap()
                .min(10),
            Err(ConfigError::InvalidBounds { .. })
        );
    }

    #[test]
    fn range_with_acceptable_values() {
        // Setup: both the range and the acceptable set must hold.
        let mut param = bounded(1, 10).acceptable_values(vec![2, 4, 20]);

        // Execute / Verify
        param.add_value(4).unwrap();
        assert_matches!(
            bounded(1, 10).acceptable_values(vec![2, 4, 20]).add_value(3),
            Err(ValidationError::Unacceptable { .. })
        );
        assert_matches!(
            bounded(1, 10).acceptable_values(vec![2, 4, 20]).add_value(20),
            Err(ValidationError::OutOfRange { .. })
        );
        assert_eq!(param.value(), Some(&4));
    }

    #[test]
    fn bounds_accessor() {
        assert_eq!(bounded(1, 10).bounds(), (1, 10));
        assert_eq!(
            IntParam::new("count", "the number of widgets")
                .unwrap()
                .bounds(),
            (i64::MIN, i64::MAX)
        );
    }
}
