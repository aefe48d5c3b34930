use crate::constant::{FALSE_TOKENS, TRUE_TOKENS};
use crate::error::{ConfigError, ConversionError};
use crate::param::core::{Param, ValueSpec};

/// Conversion behaviour for [`BooleanParam`].
///
/// Recognizes the exact tokens `true`/`yes` and `false`/`no` (case-sensitive);
/// anything else fails conversion.
pub struct BoolSpec;

impl ValueSpec for BoolSpec {
    type Value = bool;

    fn convert(&self, tag: &str, raw: &str) -> Result<bool, ConversionError> {
        if TRUE_TOKENS.contains(&raw) {
            Ok(true)
        } else if FALSE_TOKENS.contains(&raw) {
            Ok(false)
        } else {
            Err(ConversionError {
                tag: tag.to_string(),
                token: raw.to_string(),
                expected: format!(
                    "one of: {}",
                    TRUE_TOKENS
                        .iter()
                        .chain(FALSE_TOKENS.iter())
                        .copied()
                        .collect::<Vec<&str>>()
                        .join(", ")
                ),
            })
        }
    }

    fn display(&self, value: &bool) -> String {
        value.to_string()
    }

    // Last-wins: a repeated boolean replaces rather than rejects.
    fn replace_on_add(&self) -> bool {
        true
    }

    // Presence alone implies true; the parser consumes no value token.
    fn no_value_default(&self) -> Option<String> {
        Some(true.to_string())
    }
}

/// A boolean command line parameter.
///
/// Defaults to `false` when not set by the user.  As an option, its presence
/// alone implies `true` unless an explicit `=value` overrides it.  Always
/// single-valued: a repeated add replaces the stored value (last-wins).
pub type BooleanParam = Param<BoolSpec>;

impl Param<BoolSpec> {
    /// Create a boolean parameter.
    pub fn new(tag: impl Into<String>, desc: impl Into<String>) -> Result<Self, ConfigError> {
        let mut param =
            Param::build(BoolSpec, tag, desc)?.acceptable_values(vec![true, false]);

        // Seed the false default without counting as set.
        match param.set_value(false) {
            Ok(()) => {}
            Err(_) => unreachable!("internal error - the boolean default must validate"),
        }
        param.clear_set();

        Ok(param)
    }

    /// The parameter value as a plain boolean; `false` when unset.
    pub fn is_true(&self) -> bool {
        self.is_set() && *self.value().unwrap_or(&false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::param::core::Parameter;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn new_defaults() {
        // Setup / Execute
        let param = BooleanParam::new("delete", "delete the original file").unwrap();

        // Verify: seeded false, but not set.
        assert!(!param.is_set());
        assert!(!param.is_true());
        assert_eq!(param.value(), Some(&false));
        assert_eq!(param.get_acceptable_values(), &[true, false]);
    }

    #[rstest]
    #[case("true", true)]
    #[case("yes", true)]
    #[case("false", false)]
    #[case("no", false)]
    fn convert(#[case] raw: &str, #[case] expected: bool) {
        // Setup
        let mut param = BooleanParam::new("delete", "delete the original file").unwrap();

        // Execute
        param.add_str_value(raw).unwrap();

        // Verify
        assert!(param.is_set());
        assert_eq!(param.is_true(), expected);
    }

    #[rstest]
    #[case("TRUE")]
    #[case("Yes")]
    #[case("1")]
    #[case("")]
    fn convert_unrecognized(#[case] raw: &str) {
        // Setup
        let mut param = BooleanParam::new("delete", "delete the original file").unwrap();

        // Execute
        let error = param.add_str_value(raw).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "'delete'");
        assert!(!param.is_set());
    }

    #[test]
    fn add_value_replaces() {
        // Setup
        let mut param = BooleanParam::new("delete", "delete the original file").unwrap();

        // Execute
        param.add_value(true).unwrap();
        param.add_value(false).unwrap();

        // Verify: last-wins, never both stored.
        assert_eq!(param.values(), &[false]);
        assert!(!param.is_true());
    }

    #[test]
    fn no_value_default() {
        // Setup
        let param = BooleanParam::new("delete", "delete the original file").unwrap();

        // Execute / Verify
        assert_eq!(Parameter::no_value_default(&param), Some("true".to_string()));
    }

    #[test]
    fn programmatic_values_checked() {
        // Acceptable values apply to programmatic adds just as to tokens.
        let mut param = BooleanParam::new("delete", "delete the original file")
            .unwrap()
            .acceptable_values(vec![true]);

        assert_matches!(
            param.add_value(false),
            Err(ValidationError::Unacceptable { .. })
        );
    }
}
