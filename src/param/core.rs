use crate::constant::MINIMUM_DESC_LENGTH;
use crate::error::{ConfigError, ConversionError, ParseError, ValidationError};

/// Type-specific conversion and validation behaviour for a [`Param`].
///
/// Each concrete parameter kind (boolean, integer, string, date, time,
/// date-time, file) supplies one implementation.  The shared storage and
/// add/set protocol live on [`Param`]; the seams that differ per type are
/// expressed here.
pub trait ValueSpec {
    /// The value type produced by conversion.
    /// `PartialEq` is the explicit equality predicate used for the
    /// acceptable-value check.
    type Value: PartialEq;

    /// Convert a raw token into the value type.
    fn convert(&self, tag: &str, raw: &str) -> Result<Self::Value, ConversionError>;

    /// Apply type-specific constraints beyond the acceptable-values check.
    fn validate(&self, _tag: &str, _value: &Self::Value) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Render a value for error and usage text.
    fn display(&self, value: &Self::Value) -> String;

    /// Whether a repeated add replaces the stored value instead of failing.
    /// Only the boolean parameter answers `true` (last-wins semantics).
    fn replace_on_add(&self) -> bool {
        false
    }

    /// The raw value an option assumes when specified without one.
    /// `Some` marks the parameter as boolean-like: the parser will not consume
    /// a following token for it.
    fn no_value_default(&self) -> Option<String> {
        None
    }
}

/// The object-safe surface a [`Param`] exposes to the parser and to usage
/// renderers, erasing the value type.
pub trait Parameter {
    /// The unique identifier for this parameter.
    fn tag(&self) -> &str;

    /// The human-readable description for usage display.
    fn desc(&self) -> &str;

    /// Whether at least one value has been assigned.
    fn is_set(&self) -> bool;

    /// Whether the parameter may be left unset after parsing.
    fn is_optional(&self) -> bool;

    /// Whether the parameter accumulates more than one value.
    fn is_multi_valued(&self) -> bool;

    /// Whether the parameter is omitted from usage display.
    fn is_hidden(&self) -> bool;

    /// Whether this parameter, once set, waives the required-parameter checks
    /// for every other parameter in the same parse call.
    fn ignores_required(&self) -> bool;

    /// The display-only value label for usage text.
    fn option_label(&self) -> &str;

    /// The raw value assumed when the option is specified without one, or
    /// `None` for options that must consume a value token.
    fn no_value_default(&self) -> Option<String>;

    /// Convert a raw token and add it as a value; either stage's error
    /// propagates.
    fn add_str_value(&mut self, raw: &str) -> Result<(), ParseError>;
}

/// A single named, typed, possibly-multi-valued, possibly-constrained command
/// line parameter.
///
/// The caller owns the `Param` for its entire lifetime: it is constructed
/// once, mutated through `add_value`/`set_value`/`set_values` during parsing,
/// and read afterwards via `value`/`values`/`is_set`.  Reuse across parse
/// calls without clearing is subject to the same multiplicity constraint as
/// repeated tokens within one parse.
pub struct Param<S: ValueSpec> {
    spec: S,
    tag: String,
    desc: String,
    values: Vec<S::Value>,
    acceptable: Vec<S::Value>,
    optional: bool,
    multi_valued: bool,
    hidden: bool,
    ignore_required: bool,
    option_label: String,
    set: bool,
}

impl<S: ValueSpec + std::fmt::Debug> std::fmt::Debug for Param<S>
where
    S::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Param")
            .field("spec", &self.spec)
            .field("tag", &self.tag)
            .field("desc", &self.desc)
            .field("values", &self.values)
            .field("acceptable", &self.acceptable)
            .field("optional", &self.optional)
            .field("multi_valued", &self.multi_valued)
            .field("hidden", &self.hidden)
            .field("ignore_required", &self.ignore_required)
            .field("option_label", &self.option_label)
            .field("set", &self.set)
            .finish()
    }
}

impl<S: ValueSpec> Param<S> {
    pub(crate) fn build(
        spec: S,
        tag: impl Into<String>,
        desc: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mut param = Self {
            spec,
            tag: String::default(),
            desc: String::default(),
            values: Vec::default(),
            acceptable: Vec::default(),
            optional: true,
            multi_valued: false,
            hidden: false,
            ignore_required: false,
            option_label: String::default(),
            set: false,
        };
        param.set_tag(tag)?;
        param.set_desc(desc)?;
        Ok(param)
    }

    /// Change the tag.
    /// The tag must be non-empty and must not contain `=`.
    pub fn set_tag(&mut self, tag: impl Into<String>) -> Result<(), ConfigError> {
        let tag = tag.into();

        if tag.is_empty() {
            return Err(ConfigError::EmptyTag);
        }

        if tag.contains('=') {
            return Err(ConfigError::IllegalTagCharacter { tag });
        }

        self.tag = tag;
        Ok(())
    }

    /// Change the description.
    /// The description must be at least 5 characters long.
    pub fn set_desc(&mut self, desc: impl Into<String>) -> Result<(), ConfigError> {
        let desc = desc.into();

        if desc.len() < MINIMUM_DESC_LENGTH {
            return Err(ConfigError::DescriptionTooShort {
                tag: self.tag.clone(),
            });
        }

        self.desc = desc;
        Ok(())
    }

    /// Mark the parameter as required: parsing fails if it is left unset.
    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    /// Allow the parameter to accumulate more than one value.
    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// Omit the parameter from usage display.
    /// Parsing and validation are unaffected.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// When this parameter is set, waive the required-parameter checks for
    /// every other parameter in the same parse call.
    /// Used for "help"-like escape-hatch options.
    pub fn ignore_required(mut self) -> Self {
        self.ignore_required = true;
        self
    }

    /// Set the display-only value label for usage text.
    pub fn option_label(mut self, label: impl Into<String>) -> Self {
        self.option_label = label.into();
        self
    }

    /// Restrict the parameter to an enumerated set of values.
    /// Both programmatic and string-sourced values are checked identically.
    pub fn acceptable_values(mut self, values: Vec<S::Value>) -> Self {
        self.acceptable = values;
        self
    }

    /// Convert a raw token and add it as a value; either stage's error
    /// propagates.
    pub fn add_str_value(&mut self, raw: &str) -> Result<(), ParseError> {
        let value = self.spec.convert(&self.tag, raw)?;
        self.add_value(value)?;
        Ok(())
    }

    /// Add a value, subject to the multiplicity, acceptable-value, and
    /// type-specific constraints.
    pub fn add_value(&mut self, value: S::Value) -> Result<(), ValidationError> {
        if self.spec.replace_on_add() {
            self.values.clear();
        } else if !self.multi_valued && !self.values.is_empty() {
            return Err(ValidationError::SpecifiedMoreThanOnce {
                tag: self.tag.clone(),
            });
        }

        self.check_acceptable(&value)?;
        self.spec.validate(&self.tag, &value)?;
        self.values.push(value);
        self.set = true;
        Ok(())
    }

    /// Replace any stored values with the single value given.
    ///
    /// The stored values are cleared before the re-add, so a failure leaves
    /// the parameter in an indeterminate state: callers must treat a failed
    /// `set_value` as requiring a fresh set.
    pub fn set_value(&mut self, value: S::Value) -> Result<(), ValidationError> {
        self.values.clear();
        self.add_value(value)
    }

    /// Replace any stored values with those given, re-applying every
    /// constraint in order.
    ///
    /// The stored values are cleared before the re-add loop, so a mid-way
    /// failure leaves the parameter holding however many values succeeded:
    /// callers must treat a failed `set_values` as requiring a fresh set.
    pub fn set_values(
        &mut self,
        values: impl IntoIterator<Item = S::Value>,
    ) -> Result<(), ValidationError> {
        self.values.clear();

        for value in values {
            self.add_value(value)?;
        }

        Ok(())
    }

    /// The first stored value, or `None` if unset.
    pub fn value(&self) -> Option<&S::Value> {
        self.values.first()
    }

    /// The full ordered value list (empty if unset).
    pub fn values(&self) -> &[S::Value] {
        &self.values
    }

    /// The unique identifier for this parameter.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The human-readable description for usage display.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Whether at least one value has been assigned.
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Whether the parameter may be left unset after parsing.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether the parameter accumulates more than one value.
    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }

    /// Whether the parameter is omitted from usage display.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether this parameter, once set, waives the required-parameter checks
    /// for every other parameter in the same parse call.
    pub fn ignores_required(&self) -> bool {
        self.ignore_required
    }

    /// The display-only value label for usage text.
    pub fn get_option_label(&self) -> &str {
        &self.option_label
    }

    /// The acceptable-value restriction (empty means unrestricted).
    pub fn get_acceptable_values(&self) -> &[S::Value] {
        &self.acceptable
    }

    pub(crate) fn spec(&self) -> &S {
        &self.spec
    }

    pub(crate) fn spec_mut(&mut self) -> &mut S {
        &mut self.spec
    }

    // The boolean parameter seeds a default value at construction without
    // counting as set.
    pub(crate) fn clear_set(&mut self) {
        self.set = false;
    }

    fn check_acceptable(&self, value: &S::Value) -> Result<(), ValidationError> {
        if !self.acceptable.is_empty() && !self.acceptable.contains(value) {
            return Err(ValidationError::Unacceptable {
                tag: self.tag.clone(),
                value: self.spec.display(value),
                acceptable: self
                    .acceptable
                    .iter()
                    .map(|v| self.spec.display(v))
                    .collect::<Vec<String>>()
                    .join(", "),
            });
        }

        Ok(())
    }
}

impl<S: ValueSpec> Parameter for Param<S> {
    fn tag(&self) -> &str {
        Param::tag(self)
    }

    fn desc(&self) -> &str {
        Param::desc(self)
    }

    fn is_set(&self) -> bool {
        Param::is_set(self)
    }

    fn is_optional(&self) -> bool {
        Param::is_optional(self)
    }

    fn is_multi_valued(&self) -> bool {
        Param::is_multi_valued(self)
    }

    fn is_hidden(&self) -> bool {
        Param::is_hidden(self)
    }

    fn ignores_required(&self) -> bool {
        Param::ignores_required(self)
    }

    fn option_label(&self) -> &str {
        Param::get_option_label(self)
    }

    fn no_value_default(&self) -> Option<String> {
        self.spec.no_value_default()
    }

    fn add_str_value(&mut self, raw: &str) -> Result<(), ParseError> {
        Param::add_str_value(self, raw)
    }
}
