use thiserror::Error;

use crate::constant::MINIMUM_DESC_LENGTH;

/// A malformed declaration.
/// Raised when a parameter is constructed, configured, or registered - never
/// during a parse.  Always a programmer bug, never recoverable by the parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The parameter tag is empty.
    #[error("parameter tag must be non-empty.")]
    EmptyTag,

    /// The parameter tag contains the reserved `=` character.
    #[error("parameter tag '{tag}' must not contain '='.")]
    IllegalTagCharacter {
        /// The offending tag.
        tag: String,
    },

    /// The parameter description is too short to be useful in a usage listing.
    #[error("description for parameter '{tag}' must be at least {MINIMUM_DESC_LENGTH} characters.")]
    DescriptionTooShort {
        /// The parameter's tag.
        tag: String,
    },

    /// A minimum bound was configured above the maximum bound (or vice versa).
    #[error("invalid bounds for parameter '{tag}': minimum must not exceed maximum.")]
    InvalidBounds {
        /// The parameter's tag.
        tag: String,
    },

    /// A default time component (hours/minutes/seconds/milliseconds) is out of range.
    #[error("invalid default {component} '{value}' for parameter '{tag}'.")]
    InvalidTimeComponent {
        /// The parameter's tag.
        tag: String,
        /// Which component was rejected.
        component: &'static str,
        /// The rejected component value.
        value: u32,
    },

    /// A parameter with the same tag is already registered on the command line.
    #[error("parameter '{tag}' is already registered.")]
    DuplicateTag {
        /// The repeated tag.
        tag: String,
    },

    /// A required positional argument was declared after an optional one.
    #[error("required argument '{tag}' may not follow an optional argument.")]
    RequiredAfterOptional {
        /// The required argument's tag.
        tag: String,
    },

    /// A multi-valued positional argument was declared in a non-terminal position.
    #[error("multi-valued argument '{tag}' must be the last argument declared.")]
    MultiValuedNotLast {
        /// The multi-valued argument's tag.
        tag: String,
    },
}

/// A raw token that cannot be converted into the parameter's value type.
/// Raised during parsing; carries the tag and an expected-format hint.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' for parameter '{tag}': expected {expected}.")]
pub struct ConversionError {
    /// The parameter's tag.
    pub tag: String,
    /// The raw token that failed to convert.
    pub token: String,
    /// A human-readable description of the expected format.
    pub expected: String,
}

/// A successfully converted value that violates one of the parameter's
/// constraints.  Raised during parsing (or programmatic value assignment).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a member of the parameter's acceptable-value set.
    #[error("'{value}' is not an acceptable value for parameter '{tag}' (acceptable: {acceptable}).")]
    Unacceptable {
        /// The parameter's tag.
        tag: String,
        /// The rejected value.
        value: String,
        /// The comma-joined acceptable values.
        acceptable: String,
    },

    /// A second value was added to a single-valued parameter.
    #[error("parameter '{tag}' specified more than once.")]
    SpecifiedMoreThanOnce {
        /// The parameter's tag.
        tag: String,
    },

    /// An integer value outside the configured `[min, max]` range.
    #[error("value {value} for parameter '{tag}' must be between {min} and {max}.")]
    OutOfRange {
        /// The parameter's tag.
        tag: String,
        /// The rejected value.
        value: i64,
        /// The inclusive minimum.
        min: i64,
        /// The inclusive maximum.
        max: i64,
    },

    /// A string value shorter than the configured minimum length.
    #[error("value for parameter '{tag}' must be at least {min} characters (got {length}).")]
    TooShort {
        /// The parameter's tag.
        tag: String,
        /// The rejected value's length.
        length: usize,
        /// The inclusive minimum length.
        min: usize,
    },

    /// A string value longer than the configured maximum length.
    #[error("value for parameter '{tag}' must be at most {max} characters (got {length}).")]
    TooLong {
        /// The parameter's tag.
        tag: String,
        /// The rejected value's length.
        length: usize,
        /// The inclusive maximum length.
        max: usize,
    },

    /// A path value that fails one of the requested filesystem attributes.
    #[error("file '{path}' for parameter '{tag}' {requirement}.")]
    FileAttribute {
        /// The parameter's tag.
        tag: String,
        /// The rejected path.
        path: String,
        /// The attribute-specific requirement, ex: "must be a directory".
        requirement: String,
    },
}

/// The single failure outcome of a parse call.
/// The parser fails fast on the first error encountered and never terminates
/// the process; exit behaviour belongs to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A dash-leading token whose tag is not registered.
    #[error("unrecognized option '{0}'.")]
    UnrecognizedOption(String),

    /// A value-taking option at the end of the token stream.
    #[error("missing value for option '{0}'.")]
    MissingOptionValue(String),

    /// A non-option token with no positional argument left to absorb it.
    #[error("unexpected argument '{0}'.")]
    ExtraArgument(String),

    /// A required parameter left unset after all tokens were consumed.
    #[error("missing required parameter '{0}'.")]
    MissingRequired(String),

    /// A token that could not be converted to the parameter's type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A converted value that violates the parameter's constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
