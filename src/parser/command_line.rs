use std::env;

use crate::error::{ConfigError, ParseError};
use crate::param::Parameter;
use crate::parser::posix::PosixParser;
use crate::parser::usage;

/// The declared command line: a registry of option parameters (by tag) and an
/// ordered list of positional-argument parameters.
///
/// Parameters are registered by exclusive borrow, so the caller keeps
/// ownership and reads the values back out after dropping the `CommandLine`:
///
/// ```
/// use argot::{CommandLine, StringParam};
///
/// let mut target = StringParam::new("target", "the target file").unwrap();
///
/// let mut command_line = CommandLine::new("copier");
/// command_line.add_argument(&mut target).unwrap();
/// command_line.parse_tokens(&["out.txt"]).unwrap();
/// drop(command_line);
///
/// assert_eq!(target.value().map(String::as_str), Some("out.txt"));
/// ```
pub struct CommandLine<'a> {
    program: String,
    about: Option<String>,
    options: Vec<&'a mut dyn Parameter>,
    arguments: Vec<&'a mut dyn Parameter>,
}

impl<'a> CommandLine<'a> {
    /// Create an empty command line for the named program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            options: Vec::default(),
            arguments: Vec::default(),
        }
    }

    /// Set the one-line program summary shown in usage text.
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Register an option parameter.
    /// The tag must be unique across all registered options.
    pub fn add_option(&mut self, parameter: &'a mut dyn Parameter) -> Result<(), ConfigError> {
        if self
            .options
            .iter()
            .any(|existing| existing.tag() == parameter.tag())
        {
            return Err(ConfigError::DuplicateTag {
                tag: parameter.tag().to_string(),
            });
        }

        self.options.push(parameter);
        Ok(())
    }

    /// Register the next positional-argument parameter.
    ///
    /// A required argument may not follow an optional one, and a multi-valued
    /// argument may only be the last one declared; both are checked here, at
    /// registration, never at parse time.
    pub fn add_argument(&mut self, parameter: &'a mut dyn Parameter) -> Result<(), ConfigError> {
        if let Some(multi_valued) = self
            .arguments
            .iter()
            .find(|existing| existing.is_multi_valued())
        {
            return Err(ConfigError::MultiValuedNotLast {
                tag: multi_valued.tag().to_string(),
            });
        }

        if !parameter.is_optional()
            && self.arguments.iter().any(|existing| existing.is_optional())
        {
            return Err(ConfigError::RequiredAfterOptional {
                tag: parameter.tag().to_string(),
            });
        }

        self.arguments.push(parameter);
        Ok(())
    }

    /// Parse the process arguments (`std::env::args`, program name skipped).
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let tokens: Vec<String> = env::args().skip(1).collect();
        let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
        self.parse_tokens(&tokens)
    }

    /// Parse the given tokens, then check that every required parameter was
    /// set.
    ///
    /// The required-parameter checks are waived entirely when any registered
    /// parameter has `ignore_required` and was set by this (or an earlier)
    /// parse.  On failure the parameters keep whatever partial state
    /// processing had reached; there is no rollback.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        PosixParser.parse(tokens, &mut self.options, &mut self.arguments)?;

        if self
            .parameters()
            .any(|parameter| parameter.ignores_required() && parameter.is_set())
        {
            return Ok(());
        }

        for parameter in self.parameters() {
            if !parameter.is_optional() && !parameter.is_set() {
                return Err(ParseError::MissingRequired(parameter.tag().to_string()));
            }
        }

        Ok(())
    }

    /// Render the usage text for the registered parameters.
    /// Hidden parameters are omitted.
    pub fn usage(&self) -> String {
        usage::render(
            &self.program,
            self.about.as_deref(),
            &self.options,
            &self.arguments,
        )
    }

    fn parameters(&self) -> impl Iterator<Item = &dyn Parameter> + use<'_, 'a> {
        self.options
            .iter()
            .chain(self.arguments.iter())
            .map(|parameter| &**parameter)
    }
}
