use crate::error::ParseError;
use crate::param::Parameter;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The POSIX-style token scanner.
///
/// Stateless; all parse state lives in the parameters themselves.  Options are
/// recognized as `-tag`, `--tag`, `-tag value`, `-tag=value` (tag lookup is
/// exact and case-sensitive); every other token is assigned positionally.
#[derive(Default)]
pub struct PosixParser;

fn option_body(token: &str) -> Option<&str> {
    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;

    if body.is_empty() {
        return None;
    }

    Some(body)
}

fn find<'r, 'a>(
    options: &'r mut [&'a mut dyn Parameter],
    tag: &str,
) -> Option<&'r mut &'a mut dyn Parameter> {
    options.iter_mut().find(|parameter| parameter.tag() == tag)
}

impl PosixParser {
    /// Scan the tokens left to right, assigning option values by tag and the
    /// remaining tokens to the arguments in declaration order.
    ///
    /// Fails fast on the first unrecognized option, missing option value,
    /// unabsorbed token, or conversion/validation error; already-assigned
    /// parameters keep whatever state processing had reached.
    pub fn parse(
        &self,
        tokens: &[&str],
        options: &mut [&mut dyn Parameter],
        arguments: &mut [&mut dyn Parameter],
    ) -> Result<(), ParseError> {
        let mut position = 0;
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index];
            index += 1;

            if let Some(body) = option_body(token) {
                let (tag, inline) = match body.split_once('=') {
                    Some((tag, value)) => (tag, Some(value)),
                    None => (body, None),
                };
                let parameter = find(options, tag)
                    .ok_or_else(|| ParseError::UnrecognizedOption(token.to_string()))?;

                if let Some(value) = inline {
                    #[cfg(feature = "tracing_debug")]
                    debug!("option '{tag}' takes inline value '{value}'");
                    parameter.add_str_value(value)?;
                } else if let Some(default) = parameter.no_value_default() {
                    #[cfg(feature = "tracing_debug")]
                    debug!("option '{tag}' assumes its no-value default '{default}'");
                    parameter.add_str_value(&default)?;
                } else {
                    // The next token is the value, even when it leads with a dash.
                    let value = *tokens
                        .get(index)
                        .ok_or_else(|| ParseError::MissingOptionValue(tag.to_string()))?;
                    index += 1;
                    #[cfg(feature = "tracing_debug")]
                    debug!("option '{tag}' takes value '{value}'");
                    parameter.add_str_value(value)?;
                }
            } else {
                let parameter = arguments
                    .get_mut(position)
                    .ok_or_else(|| ParseError::ExtraArgument(token.to_string()))?;
                #[cfg(feature = "tracing_debug")]
                debug!("argument '{tag}' takes value '{token}'", tag = parameter.tag());
                parameter.add_str_value(token)?;

                // The trailing multi-valued argument absorbs the remainder.
                if position < arguments.len() - 1 || !arguments[position].is_multi_valued() {
                    position += 1;
                }
            }
        }

        Ok(())
    }
}
