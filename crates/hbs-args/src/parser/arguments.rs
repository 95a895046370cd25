//! The argument parsing loop and its configuration.

use bon::Builder;
use tracing::{debug, trace};

use super::error::ParseError;
use super::grammar::{RawArgument, argument, is_space, normalize_name};
use crate::types::{ArgumentValue, Arguments, NamedArguments};

/// How a name given more than once is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateNames {
    /// The later value replaces the earlier one, keeping the first position.
    #[default]
    Overwrite,
    /// A repeated name fails the parse.
    Reject,
}

/// Configurable parser for helper argument strings.
///
/// # Example
///
/// ```
/// use hbs_args::{ArgumentParser, DuplicateNames, ParseError};
///
/// let parser = ArgumentParser::builder()
///     .duplicate_names(DuplicateNames::Reject)
///     .build();
///
/// assert!(parser.parse("a=1 b=2").is_ok());
/// assert!(matches!(
///     parser.parse("a=1 a=2"),
///     Err(ParseError::DuplicateName { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct ArgumentParser {
    #[builder(default)]
    duplicate_names: DuplicateNames,
}

impl ArgumentParser {
    pub fn duplicate_names(&self) -> DuplicateNames {
        self.duplicate_names
    }

    /// Parse a helper argument string.
    ///
    /// Surrounding whitespace is ignored. The whole string must be consumed
    /// by named and positional arguments, with every positional argument
    /// coming before the first named one.
    pub fn parse(&self, input: &str) -> Result<Arguments, ParseError> {
        let mut positional = Vec::new();
        let mut named = NamedArguments::new();
        let mut remaining = input.trim_matches(is_space);

        while !remaining.is_empty() {
            let Ok(raw) = argument(&mut remaining) else {
                debug!(input, "malformed helper arguments");
                return Err(ParseError::Malformed {
                    input: input.to_string(),
                });
            };

            match raw {
                RawArgument::Named { name, value } => {
                    trace!(name, value, "named argument");
                    let name = normalize_name(name).to_string();
                    if self.duplicate_names == DuplicateNames::Reject && named.contains(&name) {
                        debug!(input, name = %name, "duplicate named argument");
                        return Err(ParseError::DuplicateName {
                            name,
                            input: input.to_string(),
                        });
                    }
                    named.insert(name, ArgumentValue::classify(value));
                }
                RawArgument::Positional(value) => {
                    trace!(value, "positional argument");
                    if !named.is_empty() {
                        debug!(input, value, "positional argument after named arguments");
                        return Err(ParseError::PositionalAfterNamed {
                            input: input.to_string(),
                        });
                    }
                    positional.push(ArgumentValue::classify(value));
                }
            }

            remaining = remaining.trim_start_matches(is_space);
        }

        Ok(Arguments::new(input.to_string(), positional, named))
    }
}

/// Parse a helper argument string with the default configuration.
pub fn parse_arguments(input: &str) -> Result<Arguments, ParseError> {
    ArgumentParser::default().parse(input)
}
