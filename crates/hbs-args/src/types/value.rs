use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::unescape;

/// The value of a single helper argument.
///
/// The two cases tell the renderer whether a value still has to be looked up
/// in the rendering context or is already known.
///
/// # Example
///
/// ```
/// use hbs_args::ArgumentValue;
///
/// assert_eq!(
///     ArgumentValue::classify("user.name"),
///     ArgumentValue::VariablePath("user.name".into())
/// );
/// assert_eq!(ArgumentValue::classify("'hi'"), ArgumentValue::Literal("hi".into()));
/// assert_eq!(ArgumentValue::classify("-3"), ArgumentValue::Literal("-3".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentValue {
    /// A path resolved later against the rendering context, e.g. `../foo/bar`
    /// or `@index`. Kept verbatim.
    VariablePath(String),

    /// A value known at parse time: the unescaped content of a quoted string,
    /// or the digits of an integer literal (kept as text).
    Literal(String),
}

impl ArgumentValue {
    /// Classify a raw value token matched by the argument grammar.
    ///
    /// Quoted tokens lose their enclosing quotes and are unescaped. Integer
    /// tokens (`-?[0-9]+`) become literals verbatim. Anything else, special
    /// `@` variables included, is a variable path.
    pub fn classify(token: &str) -> Self {
        if let Some(quoted) = strip_quotes(token) {
            return ArgumentValue::Literal(unescape(quoted));
        }

        if is_integer(token) {
            return ArgumentValue::Literal(token.to_string());
        }

        ArgumentValue::VariablePath(token.to_string())
    }

    /// The inner text, whichever case this is.
    pub fn as_str(&self) -> &str {
        match self {
            ArgumentValue::VariablePath(s) | ArgumentValue::Literal(s) => s,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ArgumentValue::Literal(_))
    }

    pub fn is_variable_path(&self) -> bool {
        matches!(self, ArgumentValue::VariablePath(_))
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip a matching pair of enclosing quotes, if the token starts with one.
fn strip_quotes(token: &str) -> Option<&str> {
    let quote = token.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    token.strip_prefix(quote)?.strip_suffix(quote)
}

/// Check for `-?[0-9]+` over the whole token.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
