use std::fmt;
use std::mem;
use std::slice;
use std::str::FromStr;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::ArgumentValue;
use crate::parser::{ParseError, parse_arguments};

/// Named helper arguments, in the order their names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedArguments {
    entries: Vec<(String, ArgumentValue)>,
}

impl NamedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing the value of an existing name in place.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, name: String, value: ArgumentValue) -> Option<ArgumentValue> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> NamedArgumentsIter<'_> {
        NamedArgumentsIter {
            inner: self.entries.iter(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// Iterator over `(name, value)` pairs of [`NamedArguments`].
pub struct NamedArgumentsIter<'a> {
    inner: slice::Iter<'a, (String, ArgumentValue)>,
}

impl<'a> Iterator for NamedArgumentsIter<'a> {
    type Item = (&'a str, &'a ArgumentValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a NamedArguments {
    type Item = (&'a str, &'a ArgumentValue);
    type IntoIter = NamedArgumentsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for NamedArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The parsed arguments of one helper invocation.
///
/// Holds positional values in source order, named values in first-seen
/// order, and the argument string exactly as it was given.
///
/// # Example
///
/// ```
/// use hbs_args::{Arguments, ArgumentValue};
///
/// let args = Arguments::parse(r#"item "sep" limit=3"#).unwrap();
///
/// assert_eq!(
///     args.positional(),
///     &[
///         ArgumentValue::VariablePath("item".into()),
///         ArgumentValue::Literal("sep".into()),
///     ]
/// );
/// assert_eq!(args.named().get("limit"), Some(&ArgumentValue::Literal("3".into())));
/// assert_eq!(args.to_string(), r#"item "sep" limit=3"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Arguments {
    positional: Vec<ArgumentValue>,
    named: NamedArguments,
    original: String,
}

impl Arguments {
    pub(crate) fn new(
        original: String,
        positional: Vec<ArgumentValue>,
        named: NamedArguments,
    ) -> Self {
        Self {
            positional,
            named,
            original,
        }
    }

    /// Parse an argument string with the default parser configuration.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_arguments(input)
    }

    pub fn positional(&self) -> &[ArgumentValue] {
        &self.positional
    }

    pub fn named(&self) -> &NamedArguments {
        &self.named
    }

    /// The argument string as passed in, untrimmed.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// True when there are neither positional nor named arguments.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for Arguments {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_arguments(s)
    }
}
