//! Argument grammar using winnow.
//!
//! Every production is anchored at the start of the remaining input and
//! returns the raw text it matched:
//! - Variable paths: `../`* then name units joined by `.` or `/`, with an
//!   optional trailing `.`
//! - Name units: bare name chunks or `[segment literals]`
//! - Quoted literals in `"` or `'` with backslash escapes
//! - Special variables: `@` plus lowercase ASCII letters
//! - Named arguments: `name = value`

use winnow::combinator::{alt, opt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, none_of, one_of, take_while};

/// Characters that may not appear in a bare name chunk (besides whitespace).
const INVALID_NAME_CHARS: &str = "!\"#%&'()*+,./;<=>@[\\]^`{|}~";

/// One argument as matched by the grammar, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawArgument<'i> {
    Named { name: &'i str, value: &'i str },
    Positional(&'i str),
}

/// Whitespace as understood by the argument grammar.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Check if a character can appear in a bare name chunk.
fn is_name_char(c: char) -> bool {
    !is_space(c) && !INVALID_NAME_CHARS.contains(c)
}

/// Parse the next argument, trying the named form first.
pub(crate) fn argument<'i>(input: &mut &'i str) -> ModalResult<RawArgument<'i>> {
    alt((
        named_argument.map(|(name, value)| RawArgument::Named { name, value }),
        argument_value.map(RawArgument::Positional),
    ))
    .parse_next(input)
}

/// Parse a named argument: name ws* = ws* value
fn named_argument<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    let name = name_unit(input)?;
    ws(input)?;
    '='.parse_next(input)?;
    ws(input)?;
    let value = argument_value(input)?;
    Ok((name, value))
}

/// Parse an argument value: variable path, quoted literal, or special variable.
pub(crate) fn argument_value<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((variable_path, quoted_literal, special_variable)).parse_next(input)
}

/// Parse a variable path such as `../foo.bar/[baz qux]`.
fn variable_path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (parent_segments, name_unit, path_tail, opt('.'))
        .take()
        .parse_next(input)
}

/// Parse any number of leading `../` segments.
fn parent_segments(input: &mut &str) -> ModalResult<()> {
    repeat(0.., "../").parse_next(input)
}

/// Parse `.unit` / `/unit` continuations. A separator with no unit after it
/// is left unconsumed.
fn path_tail(input: &mut &str) -> ModalResult<()> {
    repeat(0.., (one_of(['.', '/']), name_unit)).parse_next(input)
}

/// Parse a name unit: a bare chunk or a segment literal.
pub(crate) fn name_unit<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((bare_name, segment_literal)).parse_next(input)
}

fn bare_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_name_char).parse_next(input)
}

/// Parse a segment literal: `[` then one or more non-`]` characters, then `]`.
fn segment_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    ('[', take_while(1.., |c: char| c != ']'), ']')
        .take()
        .parse_next(input)
}

/// Parse a special variable: @name with lowercase ASCII letters.
fn special_variable<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    ('@', take_while(1.., |c: char| c.is_ascii_lowercase()))
        .take()
        .parse_next(input)
}

/// Parse a quoted literal, quotes included.
///
/// The literal ends at the first matching quote that is not escaped. A
/// backslash escapes whatever follows it. Raw newlines are not allowed.
fn quoted_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let start = *input;
    let quote = one_of(['"', '\'']).parse_next(input)?;

    loop {
        match any.parse_next(input)? {
            '\\' => {
                none_of('\n').parse_next(input)?;
            }
            '\n' => return Err(ErrMode::Backtrack(ContextError::new())),
            c if c == quote => break,
            _ => {}
        }
    }

    let consumed = start.len() - input.len();
    Ok(&start[..consumed])
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., is_space).void().parse_next(input)
}

/// Strip segment-literal brackets from an argument name.
///
/// `[my prop]` becomes `my prop`; bare names are returned unchanged.
pub fn normalize_name(name: &str) -> &str {
    name.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a parser and return what it matched plus what it left behind.
    fn run<'i>(
        mut parser: impl FnMut(&mut &'i str) -> ModalResult<&'i str>,
        input: &'i str,
    ) -> Option<(&'i str, &'i str)> {
        let mut remaining = input;
        parser(&mut remaining).ok().map(|matched| (matched, remaining))
    }

    #[test]
    fn test_bare_name_stops_at_invalid_chars() {
        assert_eq!(run(bare_name, "foo bar"), Some(("foo", " bar")));
        assert_eq!(run(bare_name, "foo=bar"), Some(("foo", "=bar")));
        assert_eq!(run(bare_name, "a-b_c$d:e?"), Some(("a-b_c$d:e?", "")));
        assert_eq!(run(bare_name, "héllo.x"), Some(("héllo", ".x")));
        assert_eq!(run(bare_name, "!x"), None);
    }

    #[test]
    fn test_every_invalid_name_char_is_rejected() {
        for c in INVALID_NAME_CHARS.chars().chain([' ', '\t', '\n', '\x0B', '\x0C', '\r']) {
            assert!(!is_name_char(c), "{c:?} should not be a name char");
        }
    }

    #[test]
    fn test_segment_literal() {
        assert_eq!(run(segment_literal, "[a b]c"), Some(("[a b]", "c")));
        assert_eq!(run(segment_literal, "[a.b=c]"), Some(("[a.b=c]", "")));
        assert_eq!(run(segment_literal, "[]"), None);
        assert_eq!(run(segment_literal, "[open"), None);
    }

    #[test]
    fn test_variable_path_forms() {
        assert_eq!(run(variable_path, "foo"), Some(("foo", "")));
        assert_eq!(run(variable_path, "foo.bar/baz"), Some(("foo.bar/baz", "")));
        assert_eq!(run(variable_path, "../../foo"), Some(("../../foo", "")));
        assert_eq!(run(variable_path, "foo.[a b].c"), Some(("foo.[a b].c", "")));
        assert_eq!(run(variable_path, "foo."), Some(("foo.", "")));
    }

    #[test]
    fn test_variable_path_dangling_separator() {
        assert_eq!(run(variable_path, "foo/"), Some(("foo", "/")));
        assert_eq!(run(variable_path, "foo..bar"), Some(("foo.", ".bar")));
        assert_eq!(run(variable_path, "a.b."), Some(("a.b.", "")));
    }

    #[test]
    fn test_variable_path_requires_a_name() {
        assert_eq!(run(variable_path, "../"), None);
        assert_eq!(run(variable_path, ".."), None);
        assert_eq!(run(variable_path, "."), None);
    }

    #[test]
    fn test_special_variable() {
        assert_eq!(run(special_variable, "@index"), Some(("@index", "")));
        assert_eq!(run(special_variable, "@index.x"), Some(("@index", ".x")));
        assert_eq!(run(special_variable, "@Index"), None);
        assert_eq!(run(special_variable, "@"), None);
    }

    #[test]
    fn test_quoted_literal() {
        assert_eq!(run(quoted_literal, r#""foo" bar"#), Some((r#""foo""#, " bar")));
        assert_eq!(run(quoted_literal, "'it''s'"), Some(("'it'", "'s'")));
        assert_eq!(run(quoted_literal, r#""a\"b""#), Some((r#""a\"b""#, "")));
        assert_eq!(run(quoted_literal, r#""a\\" b"#), Some((r#""a\\""#, " b")));
        assert_eq!(run(quoted_literal, r#""a'b""#), Some((r#""a'b""#, "")));
        assert_eq!(run(quoted_literal, r#""""#), Some((r#""""#, "")));
    }

    #[test]
    fn test_quoted_literal_unterminated() {
        assert_eq!(run(quoted_literal, r#""foo"#), None);
        assert_eq!(run(quoted_literal, r#""foo\""#), None);
        assert_eq!(run(quoted_literal, "\"a\nb\""), None);
    }

    #[test]
    fn test_named_argument() {
        let mut input = "key = 'v' rest";
        assert_eq!(named_argument(&mut input).ok(), Some(("key", "'v'")));
        assert_eq!(input, " rest");

        let mut input = "[a b]=c";
        assert_eq!(named_argument(&mut input).ok(), Some(("[a b]", "c")));
    }

    #[test]
    fn test_argument_prefers_named() {
        let mut input = "a=b";
        assert_eq!(
            argument(&mut input).ok(),
            Some(RawArgument::Named { name: "a", value: "b" })
        );

        let mut input = "a =";
        assert_eq!(argument(&mut input).ok(), Some(RawArgument::Positional("a")));
        assert_eq!(input, " =");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("[my prop]"), "my prop");
        assert_eq!(normalize_name("plain"), "plain");
        assert_eq!(normalize_name("[x.y=z]"), "x.y=z");
    }
}
