//! C-style backslash unescaping for quoted argument literals.

use std::iter::Peekable;
use std::str::Chars;

/// Resolve backslash escapes in the content of a quoted literal.
///
/// Handles `\n \t \r \v \f \a \b`, octal `\NNN` (1-3 digits, truncated to a
/// byte) and hex `\xHH` (1-2 digits). Any other escaped character stands for
/// itself, so `\\`, `\"` and `\'` yield the bare character. A trailing lone
/// backslash is kept. Octal and hex escapes produce the code point with the
/// same numeric value as the byte.
pub fn unescape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let Some(&escaped) = chars.peek() else {
            result.push('\\');
            break;
        };

        match escaped {
            'n' => result.push('\n'),
            't' => result.push('\t'),
            'r' => result.push('\r'),
            'a' => result.push('\x07'),
            'v' => result.push('\x0B'),
            'b' => result.push('\x08'),
            'f' => result.push('\x0C'),
            'x' => {
                chars.next();
                match take_digits(&mut chars, 16, 2) {
                    Some(byte) => result.push(char::from(byte)),
                    None => result.push('x'),
                }
                continue;
            }
            '0'..='7' => {
                if let Some(byte) = take_digits(&mut chars, 8, 3) {
                    result.push(char::from(byte));
                }
                continue;
            }
            other => result.push(other),
        }
        chars.next();
    }

    result
}

/// Consume up to `max` digits in `radix`, returning their value truncated to
/// a byte, or `None` when no digit follows.
fn take_digits(chars: &mut Peekable<Chars<'_>>, radix: u32, max: usize) -> Option<u8> {
    let mut value: u32 = 0;
    let mut count = 0;

    while count < max {
        let Some(digit) = chars.peek().and_then(|c| c.to_digit(radix)) else {
            break;
        };
        value = value * radix + digit;
        count += 1;
        chars.next();
    }

    (count > 0).then(|| (value & 0xFF) as u8)
}
