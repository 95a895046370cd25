//! Helper argument string parser.
//!
//! Splits the text following a helper name into positional and named
//! arguments, classifying each value as a variable path or a literal.

mod arguments;
pub mod error;
mod escape;
mod grammar;

pub use arguments::{ArgumentParser, DuplicateNames, parse_arguments};
pub use error::ParseError;
pub use escape::unescape;
pub use grammar::normalize_name;
