//! Parsing of Handlebars-style helper argument strings.
//!
//! Given the raw text after a helper's name inside a template tag, this crate
//! produces an ordered list of positional values and a map of named values.
//! Each value is either a variable path to resolve later or a literal known
//! at parse time.
//!
//! ```
//! use hbs_args::{ArgumentValue, parse_arguments};
//!
//! let args = parse_arguments(r#"../title "by" author=@root.name"#);
//! assert!(args.is_err()); // `@root.name` is not a special variable
//!
//! let args = parse_arguments(r#"../title "by" [first name]=author.first"#).unwrap();
//! assert_eq!(args.positional()[0], ArgumentValue::VariablePath("../title".into()));
//! assert_eq!(args.positional()[1], ArgumentValue::Literal("by".into()));
//! assert_eq!(
//!     args.named().get("first name"),
//!     Some(&ArgumentValue::VariablePath("author.first".into()))
//! );
//! ```

pub mod parser;
pub mod types;

pub use parser::{ArgumentParser, DuplicateNames, ParseError, parse_arguments};
pub use types::{ArgumentValue, Arguments, NamedArguments};
