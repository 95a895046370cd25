mod arguments;
mod value;

pub use arguments::{Arguments, NamedArguments, NamedArgumentsIter};
pub use value::ArgumentValue;
