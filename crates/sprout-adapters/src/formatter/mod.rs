//! Source formatting adapters.

mod simple;

pub use simple::{ArrowParens, FormatConfig, ParserProfile, QuoteStyle, SimpleFormatter};
