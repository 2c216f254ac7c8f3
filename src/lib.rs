//! Uniform "parse or fall back" over Rust value types.
//!
//! Every supported type implements one or more capability traits
//! ([`TryParse`], [`TryParseNumeric`], [`TryParseDate`], [`TryParseDateExact`]).
//! The entry points in this crate pick the capability from the type named at
//! the call site and shape the outcome with a [`ResultStrategy`]:
//!
//! ```
//! use autoparse::{Culture, NumberStyles, parse, parse_numeric, parse_optional, parse_or_default};
//!
//! assert_eq!(parse::<i32>("0009998"), 9998);
//! assert_eq!(parse::<bool>("trues"), false);
//! assert_eq!(parse_optional::<char>("ab"), None);
//! assert_eq!(parse_or_default::<u8>("300", 7), 7);
//!
//! let de = Culture::by_name("de-DE").unwrap();
//! let value = parse_numeric::<f64>("0009998,0001", NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS, de);
//! assert_eq!(value, 9998.0001);
//! ```
//!
//! Malformed input never produces an error. Misuse (numeric styles on a
//! boolean, date styles on an integer) does not compile; the runtime
//! [`Registry`] path reports it as [`ParseError::IncompatibleMode`].

extern crate self as autoparse;

#[macro_use]
mod macros;
mod api;
mod dispatch;
mod error;
mod primitives;

pub use api::{
    ParseExt, parse, parse_date, parse_date_optional, parse_date_or_default, parse_date_with, parse_exact,
    parse_exact_optional, parse_exact_or_default, parse_exact_with, parse_numeric, parse_numeric_optional,
    parse_numeric_or_default, parse_numeric_with, parse_optional, parse_or_default, parse_with,
};
pub use dispatch::{
    ArgumentShape, Capabilities, ParseOutcome, Registry, ResultStrategy, ShapeRequest, TryParse, TryParseDate,
    TryParseDateExact, TryParseNumeric, Value, ValueKind, dispatch, validate,
};
pub use error::ParseError;
pub use primitives::{Culture, DateOrder, DateStyles, NumberStyles};
