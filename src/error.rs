//! Misuse errors.
//!
//! Malformed input is never an error in this crate. These variants describe
//! requests that cannot be served at all and have to be fixed by the caller.

use crate::{ArgumentShape, ValueKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The kind has no binding for the requested shape (numeric styles on a
    /// boolean, date styles on an integer, ...).
    #[error("`{kind}` cannot be parsed in {shape} mode")]
    IncompatibleMode { kind: ValueKind, shape: ArgumentShape },
    /// No value kind goes by this name.
    #[error("unknown value type '{0}'")]
    UnknownType(String),
    /// No built-in culture goes by this name.
    #[error("unknown culture '{0}'")]
    UnknownCulture(String),
    /// A style list named a flag that does not exist.
    #[error("unknown {family} style '{name}'")]
    InvalidStyle { family: &'static str, name: String },
    /// An explicit default was supplied for a different kind than the one parsed.
    #[error("default value is `{found}` but the target type is `{expected}`")]
    DefaultKindMismatch { expected: ValueKind, found: ValueKind },
}
