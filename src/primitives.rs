//! Per-type parse primitives.
//!
//! These are the building blocks the capability traits bind to. Each one takes
//! text (plus style flags and a [`Culture`] where the type has a notion of
//! them) and answers with `Option<T>`; none of them panic or report why input
//! was rejected.
//!
//! ```text
//! text ──┬─ boolean::parse    "true" / "false", case-insensitive
//!        ├─ character::parse  exactly one scalar value
//!        ├─ number::*         styled scan (signs, groups, decimal, exponent, hex)
//!        └─ date::*           ISO, culture-ordered numeric, month names, exact formats
//! ```
//!
//! Style flags live in `styles.rs` and culture tables in `culture.rs`; both are
//! passed through the dispatch layer untouched.

#[path = "primitives/boolean.rs"]
pub(crate) mod boolean;
#[path = "primitives/character.rs"]
pub(crate) mod character;
#[path = "primitives/culture.rs"]
mod culture;
#[path = "primitives/date.rs"]
pub(crate) mod date;
#[path = "primitives/number.rs"]
pub(crate) mod number;
#[path = "primitives/styles.rs"]
mod styles;

pub use culture::{Culture, DateOrder};
pub use styles::{DateStyles, NumberStyles};
