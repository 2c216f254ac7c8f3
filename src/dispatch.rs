//! Dispatch: from a type named at the call site to a shaped result.
//!
//! ## How the parts work together
//!
//! ```text
//! parse::<T>(text, ..)
//!        │
//!        │  capability.rs   T: TryParse / TryParseNumeric / TryParseDate / TryParseDateExact
//!        │                  (trait bounds reject bool/char/date misuse at compile time)
//!        v
//!   ParseOutcome<T>         outcome.rs: success flag + value, value is T::default() on failure
//!        │
//!        │  strategy.rs     ResultStrategy::{ImplicitDefault, Optional, ExplicitDefault}
//!        v
//!   T / Option<T>
//! ```
//!
//! When the target type is only known at run time (a type name read from the
//! command line, say) the same capabilities are reached through `registry.rs`:
//! a table from [`ValueKind`] to function pointers, built once. That path
//! cannot lean on trait bounds, so `validate.rs` checks the kind against the
//! requested [`ArgumentShape`] on every call and reports misuse as
//! [`ParseError::IncompatibleMode`](crate::ParseError::IncompatibleMode).
//!
//! ## Responsibilities by module
//!
//! - `capability.rs`: the four capability traits and their impls for every
//!   supported type.
//! - `outcome.rs`: `ParseOutcome`, the uniform result of one parse attempt.
//! - `strategy.rs`: `ResultStrategy` and the single invocation point shared by
//!   every entry point.
//! - `validate.rs`: `ArgumentShape` and the runtime kind/shape check.
//! - `registry.rs`: `ValueKind`, `Value`, the `Registry` table and [`dispatch`].
//!
//! ## Debugging
//!
//! Failed parses that fall back to a default emit `trace` events and misuse on
//! the runtime path emits `debug` events through `tracing`.

#[path = "dispatch/capability.rs"]
mod capability;
#[path = "dispatch/outcome.rs"]
mod outcome;
#[path = "dispatch/registry.rs"]
mod registry;
#[path = "dispatch/strategy.rs"]
mod strategy;
#[path = "dispatch/validate.rs"]
mod validate;


pub use capability::{TryParse, TryParseDate, TryParseDateExact, TryParseNumeric};
pub use outcome::ParseOutcome;
pub use registry::{Capabilities, Registry, ShapeRequest, Value, ValueKind, dispatch};
pub(crate) use strategy::invoke;
pub use strategy::ResultStrategy;
pub use validate::{ArgumentShape, validate};
