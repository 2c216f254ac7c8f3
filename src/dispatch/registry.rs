//! Runtime dispatch by [`ValueKind`].
//!
//! The static entry points resolve a capability through trait bounds. When
//! the target type is only known as data, [`Registry`] plays that role: it
//! holds, for every kind, a function pointer per shape the kind supports.
//! The table is built once, on first use, and is read-only afterwards.

use super::{
    ArgumentShape, ParseOutcome, ResultStrategy, TryParse, TryParseDate, TryParseDateExact, TryParseNumeric,
    validate,
};
use crate::ParseError;
use crate::primitives::{Culture, DateStyles, NumberStyles};
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

value_table! {
    Bool(bool) => "bool" | "boolean",
    Char(char) => "char" | "character",
    I8(i8) => "i8" | "sbyte",
    I16(i16) => "i16" | "short",
    I32(i32) => "i32" | "int",
    I64(i64) => "i64" | "long",
    I128(i128) => "i128",
    Isize(isize) => "isize",
    U8(u8) => "u8" | "byte",
    U16(u16) => "u16" | "ushort",
    U32(u32) => "u32" | "uint",
    U64(u64) => "u64" | "ulong",
    U128(u128) => "u128",
    Usize(usize) => "usize",
    F32(f32) => "f32" | "float" | "single",
    F64(f64) => "f64" | "double",
    DateTime(NaiveDateTime) => "NaiveDateTime" | "datetime" | "timestamp",
    Date(NaiveDate) => "NaiveDate" | "date",
}

impl ValueKind {
    pub fn is_calendar(self) -> bool {
        matches!(self, ValueKind::DateTime | ValueKind::Date)
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, ValueKind::Bool | ValueKind::Char) && !self.is_calendar()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ValueKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::from_name(s).ok_or_else(|| ParseError::UnknownType(s.trim().to_string()))
    }
}

pub type PlainFn = fn(&str) -> ParseOutcome<Value>;
pub type NumericFn = fn(&str, NumberStyles, &Culture) -> ParseOutcome<Value>;
pub type DateFn = fn(&str, &Culture, DateStyles) -> ParseOutcome<Value>;
pub type ExactFn = fn(&str, &[&str], &Culture, DateStyles) -> ParseOutcome<Value>;

/// The bindings one kind supports. `plain` always exists.
#[derive(Clone, Copy)]
pub struct Capabilities {
    pub plain: PlainFn,
    pub numeric: Option<NumericFn>,
    pub date: Option<DateFn>,
    pub exact: Option<ExactFn>,
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("plain", &"<function>")
            .field("numeric", &self.numeric.is_some())
            .field("date", &self.date.is_some())
            .field("exact", &self.exact.is_some())
            .finish()
    }
}

fn plain<T: TryParse + Into<Value>>(text: &str) -> ParseOutcome<Value> {
    T::try_parse(text).map(Into::into)
}

fn numeric<T: TryParseNumeric + Into<Value>>(text: &str, styles: NumberStyles, culture: &Culture) -> ParseOutcome<Value> {
    T::try_parse_numeric(text, styles, culture).map(Into::into)
}

fn date<T: TryParseDate + Into<Value>>(text: &str, culture: &Culture, styles: DateStyles) -> ParseOutcome<Value> {
    T::try_parse_date(text, culture, styles).map(Into::into)
}

fn exact<T: TryParseDateExact + Into<Value>>(
    text: &str,
    formats: &[&str],
    culture: &Culture,
    styles: DateStyles,
) -> ParseOutcome<Value> {
    T::try_parse_exact(text, formats, culture, styles).map(Into::into)
}

impl Capabilities {
    pub fn plain_only<T: TryParse + Into<Value>>() -> Self {
        Capabilities { plain: plain::<T>, numeric: None, date: None, exact: None }
    }

    pub fn numeric<T: TryParseNumeric + Into<Value>>() -> Self {
        Capabilities { numeric: Some(numeric::<T>), ..Self::plain_only::<T>() }
    }

    pub fn calendar<T: TryParseDateExact + Into<Value>>() -> Self {
        Capabilities { date: Some(date::<T>), exact: Some(exact::<T>), ..Self::plain_only::<T>() }
    }
}

/// Table from [`ValueKind`] to its [`Capabilities`].
#[derive(Debug)]
pub struct Registry {
    bindings: HashMap<ValueKind, Capabilities>,
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::builtin);

impl Registry {
    /// The process-wide registry of built-in kinds.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    fn builtin() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(ValueKind::Bool, Capabilities::plain_only::<bool>());
        bindings.insert(ValueKind::Char, Capabilities::plain_only::<char>());
        bindings.insert(ValueKind::I8, Capabilities::numeric::<i8>());
        bindings.insert(ValueKind::I16, Capabilities::numeric::<i16>());
        bindings.insert(ValueKind::I32, Capabilities::numeric::<i32>());
        bindings.insert(ValueKind::I64, Capabilities::numeric::<i64>());
        bindings.insert(ValueKind::I128, Capabilities::numeric::<i128>());
        bindings.insert(ValueKind::Isize, Capabilities::numeric::<isize>());
        bindings.insert(ValueKind::U8, Capabilities::numeric::<u8>());
        bindings.insert(ValueKind::U16, Capabilities::numeric::<u16>());
        bindings.insert(ValueKind::U32, Capabilities::numeric::<u32>());
        bindings.insert(ValueKind::U64, Capabilities::numeric::<u64>());
        bindings.insert(ValueKind::U128, Capabilities::numeric::<u128>());
        bindings.insert(ValueKind::Usize, Capabilities::numeric::<usize>());
        bindings.insert(ValueKind::F32, Capabilities::numeric::<f32>());
        bindings.insert(ValueKind::F64, Capabilities::numeric::<f64>());
        bindings.insert(ValueKind::DateTime, Capabilities::calendar::<NaiveDateTime>());
        bindings.insert(ValueKind::Date, Capabilities::calendar::<NaiveDate>());
        Registry { bindings }
    }

    pub fn capabilities(&self, kind: ValueKind) -> Result<&Capabilities, ParseError> {
        self.bindings.get(&kind).ok_or_else(|| ParseError::UnknownType(kind.name().to_string()))
    }

    /// Parse a value of `kind` with its plain conventions; `None` if the text
    /// is malformed. Handy for reading a fallback value supplied as text.
    pub fn parse_plain(&self, kind: ValueKind, text: &str) -> Result<Option<Value>, ParseError> {
        Ok((self.capabilities(kind)?.plain)(text).into_option())
    }
}

/// The argument shape of a runtime request, with its style arguments.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRequest<'a> {
    Plain,
    Numeric { styles: NumberStyles, culture: &'a Culture },
    Date { culture: &'a Culture, styles: DateStyles },
    Exact { formats: &'a [&'a str], culture: &'a Culture, styles: DateStyles },
}

impl ShapeRequest<'_> {
    pub fn shape(&self) -> ArgumentShape {
        match self {
            ShapeRequest::Plain => ArgumentShape::Plain,
            ShapeRequest::Numeric { .. } => ArgumentShape::NumericStyled,
            ShapeRequest::Date { .. } => ArgumentShape::DateStyled,
            ShapeRequest::Exact { .. } => ArgumentShape::DateExact,
        }
    }
}

/// Parse `text` as `kind` through the global [`Registry`].
///
/// Malformed text is absorbed by `strategy`. Misuse is not: a shape the kind
/// does not support, or an explicit default of another kind, is an error.
///
/// ```
/// use autoparse::{ArgumentShape, Culture, NumberStyles, ParseError, ResultStrategy, ShapeRequest, Value, ValueKind, dispatch};
///
/// let numeric = ShapeRequest::Numeric { styles: NumberStyles::INTEGER, culture: Culture::invariant() };
/// let five = dispatch(ValueKind::I32, "5", &numeric, ResultStrategy::ImplicitDefault).unwrap();
/// assert_eq!(five, Some(Value::I32(5)));
///
/// let err = dispatch(ValueKind::Bool, "5", &numeric, ResultStrategy::ImplicitDefault).unwrap_err();
/// assert!(matches!(err, ParseError::IncompatibleMode { shape: ArgumentShape::NumericStyled, .. }));
/// ```
pub fn dispatch(
    kind: ValueKind,
    text: &str,
    request: &ShapeRequest<'_>,
    strategy: ResultStrategy<Value>,
) -> Result<Option<Value>, ParseError> {
    let shape = request.shape();
    validate(kind, shape)?;

    if let ResultStrategy::ExplicitDefault(fallback) = &strategy {
        if fallback.kind() != kind {
            return Err(ParseError::DefaultKindMismatch { expected: kind, found: fallback.kind() });
        }
    }

    let capabilities = Registry::global().capabilities(kind)?;
    let missing = || ParseError::IncompatibleMode { kind, shape };
    let binding: Box<dyn Fn(&str) -> ParseOutcome<Value> + '_> = match *request {
        ShapeRequest::Plain => Box::new(capabilities.plain),
        ShapeRequest::Numeric { styles, culture } => {
            let f = capabilities.numeric.ok_or_else(missing)?;
            Box::new(move |text: &str| f(text, styles, culture))
        }
        ShapeRequest::Date { culture, styles } => {
            let f = capabilities.date.ok_or_else(missing)?;
            Box::new(move |text: &str| f(text, culture, styles))
        }
        ShapeRequest::Exact { formats, culture, styles } => {
            let f = capabilities.exact.ok_or_else(missing)?;
            Box::new(move |text: &str| f(text, formats, culture, styles))
        }
    };

    Ok(super::invoke(kind.name(), shape, text, strategy, binding))
}
