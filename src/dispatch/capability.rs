//! Capability traits and their impls.
//!
//! A type gets exactly the capabilities that make sense for it:
//!
//! | type                        | plain | numeric | date | exact |
//! |-----------------------------|-------|---------|------|-------|
//! | `bool`, `char`              | yes   |         |      |       |
//! | integers, `f32`, `f64`      | yes   | yes     |      |       |
//! | `NaiveDateTime`, `NaiveDate`| yes   |         | yes  | yes   |
//!
//! Asking for a capability a type lacks is a compile error, which is how the
//! static entry points reject numeric styles on a boolean or date styles on an
//! integer.

use super::ParseOutcome;
use crate::primitives::{Culture, DateStyles, NumberStyles, boolean, character, date};
use chrono::{NaiveDate, NaiveDateTime};

/// Parse from text alone, with the type's default conventions.
pub trait TryParse: Default + Sized {
    /// Name used in diagnostics.
    const TYPE_NAME: &'static str;

    fn try_parse(text: &str) -> ParseOutcome<Self>;
}

/// Parse a number under explicit [`NumberStyles`] and [`Culture`].
pub trait TryParseNumeric: TryParse {
    fn try_parse_numeric(text: &str, styles: NumberStyles, culture: &Culture) -> ParseOutcome<Self>;
}

/// Parse a calendar value under an explicit [`Culture`] and [`DateStyles`].
pub trait TryParseDate: TryParse {
    fn try_parse_date(text: &str, culture: &Culture, styles: DateStyles) -> ParseOutcome<Self>;
}

/// Parse a calendar value that must match one of the given `strftime` formats.
pub trait TryParseDateExact: TryParseDate {
    fn try_parse_exact(text: &str, formats: &[&str], culture: &Culture, styles: DateStyles) -> ParseOutcome<Self>;
}

impl TryParse for bool {
    const TYPE_NAME: &'static str = "bool";

    fn try_parse(text: &str) -> ParseOutcome<Self> {
        ParseOutcome::from_option(boolean::parse(text))
    }
}

impl TryParse for char {
    const TYPE_NAME: &'static str = "char";

    fn try_parse(text: &str) -> ParseOutcome<Self> {
        ParseOutcome::from_option(character::parse(text))
    }
}

integer_capabilities! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
}

float_capabilities!(f32, f64);

impl TryParse for NaiveDateTime {
    const TYPE_NAME: &'static str = "NaiveDateTime";

    fn try_parse(text: &str) -> ParseOutcome<Self> {
        Self::try_parse_date(text, Culture::invariant(), DateStyles::ALLOW_WHITESPACES)
    }
}

impl TryParseDate for NaiveDateTime {
    fn try_parse_date(text: &str, culture: &Culture, styles: DateStyles) -> ParseOutcome<Self> {
        ParseOutcome::from_option(date::parse_datetime(text, culture, styles))
    }
}

impl TryParseDateExact for NaiveDateTime {
    fn try_parse_exact(text: &str, formats: &[&str], culture: &Culture, styles: DateStyles) -> ParseOutcome<Self> {
        ParseOutcome::from_option(date::parse_exact(text, formats, culture, styles))
    }
}

impl TryParse for NaiveDate {
    const TYPE_NAME: &'static str = "NaiveDate";

    fn try_parse(text: &str) -> ParseOutcome<Self> {
        Self::try_parse_date(text, Culture::invariant(), DateStyles::ALLOW_WHITESPACES)
    }
}

impl TryParseDate for NaiveDate {
    fn try_parse_date(text: &str, culture: &Culture, styles: DateStyles) -> ParseOutcome<Self> {
        ParseOutcome::from_option(date::parse_datetime(text, culture, styles).map(|dt| dt.date()))
    }
}

impl TryParseDateExact for NaiveDate {
    fn try_parse_exact(text: &str, formats: &[&str], culture: &Culture, styles: DateStyles) -> ParseOutcome<Self> {
        ParseOutcome::from_option(date::parse_exact(text, formats, culture, styles).map(|dt| dt.date()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_match_rust_spelling() {
        assert_eq!(<i32 as TryParse>::TYPE_NAME, "i32");
        assert_eq!(<usize as TryParse>::TYPE_NAME, "usize");
        assert_eq!(<f64 as TryParse>::TYPE_NAME, "f64");
        assert_eq!(<NaiveDate as TryParse>::TYPE_NAME, "NaiveDate");
    }

    #[test]
    fn plain_float_uses_invariant_grouping() {
        assert_eq!(f64::try_parse("1,234.5").into_option(), Some(1234.5));
        assert_eq!(f32::try_parse("-0.5").into_option(), Some(-0.5));
    }

    #[test]
    fn plain_integer_rejects_decoration() {
        assert_eq!(i32::try_parse("1,234").into_option(), None);
        assert_eq!(u64::try_parse("(5)").into_option(), None);
        assert_eq!(i16::try_parse(" -5 ").into_option(), Some(-5));
    }

    #[test]
    fn date_only_drops_time() {
        let outcome = NaiveDate::try_parse("01/31/2016 13:45");
        assert_eq!(outcome.into_option(), NaiveDate::from_ymd_opt(2016, 1, 31));
    }
}
