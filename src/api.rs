use crate::dispatch::{
    ArgumentShape, ResultStrategy, TryParse, TryParseDate, TryParseDateExact, TryParseNumeric, invoke,
};
use crate::primitives::{Culture, DateStyles, NumberStyles};

// --- Plain -------------------------------------------------------------------

/// Parse `text` as `T` under an explicit [`ResultStrategy`].
///
/// The other plain entry points are this function with the strategy fixed.
/// Only [`ResultStrategy::Optional`] can produce `None`.
pub fn parse_with<T: TryParse>(text: &str, strategy: ResultStrategy<T>) -> Option<T> {
    invoke(T::TYPE_NAME, ArgumentShape::Plain, text, strategy, T::try_parse)
}

/// Parse `text` as `T`, or return `T::default()`.
///
/// # Example
/// ```
/// use autoparse::parse;
///
/// assert_eq!(parse::<bool>("true"), true);
/// assert_eq!(parse::<char>("ab"), '\0');
/// assert_eq!(parse::<i32>("00A9998"), 0);
/// ```
pub fn parse<T: TryParse>(text: &str) -> T {
    parse_with(text, ResultStrategy::ImplicitDefault).unwrap_or_default()
}

/// Parse `text` as `T`; `None` if it is malformed.
pub fn parse_optional<T: TryParse>(text: &str) -> Option<T> {
    parse_with(text, ResultStrategy::Optional)
}

/// Parse `text` as `T`, or return `default`.
pub fn parse_or_default<T: TryParse>(text: &str, default: T) -> T {
    parse_with(text, ResultStrategy::ExplicitDefault(default)).unwrap_or_default()
}

// --- Numeric -------------------------------------------------------------------

/// Parse a number under `styles` and `culture` with an explicit strategy.
pub fn parse_numeric_with<T: TryParseNumeric>(
    text: &str,
    styles: NumberStyles,
    culture: &Culture,
    strategy: ResultStrategy<T>,
) -> Option<T> {
    invoke(T::TYPE_NAME, ArgumentShape::NumericStyled, text, strategy, |text| {
        T::try_parse_numeric(text, styles, culture)
    })
}

/// Parse a number under `styles` and `culture`, or return `T::default()`.
///
/// Only numeric types qualify; anything else is rejected at compile time:
///
/// ```compile_fail
/// use autoparse::{Culture, NumberStyles, parse_numeric};
///
/// let _ = parse_numeric::<bool>("5", NumberStyles::INTEGER, Culture::invariant());
/// ```
///
/// ```compile_fail
/// use autoparse::{Culture, NumberStyles, parse_numeric};
///
/// let _ = parse_numeric::<char>("5", NumberStyles::INTEGER, Culture::invariant());
/// ```
///
/// ```compile_fail
/// use autoparse::{Culture, NumberStyles, parse_numeric};
///
/// let _ = parse_numeric::<chrono::NaiveDateTime>("5", NumberStyles::INTEGER, Culture::invariant());
/// ```
pub fn parse_numeric<T: TryParseNumeric>(text: &str, styles: NumberStyles, culture: &Culture) -> T {
    parse_numeric_with(text, styles, culture, ResultStrategy::ImplicitDefault).unwrap_or_default()
}

pub fn parse_numeric_optional<T: TryParseNumeric>(text: &str, styles: NumberStyles, culture: &Culture) -> Option<T> {
    parse_numeric_with(text, styles, culture, ResultStrategy::Optional)
}

pub fn parse_numeric_or_default<T: TryParseNumeric>(
    text: &str,
    styles: NumberStyles,
    culture: &Culture,
    default: T,
) -> T {
    parse_numeric_with(text, styles, culture, ResultStrategy::ExplicitDefault(default)).unwrap_or_default()
}

// --- Date ----------------------------------------------------------------------

/// Parse a calendar value under `culture` and `styles` with an explicit strategy.
pub fn parse_date_with<T: TryParseDate>(
    text: &str,
    culture: &Culture,
    styles: DateStyles,
    strategy: ResultStrategy<T>,
) -> Option<T> {
    invoke(T::TYPE_NAME, ArgumentShape::DateStyled, text, strategy, |text| T::try_parse_date(text, culture, styles))
}

/// Parse a calendar value under `culture` and `styles`, or return `T::default()`.
///
/// Only calendar types qualify:
///
/// ```compile_fail
/// use autoparse::{Culture, DateStyles, parse_date};
///
/// let _ = parse_date::<i32>("5", Culture::invariant(), DateStyles::empty());
/// ```
pub fn parse_date<T: TryParseDate>(text: &str, culture: &Culture, styles: DateStyles) -> T {
    parse_date_with(text, culture, styles, ResultStrategy::ImplicitDefault).unwrap_or_default()
}

pub fn parse_date_optional<T: TryParseDate>(text: &str, culture: &Culture, styles: DateStyles) -> Option<T> {
    parse_date_with(text, culture, styles, ResultStrategy::Optional)
}

pub fn parse_date_or_default<T: TryParseDate>(text: &str, culture: &Culture, styles: DateStyles, default: T) -> T {
    parse_date_with(text, culture, styles, ResultStrategy::ExplicitDefault(default)).unwrap_or_default()
}

// --- Exact date --------------------------------------------------------------------

/// Parse a calendar value against `strftime` formats with an explicit strategy.
///
/// Formats are tried in order. A `/` in a format matches the culture's date
/// separator.
pub fn parse_exact_with<T: TryParseDateExact>(
    text: &str,
    formats: &[&str],
    culture: &Culture,
    styles: DateStyles,
    strategy: ResultStrategy<T>,
) -> Option<T> {
    invoke(T::TYPE_NAME, ArgumentShape::DateExact, text, strategy, |text| {
        T::try_parse_exact(text, formats, culture, styles)
    })
}

/// Parse a calendar value against `strftime` formats, or return `T::default()`.
///
/// Only calendar types qualify:
///
/// ```compile_fail
/// use autoparse::{Culture, DateStyles, parse_exact};
///
/// let _ = parse_exact::<i32>("20160131", &["%Y%m%d"], Culture::invariant(), DateStyles::empty());
/// ```
pub fn parse_exact<T: TryParseDateExact>(text: &str, formats: &[&str], culture: &Culture, styles: DateStyles) -> T {
    parse_exact_with(text, formats, culture, styles, ResultStrategy::ImplicitDefault).unwrap_or_default()
}

pub fn parse_exact_optional<T: TryParseDateExact>(
    text: &str,
    formats: &[&str],
    culture: &Culture,
    styles: DateStyles,
) -> Option<T> {
    parse_exact_with(text, formats, culture, styles, ResultStrategy::Optional)
}

pub fn parse_exact_or_default<T: TryParseDateExact>(
    text: &str,
    formats: &[&str],
    culture: &Culture,
    styles: DateStyles,
    default: T,
) -> T {
    parse_exact_with(text, formats, culture, styles, ResultStrategy::ExplicitDefault(default)).unwrap_or_default()
}

// --- Extension trait -----------------------------------------------------------

/// The entry points as methods on `str`.
///
/// ```
/// use autoparse::ParseExt;
///
/// assert_eq!("0009998".parse_or_zero::<i64>(), 9998);
/// assert_eq!("nope".parse_opt::<f64>(), None);
/// assert_eq!("ab".parse_or::<char>('a'), 'a');
/// ```
pub trait ParseExt {
    fn parse_or_zero<T: TryParse>(&self) -> T;
    fn parse_opt<T: TryParse>(&self) -> Option<T>;
    fn parse_or<T: TryParse>(&self, default: T) -> T;

    fn parse_numeric_or_zero<T: TryParseNumeric>(&self, styles: NumberStyles, culture: &Culture) -> T;
    fn parse_numeric_opt<T: TryParseNumeric>(&self, styles: NumberStyles, culture: &Culture) -> Option<T>;
    fn parse_numeric_or<T: TryParseNumeric>(&self, styles: NumberStyles, culture: &Culture, default: T) -> T;

    fn parse_date_or_zero<T: TryParseDate>(&self, culture: &Culture, styles: DateStyles) -> T;
    fn parse_date_opt<T: TryParseDate>(&self, culture: &Culture, styles: DateStyles) -> Option<T>;
    fn parse_date_or<T: TryParseDate>(&self, culture: &Culture, styles: DateStyles, default: T) -> T;

    fn parse_exact_opt<T: TryParseDateExact>(&self, formats: &[&str], culture: &Culture, styles: DateStyles)
    -> Option<T>;
}

impl ParseExt for str {
    fn parse_or_zero<T: TryParse>(&self) -> T {
        parse(self)
    }

    fn parse_opt<T: TryParse>(&self) -> Option<T> {
        parse_optional(self)
    }

    fn parse_or<T: TryParse>(&self, default: T) -> T {
        parse_or_default(self, default)
    }

    fn parse_numeric_or_zero<T: TryParseNumeric>(&self, styles: NumberStyles, culture: &Culture) -> T {
        parse_numeric(self, styles, culture)
    }

    fn parse_numeric_opt<T: TryParseNumeric>(&self, styles: NumberStyles, culture: &Culture) -> Option<T> {
        parse_numeric_optional(self, styles, culture)
    }

    fn parse_numeric_or<T: TryParseNumeric>(&self, styles: NumberStyles, culture: &Culture, default: T) -> T {
        parse_numeric_or_default(self, styles, culture, default)
    }

    fn parse_date_or_zero<T: TryParseDate>(&self, culture: &Culture, styles: DateStyles) -> T {
        parse_date(self, culture, styles)
    }

    fn parse_date_opt<T: TryParseDate>(&self, culture: &Culture, styles: DateStyles) -> Option<T> {
        parse_date_optional(self, culture, styles)
    }

    fn parse_date_or<T: TryParseDate>(&self, culture: &Culture, styles: DateStyles, default: T) -> T {
        parse_date_or_default(self, culture, styles, default)
    }

    fn parse_exact_opt<T: TryParseDateExact>(
        &self,
        formats: &[&str],
        culture: &Culture,
        styles: DateStyles,
    ) -> Option<T> {
        parse_exact_optional(self, formats, culture, styles)
    }
}
