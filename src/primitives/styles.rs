//! Style flags for numeric and date parsing.
//!
//! Both flag sets can be read from a list of names separated by `,` or `|`
//! (`"allow-thousands, allow_decimal_point"`, `"FLOAT | ALLOW_THOUSANDS"`).
//! The empty list and `none` both mean no flags.

use crate::ParseError;

bitflags::bitflags! {
    /// Which lexical elements a numeric input may contain.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NumberStyles: u32 {
        const ALLOW_LEADING_WHITE   = 1 << 0;
        const ALLOW_TRAILING_WHITE  = 1 << 1;
        const ALLOW_LEADING_SIGN    = 1 << 2;
        const ALLOW_TRAILING_SIGN   = 1 << 3;
        const ALLOW_PARENTHESES     = 1 << 4;
        const ALLOW_DECIMAL_POINT   = 1 << 5;
        const ALLOW_THOUSANDS       = 1 << 6;
        const ALLOW_EXPONENT        = 1 << 7;
        const ALLOW_CURRENCY_SYMBOL = 1 << 8;
        const ALLOW_HEX_SPECIFIER   = 1 << 9;

        const INTEGER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_LEADING_SIGN.bits();
        const HEX_NUMBER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_HEX_SPECIFIER.bits();
        const NUMBER = Self::INTEGER.bits()
            | Self::ALLOW_TRAILING_SIGN.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_THOUSANDS.bits();
        const FLOAT = Self::INTEGER.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_EXPONENT.bits();
        const CURRENCY = Self::NUMBER.bits()
            | Self::ALLOW_PARENTHESES.bits()
            | Self::ALLOW_CURRENCY_SYMBOL.bits();
        const ANY = Self::CURRENCY.bits() | Self::ALLOW_EXPONENT.bits();
    }
}

bitflags::bitflags! {
    /// How a date input may be laid out and how its value is adjusted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DateStyles: u32 {
        const ALLOW_LEADING_WHITE     = 1 << 0;
        const ALLOW_TRAILING_WHITE    = 1 << 1;
        const ALLOW_INNER_WHITE       = 1 << 2;
        /// Time-only input gets `0001-01-01` instead of today's date.
        const NO_CURRENT_DATE_DEFAULT = 1 << 3;
        /// Subtract a parsed UTC offset so the result is UTC wall time.
        const ADJUST_TO_UNIVERSAL     = 1 << 4;

        const ALLOW_WHITESPACES = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_INNER_WHITE.bits();
    }
}

impl NumberStyles {
    /// Parse a `,`/`|` separated list of flag names.
    pub fn from_names(list: &str) -> Result<Self, ParseError> {
        parse_flag_list(list, "number", Self::from_name, Self::empty())
    }
}

impl DateStyles {
    /// Parse a `,`/`|` separated list of flag names.
    pub fn from_names(list: &str) -> Result<Self, ParseError> {
        parse_flag_list(list, "date", Self::from_name, Self::empty())
    }
}

impl Default for NumberStyles {
    fn default() -> Self {
        NumberStyles::INTEGER
    }
}

impl Default for DateStyles {
    fn default() -> Self {
        DateStyles::ALLOW_WHITESPACES
    }
}

fn parse_flag_list<F>(
    list: &str,
    family: &'static str,
    lookup: fn(&str) -> Option<F>,
    empty: F,
) -> Result<F, ParseError>
where
    F: std::ops::BitOr<Output = F> + Copy,
{
    let mut flags = empty;
    for raw in list.split([',', '|']) {
        let name = raw.trim().replace('-', "_").to_ascii_uppercase();
        if name.is_empty() || name == "NONE" {
            continue;
        }
        let flag = lookup(&name).ok_or_else(|| ParseError::InvalidStyle { family, name: raw.trim().to_string() })?;
        flags = flags | flag;
    }
    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composites_match_their_parts() {
        assert!(NumberStyles::FLOAT.contains(NumberStyles::ALLOW_EXPONENT));
        assert!(NumberStyles::NUMBER.contains(NumberStyles::ALLOW_THOUSANDS));
        assert!(!NumberStyles::INTEGER.contains(NumberStyles::ALLOW_DECIMAL_POINT));
        assert!(NumberStyles::ANY.contains(NumberStyles::CURRENCY));
        assert!(DateStyles::ALLOW_WHITESPACES.contains(DateStyles::ALLOW_INNER_WHITE));
    }

    #[test]
    fn flag_lists_accept_mixed_spelling() {
        let styles = NumberStyles::from_names("float | allow-thousands").unwrap();
        assert_eq!(styles, NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS);

        let styles = DateStyles::from_names("no_current_date_default,ADJUST_TO_UNIVERSAL").unwrap();
        assert_eq!(styles, DateStyles::NO_CURRENT_DATE_DEFAULT | DateStyles::ADJUST_TO_UNIVERSAL);

        assert_eq!(NumberStyles::from_names("none").unwrap(), NumberStyles::empty());
        assert_eq!(DateStyles::from_names("").unwrap(), DateStyles::empty());
    }

    #[test]
    fn unknown_flag_names_are_rejected() {
        let err = NumberStyles::from_names("float, allow_magic").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStyle { family: "number", ref name } if name == "allow_magic"));
    }
}
