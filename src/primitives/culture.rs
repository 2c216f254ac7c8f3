//! Culture tables: the formatting conventions numeric and date parsing defer to.
//!
//! A [`Culture`] is plain data. The built-in tables are `static`s and are
//! looked up by name through a lazily built index, so `Culture::by_name` is a
//! hash lookup after the first call.

use crate::ParseError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Order of the day, month and year fields in an all-numeric date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// Number and date conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    pub name: &'static str,
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
    pub negative_sign: &'static str,
    pub positive_sign: &'static str,
    pub currency_symbol: &'static str,
    pub date_order: DateOrder,
    pub date_separator: &'static str,
}

static INVARIANT: Culture = Culture {
    name: "invariant",
    decimal_separator: ".",
    group_separator: ",",
    negative_sign: "-",
    positive_sign: "+",
    currency_symbol: "\u{a4}",
    date_order: DateOrder::MonthDayYear,
    date_separator: "/",
};

static BUILTIN: &[Culture] = &[
    Culture {
        name: "en-US",
        decimal_separator: ".",
        group_separator: ",",
        negative_sign: "-",
        positive_sign: "+",
        currency_symbol: "$",
        date_order: DateOrder::MonthDayYear,
        date_separator: "/",
    },
    Culture {
        name: "en-GB",
        decimal_separator: ".",
        group_separator: ",",
        negative_sign: "-",
        positive_sign: "+",
        currency_symbol: "\u{a3}",
        date_order: DateOrder::DayMonthYear,
        date_separator: "/",
    },
    Culture {
        name: "de-DE",
        decimal_separator: ",",
        group_separator: ".",
        negative_sign: "-",
        positive_sign: "+",
        currency_symbol: "\u{20ac}",
        date_order: DateOrder::DayMonthYear,
        date_separator: ".",
    },
    Culture {
        name: "fr-FR",
        decimal_separator: ",",
        group_separator: "\u{202f}",
        negative_sign: "-",
        positive_sign: "+",
        currency_symbol: "\u{20ac}",
        date_order: DateOrder::DayMonthYear,
        date_separator: "/",
    },
    Culture {
        name: "sv-SE",
        decimal_separator: ",",
        group_separator: "\u{a0}",
        negative_sign: "\u{2212}",
        positive_sign: "+",
        currency_symbol: "kr",
        date_order: DateOrder::YearMonthDay,
        date_separator: "-",
    },
    Culture {
        name: "ja-JP",
        decimal_separator: ".",
        group_separator: ",",
        negative_sign: "-",
        positive_sign: "+",
        currency_symbol: "\u{a5}",
        date_order: DateOrder::YearMonthDay,
        date_separator: "/",
    },
];

static BY_NAME: Lazy<HashMap<String, &'static Culture>> = Lazy::new(|| {
    let mut index: HashMap<String, &'static Culture> = HashMap::new();
    index.insert(INVARIANT.name.to_string(), &INVARIANT);
    index.insert(String::new(), &INVARIANT);
    for culture in BUILTIN {
        index.insert(culture.name.to_ascii_lowercase(), culture);
        // Also reachable by bare language tag; the first culture listed wins.
        let language = culture.name.split('-').next().unwrap_or(culture.name);
        index.entry(language.to_ascii_lowercase()).or_insert(culture);
    }
    index
});

impl Culture {
    /// The culture-neutral table used by the plain entry points.
    pub fn invariant() -> &'static Culture {
        &INVARIANT
    }

    /// Look up a built-in culture by tag (`"de-DE"`, `"de_de"`, `"de"`), or
    /// `"invariant"`. Case-insensitive.
    pub fn by_name(name: &str) -> Option<&'static Culture> {
        let key = name.trim().replace('_', "-").to_ascii_lowercase();
        BY_NAME.get(&key).copied()
    }

    /// [`Culture::by_name`], with unknown names reported as an error.
    pub fn lookup(name: &str) -> Result<&'static Culture, ParseError> {
        Culture::by_name(name).ok_or_else(|| ParseError::UnknownCulture(name.trim().to_string()))
    }

    /// Names of every built-in culture, invariant first.
    pub fn names() -> impl Iterator<Item = &'static str> {
        std::iter::once(INVARIANT.name).chain(BUILTIN.iter().map(|c| c.name))
    }

    /// Strip this culture's negative sign from the front of `candidate`. The
    /// ASCII hyphen is always accepted as well.
    pub(crate) fn strip_negative<'t>(&self, candidate: &'t str) -> Option<&'t str> {
        candidate.strip_prefix(self.negative_sign).or_else(|| candidate.strip_prefix('-'))
    }

    pub(crate) fn strip_negative_suffix<'t>(&self, candidate: &'t str) -> Option<&'t str> {
        candidate.strip_suffix(self.negative_sign).or_else(|| candidate.strip_suffix('-'))
    }

    /// Strip a group separator from the front of `candidate`. When the
    /// culture groups with a space-like character, any of the common space
    /// characters is accepted in its place.
    pub(crate) fn strip_group<'t>(&self, candidate: &'t str) -> Option<&'t str> {
        if let Some(rest) = candidate.strip_prefix(self.group_separator) {
            return Some(rest);
        }
        if self.group_separator.chars().all(char::is_whitespace) {
            return candidate.strip_prefix([' ', '\u{a0}', '\u{202f}']);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_and_separator_insensitive() {
        assert_eq!(Culture::by_name("de-DE").map(|c| c.name), Some("de-DE"));
        assert_eq!(Culture::by_name("DE_de").map(|c| c.name), Some("de-DE"));
        assert_eq!(Culture::by_name("sv").map(|c| c.name), Some("sv-SE"));
        assert_eq!(Culture::by_name("en").map(|c| c.name), Some("en-US"));
        assert_eq!(Culture::by_name("Invariant").map(|c| c.name), Some("invariant"));
        assert!(Culture::by_name("xx-YY").is_none());
        assert_eq!(Culture::lookup("xx-YY"), Err(ParseError::UnknownCulture("xx-YY".to_string())));
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in Culture::names() {
            assert!(Culture::by_name(name).is_some(), "culture '{}' not indexed", name);
        }
    }

    #[test]
    fn space_grouping_accepts_any_space_character() {
        let fr = Culture::by_name("fr-FR").unwrap();
        assert_eq!(fr.strip_group(" 000"), Some("000"));
        assert_eq!(fr.strip_group("\u{a0}000"), Some("000"));
        assert_eq!(fr.strip_group(".000"), None);

        let de = Culture::by_name("de-DE").unwrap();
        assert_eq!(de.strip_group(" 000"), None);
    }

    #[test]
    fn ascii_hyphen_is_always_a_negative_sign() {
        let sv = Culture::by_name("sv-SE").unwrap();
        assert_eq!(sv.strip_negative("\u{2212}5"), Some("5"));
        assert_eq!(sv.strip_negative("-5"), Some("5"));
        assert_eq!(sv.strip_negative("5"), None);
    }
}
