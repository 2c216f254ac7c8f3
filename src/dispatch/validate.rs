use super::ValueKind;
use crate::ParseError;
use std::fmt;

/// The signature family an entry point uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentShape {
    /// Text only.
    Plain,
    /// Text, [`NumberStyles`](crate::NumberStyles), [`Culture`](crate::Culture).
    NumericStyled,
    /// Text, [`Culture`](crate::Culture), [`DateStyles`](crate::DateStyles).
    DateStyled,
    /// Text, formats, [`Culture`](crate::Culture), [`DateStyles`](crate::DateStyles).
    DateExact,
}

impl fmt::Display for ArgumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgumentShape::Plain => "plain",
            ArgumentShape::NumericStyled => "numeric-styled",
            ArgumentShape::DateStyled => "date-styled",
            ArgumentShape::DateExact => "exact-date",
        };
        f.write_str(name)
    }
}

/// Check that `kind` can be parsed with `shape`.
///
/// Numeric styles are refused for booleans, characters and calendar kinds;
/// date styles and exact formats are refused for everything but calendar
/// kinds. This runs on every runtime dispatch; the static entry points get the
/// same guarantee from trait bounds.
pub fn validate(kind: ValueKind, shape: ArgumentShape) -> Result<(), ParseError> {
    let compatible = match shape {
        ArgumentShape::Plain => true,
        ArgumentShape::NumericStyled => kind.is_numeric(),
        ArgumentShape::DateStyled | ArgumentShape::DateExact => kind.is_calendar(),
    };

    if compatible {
        Ok(())
    } else {
        tracing::debug!(kind = kind.name(), %shape, "rejected incompatible parse mode");
        Err(ParseError::IncompatibleMode { kind, shape })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_accepts_every_kind() {
        for kind in ValueKind::ALL {
            assert!(validate(*kind, ArgumentShape::Plain).is_ok(), "{:?}", kind);
        }
    }

    #[test]
    fn numeric_styles_refuse_bool_char_and_dates() {
        assert!(validate(ValueKind::I32, ArgumentShape::NumericStyled).is_ok());
        assert!(validate(ValueKind::F64, ArgumentShape::NumericStyled).is_ok());

        for kind in [ValueKind::Bool, ValueKind::Char, ValueKind::DateTime, ValueKind::Date] {
            let err = validate(kind, ArgumentShape::NumericStyled).unwrap_err();
            assert!(matches!(err, ParseError::IncompatibleMode { kind: k, shape: ArgumentShape::NumericStyled } if k == kind));
        }
    }

    #[test]
    fn date_shapes_refuse_non_calendar_kinds() {
        for shape in [ArgumentShape::DateStyled, ArgumentShape::DateExact] {
            assert!(validate(ValueKind::DateTime, shape).is_ok());
            assert!(validate(ValueKind::Date, shape).is_ok());
            assert!(validate(ValueKind::I32, shape).is_err());
            assert!(validate(ValueKind::Bool, shape).is_err());
            assert!(validate(ValueKind::F32, shape).is_err());
        }
    }
}
