/// Compile a regex once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Implement the plain and numeric capabilities for integer types.
///
/// Each entry names the type and the unsigned type sharing its width, which is
/// used to reinterpret hex digits as a two's-complement bit pattern.
macro_rules! integer_capabilities {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl $crate::primitives::number::Integer for $ty {
                fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
                    if negative {
                        if magnitude > i128::MAX as u128 + 1 {
                            return None;
                        }
                        <$ty>::try_from((magnitude as i128).wrapping_neg()).ok()
                    } else {
                        <$ty>::try_from(magnitude).ok()
                    }
                }

                fn from_bits(bits: u128) -> Option<Self> {
                    let raw = <$bits>::try_from(bits).ok()?;
                    Some(raw as $ty)
                }
            }

            impl $crate::dispatch::TryParse for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn try_parse(text: &str) -> $crate::dispatch::ParseOutcome<Self> {
                    let culture = $crate::primitives::Culture::invariant();
                    $crate::dispatch::ParseOutcome::from_option($crate::primitives::number::parse_integer(
                        text,
                        $crate::primitives::NumberStyles::INTEGER,
                        culture,
                    ))
                }
            }

            impl $crate::dispatch::TryParseNumeric for $ty {
                fn try_parse_numeric(
                    text: &str,
                    styles: $crate::primitives::NumberStyles,
                    culture: &$crate::primitives::Culture,
                ) -> $crate::dispatch::ParseOutcome<Self> {
                    $crate::dispatch::ParseOutcome::from_option($crate::primitives::number::parse_integer(
                        text, styles, culture,
                    ))
                }
            }
        )*
    };
}

/// Implement the plain and numeric capabilities for floating-point types.
macro_rules! float_capabilities {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::dispatch::TryParse for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn try_parse(text: &str) -> $crate::dispatch::ParseOutcome<Self> {
                    let culture = $crate::primitives::Culture::invariant();
                    let styles = $crate::primitives::NumberStyles::FLOAT
                        | $crate::primitives::NumberStyles::ALLOW_THOUSANDS;
                    $crate::dispatch::ParseOutcome::from_option($crate::primitives::number::parse_float(
                        text, styles, culture,
                    ))
                }
            }

            impl $crate::dispatch::TryParseNumeric for $ty {
                fn try_parse_numeric(
                    text: &str,
                    styles: $crate::primitives::NumberStyles,
                    culture: &$crate::primitives::Culture,
                ) -> $crate::dispatch::ParseOutcome<Self> {
                    $crate::dispatch::ParseOutcome::from_option($crate::primitives::number::parse_float(
                        text, styles, culture,
                    ))
                }
            }
        )*
    };
}

/// Declare the dynamic value table: `ValueKind`, `Value`, and conversions
/// between `Value` and each concrete type.
macro_rules! value_table {
    ($($variant:ident($ty:ty) => $name:literal $(| $alias:literal)*),* $(,)?) => {
        /// Runtime identity of a supported value type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ValueKind {
            $($variant,)*
        }

        impl ValueKind {
            /// Every supported kind, in declaration order.
            pub const ALL: &'static [ValueKind] = &[$(ValueKind::$variant,)*];

            /// Canonical type name, as written in Rust source.
            pub fn name(self) -> &'static str {
                match self {
                    $(ValueKind::$variant => $name,)*
                }
            }

            /// Look up a kind by canonical name or alias (case-insensitive).
            pub fn from_name(name: &str) -> Option<ValueKind> {
                let lower = name.trim().to_ascii_lowercase();
                $(
                    if lower == $name.to_ascii_lowercase() $(|| lower == $alias)* {
                        return Some(ValueKind::$variant);
                    }
                )*
                None
            }
        }

        /// A parsed value of any supported type.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Value {
            $($variant($ty),)*
        }

        impl Value {
            pub fn kind(&self) -> ValueKind {
                match self {
                    $(Value::$variant(_) => ValueKind::$variant,)*
                }
            }
        }

        impl std::fmt::Display for Value {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Value::$variant(v) => std::fmt::Display::fmt(v, f),)*
                }
            }
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}
