use super::{ArgumentShape, ParseOutcome};

/// How a parse outcome is turned into the caller's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStrategy<T> {
    /// Always a value: the parsed one, or the zero-value the failed outcome carries.
    ImplicitDefault,
    /// `Some` only on success.
    Optional,
    /// The parsed value, or this fallback on failure.
    ExplicitDefault(T),
}

impl<T> ResultStrategy<T> {
    /// Shape `outcome`. Only [`ResultStrategy::Optional`] ever yields `None`.
    pub fn apply(self, outcome: ParseOutcome<T>) -> Option<T> {
        match self {
            ResultStrategy::ImplicitDefault => Some(outcome.into_value()),
            ResultStrategy::Optional => outcome.into_option(),
            ResultStrategy::ExplicitDefault(fallback) => {
                if outcome.succeeded() {
                    Some(outcome.into_value())
                } else {
                    Some(fallback)
                }
            }
        }
    }
}

/// Run `binding` on `text` exactly once and shape the outcome.
///
/// Every static entry point funnels through here, so this is the one place a
/// fallback is traced.
pub(crate) fn invoke<T>(
    type_name: &'static str,
    shape: ArgumentShape,
    text: &str,
    strategy: ResultStrategy<T>,
    binding: impl FnOnce(&str) -> ParseOutcome<T>,
) -> Option<T> {
    let outcome = binding(text);
    if !outcome.succeeded() {
        tracing::trace!(ty = type_name, %shape, text, "parse failed, applying fallback");
    }
    strategy.apply(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn implicit_default_returns_the_outcome_value() {
        assert_eq!(ResultStrategy::ImplicitDefault.apply(ParseOutcome::success(5)), Some(5));
        assert_eq!(ResultStrategy::ImplicitDefault.apply(ParseOutcome::<i32>::failure()), Some(0));
    }

    #[test]
    fn optional_never_disguises_failure() {
        assert_eq!(ResultStrategy::Optional.apply(ParseOutcome::success(0)), Some(0));
        assert_eq!(ResultStrategy::Optional.apply(ParseOutcome::<i32>::failure()), None);
    }

    #[test]
    fn explicit_default_only_on_failure() {
        assert_eq!(ResultStrategy::ExplicitDefault(9).apply(ParseOutcome::success(5)), Some(5));
        assert_eq!(ResultStrategy::ExplicitDefault(9).apply(ParseOutcome::<i32>::failure()), Some(9));
    }

    #[test]
    fn binding_runs_once() {
        let calls = Cell::new(0);
        let result = invoke("i32", ArgumentShape::Plain, "x", ResultStrategy::ExplicitDefault(3), |_| {
            calls.set(calls.get() + 1);
            ParseOutcome::<i32>::failure()
        });
        assert_eq!(result, Some(3));
        assert_eq!(calls.get(), 1);
    }
}
