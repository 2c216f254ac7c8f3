/// The result of one parse attempt: a success flag and a value.
///
/// The value is always initialized. When the attempt failed it is the type's
/// zero-value (`T::default()`), which is what
/// [`ResultStrategy::ImplicitDefault`](crate::ResultStrategy::ImplicitDefault)
/// hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOutcome<T> {
    succeeded: bool,
    value: T,
}

impl<T: Default> ParseOutcome<T> {
    pub fn success(value: T) -> Self {
        ParseOutcome { succeeded: true, value }
    }

    pub fn failure() -> Self {
        ParseOutcome { succeeded: false, value: T::default() }
    }

    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(Self::failure, Self::success)
    }
}

impl<T> ParseOutcome<T> {
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The value, whether or not the attempt succeeded.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_option(self) -> Option<T> {
        if self.succeeded { Some(self.value) } else { None }
    }

    /// Convert the value, keeping the success flag. A failed outcome maps its
    /// zero-value, so the result still carries the zero-value of the source type.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        ParseOutcome { succeeded: self.succeeded, value: f(self.value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_holds_the_zero_value() {
        let outcome = ParseOutcome::<i32>::failure();
        assert!(!outcome.succeeded());
        assert_eq!(*outcome.value(), 0);
        assert_eq!(outcome.into_option(), None);

        let outcome = ParseOutcome::<char>::from_option(None);
        assert_eq!(outcome.into_value(), '\0');
    }

    #[test]
    fn map_keeps_the_flag() {
        let outcome = ParseOutcome::success(21u8).map(|v| u32::from(v) * 2);
        assert!(outcome.succeeded());
        assert_eq!(outcome.into_option(), Some(42));

        let outcome = ParseOutcome::<u8>::failure().map(|v| u32::from(v) + 1);
        assert!(!outcome.succeeded());
        assert_eq!(*outcome.value(), 1);
    }
}
