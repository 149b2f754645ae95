//! Error types produced by fallible erasure.
//!
//! Erasure itself cannot fail. The only error surfaced by this crate is [`Interrupted`], returned by
//! [`try_erase_if`](crate::try_erase_if) when the predicate gives up part way through a sweep.

use super::*;

/// A sweep that was stopped by a failing predicate.
///
/// Elements removed before the failure stay removed; the element the predicate failed on, and every element after
/// it, are left in the container in their original order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interrupted<E> {
    removed: usize,
    error: E,
}

impl<E> Interrupted<E> {
    /// Create a new [`Interrupted`] from the number of elements already removed and the predicate's error.
    pub fn new(removed: usize, error: E) -> Self {
        Self { removed, error }
    }

    /// The number of elements that were removed before the predicate failed.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// The error the predicate failed with.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Discard the removal count, keeping only the predicate's error.
    pub fn into_error(self) -> E {
        self.error
    }

    /// Split into the removal count and the predicate's error.
    pub fn into_parts(self) -> (usize, E) {
        (self.removed, self.error)
    }

    /// Map the error with the given function.
    pub fn map<U, F: FnOnce(E) -> U>(self, f: F) -> Interrupted<U> {
        Interrupted {
            removed: self.removed,
            error: f(self.error),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Interrupted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "predicate failed after removing {} element(s): {}",
            self.removed, self.error
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<E: std::error::Error + 'static> std::error::Error for Interrupted<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Unreadable;

    impl fmt::Display for Unreadable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unreadable element")
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for Unreadable {}

    #[test]
    fn display() {
        let err = Interrupted::new(3, Unreadable);
        assert_eq!(
            err.to_string(),
            "predicate failed after removing 3 element(s): unreadable element"
        );
    }

    #[test]
    fn accessors() {
        let err = Interrupted::new(2, "boom");
        assert_eq!(err.removed(), 2);
        assert_eq!(*err.error(), "boom");
        assert_eq!(err.map(str::len).into_parts(), (2, 4));
    }

    #[cfg(feature = "std")]
    #[test]
    fn source_is_predicate_error() {
        use std::error::Error as _;

        let err = Interrupted::new(0, Unreadable);
        let source = err.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("unreadable element"));
    }
}
