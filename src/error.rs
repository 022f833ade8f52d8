//! Error types for the set-algebra engine.
//!
//! The only runtime failure in this crate is a request that the universal
//! set be enumerated or materialized: asking for its length, iterating it,
//! or computing a complement whose result would be unbounded. Construction
//! of new singleton instances and operations on non-set operands are
//! rejected at compile time and therefore have no error type here.

/// Represents a request for a finite view of an unbounded set.
///
/// Returned when code asks for the length or the elements of [`UNIVERSE`],
/// or for a set difference / symmetric difference whose result would be the
/// complement of a non-empty finite set (which has no finite
/// representation).
///
/// [`UNIVERSE`]: crate::singleton::UNIVERSE
///
/// # Examples
///
/// ```rust
/// use symset::error::UnboundedError;
/// use symset::singleton::UNIVERSE;
///
/// let error = UNIVERSE.try_len().unwrap_err();
/// assert_eq!(error, UnboundedError { operation: "len" });
/// assert_eq!(
///     format!("{}", error),
///     "Universe::len: infinite set has no finite representation"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnboundedError {
    /// The name of the operation that requested the finite view.
    pub operation: &'static str,
}

impl UnboundedError {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for UnboundedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Universe::{}: infinite set has no finite representation",
            self.operation
        )
    }
}

impl std::error::Error for UnboundedError {}

/// Represents errors that can occur in the set-algebra engine.
///
/// This enum provides a unified error type for the crate. Currently, it
/// only contains `Unbounded`, but it is designed to be extensible for
/// future error types.
///
/// # Examples
///
/// ```rust
/// use symset::error::{SymsetError, UnboundedError};
///
/// let error = SymsetError::Unbounded(UnboundedError { operation: "iter" });
/// assert_eq!(
///     format!("{}", error),
///     "Universe::iter: infinite set has no finite representation"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymsetError {
    /// The operation requested a finite view of an unbounded set.
    Unbounded(UnboundedError),
}

impl std::fmt::Display for SymsetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SymsetError {}

impl From<UnboundedError> for SymsetError {
    fn from(error: UnboundedError) -> Self {
        Self::Unbounded(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_error_display() {
        let error = UnboundedError { operation: "len" };
        assert_eq!(
            format!("{error}"),
            "Universe::len: infinite set has no finite representation"
        );
    }

    #[test]
    fn test_symset_error_display() {
        let error = SymsetError::Unbounded(UnboundedError {
            operation: "difference",
        });
        assert_eq!(
            format!("{error}"),
            "Universe::difference: infinite set has no finite representation"
        );
    }

    #[test]
    fn test_symset_error_from_unbounded() {
        let error: SymsetError = UnboundedError { operation: "iter" }.into();
        assert_eq!(error, SymsetError::Unbounded(UnboundedError { operation: "iter" }));
    }
}
