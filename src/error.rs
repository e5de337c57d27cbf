//! Error types for sugerir.
//!
//! Absence of input is never an error in this crate: an empty catalog
//! builds an empty index, and an unknown title yields an empty
//! recommendation list. Errors are reserved for genuine misuse of the
//! API surface: querying an engine that has no catalog yet, or
//! addressing a row that does not exist.

use thiserror::Error;

/// Errors surfaced by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SugerirError {
    /// A query reached an engine that has not been fit with a catalog.
    ///
    /// Distinct from an unknown title: "not built yet" is a caller bug,
    /// "not found" is an empty result.
    #[error("engine is not fitted: call fit() with a catalog before querying")]
    NotFitted,

    /// A row-addressed query named a row outside the catalog.
    #[error("row {row} is out of bounds for a catalog of {len} items")]
    RowOutOfBounds {
        /// The offending row index.
        row: usize,
        /// Number of rows in the catalog.
        len: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SugerirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_fitted_display() {
        let err = SugerirError::NotFitted;
        assert_eq!(
            err.to_string(),
            "engine is not fitted: call fit() with a catalog before querying"
        );
    }

    #[test]
    fn test_row_out_of_bounds_display() {
        let err = SugerirError::RowOutOfBounds { row: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "row 7 is out of bounds for a catalog of 3 items"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(SugerirError::NotFitted, SugerirError::NotFitted);
        assert_ne!(
            SugerirError::NotFitted,
            SugerirError::RowOutOfBounds { row: 0, len: 0 }
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SugerirError>();
    }
}
