//! Errors raised while appending fragments to a compound selector.

use super::FragmentKind;

/// A fragment that would break the compound selector grammar.
///
/// The node the fragment was offered to is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// A kind that may appear once per compound selector was appended again.
    #[error("duplicate {kind} fragment in compound selector")]
    DuplicateFragment {
        /// The repeated kind.
        kind: FragmentKind,
    },

    /// A kind was appended after a kind that ranks above it.
    #[error("{kind} fragment cannot follow {after} fragment")]
    OrderViolation {
        /// The rejected kind.
        kind: FragmentKind,
        /// The highest-ranked kind already present.
        after: FragmentKind,
    },
}

/// Result type for fragment operations.
pub type SelectorResult<T> = Result<T, SelectorError>;
