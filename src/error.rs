//! Errors.

/// Violated precondition of an operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A domain must have at least one element.
    #[error("domain set cannot be empty")]
    EmptyDomain,

    #[error("index {index} is out of bounds for {len} bijections")]
    IndexOutOfBounds { index: i128, len: usize },

    /// A bijection was applied to a value outside of its domain.
    #[error("element is not in the domain")]
    NotInDomain,

    #[error("images are not an ordering of the domain")]
    NotAPermutation,

    #[error("bijections are defined on different domains")]
    DomainMismatch,

    /// An inverse was applied to an element that has no preimage in the carrier set.
    #[error("function has no inverse over the carrier set")]
    NoPreimage,
}
