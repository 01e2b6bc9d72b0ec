//! Error types for the enumeration engine.
//!
//! Every combinator returns [`Outcome`](crate::control::Outcome), which is a
//! `Result` over [`EnumerableError`]. Errors are raised synchronously at the
//! point of detection and unwind the whole combinator call; a
//! [`ControlSignal::Break`](crate::control::ControlSignal::Break) is not an
//! error and never appears here.

use thiserror::Error;

/// Errors raised by combinators, sources, and callbacks.
///
/// # Examples
///
/// ```rust
/// use enumerable::EnumerableError;
///
/// let error = EnumerableError::argument("attempt to take negative size");
/// assert_eq!(error.to_string(), "argument error: attempt to take negative size");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerableError {
    /// An argument was out of range: a negative take/drop count or a
    /// non-positive slice window.
    #[error("argument error: {0}")]
    Argument(String),

    /// A mandatory block was not supplied while elements were present.
    #[error("no block given")]
    MissingBlock,

    /// A comparison could not be reduced to a three-way result.
    #[error("comparison of {left} with {right} failed")]
    Comparison {
        /// Inspection of the left operand.
        left: String,
        /// Inspection of the right operand.
        right: String,
    },

    /// A binary operator is undefined for the operand pair.
    #[error("undefined operator `{operator}` for {left} and {right}")]
    Operator {
        /// The operator symbol.
        operator: &'static str,
        /// Inspection of the left operand.
        left: String,
        /// Inspection of the right operand.
        right: String,
    },

    /// An error raised by a host callback or iteration source.
    #[error("{0}")]
    Raised(String),
}

impl EnumerableError {
    /// Creates an [`EnumerableError::Argument`] and logs it.
    pub fn argument(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "argument error");
        Self::Argument(message)
    }

    /// Creates an [`EnumerableError::Comparison`] from the two operands.
    pub fn comparison(left: &crate::value::Value, right: &crate::value::Value) -> Self {
        let (left, right) = (left.inspect(), right.inspect());
        tracing::debug!(%left, %right, "comparison failed");
        Self::Comparison { left, right }
    }

    /// Returns `true` if this is an argument error.
    #[inline]
    pub const fn is_argument(&self) -> bool {
        matches!(self, Self::Argument(_))
    }
}
