//! The early-exit result of every callback invocation.
//!
//! A callback either continues with an ordinary value or requests an
//! immediate unwind of the enclosing iteration, carrying a value that becomes
//! the result of the whole combinator.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::control::ControlSignal;
//! use enumerable::value::Value;
//!
//! let proceed: ControlSignal = ControlSignal::Continue(Value::from(1));
//! let stop: ControlSignal = ControlSignal::Break(Value::symbol("stopped"));
//!
//! assert!(proceed.is_continue());
//! assert_eq!(stop.break_value(), Some(Value::symbol("stopped")));
//! ```

use std::ops::ControlFlow;

use crate::error::EnumerableError;
use crate::value::Value;

/// `Continue(value)` or `Break(value)`.
///
/// The `Continue` payload type varies by combinator (`Vec<Value>` for `map`,
/// `bool` for `all`, ...); a `Break` payload is always a [`Value`] because it
/// comes from an arbitrary callback.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a Break must be propagated, not dropped"]
pub enum ControlSignal<C = Value> {
    /// Ordinary completion.
    Continue(C),
    /// Request to stop the enclosing iteration with this value.
    Break(Value),
}

/// The result of a combinator: an error, or a [`ControlSignal`].
pub type Outcome<C = Value> = Result<ControlSignal<C>, EnumerableError>;

impl<C> ControlSignal<C> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Break`.
    #[inline]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break(_))
    }

    /// Returns `true` if this is a `Continue`.
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the continue payload, if any.
    #[inline]
    pub fn continue_value(self) -> Option<C> {
        match self {
            Self::Continue(value) => Some(value),
            Self::Break(_) => None,
        }
    }

    /// Returns the break payload, if any.
    #[inline]
    pub fn break_value(self) -> Option<Value> {
        match self {
            Self::Continue(_) => None,
            Self::Break(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the continue payload, leaving a `Break` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::control::ControlSignal;
    /// use enumerable::value::Value;
    ///
    /// let signal: ControlSignal<Vec<Value>> = ControlSignal::Continue(vec![Value::from(1)]);
    /// assert_eq!(signal.map_continue(|items| items.len()), ControlSignal::Continue(1));
    /// ```
    #[inline]
    pub fn map_continue<T, F>(self, function: F) -> ControlSignal<T>
    where
        F: FnOnce(C) -> T,
    {
        match self {
            Self::Continue(value) => ControlSignal::Continue(function(value)),
            Self::Break(value) => ControlSignal::Break(value),
        }
    }

    /// Chains a computation on the continue payload.
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> ControlSignal<T>
    where
        F: FnOnce(C) -> ControlSignal<T>,
    {
        match self {
            Self::Continue(value) => function(value),
            Self::Break(value) => ControlSignal::Break(value),
        }
    }

    /// Eliminates the signal by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, continue_function: F, break_function: G) -> T
    where
        F: FnOnce(C) -> T,
        G: FnOnce(Value) -> T,
    {
        match self {
            Self::Continue(value) => continue_function(value),
            Self::Break(value) => break_function(value),
        }
    }

    /// Converts into the standard library's `ControlFlow`.
    #[inline]
    pub fn into_control_flow(self) -> ControlFlow<Value, C> {
        match self {
            Self::Continue(value) => ControlFlow::Continue(value),
            Self::Break(value) => ControlFlow::Break(value),
        }
    }
}

impl<C: Into<Value>> ControlSignal<C> {
    /// Collapses the signal into the value a caller observes: the continue
    /// payload converted to a [`Value`], or the broken value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::control::ControlSignal;
    /// use enumerable::value::Value;
    ///
    /// let broken: ControlSignal<Vec<Value>> = ControlSignal::Break(Value::symbol("x"));
    /// assert_eq!(broken.into_value(), Value::symbol("x"));
    ///
    /// let done: ControlSignal<bool> = ControlSignal::Continue(true);
    /// assert_eq!(done.into_value(), Value::Bool(true));
    /// ```
    #[inline]
    pub fn into_value(self) -> Value {
        self.fold(Into::into, |value| value)
    }
}

impl<C> From<ControlFlow<Value, C>> for ControlSignal<C> {
    fn from(flow: ControlFlow<Value, C>) -> Self {
        match flow {
            ControlFlow::Continue(value) => Self::Continue(value),
            ControlFlow::Break(value) => Self::Break(value),
        }
    }
}

/// Unwraps a `Continue` payload, or returns `Ok(Break(..))` from the
/// enclosing function.
///
/// The enclosing function must return an [`Outcome`]. Combine with `?` to
/// propagate errors first: `proceed!(block.call(arguments)?)`.
///
/// # Examples
///
/// ```rust
/// use enumerable::control::{ControlSignal, Outcome};
/// use enumerable::proceed;
/// use enumerable::value::Value;
///
/// fn double(signal: ControlSignal<i64>) -> Outcome<i64> {
///     let value = proceed!(signal);
///     Ok(ControlSignal::Continue(value * 2))
/// }
///
/// assert_eq!(double(ControlSignal::Continue(2)), Ok(ControlSignal::Continue(4)));
/// assert_eq!(
///     double(ControlSignal::Break(Value::Nil)),
///     Ok(ControlSignal::Break(Value::Nil))
/// );
/// ```
#[macro_export]
macro_rules! proceed {
    ($signal:expr) => {
        match $signal {
            $crate::control::ControlSignal::Continue(value) => value,
            $crate::control::ControlSignal::Break(value) => {
                return Ok($crate::control::ControlSignal::Break(value));
            }
        }
    };
}
