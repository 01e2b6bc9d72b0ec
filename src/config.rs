//! Per-call options for the windowing and cycling combinators.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::config::{Cycles, SliceOptions};
//!
//! assert_eq!(Cycles::from(None), Cycles::Forever);
//! assert_eq!(Cycles::from(Some(2)), Cycles::Times(2));
//! assert!(SliceOptions::default().include_partial);
//! assert!(!SliceOptions::default().with_partial(false).include_partial);
//! ```

/// How many passes `cycle` makes over its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cycles {
    /// Repeat until a callback breaks.
    #[default]
    Forever,
    /// Repeat this many times; zero or negative makes no pass at all.
    Times(i64),
}

impl Cycles {
    /// Returns `true` if no pass will be made.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Times(count) if count <= 0)
    }

    /// Returns `true` if more than one pass will be made, so the first pass
    /// must be buffered.
    pub const fn repeats(self) -> bool {
        match self {
            Self::Forever => true,
            Self::Times(count) => count > 1,
        }
    }
}

/// `None` and `i64::MAX` both mean forever.
impl From<Option<i64>> for Cycles {
    fn from(count: Option<i64>) -> Self {
        match count {
            None | Some(i64::MAX) => Self::Forever,
            Some(count) => Self::Times(count),
        }
    }
}

impl From<i64> for Cycles {
    fn from(count: i64) -> Self {
        Self::from(Some(count))
    }
}

/// Options for `each_slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceOptions {
    /// Emit the trailing window even when it holds fewer than `n` elements.
    pub include_partial: bool,
}

impl SliceOptions {
    /// Returns a copy with `include_partial` set.
    #[must_use]
    pub const fn with_partial(mut self, include_partial: bool) -> Self {
        self.include_partial = include_partial;
        self
    }
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            include_partial: true,
        }
    }
}
