//! Ordering tables for the grammar categories.
//!
//! Category values carry no traversal logic of their own. Each category type
//! publishes its declaration order once through [`Ordered::ORDER`], and the
//! free functions below walk that table. The order is part of the public
//! contract: it decides the order in which sentence variants are produced.

/// A closed category whose values have a fixed, total order.
pub trait Ordered: Copy + Eq + 'static {
    /// Every value of the category, lowest first. Never empty.
    const ORDER: &'static [Self];
}

/// Result of advancing a category value.
///
/// `Exhausted` is a normal outcome, not an error: there is no wraparound and
/// the caller decides whether to go back to [`first`] or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    Next(T),
    Exhausted,
}

impl<T> Step<T> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }

    pub fn next(self) -> Option<T> {
        match self {
            Step::Next(value) => Some(value),
            Step::Exhausted => None,
        }
    }
}

/// Lowest-ordered value of `T`.
pub fn first<T: Ordered>() -> T {
    T::ORDER[0]
}

/// The value ordered directly after `value`, or `Step::Exhausted` when
/// `value` is already the last one.
pub fn next<T: Ordered>(value: T) -> Step<T> {
    match T::ORDER.get(ordinal(value) + 1) {
        Some(following) => Step::Next(*following),
        None => Step::Exhausted,
    }
}

/// Zero-based position of `value` in its ordering table.
pub fn ordinal<T: Ordered>(value: T) -> usize {
    T::ORDER
        .iter()
        .position(|candidate| *candidate == value)
        .unwrap_or(T::ORDER.len())
}

/// All values of `T` in declaration order.
pub fn all<T: Ordered>() -> &'static [T] {
    T::ORDER
}
