//! Value-based generators driven by a transition rule.
//!
//! Both generators hold a current value and a rule `&T -> T`. They differ in
//! when the rule runs relative to producing a value:
//! - [`BuildGen`] yields the current value, then advances (first value is `start`)
//! - [`RollGen`] advances, then yields (first value is `rule(start)`)

use crate::core::Generator;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::sync::Arc;

/// Yield-then-advance generator.
///
/// # Example
///
/// ```rust
/// use endless::generators::BuildGen;
/// use endless::Generator;
///
/// let mut gen = BuildGen::new(2, |x: &i32| x * 2);
/// assert_eq!(gen.pull(), 2);
/// assert_eq!(gen.pull(), 4);
/// assert_eq!(gen.pull(), 8);
/// ```
pub struct BuildGen<T, F> {
    current: T,
    rule: Arc<F>,
}

impl<T, F> BuildGen<T, F>
where
    F: Fn(&T) -> T,
{
    /// Create a generator whose first value is `start`.
    pub fn new(start: T, rule: F) -> Self {
        Self::with_shared_rule(start, Arc::new(rule))
    }

    pub(crate) fn with_shared_rule(start: T, rule: Arc<F>) -> Self {
        Self {
            current: start,
            rule,
        }
    }

    /// The value the next pull will return.
    pub fn current(&self) -> &T {
        &self.current
    }
}

impl<T, F> Generator for BuildGen<T, F>
where
    F: Fn(&T) -> T,
{
    type Item = T;

    fn pull(&mut self) -> T {
        let next = (self.rule)(&self.current);
        mem::replace(&mut self.current, next)
    }
}

impl<T, F> Iterator for BuildGen<T, F>
where
    F: Fn(&T) -> T,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.pull())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for BuildGen<T, F> where F: Fn(&T) -> T {}

impl<T: Clone, F> Clone for BuildGen<T, F> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for BuildGen<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildGen")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Advance-then-yield generator.
///
/// The start value itself is never produced.
///
/// # Example
///
/// ```rust
/// use endless::generators::RollGen;
/// use endless::Generator;
///
/// let mut gen = RollGen::new(2, |x: &i32| x * 2);
/// assert_eq!(gen.pull(), 4);
/// assert_eq!(gen.pull(), 8);
/// ```
pub struct RollGen<T, F> {
    current: T,
    rule: Arc<F>,
}

impl<T, F> RollGen<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    /// Create a generator whose first value is `rule(start)`.
    pub fn new(start: T, rule: F) -> Self {
        Self::with_shared_rule(start, Arc::new(rule))
    }

    pub(crate) fn with_shared_rule(start: T, rule: Arc<F>) -> Self {
        Self {
            current: start,
            rule,
        }
    }

    /// The most recently produced value, or the start value before the first pull.
    pub fn current(&self) -> &T {
        &self.current
    }
}

impl<T, F> Generator for RollGen<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn pull(&mut self) -> T {
        self.current = (self.rule)(&self.current);
        self.current.clone()
    }
}

impl<T, F> Iterator for RollGen<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.pull())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for RollGen<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
}

impl<T: Clone, F> Clone for RollGen<T, F> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for RollGen<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollGen")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
