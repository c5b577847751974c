//! Re-iterable sequences over a start value and a transition rule.

use crate::core::LazySequence;
use crate::generators::{BuildGen, RollGen};
use std::fmt;
use std::sync::Arc;

/// Descriptor for `start, rule(start), rule(rule(start)), ...`.
///
/// Produces [`BuildGen`] generators. The rule is shared between the
/// descriptor and every generator it creates; it is never mutated.
pub struct BuildSeq<T, F> {
    start: T,
    rule: Arc<F>,
}

impl<T, F> BuildSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    pub fn new(start: T, rule: F) -> Self {
        Self {
            start,
            rule: Arc::new(rule),
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }
}

impl<T, F> LazySequence for BuildSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type Generator = BuildGen<T, F>;

    fn generate(&self) -> BuildGen<T, F> {
        BuildGen::with_shared_rule(self.start.clone(), Arc::clone(&self.rule))
    }
}

impl<T, F> IntoIterator for BuildSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = BuildGen<T, F>;

    fn into_iter(self) -> BuildGen<T, F> {
        BuildGen::with_shared_rule(self.start, self.rule)
    }
}

impl<'a, T, F> IntoIterator for &'a BuildSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = BuildGen<T, F>;

    fn into_iter(self) -> BuildGen<T, F> {
        self.generate()
    }
}

impl<T: Clone, F> Clone for BuildSeq<T, F> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for BuildSeq<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildSeq")
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

/// Descriptor for `rule(start), rule(rule(start)), ...`.
///
/// Produces [`RollGen`] generators; `start` itself is never an element.
pub struct RollSeq<T, F> {
    start: T,
    rule: Arc<F>,
}

impl<T, F> RollSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    pub fn new(start: T, rule: F) -> Self {
        Self {
            start,
            rule: Arc::new(rule),
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }
}

impl<T, F> LazySequence for RollSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type Generator = RollGen<T, F>;

    fn generate(&self) -> RollGen<T, F> {
        RollGen::with_shared_rule(self.start.clone(), Arc::clone(&self.rule))
    }
}

impl<T, F> IntoIterator for RollSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = RollGen<T, F>;

    fn into_iter(self) -> RollGen<T, F> {
        RollGen::with_shared_rule(self.start, self.rule)
    }
}

impl<'a, T, F> IntoIterator for &'a RollSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = RollGen<T, F>;

    fn into_iter(self) -> RollGen<T, F> {
        self.generate()
    }
}

impl<T: Clone, F> Clone for RollSeq<T, F> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for RollSeq<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollSeq")
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}
