//! Index-walking generators.
//!
//! These step an index with [`ForwardIndex::successor`] only; there is no
//! arbitrary rule.

use crate::core::{ForwardIndex, Generator};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::mem;

/// Post-increment walk: yields the current index, then moves to its successor.
///
/// The first value produced is the index the generator was created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncGenAt<I> {
    current: I,
}

impl<I: ForwardIndex> IncGenAt<I> {
    pub fn new(start: I) -> Self {
        Self { current: start }
    }

    /// The index the next pull will return.
    pub fn current(&self) -> &I {
        &self.current
    }
}

impl<I: ForwardIndex> Generator for IncGenAt<I> {
    type Item = I;

    fn pull(&mut self) -> I {
        let next = self.current.successor();
        mem::replace(&mut self.current, next)
    }
}

impl<I: ForwardIndex> Iterator for IncGenAt<I> {
    type Item = I;

    #[inline]
    fn next(&mut self) -> Option<I> {
        Some(self.pull())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I: ForwardIndex> FusedIterator for IncGenAt<I> {}

/// Pre-increment walk: moves to the successor, then yields it.
///
/// The first value produced is the successor of the index the generator was
/// created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncGenAfter<I> {
    current: I,
}

impl<I: ForwardIndex> IncGenAfter<I> {
    pub fn new(seed: I) -> Self {
        Self { current: seed }
    }

    /// The most recently produced index, or the seed before the first pull.
    pub fn current(&self) -> &I {
        &self.current
    }
}

impl<I: ForwardIndex> Generator for IncGenAfter<I> {
    type Item = I;

    fn pull(&mut self) -> I {
        self.current = self.current.successor();
        self.current.clone()
    }
}

impl<I: ForwardIndex> Iterator for IncGenAfter<I> {
    type Item = I;

    #[inline]
    fn next(&mut self) -> Option<I> {
        Some(self.pull())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I: ForwardIndex> FusedIterator for IncGenAfter<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_yields_seed_first() {
        let mut gen = IncGenAt::new(2usize);
        assert_eq!(gen.pull(), 2);
        assert_eq!(gen.pull(), 3);
        assert_eq!(gen.pull(), 4);
        assert_eq!(*gen.current(), 5);
    }

    #[test]
    fn after_yields_successor_first() {
        let mut gen = IncGenAfter::new(2usize);
        assert_eq!(gen.pull(), 3);
        assert_eq!(gen.pull(), 4);
        assert_eq!(*gen.current(), 4);
    }

    #[test]
    fn walks_wrap_at_type_bounds() {
        let values: Vec<u8> = IncGenAt::new(254u8).take(4).collect();
        assert_eq!(values, vec![254, 255, 0, 1]);

        let values: Vec<i8> = IncGenAfter::new(i8::MAX).take(2).collect();
        assert_eq!(values, vec![i8::MIN, i8::MIN + 1]);
    }

    #[test]
    fn copies_do_not_alias() {
        let mut original = IncGenAt::new(10i32);
        let mut copy = original;

        copy.pull();
        copy.pull();
        assert_eq!(original.pull(), 10);
        assert_eq!(copy.pull(), 12);
    }

    #[test]
    fn generator_state_serializes() {
        let mut gen = IncGenAt::new(7u32);
        gen.pull();

        let json = serde_json::to_string(&gen).unwrap();
        assert_eq!(json, r#"{"current":8}"#);

        let mut restored: IncGenAt<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.pull(), 8);
    }
}
