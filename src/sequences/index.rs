//! Re-iterable index walks.

use crate::core::{ForwardIndex, LazySequence};
use crate::generators::{IncGenAfter, IncGenAt};
use serde::{Deserialize, Serialize};

/// Walk `start, start.successor(), ...` using the post-increment generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncSeqAt<I> {
    start: I,
}

impl<I: ForwardIndex> IncSeqAt<I> {
    pub fn new(start: I) -> Self {
        Self { start }
    }

    /// First element of the walk.
    pub fn start(&self) -> &I {
        &self.start
    }
}

impl<I: ForwardIndex> LazySequence for IncSeqAt<I> {
    type Item = I;
    type Generator = IncGenAt<I>;

    fn generate(&self) -> IncGenAt<I> {
        IncGenAt::new(self.start.clone())
    }
}

impl<I: ForwardIndex> IntoIterator for IncSeqAt<I> {
    type Item = I;
    type IntoIter = IncGenAt<I>;

    fn into_iter(self) -> IncGenAt<I> {
        IncGenAt::new(self.start)
    }
}

impl<I: ForwardIndex> IntoIterator for &IncSeqAt<I> {
    type Item = I;
    type IntoIter = IncGenAt<I>;

    fn into_iter(self) -> IncGenAt<I> {
        self.generate()
    }
}

/// Walk `seed.successor(), seed.successor().successor(), ...` using the
/// pre-increment generator.
///
/// The seed itself is never an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncSeqAfter<I> {
    seed: I,
}

impl<I: ForwardIndex> IncSeqAfter<I> {
    pub fn new(seed: I) -> Self {
        Self { seed }
    }

    /// Index immediately before the first element.
    pub fn seed(&self) -> &I {
        &self.seed
    }
}

impl<I: ForwardIndex> LazySequence for IncSeqAfter<I> {
    type Item = I;
    type Generator = IncGenAfter<I>;

    fn generate(&self) -> IncGenAfter<I> {
        IncGenAfter::new(self.seed.clone())
    }
}

impl<I: ForwardIndex> IntoIterator for IncSeqAfter<I> {
    type Item = I;
    type IntoIter = IncGenAfter<I>;

    fn into_iter(self) -> IncGenAfter<I> {
        IncGenAfter::new(self.seed)
    }
}

impl<I: ForwardIndex> IntoIterator for &IncSeqAfter<I> {
    type Item = I;
    type IntoIter = IncGenAfter<I>;

    fn into_iter(self) -> IncGenAfter<I> {
        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_seq_starts_at_start() {
        let seq = IncSeqAt::new(2usize);
        let values: Vec<usize> = seq.generate().take(4).collect();
        assert_eq!(values, vec![2, 3, 4, 5]);
    }

    #[test]
    fn after_seq_starts_past_seed() {
        let seq = IncSeqAfter::new(2usize);
        let values: Vec<usize> = seq.generate().take(3).collect();
        assert_eq!(values, vec![3, 4, 5]);
        assert_eq!(*seq.seed(), 2);
    }

    #[test]
    fn repeated_passes_see_the_same_elements() {
        let seq = IncSeqAt::new(-3i64);
        let first: Vec<i64> = (&seq).into_iter().take(10).collect();
        let second: Vec<i64> = (&seq).into_iter().take(10).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zipping_with_a_slice_enumerates_from_seed() {
        let names = ["a", "b", "c"];
        let numbered: Vec<(usize, &str)> = IncSeqAt::new(1usize).into_iter().zip(names).collect();
        assert_eq!(numbered, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn descriptor_serializes() {
        let seq = IncSeqAfter::new(9u8);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"{"seed":9}"#);
        let restored: IncSeqAfter<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, seq);
    }
}
