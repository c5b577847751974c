//! Re-iterable stride without an end.

use crate::core::{LazySequence, Strideable};
use crate::generators::StrideForeverGen;
use serde::{Deserialize, Serialize};

/// Descriptor for `start, start + step, start + 2 * step, ...`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, T::Stride: Serialize",
    deserialize = "T: Deserialize<'de>, T::Stride: Deserialize<'de>"
))]
pub struct StrideForeverSeq<T: Strideable> {
    start: T,
    step: T::Stride,
}

impl<T: Strideable> StrideForeverSeq<T> {
    pub fn new(start: T, step: T::Stride) -> Self {
        Self { start, step }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn step(&self) -> &T::Stride {
        &self.step
    }
}

impl<T: Strideable> LazySequence for StrideForeverSeq<T> {
    type Item = T;
    type Generator = StrideForeverGen<T>;

    fn generate(&self) -> StrideForeverGen<T> {
        StrideForeverGen::new(self.start.clone(), self.step.clone())
    }
}

impl<T: Strideable> IntoIterator for StrideForeverSeq<T> {
    type Item = T;
    type IntoIter = StrideForeverGen<T>;

    fn into_iter(self) -> StrideForeverGen<T> {
        StrideForeverGen::new(self.start, self.step)
    }
}

impl<T: Strideable> IntoIterator for &StrideForeverSeq<T> {
    type Item = T;
    type IntoIter = StrideForeverGen<T>;

    fn into_iter(self) -> StrideForeverGen<T> {
        self.generate()
    }
}
