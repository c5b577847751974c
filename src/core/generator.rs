//! Infinite generator and lazy sequence traits.
//!
//! A [`Generator`] is a stateful, single-pass producer that always has a next
//! value. A [`LazySequence`] is a reusable descriptor that hands out a fresh
//! generator every time iteration begins.

/// A producer that never runs out of values.
///
/// Unlike [`Iterator::next`], [`Generator::pull`] returns the item directly:
/// there is no way to express exhaustion. Every generator in this crate also
/// implements [`Iterator`] (always returning `Some`) so it composes with the
/// standard adapters.
///
/// # Example
///
/// ```rust
/// use endless::{stride, Generator, LazySequence};
///
/// let mut gen = stride(0i32, 5).generate();
/// assert_eq!(gen.pull(), 0);
/// assert_eq!(gen.pull(), 5);
/// assert_eq!(gen.pull(), 10);
/// ```
pub trait Generator {
    /// The type of value produced on each pull.
    type Item;

    /// Produce the next value, advancing the generator's state exactly once.
    fn pull(&mut self) -> Self::Item;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    type Item = G::Item;

    fn pull(&mut self) -> Self::Item {
        (**self).pull()
    }
}

/// A stateless, re-iterable description of an infinite sequence.
///
/// `generate` borrows the descriptor, so calling it twice yields two
/// generators that both start from the beginning and advance independently.
///
/// # Example
///
/// ```rust
/// use endless::{iterate, Generator, LazySequence};
///
/// let powers = iterate(1u64, |x| x * 3);
///
/// let mut fast = powers.generate();
/// let mut slow = powers.generate();
///
/// fast.pull();
/// fast.pull();
/// assert_eq!(fast.pull(), 9);
/// assert_eq!(slow.pull(), 1);
/// ```
pub trait LazySequence {
    /// Element type of the sequence.
    type Item;

    /// Generator type handed out by [`LazySequence::generate`].
    type Generator: Generator<Item = Self::Item> + Iterator<Item = Self::Item>;

    /// Create a fresh generator positioned at the start of the sequence.
    fn generate(&self) -> Self::Generator;
}
