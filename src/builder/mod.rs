//! Entry points for building infinite sequences.
//!
//! - [`stride`]: fixed-step progression over a [`Strideable`] value
//! - [`iterate`]: orbit of a start value under a rule, start first
//! - [`roll`]: orbit of a start value under a rule, start skipped
//! - [`Forever::forever`]: "from here, forever" walk over an index
//!
//! Every factory is pure and total. Calling one twice with the same
//! arguments gives two descriptors that produce identical elements.

pub mod macros;

use crate::core::{BidirectionalIndex, ForwardIndex, LazySequence, Strideable};
use crate::sequences::{BuildSeq, IncSeqAfter, IncSeqAt, RollSeq, StrideForeverSeq};

/// Returns a stride sequence without an end.
///
/// Element `i` is `from` advanced by `by` exactly `i` times. Zero and negative
/// steps are accepted as-is.
///
/// # Example
///
/// ```
/// use endless::stride;
///
/// let multiples: Vec<i32> = stride(0i32, 3).into_iter().take(4).collect();
/// assert_eq!(multiples, vec![0, 3, 6, 9]);
///
/// let countdown: Vec<u8> = stride(3u8, -1).into_iter().take(4).collect();
/// assert_eq!(countdown, vec![3, 2, 1, 0]);
/// ```
pub fn stride<T: Strideable>(from: T, by: T::Stride) -> StrideForeverSeq<T> {
    StrideForeverSeq::new(from, by)
}

/// Returns the infinite sequence produced by repeatedly applying `transform`
/// to `start`: `start, transform(start), transform(transform(start)), ...`.
///
/// # Example
///
/// ```
/// use endless::iterate;
///
/// let doubles: Vec<u32> = iterate(2u32, |x| x * 2).into_iter().take(5).collect();
/// assert_eq!(doubles, vec![2, 4, 8, 16, 32]);
/// ```
pub fn iterate<T, F>(start: T, transform: F) -> BuildSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    BuildSeq::new(start, transform)
}

/// Like [`iterate`], but the rule runs before each element is produced, so
/// `start` itself is skipped.
///
/// # Example
///
/// ```
/// use endless::roll;
///
/// let doubles: Vec<u32> = roll(2u32, |x| x * 2).into_iter().take(3).collect();
/// assert_eq!(doubles, vec![4, 8, 16]);
/// ```
pub fn roll<T, F>(start: T, transform: F) -> RollSeq<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    RollSeq::new(start, transform)
}

/// Walk a forward-only index: `start, start.successor(), ...`.
pub fn from_here<I: ForwardIndex>(start: I) -> IncSeqAt<I> {
    IncSeqAt::new(start)
}

/// Walk a bidirectional index: `start, start.successor(), ...`.
///
/// Produces the same elements as [`from_here`], but is built from the
/// pre-increment walk seeded at `start.predecessor()`, so its first step
/// lands on `start`.
pub fn from_here_bidirectional<I: BidirectionalIndex>(start: I) -> IncSeqAfter<I> {
    IncSeqAfter::new(start.predecessor())
}

/// Postfix "from here, forever" walk.
///
/// Forward-only index types implement this with [`from_here`], bidirectional
/// ones with [`from_here_bidirectional`]; which one applies is decided by the
/// impl, never at runtime. Either way the first element is `self` and each
/// following element is the successor of the previous one. Use
/// [`forever_index!`](crate::forever_index) to implement it for your own
/// index types.
///
/// # Example
///
/// ```
/// use endless::Forever;
///
/// let rows: Vec<usize> = 2usize.forever().into_iter().take(4).collect();
/// assert_eq!(rows, vec![2, 3, 4, 5]);
/// ```
pub trait Forever: Sized {
    /// Sequence type the walk produces.
    type Sequence: LazySequence<Item = Self>;

    /// An infinite walk starting at `self`.
    fn forever(self) -> Self::Sequence;
}

crate::forever_index! {
    bidirectional: [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
}
