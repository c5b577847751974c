//! Index capabilities used by the "from here, forever" walks.
//!
//! Index types are modelled with two capability traits rather than runtime
//! inspection: [`ForwardIndex`] only knows how to step forward, while
//! [`BidirectionalIndex`] can also step back.

/// A value that has a successor.
///
/// `successor` must be total. The integer impls wrap at the type's maximum.
///
/// # Example
///
/// ```rust
/// use endless::core::ForwardIndex;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Page(u32);
///
/// impl ForwardIndex for Page {
///     fn successor(&self) -> Self {
///         Page(self.0 + 1)
///     }
/// }
///
/// assert_eq!(Page(7).successor(), Page(8));
/// ```
pub trait ForwardIndex: Clone {
    /// The index immediately after this one.
    fn successor(&self) -> Self;
}

/// A value that has both a successor and a predecessor.
///
/// For every `i`, `i.predecessor().successor() == i` must hold. The
/// bidirectional walk relies on it to land on its seed with its first step.
pub trait BidirectionalIndex: ForwardIndex {
    /// The index immediately before this one.
    fn predecessor(&self) -> Self;
}

macro_rules! wrapping_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ForwardIndex for $ty {
                #[inline]
                fn successor(&self) -> Self {
                    self.wrapping_add(1)
                }
            }

            impl BidirectionalIndex for $ty {
                #[inline]
                fn predecessor(&self) -> Self {
                    self.wrapping_sub(1)
                }
            }
        )*
    };
}

wrapping_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
