//! Macros for implementing [`Forever`](crate::builder::Forever) on index types.

/// Implement [`Forever`](crate::builder::Forever) for index types.
///
/// Types listed under `forward` walk with the post-increment generator and
/// only need [`ForwardIndex`](crate::core::ForwardIndex). Types listed under
/// `bidirectional` need
/// [`BidirectionalIndex`](crate::core::BidirectionalIndex) and walk with the
/// pre-increment generator seeded at their predecessor. Both produce the
/// same elements.
///
/// # Example
///
/// ```
/// use endless::core::{BidirectionalIndex, ForwardIndex};
/// use endless::{forever_index, Forever};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Token(u32);
///
/// impl ForwardIndex for Token {
///     fn successor(&self) -> Self {
///         Token(self.0 + 1)
///     }
/// }
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Line(i64);
///
/// impl ForwardIndex for Line {
///     fn successor(&self) -> Self {
///         Line(self.0 + 1)
///     }
/// }
///
/// impl BidirectionalIndex for Line {
///     fn predecessor(&self) -> Self {
///         Line(self.0 - 1)
///     }
/// }
///
/// forever_index! {
///     forward: [Token]
///     bidirectional: [Line]
/// }
///
/// let tokens: Vec<Token> = Token(4).forever().into_iter().take(2).collect();
/// assert_eq!(tokens, vec![Token(4), Token(5)]);
///
/// let lines: Vec<Line> = Line(0).forever().into_iter().take(2).collect();
/// assert_eq!(lines, vec![Line(0), Line(1)]);
/// ```
#[macro_export]
macro_rules! forever_index {
    (
        $(forward: [$($forward:ty),* $(,)?])?
        $(bidirectional: [$($bidirectional:ty),* $(,)?])?
    ) => {
        $($(
            impl $crate::builder::Forever for $forward {
                type Sequence = $crate::sequences::IncSeqAt<$forward>;

                fn forever(self) -> Self::Sequence {
                    $crate::builder::from_here(self)
                }
            }
        )*)?

        $($(
            impl $crate::builder::Forever for $bidirectional {
                type Sequence = $crate::sequences::IncSeqAfter<$bidirectional>;

                fn forever(self) -> Self::Sequence {
                    $crate::builder::from_here_bidirectional(self)
                }
            }
        )*)?
    };
}
