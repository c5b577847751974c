//! Endless: infinite, lazily evaluated sequences
//!
//! Endless builds unbounded sequences from a starting value and a state
//! transition rule. Sequences are stateless descriptors that can be iterated
//! any number of times; each iteration pass gets its own generator, which owns
//! its state and never runs out of values.
//!
//! # Core Concepts
//!
//! - **Generator**: stateful, single-pass producer via the [`Generator`] trait
//! - **Lazy sequence**: reusable descriptor via the [`LazySequence`] trait
//! - **Index walks**: [`ForwardIndex`] and [`BidirectionalIndex`] capabilities
//! - **Strides**: fixed-distance advancement via [`Strideable`]
//!
//! # Example
//!
//! ```rust
//! use endless::{iterate, stride, Forever, Generator, LazySequence};
//!
//! let powers = iterate(2u64, |x| x * 2);
//! let first: Vec<u64> = powers.generate().take(5).collect();
//! assert_eq!(first, vec![2, 4, 8, 16, 32]);
//!
//! let mut threes = stride(0i32, 3).generate();
//! assert_eq!(threes.pull(), 0);
//! assert_eq!(threes.pull(), 3);
//!
//! let indices: Vec<usize> = 2usize.forever().generate().take(3).collect();
//! assert_eq!(indices, vec![2, 3, 4]);
//! ```

pub mod builder;
pub mod core;
pub mod generators;
pub mod sequences;

// Re-export commonly used types
pub use crate::builder::{from_here, from_here_bidirectional, iterate, roll, stride, Forever};
pub use crate::core::{BidirectionalIndex, ForwardIndex, Generator, LazySequence, Strideable};
pub use generators::{BuildGen, IncGenAfter, IncGenAt, RollGen, StrideForeverGen};
pub use sequences::{BuildSeq, IncSeqAfter, IncSeqAt, RollSeq, StrideForeverSeq};
