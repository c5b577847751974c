//! Core capability traits.
//!
//! This module contains the pure building blocks the rest of the crate is
//! generic over:
//! - [`Generator`] and [`LazySequence`]: the infinite iteration protocol
//! - [`ForwardIndex`] and [`BidirectionalIndex`]: index walking
//! - [`Strideable`]: advancing by a fixed distance
//!
//! Nothing here can fail. Every operation is total over its input types.

mod generator;
mod index;
mod stride;

pub use generator::{Generator, LazySequence};
pub use index::{BidirectionalIndex, ForwardIndex};
pub use stride::Strideable;
