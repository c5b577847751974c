//! Stateless, re-iterable sequence descriptors.
//!
//! A descriptor holds only its start value and its rule (or step). Calling
//! [`LazySequence::generate`](crate::core::LazySequence::generate) never
//! consumes or mutates it, so the same descriptor can be driven any number
//! of times and every pass sees the same elements.

mod index;
mod stride;
mod value;

pub use index::{IncSeqAfter, IncSeqAt};
pub use stride::StrideForeverSeq;
pub use value::{BuildSeq, RollSeq};
