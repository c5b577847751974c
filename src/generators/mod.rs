//! Stateful, single-pass generators.
//!
//! Four variants differ along two axes, plus a strided specialization:
//!
//! | | yield, then advance | advance, then yield |
//! |---|---|---|
//! | value + rule | [`BuildGen`] | [`RollGen`] |
//! | index successor | [`IncGenAt`] | [`IncGenAfter`] |
//!
//! [`StrideForeverGen`] follows the yield-then-advance ordering with a fixed
//! step instead of a rule.
//!
//! Every generator owns its state exclusively. Cloning one copies the state,
//! so the clone and the original advance independently.

mod index;
mod stride;
mod value;

pub use index::{IncGenAfter, IncGenAt};
pub use stride::StrideForeverGen;
pub use value::{BuildGen, RollGen};
