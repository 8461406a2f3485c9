//! Wall-clock comparison of the memo backends.
//!
//! An [`Experiment`] draws one seeded random cake per size, times each
//! memoized [`Variant`](crate::Variant) on it, and collects a [`Report`]
//! holding the series worth plotting: raw seconds, the hash/dense ratio,
//! and seconds normalized by n³.

mod experiment;
mod measurement;
mod report;

pub use experiment::*;
pub use measurement::*;
pub use report::*;
