//! Circular bookkeeping for the cake.
//!
//! The 2n slices are stored twice in a row so that every arc of the
//! circle, including those that wrap past the last slice, is a plain
//! contiguous range. Prefix sums over that buffer give any arc total in
//! constant time, and a [`Segment`] names an arc by its start and length.

mod circle;
mod prefix;
mod segment;

pub use circle::*;
pub use prefix::*;
pub use segment::*;
