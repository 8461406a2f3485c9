//! Minimax engine, opening scan, and the public entry points.
//!
//! [`Engine`] solves every arc of the cake bottom-up and stores results in
//! a [`Memo`]: [`Dense`] preallocates the whole `(start, length)` table,
//! [`Hashed`] grows a map on demand. Both give identical answers; they
//! exist to compare memory layout and per-access cost. [`exhaustive`] is
//! the unmemoized explicit-turn search the engines are checked against.

mod dense;
mod engine;
mod hash;
mod memo;
mod opening;
mod reference;
mod variant;

pub use dense::*;
pub use engine::*;
pub use hash::*;
pub use memo::*;
pub use opening::*;
pub use reference::*;
pub use variant::*;

use crate::*;

/// Professor's guaranteed total, memoized in a dense table.
pub fn solve_with_dense_table(slices: &[Value]) -> Result<Value, InvalidInput> {
    solve::<Dense>(slices)
}

/// Professor's guaranteed total, memoized in a hash map.
pub fn solve_with_hash_map(slices: &[Value]) -> Result<Value, InvalidInput> {
    solve::<Hashed>(slices)
}
