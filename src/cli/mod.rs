//! Command-line front ends for the `solve` and `timing` binaries.

mod prompt;
mod solve;
mod timing;

pub use prompt::*;
pub use solve::*;
pub use timing::*;
