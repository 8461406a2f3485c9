//! Exact minimax solver for the circular cake-cutting game.
//!
//! A round cake is cut into 2n slices, each worth some (possibly negative)
//! satisfaction. The Professor opens by eating any half-circle of n slices;
//! afterwards he and his sister alternate eating a prefix or suffix of the
//! remaining arc. The Professor wants to maximize what he eats, the sister
//! wants to minimize it. [`solve_with_dense_table`] and [`solve_with_hash_map`]
//! compute the value the Professor can guarantee, differing only in how the
//! subgame memo is stored.
#![allow(dead_code)]

pub mod cake;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod solver;
pub mod timing;

pub use cake::*;
pub use error::*;
pub use solver::*;
pub use timing::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Satisfaction of a slice, and every sum of slices.
pub type Value = i64;
/// Wall-clock time in seconds.
pub type Seconds = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MINIMAX PARAMETERS
// ============================================================================
/// Seed magnitude for max/min folds. Never returned as a real value.
pub const UNBOUNDED: Value = 1_000_000_000_000_000_000;
/// Largest half-size for which the exhaustive game-tree search is practical.
pub const EXHAUSTIVE_HALF_MAX: usize = 8;

// ============================================================================
// TIMING EXPERIMENT DEFAULTS
// One random instance per size, timed for each memo backend.
// ============================================================================
/// Half-sizes n to measure (the cake has 2n slices).
pub const TIMING_SIZES: [usize; 6] = [4, 6, 8, 10, 12, 14];
/// Solves per backend per size; the reported time is their average.
pub const TIMING_REPETITIONS: usize = 3;
/// Seed for instance generation, so runs are reproducible.
pub const TIMING_SEED: u64 = 0;
/// Smallest generated slice value (inclusive).
pub const SLICE_MIN: Value = -10;
/// Largest generated slice value (inclusive).
pub const SLICE_MAX: Value = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
