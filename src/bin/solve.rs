//! Solve Binary
//!
//! Prints the Professor's guaranteed total for a cake given on the
//! command line, or prompts for one.
//!
//! Options: [VALUES...] --variant dense|hash|exhaustive

use cakecut::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::Solve::parse().run()
}
