//! Timing Binary
//!
//! Times the dense and hash memo backends over a list of sizes and emits
//! a JSON report of the series to plot.
//!
//! Options: --sizes --repetitions --seed --low --high --output

use cakecut::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::Timing::parse().run()
}
