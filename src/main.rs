//! fanout-layout: size a multi-agent fan-out/fan-in pipeline
//!
//! Estimates corpus tokens, then plans segment sizing, worker grouping and
//! critic counts for a fixed per-agent context budget.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
