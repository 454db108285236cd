use std::path::PathBuf;

use clap::Parser;

/// Interactive ATM over an in-memory bank.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Config {
    /// Write a CSV summary of every account on exit (`-` for stdout).
    #[clap(long, value_parser)]
    pub summary: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[clap(long, default_value = "warn")]
    pub log_level: String,
}
