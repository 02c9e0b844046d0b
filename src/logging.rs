//! Logger initialization for the CLI binary.

use std::io::{self, Write};

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Installs a stderr logger. `verbose` lowers the filter to debug so the
/// runner's per-run counters become visible.
pub fn init(verbose: bool) -> io::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .try_init()
        .map_err(io::Error::other)
}
