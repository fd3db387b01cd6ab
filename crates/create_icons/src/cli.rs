#![warn(missing_docs)]
//! cli argument parser module

use clap::Parser;

/// Flags accepted by the `create_icons` binary. The icons themselves are
/// fixed, see [`crate::default_icons`]; the flags only control what is
/// reported. Use [`parse_arguments`] to parse `std::env::args`.
#[derive(Debug, Parser)]
#[clap(version, author, about)]
pub struct Cli {
    /// Increase logging verbosity, can be repeated (-v info, -vv debug,
    /// -vvv trace). `RUST_LOG` takes precedence when set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the icons that would be generated as TOML to stdout and exit
    #[arg(long)]
    pub dump_default: bool,
}

impl Cli {
    /// Log level filter selected by the number of `-v` flags.
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parse the process arguments, exiting with a usage message on error.
#[must_use]
pub fn parse_arguments() -> Cli {
    Cli::parse()
}
