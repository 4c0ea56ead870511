//! CLI argument definitions using clap.
//!
//! The tool takes no options that change what is collected or where it is
//! written; `--verbose` only adds diagnostics on stderr.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Print warnings for paths and files that could not be read
    #[arg(short, long)]
    pub verbose: bool,
}
