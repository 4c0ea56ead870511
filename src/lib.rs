//! copy-code - bundle `.tsx` sources into a single text file
//!
//! copy-code walks the current directory, picks up every file whose name ends
//! with `.tsx`, and writes them one after another into `copy-code.txt`, each
//! framed by a `File: <path>` header and separator rules. Files that cannot
//! be read are recorded inline instead of aborting the run.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit status, summary output)
//! - `collector`: Directory walk, filtering and bundle writing
//! - `config`: Fixed output name, matched suffix and layout constants

pub mod cli;
pub mod collector;
pub mod config;
