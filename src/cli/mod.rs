//! Command-line layer: argument parsing and the commands built on the
//! migration pipeline.
//!
//! - `migrate`: every post in a directory, written to an output directory
//! - `post`: a single post, to stdout or a file
//! - `slug`: preview slug normalization

mod args;
pub mod migrate;
pub mod post;
pub mod slug;

pub use args::{Cli, Commands};
