//! Chronicle CLI library.
//!
//! Wires the pipeline crates into the `chronicle` command: configuration
//! loading, the on-disk article cache, the end-to-end [`Pipeline`], and
//! table / JSON / text output.

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use cache::{cache_key, ArticleCache};
pub use cli::{Cli, Command};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
pub use pipeline::{Pipeline, Report};
