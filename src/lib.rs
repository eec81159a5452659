//! Deep Test Count
//!
//! Scans a source tree for test-bearing files, links them through
//! `class X extends Y` declarations found line by line, and reports each
//! file's own test count next to the count it inherits from its ancestors.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod logging;
pub mod output;
pub mod scanner;

pub use analysis::{analyze, Analyzer};
pub use config::ScanConfig;
pub use error::{Error, Result};
pub use output::Report;
