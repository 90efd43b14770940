//! Library components of the `eda-profiler` command-line tool.

pub mod config;
pub mod logging;
pub mod summary;
