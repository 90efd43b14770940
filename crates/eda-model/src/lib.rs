//! Data model for the tabular dataset profiler.
//!
//! Everything the profiler produces or consumes lives here: the in-memory
//! [`Dataset`], the [`ColumnSpec`] that partitions its columns, and the
//! read-only results ([`ValueCount`], [`CrossTab`], [`SummaryStatistics`],
//! [`ProfileReport`]).

pub mod census;
pub mod counts;
pub mod dataset;
pub mod error;
pub mod report;
pub mod spec;
pub mod stats;
pub mod value;

pub use counts::{CountEntry, CrossTab, ValueCount};
pub use dataset::Dataset;
pub use error::{EdaError, Result};
pub use report::{MissingCount, ProfileReport, RedundantPair};
pub use spec::{ColumnRole, ColumnSpec};
pub use stats::{Quartiles, SummaryStatistics};
pub use value::Value;
