//! Dataset ingestion.
//!
//! This crate turns CSV text into an [`eda_model::Dataset`]. The CSV can come
//! from a local file, an HTTP(S) URL or any reader; all three go through the
//! same parser, so they are interchangeable.
//!
//! # Features
//!
//! - **Sources**: `Source::parse` classifies a string as a URL or a path
//! - **Typing**: declared numerical columns must parse, other columns are
//!   typed by inference unless declared as text
//! - **Missing values**: empty fields plus configurable markers such as `?`
//! - **Polars bridge**: convert a dataset to a `DataFrame` or export it as CSV
//!
//! # Example
//!
//! ```ignore
//! use eda_ingest::{LoadOptions, Source, load};
//! use eda_model::ColumnSpec;
//!
//! let source = Source::parse("data/adult-census.csv");
//! let options = LoadOptions::for_spec(&ColumnSpec::adult_census());
//! let dataset = load(&source, &options)?;
//! ```

mod csv;
mod frame;
mod source;

// === CSV Loading ===
pub use csv::{LoadOptions, load, load_reader, load_str};

// === Sources ===
pub use source::Source;

// === Polars Bridge ===
pub use frame::{to_dataframe, write_csv};
