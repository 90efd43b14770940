//! CSV reading.

mod header;
mod reader;

pub use reader::{LoadOptions, load, load_reader, load_str};
