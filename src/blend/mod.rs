mod bhead;
mod bytes;
mod dna;
mod error;
mod file;
mod header;
mod stats;

#[cfg(test)]
mod testutil;

/// Parsed block header record.
pub use bhead::BHead;
/// SDNA schema representation.
pub use dna::{Dna, DnaStruct};
/// Error and result aliases.
pub use error::{BlendError, Result};
/// File abstraction and truncation warning.
pub use file::{BlendFile, Truncation};
/// File header representation.
pub use header::BlendHeader;
/// Statistics aggregation types.
pub use stats::{BlockRow, StatsReport, TagBucket, TypeBucket};
