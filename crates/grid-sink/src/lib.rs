//! Output side of the gridsynth pipeline.
//!
//! `BatchedSink` buffers rendered row text and flushes it to a
//! `RowDestination` in fixed-size batches, bounding peak memory for large
//! products. `FileDestination` is the standard destination: a local file
//! reset once at the start of a run and appended to thereafter.

mod file;
mod sink;

pub use file::FileDestination;
pub use sink::{BatchedSink, RowDestination, SinkError, ROW_TERMINATOR};
