//! Value rendering primitives.
//!
//! Pure functions that turn an index or a random draw into the text form
//! written to the output file. Column types in [`crate::columns`] dispatch
//! to these.

pub mod date;
pub mod label;
pub mod numeric;

pub use date::format_date;
pub use label::format_label;
pub use numeric::{generate_measure, scale_for_precision, snap_to_precision};
