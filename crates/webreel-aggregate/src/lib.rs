//! Event aggregation
//!
//! Merges the three independent logs into one chronologically ordered
//! timeline without touching the sources. Pure: safe to re-run on
//! every export.

mod timeline;

pub use timeline::{aggregate, Timeline};
