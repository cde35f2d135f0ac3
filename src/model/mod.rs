//! Core data model for the journal.
//!
//! An event is one logged craving. The journal is an ordered list of
//! events, newest first.

mod event;
pub mod vocab;

pub use event::{Event, IntensityLevel, Outcome, intensity_label};
