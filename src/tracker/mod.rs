//! Checklist step tracking.
//!
//! A [`StepTracker`] holds an ordered list of named steps, renders them as a
//! glyph-and-color checklist, and notifies an optional refresh hook after
//! every mutation so a caller can redraw a live view.

pub mod step;
#[allow(clippy::module_inception)]
pub mod tracker;

pub use step::{Step, StepStatus};
pub use tracker::{StepTracker, TrackerStats};
