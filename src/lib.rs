//! Specsmith - spec-driven development toolkit scaffold.
//!
//! Specsmith is a CLI that scaffolds spec-driven projects: it checks that the
//! external developer tools a project needs are on PATH and renders the work
//! as a live status checklist.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Placeholder project configuration stub
//! - [`error`] - Error types and result aliases
//! - [`tools`] - External tool probing over the system PATH
//! - [`tracker`] - Checklist step tracking and rendering
//! - [`ui`] - Theme and banner output
//!
//! # Example
//!
//! ```
//! use specsmith::tracker::StepTracker;
//!
//! let mut tracker = StepTracker::plain("Check available tools");
//! tracker.add("git", "Git");
//! tracker.complete("git", "found");
//! assert!(tracker.is_all_completed());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod tools;
pub mod tracker;
pub mod ui;

pub use error::{Result, SpecsmithError};
