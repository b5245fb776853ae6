//! External tool probing.
//!
//! Resolves developer tools (`git`, `claude`, `code`, …) against the system
//! PATH and reports results through the step tracker.

pub mod checker;
pub mod lookup;

pub use checker::{check_tool, check_tool_in, ToolSpec};
pub use lookup::{is_executable, parse_system_path, resolve_tool_path};
