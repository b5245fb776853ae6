//! Tool presence checks reported through the step tracker.

use std::path::PathBuf;

use crate::tracker::StepTracker;

use super::lookup::{parse_system_path, resolve_tool_path};

/// A tool to probe for, with an install hint shown when it is missing.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub install_hint: &'static str,
}

/// Probe for an executable on the system PATH, reporting through `tracker`.
///
/// The step for `tool` is marked running ("checking"), then done ("found") or
/// error ("not found - <hint>"). The step need not exist beforehand; the
/// tracker auto-creates it. Lookup failure is translated into the returned
/// boolean and the tracker side effect — this function never errors.
pub fn check_tool(tracker: &mut StepTracker, tool: &str, install_hint: &str) -> bool {
    check_tool_in(tracker, tool, install_hint, &parse_system_path())
}

/// [`check_tool`] against an explicit set of PATH entries (for tests).
pub fn check_tool_in(
    tracker: &mut StepTracker,
    tool: &str,
    install_hint: &str,
    path_entries: &[PathBuf],
) -> bool {
    tracker.start(tool, "checking");

    match resolve_tool_path(tool, path_entries) {
        Some(path) => {
            tracing::debug!("tool '{}' resolved to {}", tool, path.display());
            tracker.complete(tool, "found");
            true
        }
        None => {
            tracing::debug!("tool '{}' not found on PATH", tool);
            tracker.error(tool, &format!("not found - {}", install_hint));
            false
        }
    }
}
