//! Integration tests for the tracker and tools public API.

use specsmith::tools::{check_tool_in, resolve_tool_path};
use specsmith::tracker::{StepStatus, StepTracker};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn public_api_accessible() {
    let mut tracker = StepTracker::plain("Checks");
    tracker.add("git", "Git");
    let _steps = tracker.steps();
    let _stats = tracker.statistics();
    let _status: StepStatus = StepStatus::Pending;
}

#[test]
fn full_check_workflow() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    let git = bin.join("git");
    fs::write(&git, "#!/bin/sh\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&git, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let mut tracker = StepTracker::plain("Check available tools");
    tracker.add("git", "Git");
    tracker.add("claude", "Claude");

    let path_entries = vec![bin];
    assert!(check_tool_in(
        &mut tracker,
        "git",
        "https://git-scm.com",
        &path_entries
    ));
    assert!(!check_tool_in(
        &mut tracker,
        "claude",
        "https://example.com/claude",
        &path_entries
    ));

    let stats = tracker.statistics();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.done, 1);
    assert_eq!(stats.error, 1);
    assert!(tracker.is_all_completed());
    assert!(tracker.has_errors());

    let rendered = tracker.render();
    assert_eq!(rendered.lines().count(), 3);
    assert!(rendered.contains("(found)"));
    assert!(rendered.contains("not found - https://example.com/claude"));
}

#[test]
fn tracker_survives_panicking_refresh_hook() {
    let mut tracker = StepTracker::plain("Checks");
    tracker.attach_refresh(|| panic!("display hook broke"));
    tracker.add("a", "A");
    tracker.complete("a", "ok");

    assert_eq!(tracker.steps().len(), 1);
    assert_eq!(tracker.steps()[0].status, StepStatus::Done);
}

#[test]
fn resolve_tool_path_misses_on_empty_entries() {
    let entries: Vec<PathBuf> = Vec::new();
    assert!(resolve_tool_path("git", &entries).is_none());
}
