//! Check command implementation.
//!
//! `specsmith check` probes the fixed list of external developer tools and
//! prints the rendered tracker plus a one-line summary.

use crate::error::Result;
use crate::tools::{check_tool, ToolSpec};
use crate::tracker::StepTracker;
use crate::ui::{banner, Theme};

use super::dispatcher::{Command, CommandResult};

/// Tools every spec-driven project is expected to have available.
const REQUIRED_TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "git",
        label: "Git",
        install_hint: "https://git-scm.com/downloads",
    },
    ToolSpec {
        name: "claude",
        label: "Claude CLI",
        install_hint: "https://docs.anthropic.com/en/docs/claude-code/setup",
    },
    ToolSpec {
        name: "gemini",
        label: "Gemini CLI",
        install_hint: "https://github.com/google-gemini/gemini-cli",
    },
];

const VSCODE_HINT: &str = "https://code.visualstudio.com/download";

/// The check command implementation.
pub struct CheckCommand;

impl CheckCommand {
    /// Create a new check command.
    pub fn new() -> Self {
        Self
    }

    /// Run all tool probes against `tracker`, sequentially.
    ///
    /// The `code` probe gets a `code-insiders` fallback: a second, distinct
    /// probe issued only when the first misses. That chaining lives here, not
    /// in the tool checker.
    fn run_checks(&self, tracker: &mut StepTracker) {
        for tool in REQUIRED_TOOLS {
            tracker.add(tool.name, tool.label);
            check_tool(tracker, tool.name, tool.install_hint);
        }

        tracker.add("code", "VS Code");
        if !check_tool(tracker, "code", VSCODE_HINT) {
            tracker.add("code-insiders", "VS Code Insiders");
            check_tool(tracker, "code-insiders", VSCODE_HINT);
        }
    }
}

impl Default for CheckCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CheckCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        banner::show(theme);

        let mut tracker = StepTracker::new("Check available tools");
        self.run_checks(&mut tracker);
        tracker.display();

        let stats = tracker.statistics();
        println!("{} done, {} errors", stats.done, stats.error);

        if tracker.has_errors() {
            println!(
                "{}",
                theme.format_hint("Missing tools are optional unless a workflow needs them.")
            );
        }

        // Missing tools are reported, not fatal.
        Ok(CommandResult::success())
    }
}
