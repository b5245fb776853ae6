//! Init command implementation.
//!
//! `specsmith init` validates its arguments, shows the banner, checks the
//! tools the selected AI assistant needs, and writes the placeholder project
//! config. Template download and git initialization are explicit placeholders
//! recorded as skipped steps.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::ProjectConfig;
use crate::error::{Result, SpecsmithError};
use crate::tools::check_tool;
use crate::tracker::StepTracker;
use crate::ui::{banner, Theme};

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    working_dir: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(working_dir: &Path, args: InitArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Validate the project-name / --here exclusivity and resolve the target
    /// directory (relative to the working directory for a named project).
    fn resolve_target(&self) -> Result<PathBuf> {
        match (&self.args.project_name, self.args.here) {
            (Some(_), true) => Err(SpecsmithError::InvalidArguments {
                message: "cannot specify both a project name and --here".into(),
            }),
            (None, false) => Err(SpecsmithError::InvalidArguments {
                message: "specify a project name or use --here".into(),
            }),
            (Some(name), false) => Ok(self.working_dir.join(name)),
            (None, true) => Ok(self.working_dir.clone()),
        }
    }

    /// Resolve the GitHub token: flag first, then GH_TOKEN (via clap's env
    /// fallback), then GITHUB_TOKEN. Held for the template download step.
    fn github_token(&self) -> Option<String> {
        self.args
            .github_token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    }

    /// Tool checks for the selected AI assistant. Unknown assistant names are
    /// probed as-is; the probe itself reports whether they exist.
    fn check_assistant_tools(&self, tracker: &mut StepTracker) {
        tracker.add("git", "Git");
        if self.args.no_git {
            tracker.skip("git", "skipped by --no-git");
        } else {
            check_tool(tracker, "git", "https://git-scm.com/downloads");
        }

        match self.args.ai.as_str() {
            "claude" => {
                tracker.add("claude", "Claude CLI");
                check_tool(
                    tracker,
                    "claude",
                    "https://docs.anthropic.com/en/docs/claude-code/setup",
                );
            }
            "gemini" => {
                tracker.add("gemini", "Gemini CLI");
                check_tool(
                    tracker,
                    "gemini",
                    "https://github.com/google-gemini/gemini-cli",
                );
            }
            "copilot" => {
                tracker.add("code", "VS Code");
                if !check_tool(tracker, "code", "https://code.visualstudio.com/download") {
                    tracker.add("code-insiders", "VS Code Insiders");
                    check_tool(
                        tracker,
                        "code-insiders",
                        "https://code.visualstudio.com/download",
                    );
                }
            }
            other => {
                tracker.add(other, other);
                check_tool(tracker, other, "no install hint for this assistant");
            }
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        let target = self.resolve_target()?;

        banner::show(theme);

        if ProjectConfig::path_in(&target).exists() {
            return Err(SpecsmithError::AlreadyInitialized { path: target });
        }

        if self.args.skip_tls {
            tracing::debug!("TLS verification disabled for template downloads");
        }
        if self.github_token().is_some() {
            tracing::debug!("GitHub token resolved for template downloads");
        }

        let title = format!("Initialize {}", target.display());
        let mut tracker = StepTracker::new(&title);

        self.check_assistant_tools(&mut tracker);

        tracker.add("config", "Project config");
        if !target.exists() {
            fs::create_dir_all(&target)?;
        }
        tracker.start("config", "writing");
        let config_path = ProjectConfig::empty().write_to(&target)?;
        tracker.complete("config", &format!("wrote {}", config_path.display()));

        // Placeholder stages: recorded so the checklist shows the full shape
        // of initialization before these land.
        tracker.add("template", "Download template");
        tracker.skip("template", "not implemented");

        tracker.add("git-init", "Initialize git repository");
        if self.args.no_git {
            tracker.skip("git-init", "skipped by --no-git");
        } else {
            tracker.skip("git-init", "not implemented");
        }

        tracker.display();

        let stats = tracker.statistics();
        println!("{} done, {} errors", stats.done, stats.error);
        if tracker.has_errors() {
            println!(
                "{}",
                theme.format_hint("Some tools are missing; install them before running specs.")
            );
        }
        println!(
            "{}",
            theme.format_success(&format!("Project ready at {}", target.display()))
        );

        Ok(CommandResult::success())
    }
}
