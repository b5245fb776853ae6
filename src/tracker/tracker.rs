//! Ordered checklist tracker with status rendering and a refresh hook.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::ui::theme::Theme;

use super::step::{Step, StepStatus};

/// Per-status counts for a tracker, plus the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerStats {
    pub total: usize,
    pub pending: usize,
    pub running: usize,
    pub done: usize,
    pub error: usize,
    pub skipped: usize,
}

/// Callback invoked after every tracker mutation, e.g. to repaint a live view.
pub type RefreshHook = Box<dyn FnMut()>;

/// Ordered collection of [`Step`]s with a title and an optional refresh hook.
///
/// Steps render in insertion order; a status change never reorders the list.
/// Trackers are constructed per command invocation and discarded afterwards —
/// nothing persists across runs.
pub struct StepTracker {
    title: String,
    steps: Vec<Step>,
    refresh: Option<RefreshHook>,
    theme: Theme,
}

impl std::fmt::Debug for StepTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepTracker")
            .field("title", &self.title)
            .field("steps", &self.steps)
            .field("has_refresh", &self.refresh.is_some())
            .finish()
    }
}

impl StepTracker {
    /// Create an empty tracker with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            steps: Vec::new(),
            refresh: None,
            theme: Theme::auto(),
        }
    }

    /// Create a tracker that renders without colors (for tests and non-TTY).
    pub fn plain(title: &str) -> Self {
        Self {
            title: title.to_string(),
            steps: Vec::new(),
            refresh: None,
            theme: Theme::plain(),
        }
    }

    /// Register a refresh hook, replacing any previous one.
    ///
    /// The hook runs synchronously after every mutation (`add`, the status
    /// setters, `clear`, `set_title`). A panic inside the hook is caught and
    /// discarded: a broken display hook must never corrupt step state or
    /// abort the calling command.
    pub fn attach_refresh<F: FnMut() + 'static>(&mut self, hook: F) {
        self.refresh = Some(Box::new(hook));
    }

    /// Register a new pending step. Idempotent: a second `add` with an
    /// existing key changes nothing.
    pub fn add(&mut self, key: &str, label: &str) {
        if self.steps.iter().any(|s| s.key == key) {
            return;
        }
        self.steps.push(Step::new(key, label));
        self.trigger_refresh();
    }

    /// Mark a step as running.
    pub fn start(&mut self, key: &str, detail: &str) {
        self.update(key, StepStatus::Running, detail);
    }

    /// Mark a step as done.
    pub fn complete(&mut self, key: &str, detail: &str) {
        self.update(key, StepStatus::Done, detail);
    }

    /// Mark a step as failed.
    pub fn error(&mut self, key: &str, detail: &str) {
        self.update(key, StepStatus::Error, detail);
    }

    /// Mark a step as skipped.
    pub fn skip(&mut self, key: &str, detail: &str) {
        self.update(key, StepStatus::Skipped, detail);
    }

    /// Set a step's status and detail.
    ///
    /// An empty `detail` preserves whatever detail was stored before, so a
    /// bare status change never blanks out prior context. An unknown key
    /// auto-creates a step whose label falls back to the key itself.
    fn update(&mut self, key: &str, status: StepStatus, detail: &str) {
        if let Some(step) = self.steps.iter_mut().find(|s| s.key == key) {
            step.status = status;
            if !detail.is_empty() {
                step.detail = detail.to_string();
            }
        } else {
            let mut step = Step::new(key, key);
            step.status = status;
            step.detail = detail.to_string();
            self.steps.push(step);
        }
        self.trigger_refresh();
    }

    /// Render the tracker as a multi-line text block: highlighted title, then
    /// one connector-prefixed line per step in insertion order.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.steps.len() + 1);
        lines.push(self.theme.highlight.apply_to(&self.title).to_string());

        let last = self.steps.len().saturating_sub(1);
        for (i, step) in self.steps.iter().enumerate() {
            // The connectors are cosmetic list framing; the model is flat.
            let connector = if i == last { "└─" } else { "├─" };
            lines.push(self.render_step(connector, step));
        }
        lines.join("\n")
    }

    fn render_step(&self, connector: &str, step: &Step) -> String {
        let glyph = step.status.glyph();
        let detail = step.detail.trim();

        if step.status == StepStatus::Pending {
            // Pending lines recede entirely.
            let text = if detail.is_empty() {
                format!("{} {} {}", connector, glyph, step.label)
            } else {
                format!("{} {} {} ({})", connector, glyph, step.label, detail)
            };
            return self.theme.dim.apply_to(text).to_string();
        }

        let styled_glyph = self.theme.status_style(step.status).apply_to(glyph);
        let label = self.theme.highlight.apply_to(&step.label);
        if detail.is_empty() {
            format!(
                "{} {} {}",
                self.theme.dim.apply_to(connector),
                styled_glyph,
                label
            )
        } else {
            format!(
                "{} {} {} {}",
                self.theme.dim.apply_to(connector),
                styled_glyph,
                label,
                self.theme.dim.apply_to(format!("({})", detail))
            )
        }
    }

    /// Print the rendered tracker to stdout, surrounded by blank lines.
    pub fn display(&self) {
        println!();
        println!("{}", self.render());
        println!();
    }

    /// Defensive copy of the step list.
    pub fn steps(&self) -> Vec<Step> {
        self.steps.clone()
    }

    /// Total and per-status counts. The five status counts always sum to
    /// `total`.
    pub fn statistics(&self) -> TrackerStats {
        let count = |status| self.steps.iter().filter(|s| s.status == status).count();
        TrackerStats {
            total: self.steps.len(),
            pending: count(StepStatus::Pending),
            running: count(StepStatus::Running),
            done: count(StepStatus::Done),
            error: count(StepStatus::Error),
            skipped: count(StepStatus::Skipped),
        }
    }

    /// Remove all steps.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.trigger_refresh();
    }

    /// True iff every step has reached a terminal status. Vacuously true on
    /// an empty tracker.
    pub fn is_all_completed(&self) -> bool {
        self.steps.iter().all(|s| s.status.is_terminal())
    }

    /// True iff at least one step is in error status.
    pub fn has_errors(&self) -> bool {
        self.steps.iter().any(|s| s.status == StepStatus::Error)
    }

    /// Get the tracker title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the tracker title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.trigger_refresh();
    }

    fn trigger_refresh(&mut self) {
        if let Some(hook) = &mut self.refresh {
            // Discard panics deliberately: the hook is a display concern and
            // must not take the command down with it.
            let _ = catch_unwind(AssertUnwindSafe(|| hook()));
        }
    }
}
