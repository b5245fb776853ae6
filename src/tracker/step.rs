//! Step model for the checklist tracker.

/// Status of a single checklist step.
///
/// Transitions are unrestricted: the tracker is a status display, not a
/// workflow engine, and callers are trusted to sequence updates sensibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// Step registered but not started.
    Pending,
    /// Step currently in progress.
    Running,
    /// Step finished successfully.
    Done,
    /// Step failed.
    Error,
    /// Step was skipped.
    Skipped,
}

impl StepStatus {
    /// All status values, in display-summary order.
    pub const ALL: [StepStatus; 5] = [
        StepStatus::Pending,
        StepStatus::Running,
        StepStatus::Done,
        StepStatus::Error,
        StepStatus::Skipped,
    ];

    /// Whether this status is terminal (the step will not change on its own).
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Error | Self::Skipped)
    }

    /// Unicode glyph for rendered output. Terminal success/failure states get
    /// a filled circle; everything else a hollow one.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Done | Self::Error => "●",
            Self::Pending | Self::Running | Self::Skipped => "○",
        }
    }
}

/// One checklist entry.
///
/// `key` is the stable lookup identifier, unique within a tracker; `label` is
/// the human-readable name shown in rendered output.
#[derive(Debug, Clone)]
pub struct Step {
    pub key: String,
    pub label: String,
    pub status: StepStatus,
    /// Free-text annotation; empty means "no annotation".
    pub detail: String,
}

impl Step {
    /// Create a pending step with no detail.
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            status: StepStatus::Pending,
            detail: String::new(),
        }
    }
}
