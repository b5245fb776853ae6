//! Visual theme and styling.

use console::Style;

use crate::tracker::StepStatus;

/// Specsmith's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages and done steps (green).
    pub success: Style,
    /// Style for skipped steps and warnings (yellow).
    pub warning: Style,
    /// Style for error messages and failed steps (red).
    pub error: Style,
    /// Style for running steps (cyan).
    pub info: Style,
    /// Style for dim/secondary text and pending steps.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the banner header (cyan bold).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick colored or plain based on the terminal environment.
    pub fn auto() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for a step status glyph.
    pub fn status_style(&self, status: StepStatus) -> &Style {
        match status {
            StepStatus::Done => &self.success,
            StepStatus::Pending => &self.dim,
            StepStatus::Running => &self.info,
            StepStatus::Error => &self.error,
            StepStatus::Skipped => &self.warning,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a contextual hint (dim).
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = Theme::plain();
        let msg = theme.format_success("Complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Complete"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = Theme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_hint() {
        let theme = Theme::plain();
        assert_eq!(theme.format_hint("see docs"), "see docs");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = Theme::default();
        let new = Theme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }

    #[test]
    fn status_style_covers_all_statuses() {
        let theme = Theme::plain();
        for status in StepStatus::ALL {
            let _ = theme.status_style(status).apply_to("○");
        }
    }
}
