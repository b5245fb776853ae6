//! Startup banner.

use super::theme::Theme;

const BANNER: &str = r#"
 ___ _ __   ___  ___ ___ _ __ ___ (_) |_| |__
/ __| '_ \ / _ \/ __/ __| '_ ` _ \| | __| '_ \
\__ \ |_) |  __/ (__\__ \ | | | | | | |_| | | |
|___/ .__/ \___|\___|___/_| |_| |_|_|\__|_| |_|
    |_|"#;

const TAGLINE: &str = "Spec-driven development toolkit";

/// Render the banner with the given theme.
pub fn render(theme: &Theme) -> String {
    format!(
        "{}\n{}\n",
        theme.header.apply_to(BANNER),
        theme.dim.apply_to(TAGLINE)
    )
}

/// Print the banner to stdout.
pub fn show(theme: &Theme) {
    println!("{}", render(theme));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_includes_tagline() {
        let out = render(&Theme::plain());
        assert!(out.contains("Spec-driven development toolkit"));
    }

    #[test]
    fn banner_is_multiline() {
        let out = render(&Theme::plain());
        assert!(out.lines().count() > 3);
    }
}
