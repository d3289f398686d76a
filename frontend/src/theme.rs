use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    pub fn is_night(self) -> bool {
        self == Theme::Night
    }

    /// Custom properties read by every `var(--...)` in the page styles.
    fn palette(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Night => &[
                ("--page-bg", "#0b0b14"),
                ("--glass-bg", "rgba(20, 20, 35, 0.55)"),
                ("--glass-border", "rgba(255, 255, 255, 0.12)"),
                ("--text-main", "#f5f5f7"),
                ("--text-secondary", "rgba(245, 245, 247, 0.7)"),
                ("--accent-color", "#8B5CF6"),
                ("--card-bg", "rgba(255, 255, 255, 0.05)"),
                ("--card-bg-hover", "rgba(255, 255, 255, 0.1)"),
                ("--header-bg", "rgba(15, 15, 28, 0.6)"),
                ("--input-bg", "rgba(255, 255, 255, 0.06)"),
                ("--input-border", "rgba(255, 255, 255, 0.15)"),
                ("--modal-bg", "rgba(18, 18, 30, 0.95)"),
                ("--separator-color", "rgba(255, 255, 255, 0.2)"),
                ("--text-highlight", "#c4b5fd"),
                ("--cta-text", "#ffffff"),
                ("--cta-border", "rgba(255, 255, 255, 0.6)"),
                ("--nav-button-bg", "rgba(0, 0, 0, 0.4)"),
                ("--nav-button-border", "rgba(255, 255, 255, 0.25)"),
                ("--sphere-color", "rgba(139, 92, 246, 0.35)"),
            ],
            Theme::Day => &[
                ("--page-bg", "#eef0f7"),
                ("--glass-bg", "rgba(255, 255, 255, 0.6)"),
                ("--glass-border", "rgba(17, 24, 39, 0.1)"),
                ("--text-main", "#111827"),
                ("--text-secondary", "rgba(17, 24, 39, 0.68)"),
                ("--accent-color", "#7C3AED"),
                ("--card-bg", "rgba(255, 255, 255, 0.7)"),
                ("--card-bg-hover", "rgba(255, 255, 255, 0.95)"),
                ("--header-bg", "rgba(255, 255, 255, 0.65)"),
                ("--input-bg", "rgba(255, 255, 255, 0.85)"),
                ("--input-border", "rgba(17, 24, 39, 0.15)"),
                ("--modal-bg", "rgba(250, 250, 252, 0.97)"),
                ("--separator-color", "rgba(17, 24, 39, 0.15)"),
                ("--text-highlight", "#6D28D9"),
                ("--cta-text", "#111827"),
                ("--cta-border", "rgba(17, 24, 39, 0.6)"),
                ("--nav-button-bg", "rgba(255, 255, 255, 0.8)"),
                ("--nav-button-border", "rgba(17, 24, 39, 0.2)"),
                ("--sphere-color", "rgba(167, 139, 250, 0.3)"),
            ],
        }
    }

    /// Inline style that installs the palette on the page root.
    pub fn css_variables(self) -> String {
        self.palette()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Theme::Day.toggled(), Theme::Night);
        assert_eq!(Theme::Night.toggled().toggled(), Theme::Night);
    }

    #[test]
    fn both_palettes_define_the_same_properties() {
        let names = |t: Theme| t.palette().iter().map(|(n, _)| *n).collect::<Vec<_>>();
        assert_eq!(names(Theme::Day), names(Theme::Night));
        assert!(Theme::Night.css_variables().contains("--accent-color: #8B5CF6;"));
    }
}
