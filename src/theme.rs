//! Palette and typography tokens for the page.
//!
//! The view never hard-codes colors: the [`Theme`] is provided as context by
//! the app and emitted as `--pf-*` custom properties on the page root, which
//! the tailwind utilities in `input.css` resolve against.

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background_default: &'static str,
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub weight: u16,
    pub size: Option<&'static str>,
    /// Size used from [`Typography::WIDE_BREAKPOINT_PX`] upwards.
    pub wide_size: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
}

impl Typography {
    pub const WIDE_BREAKPOINT_PX: u32 = 600;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette {
                primary: "#2D3E50",
                secondary: "#E74C3C",
                background_default: "#ECF0F1",
                background_paper: "#FFFFFF",
                text_primary: "rgba(0, 0, 0, 0.87)",
                text_secondary: "rgba(0, 0, 0, 0.6)",
            },
            typography: Typography {
                font_family: r#""Poppins", "Roboto", "Helvetica", "Arial", sans-serif"#,
                h1: HeadingStyle {
                    weight: 700,
                    size: Some("3rem"),
                    wide_size: Some("4rem"),
                },
                h2: HeadingStyle {
                    weight: 600,
                    size: None,
                    wide_size: None,
                },
            },
        }
    }
}

impl Theme {
    /// Render the tokens as an inline `style` declaration list.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let t = &self.typography;
        let mut vars = vec![
            ("--pf-primary", p.primary.to_string()),
            ("--pf-secondary", p.secondary.to_string()),
            ("--pf-background-default", p.background_default.to_string()),
            ("--pf-background-paper", p.background_paper.to_string()),
            ("--pf-text-primary", p.text_primary.to_string()),
            ("--pf-text-secondary", p.text_secondary.to_string()),
            ("--pf-font-family", t.font_family.to_string()),
            ("--pf-h1-weight", t.h1.weight.to_string()),
            ("--pf-h2-weight", t.h2.weight.to_string()),
        ];
        if let Some(size) = t.h1.size {
            vars.push(("--pf-h1-size", size.to_string()));
        }
        if let Some(size) = t.h1.wide_size {
            vars.push(("--pf-h1-size-wide", size.to_string()));
        }
        vars.into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.palette.primary, "#2D3E50");
        assert_eq!(theme.palette.secondary, "#E74C3C");
        assert_eq!(theme.palette.background_default, "#ECF0F1");
        assert_eq!(theme.palette.background_paper, "#FFFFFF");
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with("--pf-primary: #2D3E50;"));
        assert!(css.contains("--pf-secondary: #E74C3C;"));
        assert!(css.contains(r#"--pf-font-family: "Poppins", "Roboto""#));
        assert!(css.contains("--pf-h1-weight: 700;"));
        assert!(css.contains("--pf-h2-weight: 600;"));
        assert!(css.contains("--pf-h1-size: 3rem;"));
        assert!(css.contains("--pf-h1-size-wide: 4rem;"));
    }

    #[test]
    fn test_css_variables_skip_unset_sizes() {
        let mut theme = Theme::default();
        theme.typography.h1.wide_size = None;
        let css = theme.css_variables();
        assert!(css.contains("--pf-h1-size: 3rem;"));
        assert!(!css.contains("--pf-h1-size-wide"));
    }
}
