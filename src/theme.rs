//! Visual themes for rendered books.
//!
//! A theme is a named bundle of colors and font stacks applied uniformly
//! across a document. Themes are static read-only data; a renderer is
//! constructed against exactly one of them.

/// Color and typography values consumed by the page renderers.
///
/// All values are CSS-ready strings (hex colors, gradients expressed as a
/// two-stop pair, font-family stacks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub accent: &'static str,
    pub accent_strong: &'static str,
    pub accent_soft: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub muted_light: &'static str,
    pub page_background: &'static str,
    pub surface: &'static str,
    pub surface_alt: &'static str,
    pub border: &'static str,
    pub highlight: &'static str,
    pub cover_gradient: [&'static str; 2],
    pub cover_text: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

/// The built-in themes. `classic` doubles as the fallback for unknown names.
static TEMPLATE_THEMES: [Theme; 5] = [
    Theme {
        name: "classic",
        accent: "#ff9f5a",
        accent_strong: "#ff8c42",
        accent_soft: "#ffe0c7",
        text: "#1f2937",
        muted: "#6b7280",
        muted_light: "#9ca3af",
        page_background: "#f3f4f6",
        surface: "#ffffff",
        surface_alt: "#fdf8f3",
        border: "#e5e7eb",
        highlight: "#fff4e5",
        cover_gradient: ["#2b1a12", "#ff9f5a"],
        cover_text: "#ffffff",
        heading_font: "'Playfair Display', 'Times New Roman', serif",
        body_font: "'Cormorant Garamond', 'Georgia', serif",
    },
    Theme {
        name: "modern",
        accent: "#38bdf8",
        accent_strong: "#0ea5e9",
        accent_soft: "#dbeafe",
        text: "#0f172a",
        muted: "#475569",
        muted_light: "#94a3b8",
        page_background: "#e2e8f0",
        surface: "#ffffff",
        surface_alt: "#f8fafc",
        border: "#cbd5f5",
        highlight: "#e0f2fe",
        cover_gradient: ["#0f172a", "#1d4ed8"],
        cover_text: "#f8fafc",
        heading_font: "'Poppins', 'Inter', 'Segoe UI', sans-serif",
        body_font: "'Inter', 'Helvetica Neue', sans-serif",
    },
    Theme {
        name: "romantic",
        accent: "#f472b6",
        accent_strong: "#ec4899",
        accent_soft: "#fbcfe8",
        text: "#4a1d32",
        muted: "#9d4b73",
        muted_light: "#d68fb4",
        page_background: "#fff5f8",
        surface: "#ffffff",
        surface_alt: "#fff0f7",
        border: "#f9c6dd",
        highlight: "#ffe4ef",
        cover_gradient: ["#f472b6", "#fda4af"],
        cover_text: "#ffffff",
        heading_font: "'Cormorant Garamond', 'Georgia', serif",
        body_font: "'Source Sans Pro', 'Helvetica Neue', sans-serif",
    },
    Theme {
        name: "adventure",
        accent: "#f97316",
        accent_strong: "#ea580c",
        accent_soft: "#fed7aa",
        text: "#2b1b14",
        muted: "#7c4a2d",
        muted_light: "#c05621",
        page_background: "#f3f0ea",
        surface: "#ffffff",
        surface_alt: "#fef3c7",
        border: "#fcd34d",
        highlight: "#fff7ed",
        cover_gradient: ["#1e3a8a", "#f97316"],
        cover_text: "#ffffff",
        heading_font: "'Oswald', 'Montserrat', 'Arial', sans-serif",
        body_font: "'Nunito', 'Helvetica Neue', sans-serif",
    },
    Theme {
        name: "minimal",
        accent: "#10b981",
        accent_strong: "#059669",
        accent_soft: "#d1fae5",
        text: "#111827",
        muted: "#6b7280",
        muted_light: "#94a3b8",
        page_background: "#f6f6f4",
        surface: "#ffffff",
        surface_alt: "#f4f4f1",
        border: "#e5e7eb",
        highlight: "#e0f2f1",
        cover_gradient: ["#0f172a", "#10b981"],
        cover_text: "#ffffff",
        heading_font: "'IBM Plex Sans', 'Inter', 'Segoe UI', sans-serif",
        body_font: "'Inter', 'Segoe UI', sans-serif",
    },
];

/// Look up a theme by name, falling back to the default for unknown names.
///
/// # Examples
///
/// ```
/// use wanderbook::theme::theme;
///
/// assert_eq!(theme("modern").name, "modern");
/// assert_eq!(theme("no-such-theme").name, "classic");
/// ```
pub fn theme(name: &str) -> &'static Theme {
    TEMPLATE_THEMES
        .iter()
        .find(|t| t.name == name)
        .unwrap_or(default_theme())
}

/// The fallback theme used when a requested name is unknown or empty.
pub fn default_theme() -> &'static Theme {
    &TEMPLATE_THEMES[0]
}

/// Names of all built-in themes, in presentation order.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    TEMPLATE_THEMES.iter().map(|t| t.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_themes_resolve() {
        for name in ["classic", "modern", "romantic", "adventure", "minimal"] {
            assert_eq!(theme(name).name, name);
        }
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(theme("vaporwave").name, "classic");
        assert_eq!(theme("").name, "classic");
    }

    #[test]
    fn test_theme_names_complete() {
        let names: Vec<_> = theme_names().collect();
        assert_eq!(
            names,
            vec!["classic", "modern", "romantic", "adventure", "minimal"]
        );
    }

    #[test]
    fn test_palette_values() {
        let minimal = theme("minimal");
        assert_eq!(minimal.accent, "#10b981");
        assert_eq!(minimal.cover_gradient, ["#0f172a", "#10b981"]);

        let classic = default_theme();
        assert_eq!(classic.accent, "#ff9f5a");
        assert_eq!(classic.cover_text, "#ffffff");
    }
}
