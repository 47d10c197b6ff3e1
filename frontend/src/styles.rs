//! Rules shared by every route: theme variables, base typography and the
//! button and surface classes both pages use.

pub const BASE_CSS: &str = r#"
:root {
    --background: #ffffff;
    --foreground: #171717;
    --muted: #6b7280;
    --accent: #f97316;
    --line: rgba(23, 23, 23, 0.1);
    --glass: rgba(255, 255, 255, 0.6);
}
html.dark {
    --background: #0a0a0a;
    --foreground: #ededed;
    --muted: #9ca3af;
    --accent: #fb923c;
    --line: rgba(237, 237, 237, 0.1);
    --glass: rgba(23, 23, 23, 0.6);
}
body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: "Inter", system-ui, sans-serif;
    -webkit-font-smoothing: antialiased;
}
a { color: inherit; text-decoration: none; }
.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.heading { font-family: "Poppins", "Inter", sans-serif; font-weight: 700; }
.muted { color: var(--muted); }
.accent { color: var(--accent); }
.soft { opacity: 0.8; }
.small { font-size: 0.875rem; }
.tiny { font-size: 0.75rem; }
.strong { font-weight: 600; }
.centered { text-align: center; }
.glass {
    background: var(--glass);
    backdrop-filter: blur(12px);
    border: 1px solid var(--line);
}
.gradient-text {
    background: linear-gradient(90deg, #f97316, #ec4899, #a855f7);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.gradient-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    padding: 0.5rem 1.25rem;
    color: #fff;
    font-weight: 600;
    background: linear-gradient(90deg, #f97316, #ec4899, #a855f7);
    background-size: 200% 100%;
    transition: background-position 400ms ease;
}
.gradient-button:hover { background-position: 100% 0; }
.gradient-button.cool { background: linear-gradient(90deg, #3b82f6, #a855f7); }
.gradient-button.large, .outline-button.large { padding: 0.75rem 2rem; }
.full-width { width: 100%; box-sizing: border-box; margin-top: 1.5rem; }
.outline-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    border: 1px solid var(--line);
    font-weight: 600;
}
.round-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.25rem;
    height: 2.25rem;
    border-radius: 9999px;
    color: inherit;
    cursor: pointer;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::landing::LANDING_CSS;
    use crate::pages::signup::SIGNUP_CSS;

    #[test]
    fn base_sheet_carries_both_themes_and_fonts() {
        assert!(BASE_CSS.contains(":root {"));
        assert!(BASE_CSS.contains("html.dark {"));
        assert!(BASE_CSS.contains("--background"));
        assert!(BASE_CSS.contains("\"Inter\""));
        assert!(BASE_CSS.contains(".heading { font-family: \"Poppins\""));
    }

    #[test]
    fn page_sheets_do_not_redefine_theme_variables() {
        assert!(!LANDING_CSS.contains(":root"));
        assert!(!LANDING_CSS.contains("html.dark"));
        assert!(!SIGNUP_CSS.contains(":root"));
        assert!(!SIGNUP_CSS.contains("html.dark"));
    }
}
