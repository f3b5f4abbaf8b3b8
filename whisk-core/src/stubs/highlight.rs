//! Syntax highlighting for generated code stubs.
//!
//! Renders source text to HTML with inline styles using syntect's bundled
//! syntax definitions and a dark theme. Syntax and theme sets are loaded
//! once per process.

use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// File extension syntect should highlight for a backend language name.
pub fn extension_for(language: &str) -> &'static str {
    match language.to_ascii_lowercase().as_str() {
        "python" => "py",
        "rust" => "rs",
        "javascript" => "js",
        "typescript" => "ts",
        "ruby" => "rb",
        "go" => "go",
        _ => "txt",
    }
}

/// Highlight `code` to HTML, line by line, falling back to plain text for
/// unknown extensions or lines syntect cannot process.
pub fn highlight_html(code: &str, extension: &str) -> String {
    let ss = syntax_set();
    let syntax = ss
        .find_syntax_by_extension(extension)
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    let ts = theme_set();
    let theme = ts
        .themes
        .get("base16-ocean.dark")
        .or_else(|| ts.themes.get("InspiredGitHub"))
        .unwrap_or_else(|| ts.themes.values().next().expect("no bundled themes"));

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut html = String::from(r#"<pre class="code-stub"><code>"#);
    for line in code.split_inclusive('\n') {
        match highlighter.highlight_line(line, ss) {
            Ok(ranges) => {
                match styled_line_to_highlighted_html(&ranges[..], IncludeBackground::No) {
                    Ok(rendered) => html.push_str(&rendered),
                    Err(_) => html.push_str(&crate::preview::escape_html(line)),
                }
            }
            Err(_) => html.push_str(&crate::preview::escape_html(line)),
        }
    }
    html.push_str("</code></pre>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for("python"), "py");
        assert_eq!(extension_for("Python"), "py");
        assert_eq!(extension_for("cobol"), "txt");
    }

    #[test]
    fn test_highlight_produces_wrapped_html() {
        let html = highlight_html("def handler():\n    return 1\n", "py");
        assert!(html.starts_with(r#"<pre class="code-stub"><code>"#));
        assert!(html.ends_with("</code></pre>"));
        assert!(html.contains("handler"));
    }

    #[test]
    fn test_unknown_extension_falls_back_to_plain() {
        let html = highlight_html("plain words", "nope");
        assert!(html.contains("plain words"));
    }
}
