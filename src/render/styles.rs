//! Document stylesheet and final CSS cleanup.

use crate::theme::Theme;

/// Global stylesheet for one document: A4 page boxes, themed body text and
/// print rules that break after every `.pdf-page`.
pub fn build_styles(theme: &Theme) -> String {
    format!(
        "* {{ box-sizing: border-box; margin: 0; padding: 0; }}\n\
body {{ margin: 0; font-family: {body_font}; color: {text}; background: {page_background}; line-height: 1.6; }}\n\
.pdf-page {{ width: 210mm; min-height: 297mm; background: {surface}; margin: 0 auto 16px; box-shadow: 0 4px 16px rgba(15, 23, 42, 0.12); position: relative; }}\n\
img {{ max-width: 100%; display: block; }}\n\
h1, h2, h3, h4 {{ font-family: {heading_font}; color: {text}; }}\n\
@media print {{\n\
  body {{ background: #ffffff; }}\n\
  .pdf-page {{ page-break-after: always; box-shadow: none; margin: 0 auto; }}\n\
}}\n",
        body_font = theme.body_font,
        text = theme.text,
        page_background = theme.page_background,
        surface = theme.surface,
        heading_font = theme.heading_font,
    )
}

/// Replace every `var(--...)` reference with `transparent`.
///
/// User-authored rich text can smuggle CSS custom properties that never
/// resolve inside the standalone document; the rasterizer then paints
/// them black. Scrubbing happens once over the final HTML.
pub fn scrub_css_vars(html: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find("var") {
        let start = pos + rel;
        let mut cursor = start + 3;
        while matches!(bytes.get(cursor), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            cursor += 1;
        }
        let mut name = cursor + 1;
        while matches!(bytes.get(name), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            name += 1;
        }
        // Only custom-property references: `var(--name)`, with optional
        // whitespace around the name.
        let is_reference = bytes.get(cursor) == Some(&b'(')
            && bytes.get(name) == Some(&b'-')
            && bytes.get(name + 1) == Some(&b'-');
        if !is_reference {
            out.push_str(&html[pos..start + 3]);
            pos = start + 3;
            continue;
        }
        let Some(close_rel) = lower[cursor..].find(')') else {
            // Unclosed reference: leave the remainder as written.
            out.push_str(&html[pos..]);
            return out;
        };
        out.push_str(&html[pos..start]);
        out.push_str("transparent");
        pos = cursor + close_rel + 1;
    }
    out.push_str(&html[pos..]);
    out
}
