//! Rich-text sanitizer for user-authored HTML.
//!
//! Travel descriptions and recommendations arrive as HTML from the site
//! editor. Only a small allowlist of formatting tags survives; everything
//! else is stripped so no script, style, or event handler reaches the
//! rendered document. Content inside dropped tags is kept (the tag is
//! unwrapped), except `<script>` and `<style>` whose bodies are removed
//! wholesale.

use std::fmt::Write;

use super::escape_html;

/// Formatting tags allowed through the sanitizer.
const ALLOWED_TAGS: [&str; 21] = [
    "a",
    "b",
    "blockquote",
    "br",
    "div",
    "em",
    "figcaption",
    "figure",
    "h1",
    "h2",
    "h3",
    "h4",
    "i",
    "li",
    "ol",
    "p",
    "s",
    "span",
    "strong",
    "u",
    "ul",
];

/// Sanitize user-authored rich text down to the allowlist.
///
/// All attributes are dropped; `<a>` keeps its `href` when the target uses
/// an http, https or mailto scheme.
pub fn sanitize_rich_text(html: &str) -> String {
    let without_scripts = strip_container(html, "script");
    let without_styles = strip_container(&without_scripts, "style");
    rebuild_tags(&without_styles)
}

/// Remove every `<tag ...>...</tag>` span, including its content.
/// An unclosed opening tag drops everything to the end of the input.
fn strip_container(html: &str, tag: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(found) = lower[pos..].find(&open) {
        let start = pos + found;
        let after = start + open.len();
        // "<scripted>" is not a script tag
        let boundary = matches!(
            lower.as_bytes().get(after),
            None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r')
        );
        if !boundary {
            out.push_str(&html[pos..after]);
            pos = after;
            continue;
        }
        out.push_str(&html[pos..start]);
        match lower[after..].find(&close) {
            Some(rel) => pos = after + rel + close.len(),
            None => return out,
        }
    }
    out.push_str(&html[pos..]);
    out
}

/// Re-emit the input keeping only allowlisted tags, rebuilt without
/// attributes. Unrecognized tags vanish; their inner text stays.
fn rebuild_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(rel) = html[pos..].find('<') {
        let start = pos + rel;
        out.push_str(&html[pos..start]);
        let Some(end_rel) = html[start..].find('>') else {
            // Dangling "<" with no close: keep the remainder as text.
            out.push_str(&html[start..]);
            return out;
        };
        let end = start + end_rel;
        if let Some(tag) = rebuild_tag(&html[start + 1..end]) {
            out.push_str(&tag);
        }
        pos = end + 1;
    }
    out.push_str(&html[pos..]);
    out
}

/// Rebuild one tag body (the text between `<` and `>`), or None to drop it.
fn rebuild_tag(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let (closing, rest) = match trimmed.strip_prefix('/') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let self_closing = rest.ends_with('/');
    let rest = rest.trim_end_matches('/').trim_end();

    let name_end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    let name = rest[..name_end].to_ascii_lowercase();
    if !ALLOWED_TAGS.contains(&name.as_str()) {
        return None;
    }

    if closing {
        return Some(format!("</{name}>"));
    }

    let mut tag = format!("<{name}");
    if name == "a"
        && let Some(href) = extract_href(&rest[name_end..])
    {
        write!(tag, " href=\"{}\"", escape_html(&href)).unwrap();
    }
    if self_closing {
        tag.push_str(" />");
    } else {
        tag.push('>');
    }
    Some(tag)
}

/// Pull the href value out of an attribute list, keeping only targets with
/// an http, https or mailto scheme.
fn extract_href(attrs: &str) -> Option<String> {
    let lower = attrs.to_ascii_lowercase();
    let at = lower.find("href")?;
    let rest = attrs[at + 4..].trim_start().strip_prefix('=')?.trim_start();
    let value = if let Some(quoted) = rest.strip_prefix('"') {
        quoted.split('"').next()?
    } else if let Some(quoted) = rest.strip_prefix('\'') {
        quoted.split('\'').next()?
    } else {
        rest.split_whitespace().next()?
    };
    let value = value.trim();
    let scheme = value.to_ascii_lowercase();
    if scheme.starts_with("http://")
        || scheme.starts_with("https://")
        || scheme.starts_with("mailto:")
    {
        Some(value.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize_rich_text("Просто текст"), "Просто текст");
    }

    #[test]
    fn test_allowed_formatting_survives() {
        let input = "<p>Первый <strong>день</strong> и <em>второй</em></p>";
        assert_eq!(sanitize_rich_text(input), input);
    }

    #[test]
    fn test_script_body_is_removed_wholesale() {
        let out = sanitize_rich_text("до<script>alert('x')</script>после");
        assert_eq!(out, "допосле");
        assert!(!out.contains("alert"));
    }

    #[test]
    fn test_unclosed_script_drops_remainder() {
        assert_eq!(sanitize_rich_text("текст<script>var a = 1;"), "текст");
    }

    #[test]
    fn test_style_block_is_removed() {
        let out = sanitize_rich_text("<style>p { color: red; }</style><p>ок</p>");
        assert_eq!(out, "<p>ок</p>");
    }

    #[test]
    fn test_unknown_tag_is_unwrapped() {
        assert_eq!(
            sanitize_rich_text("<video controls>подпись</video>"),
            "подпись"
        );
        assert_eq!(sanitize_rich_text("<iframe src='x'></iframe>"), "");
    }

    #[test]
    fn test_attributes_and_event_handlers_are_dropped() {
        let out = sanitize_rich_text(r#"<p onclick="steal()" style="color:red">текст</p>"#);
        assert_eq!(out, "<p>текст</p>");
    }

    #[test]
    fn test_href_with_http_scheme_survives() {
        let out = sanitize_rich_text(r#"<a href="https://metravel.by/travels/minsk">тур</a>"#);
        assert_eq!(out, r#"<a href="https://metravel.by/travels/minsk">тур</a>"#);
    }

    #[test]
    fn test_javascript_href_is_dropped() {
        let out = sanitize_rich_text(r#"<a href="javascript:alert(1)">тур</a>"#);
        assert_eq!(out, "<a>тур</a>");
    }

    #[test]
    fn test_self_closing_break_survives() {
        assert_eq!(sanitize_rich_text("раз<br/>два"), "раз<br />два");
        assert_eq!(sanitize_rich_text("раз<br>два"), "раз<br>два");
    }

    #[test]
    fn test_scripted_lookalike_tag_is_not_a_script() {
        // "<scripted>" must not trigger wholesale removal; the unknown tag
        // is simply unwrapped.
        assert_eq!(sanitize_rich_text("<scripted>текст</scripted>"), "текст");
    }

    #[test]
    fn test_dangling_angle_bracket_is_kept() {
        assert_eq!(sanitize_rich_text("5 < 7"), "5 < 7");
    }

    #[test]
    fn test_case_insensitive_tags() {
        assert_eq!(sanitize_rich_text("<SCRIPT>x</SCRIPT><P>ок</P>"), "<p>ок</p>");
    }
}
