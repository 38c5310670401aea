//! Image URL classification and proxy rewriting.
//!
//! Every image URL that reaches the page renderers is routed through
//! [`rewrite_image_url`] first. The rewrite wraps plain remote URLs in the
//! resize proxy, leaves ephemeral and already-proxied URLs untouched, and
//! swaps unreachable local resources for an inline placeholder.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Mirrors JavaScript's `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Resize/caching proxy policy applied to remote images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProxyConfig {
    /// Prefix the encoded target URL is appended to.
    pub base: String,
    /// Host checked to prevent double-wrapping.
    pub host: String,
    /// Query parameters appended after the target URL.
    pub params: String,
}

impl Default for ImageProxyConfig {
    fn default() -> Self {
        ImageProxyConfig {
            base: "https://images.weserv.nl/?url=".to_string(),
            host: "images.weserv.nl".to_string(),
            params: "w=1600&fit=inside".to_string(),
        }
    }
}

impl ImageProxyConfig {
    /// Replace the width limit, keeping contain-style fitting.
    pub fn with_width(mut self, px: u32) -> Self {
        self.params = format!("w={px}&fit=inside");
        self
    }
}

/// An image URL classified by how the renderer must treat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageUrl<'a> {
    /// Ephemeral `blob:` object reference. The proxy cannot fetch it, so it
    /// passes through verbatim.
    Blob(&'a str),
    /// Inline `data:` URL, embedded as-is.
    Data(&'a str),
    /// Already routed through the proxy. Never wrapped a second time.
    Proxied(&'a str),
    /// Localhost or private-network resource the proxy cannot reach.
    Local(&'a str),
    /// Plain remote URL, eligible for proxy rewriting.
    Remote(&'a str),
}

impl<'a> ImageUrl<'a> {
    /// Classify a raw URL. Returns `None` for empty or all-whitespace input.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderbook::image::{ImageProxyConfig, ImageUrl};
    ///
    /// let config = ImageProxyConfig::default();
    /// assert!(matches!(
    ///     ImageUrl::classify("blob:abc-123", &config),
    ///     Some(ImageUrl::Blob(_))
    /// ));
    /// assert!(matches!(
    ///     ImageUrl::classify("https://example.com/a.jpg", &config),
    ///     Some(ImageUrl::Remote(_))
    /// ));
    /// assert_eq!(ImageUrl::classify("   ", &config), None);
    /// ```
    pub fn classify(url: &'a str, config: &ImageProxyConfig) -> Option<ImageUrl<'a>> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("blob:") {
            return Some(ImageUrl::Blob(trimmed));
        }
        if lower.starts_with("data:") {
            return Some(ImageUrl::Data(trimmed));
        }
        if targets_proxy_host(&lower, &config.host) {
            return Some(ImageUrl::Proxied(trimmed));
        }
        if is_local_resource(&lower) {
            return Some(ImageUrl::Local(trimmed));
        }
        Some(ImageUrl::Remote(trimmed))
    }
}

/// Does this URL (lowercased) already target the proxy host?
///
/// An explicit host check against the configured constant, deliberately not
/// a general URL parser: scheme (if any) is stripped, then the remainder
/// must start with the host followed by a path or query.
fn targets_proxy_host(lower: &str, host: &str) -> bool {
    let rest = strip_http_scheme(lower);
    match rest.strip_prefix(host) {
        Some(after) => after.starts_with('/') || after.starts_with('?') || after.is_empty(),
        None => false,
    }
}

/// Resources the proxy cannot reach from the outside.
fn is_local_resource(lower: &str) -> bool {
    lower.contains("localhost")
        || lower.contains("127.0.0.1")
        || lower.contains("192.168.")
        || lower.starts_with('/')
}

/// Strip a leading `http://` or `https://`.
fn strip_http_scheme(url: &str) -> &str {
    if let Some(rest) = strip_prefix_ignore_case(url, "https://") {
        return rest;
    }
    if let Some(rest) = strip_prefix_ignore_case(url, "http://") {
        return rest;
    }
    url
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Rewrite an image URL for safe embedding in the rendered document.
///
/// - `blob:`, `data:`, and already-proxied URLs pass through verbatim.
/// - Local/private-network URLs become the inline placeholder image.
/// - Everything else is wrapped into the proxy: scheme stripped, the rest
///   percent-encoded as a single query value, width/fit parameters appended.
///
/// Returns `None` only for empty input. Never panics, regardless of how
/// malformed the URL is.
///
/// # Examples
///
/// ```
/// use wanderbook::image::{ImageProxyConfig, rewrite_image_url};
///
/// let config = ImageProxyConfig::default();
/// assert_eq!(
///     rewrite_image_url("https://example.com/img1.jpg", &config).unwrap(),
///     "https://images.weserv.nl/?url=example.com%2Fimg1.jpg&w=1600&fit=inside"
/// );
/// ```
pub fn rewrite_image_url(url: &str, config: &ImageProxyConfig) -> Option<String> {
    match ImageUrl::classify(url, config)? {
        ImageUrl::Blob(u) | ImageUrl::Data(u) | ImageUrl::Proxied(u) => Some(u.to_string()),
        ImageUrl::Local(_) => Some(placeholder_image().to_string()),
        ImageUrl::Remote(u) => {
            let normalized = strip_http_scheme(u);
            let encoded = utf8_percent_encode(normalized, URI_COMPONENT);
            Some(format!("{}{}&{}", config.base, encoded, config.params))
        }
    }
}

/// Neutral "image unavailable" placeholder as an inline SVG data URL.
pub fn placeholder_image() -> &'static str {
    static PLACEHOLDER: LazyLock<String> = LazyLock::new(|| {
        let svg = concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="800" viewBox="0 0 1200 800">"##,
            r##"<rect width="1200" height="800" rx="24" ry="24" fill="#f3f4f6"/>"##,
            r##"<path d="M160 600 L360 340 L520 480 L720 300 L1000 600" stroke="#d1d5db" stroke-width="30" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"##,
            r##"<circle cx="360" cy="320" r="90" fill="#d1d5db"/>"##,
            r##"<circle cx="820" cy="420" r="60" fill="#e5e7eb"/>"##,
            r##"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" fill="#cbd5f5" font-family="sans-serif" font-size="48">Изображение недоступно</text>"##,
            r##"</svg>"##,
        );
        format!(
            "data:image/svg+xml;charset=utf-8,{}",
            utf8_percent_encode(svg, URI_COMPONENT)
        )
    });
    &PLACEHOLDER
}
