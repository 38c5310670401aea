//! Block renderer - turns typed content blocks into print-ready HTML.
//!
//! Each block becomes one `.pdf-page` section (spacers stay in-flow), and
//! the fragments concatenate in input order. The renderer is a pure
//! function of (blocks, theme, image config): no I/O, no hidden state,
//! deterministic output. Every image URL passes the proxy rewrite rule
//! from [`crate::image`] before it reaches an `src` attribute.
//!
//! # Example
//!
//! ```
//! use wanderbook::model::{Block, PhotoBlock};
//! use wanderbook::render::BlockRenderer;
//! use wanderbook::theme::theme;
//!
//! let renderer = BlockRenderer::new(theme("classic"));
//! let blocks = vec![Block::Photo(PhotoBlock {
//!     url: Some("https://example.com/minsk.jpg".to_string()),
//!     caption: Some("Минск".to_string()),
//!     ..Default::default()
//! })];
//! let html = renderer.render_blocks(&blocks);
//! assert!(html.contains("images.weserv.nl"));
//! ```

use std::fmt::Write;

use crate::image::{ImageProxyConfig, rewrite_image_url};
use crate::model::{
    Block, BlockQuote, CoverBlock, DescriptionBlock, GalleryBlock, MapBlock, OnlineLink,
    PhotoBlock, QrBlock, RecommendationBlock, SpacerBlock, TocBlock, TocEntry,
};
use crate::theme::Theme;
use crate::util::plural_ru;

mod sanitize;
mod styles;
mod svg;

pub use sanitize::sanitize_rich_text;
pub use styles::{build_styles, scrub_css_vars};
pub use svg::{map_placeholder, route_svg};

/// Escape special HTML characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders block sequences against one fixed theme.
pub struct BlockRenderer<'a> {
    theme: &'a Theme,
    images: ImageProxyConfig,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        BlockRenderer {
            theme,
            images: ImageProxyConfig::default(),
        }
    }

    /// Replace the image proxy configuration.
    pub fn with_image_config(mut self, images: ImageProxyConfig) -> Self {
        self.images = images;
        self
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Render every block, in input order, into one concatenated string.
    ///
    /// Unknown blocks and blocks whose config degrades to nothing (a
    /// gallery without usable photos, a map without points) contribute an
    /// empty fragment; nothing here fails or panics.
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        let mut out = String::new();
        for block in blocks {
            let fragment = match block {
                Block::Cover(cover) => self.cover_page(cover),
                Block::Toc(toc) => self.toc_page(toc, blocks),
                Block::Photo(photo) => self.photo_page(photo),
                Block::Description(description) => self.description_page(description),
                Block::Recommendation(recommendation) => {
                    self.recommendation_page(recommendation)
                }
                Block::Gallery(gallery) => self.gallery_page(gallery),
                Block::Map(map) => self.map_page(map),
                Block::Qr(qr) => self.qr_page(qr),
                Block::Spacer(spacer) => spacer_element(spacer),
                Block::Unknown => String::new(),
            };
            if !fragment.is_empty() {
                out.push_str(&fragment);
                out.push('\n');
            }
        }
        out
    }

    /// Closing "Спасибо за путешествие!" page with the farewell quote and
    /// the site imprint. Not a block: the generator appends it after the
    /// block sequence.
    pub fn closing_page(&self, quote: Option<&BlockQuote>, year: i32, page: usize) -> String {
        let mut out = String::new();
        out.push_str(
            "<section class=\"pdf-page final-page\" style=\"padding: 40mm 32mm; display: flex; flex-direction: column; align-items: center; text-align: center; justify-content: center;\">",
        );
        out.push_str("<div style=\"font-size: 60pt; margin-bottom: 24mm;\">✨</div>");
        out.push_str("<h2 style=\"font-size: 28pt; margin-bottom: 12px;\">Спасибо за путешествие!</h2>");
        write!(
            out,
            "<p style=\"color: {muted}; max-width: 110mm;\">Пусть эта книга напоминает о самых теплых эмоциях и помогает планировать новые приключения.</p>",
            muted = self.theme.muted,
        )
        .unwrap();
        if let Some(quote) = quote {
            write!(
                out,
                "<p style=\"max-width: 120mm; margin-top: 10mm; font-size: 10.5pt; line-height: 1.6; color: {muted}; font-style: italic;\">«{text}»</p>",
                muted = self.theme.muted,
                text = escape_html(&quote.text),
            )
            .unwrap();
            if !quote.author.is_empty() {
                write!(
                    out,
                    "<p style=\"max-width: 120mm; margin-top: 2mm; font-size: 8.5pt; color: {muted}; letter-spacing: 0.06em; text-transform: uppercase;\">{author}</p>",
                    muted = self.theme.muted,
                    author = escape_html(&quote.author),
                )
                .unwrap();
            }
        }
        write!(
            out,
            "<div style=\"margin-top: 28mm; font-size: 11pt; color: {muted_light};\">© MeTravel {year}</div>",
            muted_light = self.theme.muted_light,
        )
        .unwrap();
        self.page_number(&mut out, page);
        out.push_str("</section>");
        out
    }

    // ========================================================================
    // Per-block pages
    // ========================================================================

    fn cover_page(&self, cover: &CoverBlock) -> String {
        let safe_image = cover
            .image
            .as_deref()
            .and_then(|url| rewrite_image_url(url, &self.images));
        let background = match &safe_image {
            Some(image) => format!(
                "linear-gradient(180deg, rgba(0,0,0,0.35) 0%, rgba(0,0,0,0.75) 100%), url('{}')",
                escape_html(image)
            ),
            None => format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                self.theme.cover_gradient[0], self.theme.cover_gradient[1]
            ),
        };

        let mut out = String::new();
        write!(
            out,
            "<section class=\"pdf-page cover-page\" style=\"padding: 0; height: 297mm; display: flex; flex-direction: column; justify-content: flex-end; color: {cover_text}; background: {background}; background-size: cover; background-position: center; position: relative; overflow: hidden;\">",
            cover_text = self.theme.cover_text,
        )
        .unwrap();
        out.push_str("<div style=\"padding: 40mm 30mm; position: relative; z-index: 2;\">");
        if let Some(subtitle) = &cover.subtitle {
            write!(
                out,
                "<div style=\"font-size: 14pt; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.8); margin-bottom: 12mm;\">{}</div>",
                escape_html(subtitle)
            )
            .unwrap();
        }
        write!(
            out,
            "<h1 style=\"font-size: 48pt; font-weight: 800; line-height: 1.2; margin-bottom: 20mm; text-shadow: 0 10px 30px rgba(0,0,0,0.45);\">{}</h1>",
            escape_html(&cover.title)
        )
        .unwrap();

        out.push_str("<div style=\"display: flex; gap: 24mm; align-items: center; margin-bottom: 16mm;\">");
        write!(
            out,
            "<div><div style=\"font-size: 32pt; font-weight: 800; color: {accent};\">{count}</div><div style=\"font-size: 13pt; text-transform: uppercase; letter-spacing: 0.08em;\">{label}</div></div>",
            accent = self.theme.accent,
            count = cover.travel_count,
            label = plural_ru(cover.travel_count, "путешествие", "путешествия", "путешествий"),
        )
        .unwrap();
        if let Some(year_range) = &cover.year_range {
            write!(
                out,
                "<div style=\"border-left: 1px solid rgba(255,255,255,0.4); padding-left: 24mm;\"><div style=\"font-size: 32pt; font-weight: 700; color: {accent};\">{years}</div><div style=\"font-size: 13pt; letter-spacing: 0.08em;\">годы</div></div>",
                accent = self.theme.accent,
                years = escape_html(year_range),
            )
            .unwrap();
        }
        out.push_str("</div>");

        if let Some(author) = &cover.author {
            write!(
                out,
                "<div style=\"font-size: 16pt; font-style: italic; opacity: 0.95; margin-bottom: 28mm;\">{}</div>",
                escape_html(author)
            )
            .unwrap();
        }
        if let Some(created) = &cover.created {
            write!(
                out,
                "<div style=\"font-size: 11pt; opacity: 0.75;\">Создано {}</div>",
                escape_html(created)
            )
            .unwrap();
        }
        if let Some(quote) = &cover.quote {
            write!(
                out,
                "<div style=\"margin-top: 14mm; max-width: 120mm; font-size: 11pt; line-height: 1.6; color: rgba(255,255,255,0.9); font-style: italic;\">«{text}»",
                text = escape_html(&quote.text),
            )
            .unwrap();
            if !quote.author.is_empty() {
                write!(
                    out,
                    "<div style=\"margin-top: 3mm; font-size: 9pt; letter-spacing: 0.08em; text-transform: uppercase; opacity: 0.9;\">{}</div>",
                    escape_html(&quote.author)
                )
                .unwrap();
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");

        out.push_str(
            "<div style=\"position: absolute; top: 0; bottom: 0; left: 0; right: 0; background: linear-gradient(120deg, rgba(0,0,0,0.25), transparent 60%);\"></div>",
        );
        out.push_str(
            "<div style=\"position: absolute; bottom: 20mm; right: 25mm; font-weight: 600; letter-spacing: 0.12em;\">MeTravel</div>",
        );
        out.push_str("</section>");
        out
    }

    fn toc_page(&self, toc: &TocBlock, siblings: &[Block]) -> String {
        let derived;
        let entries: &[TocEntry] = if toc.entries.is_empty() {
            derived = derive_toc_entries(siblings);
            &derived
        } else {
            &toc.entries
        };

        let mut out = String::new();
        write!(
            out,
            "<section class=\"pdf-page toc-page\" style=\"padding: 30mm 28mm; background: linear-gradient(180deg, {surface_alt}, #ffffff);\">",
            surface_alt = self.theme.surface_alt,
        )
        .unwrap();
        write!(
            out,
            "<div style=\"text-align: center; margin-bottom: 24mm;\"><h2 style=\"font-size: 34pt; margin-bottom: 8px;\">Содержание</h2><p style=\"color: {muted}; font-size: 12pt;\">{count} {label}</p></div>",
            muted = self.theme.muted,
            count = entries.len(),
            label = plural_ru(entries.len(), "путешествие", "путешествия", "путешествий"),
        )
        .unwrap();

        out.push_str("<div style=\"display: flex; flex-direction: column; gap: 14px;\">");
        for (index, entry) in entries.iter().enumerate() {
            write!(
                out,
                "<div style=\"display: grid; grid-template-columns: auto 1fr auto; gap: 16px; padding: 12px 16px; background: {surface}; border-radius: 14px; border: 1px solid {border}; box-shadow: 0 6px 20px rgba(15, 23, 42, 0.05);\">",
                surface = self.theme.surface,
                border = self.theme.border,
            )
            .unwrap();
            let thumb = entry
                .thumb
                .as_deref()
                .and_then(|url| rewrite_image_url(url, &self.images));
            match thumb {
                Some(src) => write!(
                    out,
                    "<div style=\"width: 52px; height: 52px; border-radius: 12px; overflow: hidden;\"><img src=\"{src}\" alt=\"{alt}\" style=\"width: 100%; height: 100%; object-fit: cover;\" crossorigin=\"anonymous\" /></div>",
                    src = escape_html(&src),
                    alt = escape_html(&entry.label),
                )
                .unwrap(),
                None => write!(
                    out,
                    "<div style=\"width: 52px; height: 52px; border-radius: 12px; background: {accent_soft}; display: flex; align-items: center; justify-content: center; font-size: 18pt;\">🧭</div>",
                    accent_soft = self.theme.accent_soft,
                )
                .unwrap(),
            }
            write!(
                out,
                "<div><div style=\"font-weight: 700; font-size: 14pt;\">{number}. {label}</div>",
                number = index + 1,
                label = escape_html(&entry.label),
            )
            .unwrap();
            if let Some(meta) = &entry.meta {
                write!(
                    out,
                    "<div style=\"font-size: 11pt; color: {muted};\">{}</div>",
                    escape_html(meta),
                    muted = self.theme.muted,
                )
                .unwrap();
            }
            out.push_str("</div>");
            write!(
                out,
                "<div style=\"font-weight: 700; color: {accent}; font-size: 16pt;\">{page}</div>",
                accent = self.theme.accent,
                page = entry.page,
            )
            .unwrap();
            out.push_str("</div>");
        }
        out.push_str("</div>");

        self.page_number(&mut out, toc.page);
        out.push_str("</section>");
        out
    }

    fn photo_page(&self, photo: &PhotoBlock) -> String {
        let safe_image = photo
            .url
            .as_deref()
            .and_then(|url| rewrite_image_url(url, &self.images));
        let caption = photo.caption.as_deref().unwrap_or("");

        let mut out = String::new();
        out.push_str("<section class=\"pdf-page travel-photo-page\" style=\"padding: 20mm;\">");
        match safe_image {
            Some(src) => {
                out.push_str(
                    "<div style=\"border-radius: 18px; overflow: hidden; position: relative; box-shadow: 0 15px 40px rgba(15,23,42,0.25);\">",
                );
                write!(
                    out,
                    "<img src=\"{src}\" alt=\"{alt}\" style=\"width: 100%; height: 210mm; object-fit: cover;\" crossorigin=\"anonymous\" />",
                    src = escape_html(&src),
                    alt = escape_html(caption),
                )
                .unwrap();
                out.push_str(
                    "<div style=\"position: absolute; left: 0; right: 0; bottom: 0; background: linear-gradient(180deg, rgba(0,0,0,0) 0%, rgba(0,0,0,0.75) 100%); padding: 24mm 18mm;\">",
                );
                write!(
                    out,
                    "<h1 style=\"color: #ffffff; font-size: 28pt; margin-bottom: 6mm;\">{}</h1>",
                    escape_html(caption)
                )
                .unwrap();
                if !photo.meta.is_empty() {
                    let pieces: Vec<String> =
                        photo.meta.iter().map(|piece| escape_html(piece)).collect();
                    write!(
                        out,
                        "<div style=\"color: rgba(255,255,255,0.9); font-size: 12pt; display: flex; gap: 14px;\">{}</div>",
                        pieces.join("<span>•</span>")
                    )
                    .unwrap();
                }
                out.push_str("</div></div>");
            }
            None => {
                write!(
                    out,
                    "<div style=\"border-radius: 18px; background: {accent_soft}; height: 210mm; display: flex; align-items: center; justify-content: center; color: {accent_strong};\"><h1 style=\"font-size: 28pt;\">{caption}</h1></div>",
                    accent_soft = self.theme.accent_soft,
                    accent_strong = self.theme.accent_strong,
                    caption = escape_html(caption),
                )
                .unwrap();
            }
        }
        self.page_number(&mut out, photo.page);
        out.push_str("</section>");
        out
    }

    fn description_page(&self, description: &DescriptionBlock) -> String {
        let text = description
            .text
            .as_deref()
            .map(sanitize_rich_text)
            .filter(|text| !text.trim().is_empty());

        let mut out = String::new();
        out.push_str(
            "<section class=\"pdf-page travel-text-page\" style=\"padding: 28mm 30mm;\">",
        );
        out.push_str("<div style=\"display: flex; flex-direction: column; gap: 16px;\">");
        write!(
            out,
            "<div><h2 style=\"font-size: 18pt; text-transform: uppercase; letter-spacing: 0.1em; color: {accent};\">{heading}</h2><div style=\"font-size: 12pt; color: {text_color};\">",
            accent = self.theme.accent,
            heading = escape_html(&description.heading),
            text_color = self.theme.text,
        )
        .unwrap();
        match text {
            Some(text) => out.push_str(&text),
            None => write!(
                out,
                "<p style=\"color: {muted_light}; font-style: italic;\">Описание путешествия отсутствует</p>",
                muted_light = self.theme.muted_light,
            )
            .unwrap(),
        }
        out.push_str("</div></div>");
        if let Some(link) = &description.link {
            self.online_link_footer(&mut out, link);
        }
        out.push_str("</div>");
        self.page_number(&mut out, description.page);
        out.push_str("</section>");
        out
    }

    fn recommendation_page(&self, recommendation: &RecommendationBlock) -> String {
        let text = recommendation
            .text
            .as_deref()
            .map(sanitize_rich_text)
            .filter(|text| !text.trim().is_empty());
        let plus = recommendation
            .plus
            .as_deref()
            .map(sanitize_rich_text)
            .filter(|text| !text.trim().is_empty());
        let minus = recommendation
            .minus
            .as_deref()
            .map(sanitize_rich_text)
            .filter(|text| !text.trim().is_empty());

        let mut out = String::new();
        out.push_str(
            "<section class=\"pdf-page travel-text-page\" style=\"padding: 28mm 30mm;\">",
        );
        out.push_str("<div style=\"display: flex; flex-direction: column; gap: 16px;\">");
        write!(
            out,
            "<div><h2 style=\"font-size: 18pt; text-transform: uppercase; letter-spacing: 0.1em; color: {accent};\">{heading}</h2>",
            accent = self.theme.accent,
            heading = escape_html(&recommendation.heading),
        )
        .unwrap();
        if let Some(text) = text {
            write!(out, "<div style=\"font-size: 12pt;\">{text}</div>").unwrap();
        }
        out.push_str("</div>");
        if plus.is_some() || minus.is_some() {
            out.push_str(
                "<div style=\"display: grid; grid-template-columns: 1fr 1fr; gap: 18px;\">",
            );
            if let Some(plus) = plus {
                write!(
                    out,
                    "<div style=\"background: #f0fdf4; border-radius: 12px; padding: 12px 14px; border: 1px solid #86efac;\"><h3 style=\"margin-bottom: 8px; color: #15803d;\">Плюсы</h3><div style=\"font-size: 11pt;\">{plus}</div></div>",
                )
                .unwrap();
            }
            if let Some(minus) = minus {
                write!(
                    out,
                    "<div style=\"background: #fef2f2; border-radius: 12px; padding: 12px 14px; border: 1px solid #fca5a5;\"><h3 style=\"margin-bottom: 8px; color: #b91c1c;\">Минусы</h3><div style=\"font-size: 11pt;\">{minus}</div></div>",
                )
                .unwrap();
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
        self.page_number(&mut out, recommendation.page);
        out.push_str("</section>");
        out
    }

    fn gallery_page(&self, gallery: &GalleryBlock) -> String {
        let photos: Vec<String> = gallery
            .images
            .iter()
            .filter_map(|image| rewrite_image_url(&image.url, &self.images))
            .collect();
        if photos.is_empty() {
            return String::new();
        }

        let columns = if gallery.columns > 0 {
            gallery.columns
        } else if photos.len() <= 4 {
            2
        } else if photos.len() <= 6 {
            3
        } else {
            4
        };

        let mut out = String::new();
        out.push_str("<section class=\"pdf-page gallery-page\" style=\"padding: 22mm 24mm;\">");
        out.push_str("<div style=\"text-align: center; margin-bottom: 16mm;\">");
        out.push_str("<h2 style=\"font-size: 22pt; margin-bottom: 4mm;\">Фотогалерея</h2>");
        if let Some(title) = &gallery.title {
            write!(
                out,
                "<p style=\"color: {muted};\">{}</p>",
                escape_html(title),
                muted = self.theme.muted,
            )
            .unwrap();
        }
        out.push_str("</div>");

        write!(
            out,
            "<div style=\"display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 8mm;\">",
        )
        .unwrap();
        for (index, photo) in photos.iter().enumerate() {
            write!(
                out,
                "<div style=\"border-radius: 12px; overflow: hidden; position: relative; box-shadow: 0 8px 20px rgba(15,23,42,0.15);\">\
<img src=\"{src}\" alt=\"Фото {number}\" style=\"width: 100%; height: 70mm; object-fit: cover;\" crossorigin=\"anonymous\" />\
<div style=\"position: absolute; top: 10px; right: 10px; background: rgba(0,0,0,0.55); color: #fff; width: 28px; height: 28px; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 11pt;\">{number}</div>\
</div>",
                src = escape_html(photo),
                number = index + 1,
            )
            .unwrap();
        }
        out.push_str("</div>");

        write!(
            out,
            "<div style=\"margin-top: 12mm; text-align: center; color: {muted}; font-size: 11pt;\">{count} {label}</div>",
            muted = self.theme.muted,
            count = photos.len(),
            label = plural_ru(photos.len(), "фотография", "фотографии", "фотографий"),
        )
        .unwrap();
        self.page_number(&mut out, gallery.page);
        out.push_str("</section>");
        out
    }

    fn map_page(&self, map: &MapBlock) -> String {
        if map.points.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str("<section class=\"pdf-page map-page\" style=\"padding: 24mm 26mm;\">");
        out.push_str("<div style=\"display: grid; grid-template-columns: 2fr 3fr; gap: 20mm;\">");
        write!(
            out,
            "<div style=\"background: {surface_alt}; border-radius: 16px; padding: 12px 12px 4px 12px; border: 1px solid {border};\">{svg}</div>",
            surface_alt = self.theme.surface_alt,
            border = self.theme.border,
            svg = route_svg(&map.points, self.theme),
        )
        .unwrap();

        out.push_str("<div><h2 style=\"font-size: 20pt; margin-bottom: 8px;\">Маршрут</h2>");
        if let Some(title) = &map.title {
            write!(
                out,
                "<p style=\"color: {muted}; margin-bottom: 16px;\">{}</p>",
                escape_html(title),
                muted = self.theme.muted,
            )
            .unwrap();
        }
        out.push_str("<div>");
        for (index, point) in map.points.iter().enumerate() {
            write!(
                out,
                "<div style=\"display: flex; gap: 10px; align-items: flex-start; padding: 8px 0; border-bottom: 1px solid {border};\">\
<div style=\"width: 28px; height: 28px; border-radius: 50%; background: {accent_soft}; color: {accent_strong}; display: flex; align-items: center; justify-content: center; font-weight: 700;\">{number}</div>\
<div style=\"flex: 1;\"><div style=\"font-weight: 600; color: {text}; margin-bottom: 2px;\">{address}</div>",
                border = self.theme.border,
                accent_soft = self.theme.accent_soft,
                accent_strong = self.theme.accent_strong,
                text = self.theme.text,
                number = index + 1,
                address = escape_html(&point.address),
            )
            .unwrap();
            if let Some(category) = &point.category_name {
                write!(
                    out,
                    "<div style=\"font-size: 11pt; color: {muted};\">{}</div>",
                    escape_html(category),
                    muted = self.theme.muted,
                )
                .unwrap();
            }
            if map.show_coordinates
                && let Some(coord) = &point.coord
            {
                write!(
                    out,
                    "<div style=\"font-size: 10pt; color: {muted_light};\">{}</div>",
                    escape_html(coord),
                    muted_light = self.theme.muted_light,
                )
                .unwrap();
            }
            out.push_str("</div></div>");
        }
        out.push_str("</div></div></div>");
        self.page_number(&mut out, map.page);
        out.push_str("</section>");
        out
    }

    fn qr_page(&self, qr: &QrBlock) -> String {
        let mut out = String::new();
        out.push_str(
            "<section class=\"pdf-page qr-page\" style=\"padding: 40mm 32mm; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;\">",
        );
        if let Some(image) = &qr.image {
            write!(
                out,
                "<img src=\"{src}\" alt=\"QR\" style=\"width: 45mm; height: 45mm; border-radius: 12px; border: 4px solid {surface_alt};\" />",
                src = escape_html(image),
                surface_alt = self.theme.surface_alt,
            )
            .unwrap();
        }
        write!(
            out,
            "<div style=\"margin-top: 10mm; font-size: 11pt; color: {muted};\"><div style=\"text-transform: uppercase; letter-spacing: 0.1em; font-weight: 600;\">{label}</div>",
            muted = self.theme.muted,
            label = escape_html(&qr.label),
        )
        .unwrap();
        if !qr.url.is_empty() {
            write!(
                out,
                "<div style=\"word-break: break-all;\">{}</div>",
                escape_html(&qr.url)
            )
            .unwrap();
        }
        out.push_str("</div>");
        self.page_number(&mut out, qr.page);
        out.push_str("</section>");
        out
    }

    fn online_link_footer(&self, out: &mut String, link: &OnlineLink) {
        if link.url.trim().is_empty() {
            return;
        }
        write!(
            out,
            "<div style=\"margin-top: 24px; display: flex; gap: 16px; align-items: center; border-top: 1px solid {border}; padding-top: 16px;\">",
            border = self.theme.border,
        )
        .unwrap();
        if let Some(qr) = &link.qr_image {
            write!(
                out,
                "<img src=\"{src}\" alt=\"QR\" style=\"width: 45mm; height: 45mm; border-radius: 12px; border: 4px solid {surface_alt};\" />",
                src = escape_html(qr),
                surface_alt = self.theme.surface_alt,
            )
            .unwrap();
        }
        write!(
            out,
            "<div style=\"font-size: 11pt; color: {muted};\"><div style=\"text-transform: uppercase; letter-spacing: 0.1em; font-weight: 600;\">Онлайн-версия</div><div style=\"word-break: break-all;\">{url}</div></div>",
            muted = self.theme.muted,
            url = escape_html(&link.url),
        )
        .unwrap();
        out.push_str("</div>");
    }

    fn page_number(&self, out: &mut String, page: usize) {
        if page > 0 {
            write!(
                out,
                "<div style=\"position: absolute; bottom: 15mm; right: 25mm; font-size: 12pt; color: {muted_light};\">{page}</div>",
                muted_light = self.theme.muted_light,
            )
            .unwrap();
        }
    }
}

fn spacer_element(spacer: &SpacerBlock) -> String {
    // Negative or absent heights collapse to the stock gap.
    let height = if spacer.height_mm.is_finite() && spacer.height_mm > 0.0 {
        spacer.height_mm
    } else {
        20.0
    };
    format!("<div style=\"height: {height}mm;\"></div>")
}

/// One fallback TOC entry per sibling block that carries a page number,
/// labelled from the metadata registry.
fn derive_toc_entries(blocks: &[Block]) -> Vec<TocEntry> {
    blocks
        .iter()
        .filter(|block| !matches!(block, Block::Toc(_)))
        .filter_map(|block| {
            let page = block_page(block)?;
            let meta = block.metadata()?;
            Some(TocEntry::new(meta.label, page))
        })
        .collect()
}

fn block_page(block: &Block) -> Option<usize> {
    let page = match block {
        Block::Photo(photo) => photo.page,
        Block::Description(description) => description.page,
        Block::Recommendation(recommendation) => recommendation.page,
        Block::Gallery(gallery) => gallery.page,
        Block::Map(map) => map.page,
        Block::Qr(qr) => qr.page,
        Block::Cover(_) | Block::Toc(_) | Block::Spacer(_) | Block::Unknown => 0,
    };
    (page > 0).then_some(page)
}
