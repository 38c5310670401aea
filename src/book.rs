//! Book generator - assembles travel records into a print-ready document.
//!
//! `BookGenerator` turns a travel list plus [`BookSettings`] into one HTML
//! string: it sorts the travels, plans page numbers, builds the block
//! sequence (cover, optional TOC, per-travel pages, closing page) and
//! delegates markup to [`BlockRenderer`](crate::render::BlockRenderer),
//! wrapping the result in the document shell.
//!
//! Generation is deterministic per generator instance: the creation date
//! and the quote seed are captured at construction, so repeated
//! `generate` calls over the same input yield byte-identical output.
//!
//! # Example
//!
//! ```
//! use wanderbook::book::BookGenerator;
//! use wanderbook::model::{BookSettings, TravelForBook};
//!
//! let travels = vec![TravelForBook::new("1", "Минск за выходные")];
//! let generator = BookGenerator::new(BookSettings::default()).with_seed(7);
//! let html = generator.generate(&travels);
//! assert!(html.contains("Минск за выходные"));
//! ```

use std::fmt::Write;
use std::path::Path;

use crate::error::Result;
use crate::image::ImageProxyConfig;
use crate::model::{
    Block, BlockQuote, BookSettings, CoverBlock, CoverType, DescriptionBlock, GalleryBlock,
    MapBlock, OnlineLink, PhotoBlock, RecommendationBlock, TocBlock, TocEntry, TravelForBook,
    best_cover_image, sort_travels, year_range,
};
use crate::quotes::{Quote, pick_random_quote_seeded};
use crate::render::{BlockRenderer, build_styles, escape_html, scrub_css_vars};
use crate::theme::theme;
use crate::util::{format_date_ru, format_days, time_seed_nanos, today_parts};

/// Generates one photo book per [`BookSettings`] bundle.
pub struct BookGenerator {
    settings: BookSettings,
    images: ImageProxyConfig,
    seed: u64,
    // Captured once so repeated runs print the same date lines.
    created: (i32, u32, u32),
}

impl BookGenerator {
    pub fn new(settings: BookSettings) -> Self {
        BookGenerator {
            settings,
            images: ImageProxyConfig::default(),
            seed: time_seed_nanos(),
            created: today_parts(),
        }
    }

    /// Fix the quote seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the image proxy configuration.
    pub fn with_image_config(mut self, images: ImageProxyConfig) -> Self {
        self.images = images;
        self
    }

    pub fn settings(&self) -> &BookSettings {
        &self.settings
    }

    /// Generate the complete HTML document.
    ///
    /// Never fails: travels missing optional fields degrade to placeholder
    /// or omitted fragments, and an empty travel list still yields a valid
    /// document (cover plus closing page).
    pub fn generate(&self, travels: &[TravelForBook]) -> String {
        let theme = theme(&self.settings.template);
        let sorted = sort_travels(travels, self.settings.sort_order);

        let cover_quote = pick_random_quote_seeded(None, self.seed);
        let final_quote = pick_random_quote_seeded(Some(cover_quote), self.seed.wrapping_add(1));

        let (blocks, closing_number) = self.build_blocks(&sorted, cover_quote);

        let renderer = BlockRenderer::new(theme).with_image_config(self.images.clone());
        let mut body = renderer.render_blocks(&blocks);
        body.push_str(&renderer.closing_page(
            Some(&BlockQuote::from(final_quote)),
            self.created.0,
            closing_number,
        ));

        let mut html = String::new();
        html.push_str("<!doctype html>\n<html lang=\"ru\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\"/>\n");
        html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n");
        writeln!(html, "  <title>{}</title>", escape_html(&self.settings.title)).unwrap();
        html.push_str("  <style>\n");
        html.push_str(&build_styles(theme));
        html.push_str("  </style>\n</head>\n<body>\n");
        html.push_str(&body);
        html.push_str("\n</body>\n</html>\n");

        scrub_css_vars(&html)
    }

    /// Generate and write the document to `path`.
    pub fn generate_to_file(&self, travels: &[TravelForBook], path: &Path) -> Result<()> {
        std::fs::write(path, self.generate(travels))?;
        Ok(())
    }

    /// Build the ordered block sequence plus the closing page's number.
    ///
    /// Page plan: content starts at page 3 when a TOC is present, else 2.
    /// Each travel consumes a photo page and a description page, plus one
    /// page each for its recommendation, gallery and map when those
    /// render. The closing page takes the next number.
    fn build_blocks(&self, sorted: &[TravelForBook], cover_quote: &Quote) -> (Vec<Block>, usize) {
        let settings = &self.settings;
        let author = sorted
            .first()
            .and_then(|travel| travel.user_name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Путешественник".to_string());
        let created = format_date_ru(self.created.0, self.created.1, self.created.2);

        let mut blocks = vec![Block::Cover(CoverBlock {
            id: "cover".to_string(),
            title: settings.title.clone(),
            subtitle: settings.subtitle.clone(),
            image: self.resolve_cover_image(sorted),
            author: Some(author),
            year_range: year_range(sorted),
            travel_count: sorted.len(),
            created: Some(created),
            quote: Some(BlockQuote::from(cover_quote)),
        })];

        let mut page = if settings.include_toc { 3 } else { 2 };
        let mut toc_entries = Vec::with_capacity(sorted.len());
        let mut travel_blocks = Vec::new();

        for travel in sorted {
            let points = travel.route_points();
            let has_recommendation = has_text(&travel.recommendation)
                || has_text(&travel.plus)
                || has_text(&travel.minus);
            let has_gallery = settings.include_gallery && !travel.gallery.is_empty();
            let has_map = settings.include_map && !points.is_empty();

            let mut entry = TocEntry::new(travel.name.clone(), page);
            let mut meta_parts = Vec::new();
            if let Some(country) = &travel.country_name {
                meta_parts.push(format!("📍 {country}"));
            }
            if let Some(year) = travel.year.as_deref().filter(|year| !year.is_empty()) {
                meta_parts.push(format!("📅 {year}"));
            }
            if !meta_parts.is_empty() {
                entry = entry.with_meta(meta_parts.join(" · "));
            }
            if let Some(thumb) = travel
                .travel_image_thumb_url
                .clone()
                .or_else(|| travel.primary_photo().map(str::to_string))
            {
                entry = entry.with_thumb(thumb);
            }
            toc_entries.push(entry);

            let mut photo_meta = meta_parts;
            let days = format_days(travel.number_days);
            if !days.is_empty() {
                photo_meta.push(days);
            }
            travel_blocks.push(Block::Photo(PhotoBlock {
                id: format!("photo-{}", travel.id),
                url: travel.primary_photo().map(str::to_string),
                caption: Some(travel.name.clone()),
                meta: photo_meta,
                page,
            }));
            page += 1;

            travel_blocks.push(Block::Description(DescriptionBlock {
                id: format!("description-{}", travel.id),
                text: travel.description.clone(),
                link: travel.online_url().map(|url| OnlineLink {
                    url,
                    qr_image: None,
                }),
                page,
                ..Default::default()
            }));
            page += 1;

            if has_recommendation {
                travel_blocks.push(Block::Recommendation(RecommendationBlock {
                    id: format!("recommendation-{}", travel.id),
                    text: travel.recommendation.clone(),
                    plus: travel.plus.clone(),
                    minus: travel.minus.clone(),
                    page,
                    ..Default::default()
                }));
                page += 1;
            }

            if has_gallery {
                travel_blocks.push(Block::Gallery(GalleryBlock {
                    id: format!("gallery-{}", travel.id),
                    title: Some(travel.name.clone()),
                    images: travel.gallery.clone(),
                    columns: 0,
                    page,
                }));
                page += 1;
            }

            if has_map {
                travel_blocks.push(Block::Map(MapBlock {
                    id: format!("map-{}", travel.id),
                    title: Some(travel.name.clone()),
                    points,
                    show_coordinates: settings.show_coordinates_on_map_page,
                    page,
                }));
                page += 1;
            }
        }

        if settings.include_toc {
            blocks.push(Block::Toc(TocBlock {
                id: "toc".to_string(),
                entries: toc_entries,
                page: 2,
            }));
        }
        blocks.extend(travel_blocks);

        (blocks, page)
    }

    fn resolve_cover_image(&self, sorted: &[TravelForBook]) -> Option<String> {
        match self.settings.cover_type {
            CoverType::Gradient => None,
            CoverType::FirstPhoto => sorted
                .first()
                .and_then(|travel| travel.primary_photo())
                .map(str::to_string),
            CoverType::Custom => self.settings.cover_image.clone(),
            CoverType::Auto => self
                .settings
                .cover_image
                .clone()
                .or_else(|| best_cover_image(sorted).map(str::to_string)),
        }
    }
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|text| !text.trim().is_empty())
}
