//! Content blocks and their static metadata.
//!
//! A book is an ordered sequence of typed blocks. The enum is tagged with a
//! `type` field in JSON; any tag this crate does not know collapses into
//! [`Block::Unknown`], which the renderer turns into an empty fragment
//! instead of failing the document.

use serde::{Deserialize, Serialize};

use crate::model::travel::{GalleryImage, RoutePoint};

/// One typed unit of document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Cover(CoverBlock),
    Toc(TocBlock),
    Photo(PhotoBlock),
    Description(DescriptionBlock),
    Recommendation(RecommendationBlock),
    Gallery(GalleryBlock),
    Map(MapBlock),
    Qr(QrBlock),
    Spacer(SpacerBlock),
    /// Any unrecognized `type` tag. Renders as nothing.
    #[serde(other)]
    Unknown,
}

/// The nine known block kinds, by tag.
pub const BLOCK_KINDS: [&str; 9] = [
    "cover",
    "toc",
    "photo",
    "description",
    "recommendation",
    "gallery",
    "map",
    "qr",
    "spacer",
];

impl Block {
    /// The block's `type` tag ("unknown" for unrecognized blocks).
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Cover(_) => "cover",
            Block::Toc(_) => "toc",
            Block::Photo(_) => "photo",
            Block::Description(_) => "description",
            Block::Recommendation(_) => "recommendation",
            Block::Gallery(_) => "gallery",
            Block::Map(_) => "map",
            Block::Qr(_) => "qr",
            Block::Spacer(_) => "spacer",
            Block::Unknown => "unknown",
        }
    }

    /// Static metadata for this block's kind, if it is a known kind.
    pub fn metadata(&self) -> Option<&'static BlockMeta> {
        block_metadata(self.kind())
    }
}

/// A quote resolved into owned text for embedding in a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    pub text: String,
    pub author: String,
}

impl From<&crate::quotes::Quote> for BlockQuote {
    fn from(quote: &crate::quotes::Quote) -> Self {
        BlockQuote {
            text: quote.text.to_string(),
            author: quote.author.to_string(),
        }
    }
}

/// Title page configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverBlock {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Hero image URL; the theme's cover gradient is used when absent.
    pub image: Option<String>,
    pub author: Option<String>,
    pub year_range: Option<String>,
    pub travel_count: usize,
    /// Pre-formatted "Создано ..." line.
    pub created: Option<String>,
    pub quote: Option<BlockQuote>,
}

/// One row of the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocEntry {
    pub label: String,
    /// Secondary line, e.g. country and year.
    pub meta: Option<String>,
    pub thumb: Option<String>,
    pub page: usize,
}

impl TocEntry {
    pub fn new(label: impl Into<String>, page: usize) -> Self {
        TocEntry {
            label: label.into(),
            page,
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }
}

/// Table-of-contents page. With no entries, the renderer derives one label
/// per sibling block from the metadata registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocBlock {
    pub id: String,
    pub entries: Vec<TocEntry>,
    pub page: usize,
}

/// Full-bleed photo page with a caption overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhotoBlock {
    pub id: String,
    pub url: Option<String>,
    pub caption: Option<String>,
    /// Short facts shown under the caption (country, year, duration).
    pub meta: Vec<String>,
    pub page: usize,
}

/// Link footer shown under a description: target URL plus optional
/// out-of-band QR image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnlineLink {
    pub url: String,
    pub qr_image: Option<String>,
}

/// Themed text page for a travel's description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DescriptionBlock {
    pub id: String,
    pub heading: String,
    pub text: Option<String>,
    pub link: Option<OnlineLink>,
    pub page: usize,
}

impl Default for DescriptionBlock {
    fn default() -> Self {
        DescriptionBlock {
            id: String::new(),
            heading: "Описание".to_string(),
            text: None,
            link: None,
            page: 0,
        }
    }
}

/// Themed text page for advice, with optional pros/cons panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationBlock {
    pub id: String,
    pub heading: String,
    pub text: Option<String>,
    pub plus: Option<String>,
    pub minus: Option<String>,
    pub page: usize,
}

impl Default for RecommendationBlock {
    fn default() -> Self {
        RecommendationBlock {
            id: String::new(),
            heading: "Рекомендации".to_string(),
            text: None,
            plus: None,
            minus: None,
            page: 0,
        }
    }
}

/// Photo grid page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryBlock {
    pub id: String,
    /// Whose photos these are, shown under the heading.
    pub title: Option<String>,
    pub images: Vec<GalleryImage>,
    /// Grid columns; 0 derives from the photo count.
    pub columns: usize,
    pub page: usize,
}

/// Static route page: inline SVG plus a numbered location list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapBlock {
    pub id: String,
    pub title: Option<String>,
    pub points: Vec<RoutePoint>,
    /// Print the raw coordinate string under each location.
    pub show_coordinates: bool,
    pub page: usize,
}

impl Default for MapBlock {
    fn default() -> Self {
        MapBlock {
            id: String::new(),
            title: None,
            points: Vec::new(),
            show_coordinates: true,
            page: 0,
        }
    }
}

/// Online-version pointer with an out-of-band QR image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrBlock {
    pub id: String,
    pub url: String,
    /// Pre-generated QR image (usually a data URL).
    pub image: Option<String>,
    pub label: String,
    pub page: usize,
}

impl Default for QrBlock {
    fn default() -> Self {
        QrBlock {
            id: String::new(),
            url: String::new(),
            image: None,
            label: "Онлайн-версия".to_string(),
            page: 0,
        }
    }
}

/// Vertical whitespace between in-flow elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerBlock {
    pub id: String,
    pub height_mm: f32,
}

impl Default for SpacerBlock {
    fn default() -> Self {
        SpacerBlock {
            id: String::new(),
            height_mm: 20.0,
        }
    }
}

// ============================================================================
// Block Metadata Registry
// ============================================================================

/// Editor-facing category of a block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCategory {
    Text,
    Media,
    Layout,
    Special,
}

impl BlockCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockCategory::Text => "text",
            BlockCategory::Media => "media",
            BlockCategory::Layout => "layout",
            BlockCategory::Special => "special",
        }
    }
}

/// Human-readable description of a block kind, for editor palettes and the
/// TOC fallback labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMeta {
    pub kind: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub category: BlockCategory,
}

static BLOCK_METADATA: [BlockMeta; 9] = [
    BlockMeta {
        kind: "cover",
        label: "Обложка",
        icon: "📕",
        description: "Титульная страница",
        category: BlockCategory::Layout,
    },
    BlockMeta {
        kind: "toc",
        label: "Содержание",
        icon: "📑",
        description: "Оглавление книги",
        category: BlockCategory::Layout,
    },
    BlockMeta {
        kind: "photo",
        label: "Фото",
        icon: "🖼️",
        description: "Страница с фотографией",
        category: BlockCategory::Media,
    },
    BlockMeta {
        kind: "description",
        label: "Описание",
        icon: "¶",
        description: "Текст путешествия",
        category: BlockCategory::Text,
    },
    BlockMeta {
        kind: "recommendation",
        label: "Рекомендации",
        icon: "⭐",
        description: "Советы, плюсы и минусы",
        category: BlockCategory::Text,
    },
    BlockMeta {
        kind: "gallery",
        label: "Галерея",
        icon: "📷",
        description: "Сетка фотографий",
        category: BlockCategory::Media,
    },
    BlockMeta {
        kind: "map",
        label: "Карта",
        icon: "🗺️",
        description: "Карта маршрута",
        category: BlockCategory::Media,
    },
    BlockMeta {
        kind: "qr",
        label: "QR-код",
        icon: "📱",
        description: "Ссылка на онлайн-версию",
        category: BlockCategory::Special,
    },
    BlockMeta {
        kind: "spacer",
        label: "Отступ",
        icon: "⬜",
        description: "Пустое пространство",
        category: BlockCategory::Layout,
    },
];

/// Look up static metadata by block kind tag.
pub fn block_metadata(kind: &str) -> Option<&'static BlockMeta> {
    BLOCK_METADATA.iter().find(|meta| meta.kind == kind)
}
