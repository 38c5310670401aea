//! Ready-made settings bundles the user can start from.
//!
//! Presets are immutable records; picking one copies its settings into a
//! mutable [`BookSettings`](crate::model::settings::BookSettings) that the
//! user then overrides field by field.

use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::settings::{
    BookSettings, CaptionPosition, GalleryLayout, GallerySpacing, SortOrder,
};

/// Grouping shown above presets in a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

static PRESET_CATEGORIES: [PresetCategory; 4] = [
    PresetCategory {
        id: "simple",
        name: "Простые",
        description: "Минимум страниц, ничего лишнего",
    },
    PresetCategory {
        id: "rich",
        name: "Подробные",
        description: "Максимум контента на каждое путешествие",
    },
    PresetCategory {
        id: "map-focused",
        name: "Маршруты",
        description: "Акцент на картах и точках маршрута",
    },
    PresetCategory {
        id: "themed",
        name: "Тематические",
        description: "Подборки под настроение",
    },
];

/// One named settings bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Id of an entry in [`preset_categories`].
    pub category: &'static str,
    pub settings: BookSettings,
    pub is_default: bool,
}

/// All shipped presets, in picker order.
pub fn book_presets() -> &'static [BookPreset] {
    static PRESETS: LazyLock<Vec<BookPreset>> = LazyLock::new(|| {
        vec![
            BookPreset {
                id: "minimalist",
                name: "Минималистичный",
                icon: "🤍",
                description: "Только фото и описания",
                category: "simple",
                settings: BookSettings {
                    template: "minimal".to_string(),
                    include_gallery: false,
                    include_map: false,
                    ..Default::default()
                },
                is_default: true,
            },
            BookPreset {
                id: "photo-album",
                name: "Фотоальбом",
                icon: "📸",
                description: "Фотографии крупным планом",
                category: "simple",
                settings: BookSettings {
                    template: "classic".to_string(),
                    include_toc: false,
                    include_map: false,
                    gallery_photos_per_page: 1,
                    gallery_spacing: GallerySpacing::Spacious,
                    ..Default::default()
                },
                is_default: false,
            },
            BookPreset {
                id: "full-story",
                name: "Полная история",
                icon: "📖",
                description: "Все разделы книги",
                category: "rich",
                settings: BookSettings {
                    template: "classic".to_string(),
                    include_checklists: true,
                    ..Default::default()
                },
                is_default: false,
            },
            BookPreset {
                id: "route-book",
                name: "Книга маршрутов",
                icon: "🗺️",
                description: "Карты и координаты каждого маршрута",
                category: "map-focused",
                settings: BookSettings {
                    template: "adventure".to_string(),
                    sort_order: SortOrder::DateAsc,
                    include_gallery: false,
                    ..Default::default()
                },
                is_default: false,
            },
            BookPreset {
                id: "romantic-journey",
                name: "Романтическое путешествие",
                icon: "💝",
                description: "Нежное оформление и полароид-галерея",
                category: "themed",
                settings: BookSettings {
                    template: "romantic".to_string(),
                    gallery_layout: GalleryLayout::Polaroid,
                    caption_position: CaptionPosition::Overlay,
                    ..Default::default()
                },
                is_default: false,
            },
            BookPreset {
                id: "adventure-log",
                name: "Дневник приключений",
                icon: "🧭",
                description: "Хроника походов в хронологическом порядке",
                category: "themed",
                settings: BookSettings {
                    template: "adventure".to_string(),
                    sort_order: SortOrder::DateAsc,
                    gallery_layout: GalleryLayout::Masonry,
                    ..Default::default()
                },
                is_default: false,
            },
        ]
    });
    &PRESETS
}

/// The preset categories, in picker order.
pub fn preset_categories() -> &'static [PresetCategory] {
    &PRESET_CATEGORIES
}

/// The preset marked as the starting selection.
pub fn default_preset() -> &'static BookPreset {
    // The registry always carries exactly one default entry.
    book_presets()
        .iter()
        .find(|preset| preset.is_default)
        .unwrap_or(&book_presets()[0])
}

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Result<&'static BookPreset> {
    book_presets()
        .iter()
        .find(|preset| preset.id == id)
        .ok_or_else(|| Error::UnknownPreset(id.to_string()))
}
