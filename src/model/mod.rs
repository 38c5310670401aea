//! Core data model for book generation.
//!
//! This module contains:
//! - Travel records as fetched from the site API
//! - Content blocks and their static metadata
//! - Book settings and the user-selectable preset registry

mod block;
mod preset;
mod settings;
mod travel;

// Re-export block types
pub use block::{
    BLOCK_KINDS, Block, BlockCategory, BlockMeta, BlockQuote, CoverBlock, DescriptionBlock,
    GalleryBlock, MapBlock, OnlineLink, PhotoBlock, QrBlock, RecommendationBlock, SpacerBlock,
    TocBlock, TocEntry, block_metadata,
};

// Re-export settings types
pub use settings::{
    BookSettings, CaptionPosition, ChecklistSection, CoverType, DEFAULT_CHECKLIST_SECTIONS,
    GalleryLayout, GallerySpacing, SortOrder, TwoPerPageLayout,
};

// Re-export the preset registry
pub use preset::{
    BookPreset, PresetCategory, book_presets, default_preset, find_preset, preset_categories,
};

// Re-export travel records and helpers
pub use travel::{
    GalleryImage, RoutePoint, TravelAddress, TravelForBook, best_cover_image, parse_coordinates,
    sort_travels, year_range,
};
