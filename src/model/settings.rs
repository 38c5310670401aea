//! Book settings: everything the export dialog can configure.
//!
//! A [`BookSettings`] value is the single input that shapes generation
//! besides the travel data itself. Presets (see [`crate::model::preset`])
//! are just named bundles of these settings; seeding from a preset copies
//! the bundle and the caller overrides individual fields afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the cover image is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverType {
    /// Explicit image if set, otherwise the first travel's photo.
    #[default]
    Auto,
    /// Always the first travel's photo.
    FirstPhoto,
    /// No image; the theme's gradient fills the cover.
    Gradient,
    /// Only the explicitly supplied image.
    Custom,
}

/// Order in which travels appear in the book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    Country,
    Alphabetical,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::Country => "country",
            SortOrder::Alphabetical => "alphabetical",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "date-desc" => Ok(SortOrder::DateDesc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "country" => Ok(SortOrder::Country),
            "alphabetical" => Ok(SortOrder::Alphabetical),
            other => Err(format!(
                "unknown sort order '{other}' (expected date-desc, date-asc, country or alphabetical)"
            )),
        }
    }
}

/// Arrangement of photos on gallery pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Masonry,
    Polaroid,
}

/// Orientation when two photos share a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TwoPerPageLayout {
    #[default]
    Vertical,
    Horizontal,
}

/// Where gallery captions sit relative to their photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionPosition {
    #[default]
    Bottom,
    Overlay,
}

/// Gap size between gallery photos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GallerySpacing {
    Compact,
    #[default]
    Normal,
    Spacious,
}

/// Packing-checklist section that can be included in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistSection {
    Clothing,
    Food,
    Electronics,
    Documents,
    Medicine,
}

/// Sections preselected when checklists are first enabled.
pub const DEFAULT_CHECKLIST_SECTIONS: [ChecklistSection; 3] = [
    ChecklistSection::Clothing,
    ChecklistSection::Food,
    ChecklistSection::Electronics,
];

/// Complete option set for one book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookSettings {
    pub title: String,
    pub subtitle: Option<String>,
    pub cover_type: CoverType,
    pub cover_image: Option<String>,
    /// Theme name; unknown names fall back to the default theme.
    pub template: String,
    pub sort_order: SortOrder,
    pub include_toc: bool,
    pub include_gallery: bool,
    pub include_map: bool,
    pub show_coordinates_on_map_page: bool,
    pub include_checklists: bool,
    pub checklist_sections: Vec<ChecklistSection>,
    pub gallery_layout: GalleryLayout,
    pub gallery_columns: usize,
    pub gallery_photos_per_page: usize,
    pub two_per_page_layout: TwoPerPageLayout,
    pub show_captions: bool,
    pub caption_position: CaptionPosition,
    pub gallery_spacing: GallerySpacing,
}

impl Default for BookSettings {
    fn default() -> Self {
        BookSettings {
            title: "Мои путешествия".to_string(),
            subtitle: None,
            cover_type: CoverType::Auto,
            cover_image: None,
            template: "minimal".to_string(),
            sort_order: SortOrder::DateDesc,
            include_toc: true,
            include_gallery: true,
            include_map: true,
            show_coordinates_on_map_page: true,
            include_checklists: false,
            checklist_sections: DEFAULT_CHECKLIST_SECTIONS.to_vec(),
            gallery_layout: GalleryLayout::Grid,
            gallery_columns: 3,
            gallery_photos_per_page: 2,
            two_per_page_layout: TwoPerPageLayout::Vertical,
            show_captions: true,
            caption_position: CaptionPosition::Bottom,
            gallery_spacing: GallerySpacing::Normal,
        }
    }
}

impl BookSettings {
    /// Copy a preset's bundle as the starting point for user overrides.
    pub fn from_preset(preset: &crate::model::preset::BookPreset) -> Self {
        preset.settings.clone()
    }

    /// Fill context-dependent fallbacks after overrides are applied: an
    /// empty title becomes "Путешествия {userName}" (or the stock title
    /// when no user name is known), and an empty checklist selection
    /// reverts to the default sections.
    pub fn resolve(mut self, user_name: Option<&str>) -> Self {
        if self.title.trim().is_empty() {
            self.title = match user_name {
                Some(name) if !name.trim().is_empty() => format!("Путешествия {name}"),
                _ => "Мои путешествия".to_string(),
            };
        }
        if self.checklist_sections.is_empty() {
            self.checklist_sections = DEFAULT_CHECKLIST_SECTIONS.to_vec();
        }
        self
    }

    /// Reject option combinations the export dialog would refuse to save.
    pub fn validate(&self) -> Result<()> {
        if self.include_checklists && self.checklist_sections.is_empty() {
            return Err(Error::InvalidSettings(
                "checklists are enabled but no sections are selected".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_export_dialog() {
        let settings = BookSettings::default();
        assert_eq!(settings.title, "Мои путешествия");
        assert_eq!(settings.cover_type, CoverType::Auto);
        assert_eq!(settings.template, "minimal");
        assert_eq!(settings.sort_order, SortOrder::DateDesc);
        assert!(settings.include_toc);
        assert!(settings.include_gallery);
        assert!(settings.include_map);
        assert!(settings.show_coordinates_on_map_page);
        assert!(!settings.include_checklists);
        assert_eq!(
            settings.checklist_sections,
            DEFAULT_CHECKLIST_SECTIONS.to_vec()
        );
        assert_eq!(settings.gallery_columns, 3);
        assert_eq!(settings.gallery_photos_per_page, 2);
        assert!(settings.show_captions);
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let settings: BookSettings = serde_json::from_str(
            r#"{
                "title": "Лето 2023",
                "coverType": "first-photo",
                "sortOrder": "date-asc",
                "includeMap": false,
                "checklistSections": ["documents", "medicine"]
            }"#,
        )
        .unwrap();
        assert_eq!(settings.title, "Лето 2023");
        assert_eq!(settings.cover_type, CoverType::FirstPhoto);
        assert_eq!(settings.sort_order, SortOrder::DateAsc);
        assert!(!settings.include_map);
        assert!(settings.include_toc);
        assert_eq!(
            settings.checklist_sections,
            vec![ChecklistSection::Documents, ChecklistSection::Medicine]
        );
    }

    #[test]
    fn test_serializes_camel_case_tags() {
        let json = serde_json::to_string(&BookSettings::default()).unwrap();
        assert!(json.contains(r#""coverType":"auto""#));
        assert!(json.contains(r#""sortOrder":"date-desc""#));
        assert!(json.contains(r#""showCoordinatesOnMapPage":true"#));
    }

    #[test]
    fn test_sort_order_parses_cli_names() {
        assert_eq!("date-desc".parse::<SortOrder>(), Ok(SortOrder::DateDesc));
        assert_eq!(
            "alphabetical".parse::<SortOrder>(),
            Ok(SortOrder::Alphabetical)
        );
        assert!("newest".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Country.as_str(), "country");
    }

    #[test]
    fn test_resolve_fills_title_from_user_name() {
        let settings = BookSettings {
            title: "  ".to_string(),
            ..Default::default()
        };
        let resolved = settings.clone().resolve(Some("Ольга"));
        assert_eq!(resolved.title, "Путешествия Ольга");
        let resolved = settings.resolve(None);
        assert_eq!(resolved.title, "Мои путешествия");
    }

    #[test]
    fn test_resolve_restores_default_checklist_selection() {
        let settings = BookSettings {
            checklist_sections: Vec::new(),
            ..Default::default()
        };
        let resolved = settings.resolve(None);
        assert_eq!(
            resolved.checklist_sections,
            DEFAULT_CHECKLIST_SECTIONS.to_vec()
        );
    }

    #[test]
    fn test_validate_rejects_empty_checklist_selection() {
        let settings = BookSettings {
            include_checklists: true,
            checklist_sections: Vec::new(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
        assert!(BookSettings::default().validate().is_ok());
    }
}
