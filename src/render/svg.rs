//! Inline SVG for the route page.
//!
//! The map page is rasterized to PDF, so the route is drawn as a plain
//! SVG sketch: points normalized into a 100x60 viewBox, connected in visit
//! order, numbered above each stop. No tiles, no projection beyond linear
//! min/max scaling.

use std::fmt::Write;

use crate::model::RoutePoint;
use crate::theme::Theme;

const VIEW_WIDTH: f64 = 100.0;
const VIEW_HEIGHT: f64 = 60.0;
const PADDING_X: f64 = 6.0;
const PADDING_Y: f64 = 8.0;

/// Draw the route for the given points, or the "no data" placeholder when
/// none of them carries parsed coordinates.
pub fn route_svg(points: &[RoutePoint], theme: &Theme) -> String {
    let coords: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|point| match (point.lat, point.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        })
        .collect();

    if coords.is_empty() {
        return map_placeholder(theme);
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;
    for &(lat, lng) in &coords {
        min_lat = min_lat.min(lat);
        max_lat = max_lat.max(lat);
        min_lng = min_lng.min(lng);
        max_lng = max_lng.max(lng);
    }
    // A single stop (or identical stops) still needs a nonzero range.
    let lat_range = (max_lat - min_lat).max(0.0001);
    let lng_range = (max_lng - min_lng).max(0.0001);

    let width = VIEW_WIDTH - PADDING_X * 2.0;
    let height = VIEW_HEIGHT - PADDING_Y * 2.0;
    let normalized: Vec<(f64, f64)> = coords
        .iter()
        .map(|&(lat, lng)| {
            let x = PADDING_X + (lng - min_lng) / lng_range * width;
            let y = PADDING_Y + (max_lat - lat) / lat_range * height;
            (x, y)
        })
        .collect();

    let mut path = String::new();
    for (index, &(x, y)) in normalized.iter().enumerate() {
        let op = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            path.push(' ');
        }
        write!(path, "{op} {x:.2},{y:.2}").unwrap();
    }

    let mut circles = String::new();
    for (index, &(x, y)) in normalized.iter().enumerate() {
        write!(
            circles,
            "<g><circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"2\" fill=\"{accent}\" stroke=\"{surface}\" stroke-width=\"0.8\" /><text x=\"{x:.2}\" y=\"{label_y:.2}\" font-size=\"4\" text-anchor=\"middle\" fill=\"{text}\" font-weight=\"700\">{number}</text></g>",
            accent = theme.accent,
            surface = theme.surface,
            label_y = y - 3.0,
            text = theme.cover_text,
            number = index + 1,
        )
        .unwrap();
    }

    format!(
        "<svg viewBox=\"0 0 100 60\" preserveAspectRatio=\"none\" role=\"img\" aria-label=\"Маршрут путешествия\">\
<defs><linearGradient id=\"mapGradient\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\
<stop offset=\"0%\" stop-color=\"{surface_alt}\" /><stop offset=\"100%\" stop-color=\"{highlight}\" />\
</linearGradient></defs>\
<rect x=\"0\" y=\"0\" width=\"100\" height=\"60\" rx=\"5\" fill=\"url(#mapGradient)\" />\
<path d=\"{path}\" fill=\"none\" stroke=\"{accent_strong}\" stroke-width=\"1.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\" />\
{circles}</svg>",
        surface_alt = theme.surface_alt,
        highlight = theme.highlight,
        accent_strong = theme.accent_strong,
    )
}

/// Placeholder panel shown when no point has usable coordinates.
pub fn map_placeholder(theme: &Theme) -> String {
    format!(
        "<svg viewBox=\"0 0 100 60\" role=\"img\" aria-label=\"Маршрут\" preserveAspectRatio=\"none\">\
<defs><linearGradient id=\"mapPlaceholderGradient\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\
<stop offset=\"0%\" stop-color=\"{surface_alt}\" /><stop offset=\"100%\" stop-color=\"{highlight}\" />\
</linearGradient></defs>\
<rect x=\"0\" y=\"0\" width=\"100\" height=\"60\" rx=\"4\" fill=\"url(#mapPlaceholderGradient)\" />\
<text x=\"50\" y=\"32\" text-anchor=\"middle\" fill=\"{muted_light}\" font-size=\"8\">Недостаточно данных</text>\
</svg>",
        surface_alt = theme.surface_alt,
        highlight = theme.highlight,
        muted_light = theme.muted_light,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoutePoint;
    use crate::theme::default_theme;

    fn point(lat: f64, lng: f64) -> RoutePoint {
        RoutePoint {
            id: String::new(),
            address: "Точка".to_string(),
            category_name: None,
            coord: Some(format!("{lat}, {lng}")),
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    #[test]
    fn test_route_svg_draws_numbered_stops() {
        let points = vec![point(53.9, 27.56), point(52.1, 23.7), point(55.2, 30.2)];
        let svg = route_svg(&points, default_theme());

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 100 60\""));
        assert!(svg.contains("<path d=\"M "));
        assert!(svg.contains(" L "));
        assert!(svg.contains(">1</text>"));
        assert!(svg.contains(">3</text>"));
    }

    #[test]
    fn test_points_without_coordinates_fall_back_to_placeholder() {
        let points = vec![RoutePoint {
            id: "1".to_string(),
            address: "Минск".to_string(),
            category_name: None,
            coord: None,
            lat: None,
            lng: None,
        }];
        let svg = route_svg(&points, default_theme());
        assert!(svg.contains("Недостаточно данных"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_single_stop_stays_inside_view_box() {
        let svg = route_svg(&[point(53.9, 27.56)], default_theme());
        // One point with a degenerate range lands on the padded origin.
        assert!(svg.contains("cx=\"6.00\""));
        assert!(svg.contains("cy=\"8.00\""));
    }

    #[test]
    fn test_empty_points_render_placeholder() {
        let svg = route_svg(&[], default_theme());
        assert!(svg.contains("Недостаточно данных"));
    }
}
