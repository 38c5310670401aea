//! End-to-end generator tests.
//!
//! Drive `BookGenerator` with the fixture travel list and check the
//! assembled document: shell structure, page planning, settings toggles,
//! image proxying, and deterministic output.

use tempfile::TempDir;
use wanderbook::book::BookGenerator;
use wanderbook::model::{BookSettings, SortOrder, TravelForBook};

fn fixture_travels() -> Vec<TravelForBook> {
    let json = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/travels.json"
    ))
    .expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

fn generate(settings: BookSettings) -> String {
    BookGenerator::new(settings)
        .with_seed(7)
        .generate(&fixture_travels())
}

// ============================================================================
// Document Shell Tests
// ============================================================================

#[test]
fn test_document_shell_structure() {
    let html = generate(BookSettings::default());

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<html lang=\"ru\">"));
    assert!(html.contains("<meta charset=\"utf-8\"/>"));
    assert!(html.contains("<title>Мои путешествия</title>"));
    assert!(html.contains("@media print"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_title_is_escaped_in_shell() {
    let html = generate(BookSettings {
        title: "Лето & \"Горы\" <3".to_string(),
        ..Default::default()
    });

    assert!(html.contains("<title>Лето &amp; &quot;Горы&quot; &lt;3</title>"));
    assert!(!html.contains("<title>Лето & \"Горы\" <3</title>"));
}

#[test]
fn test_css_variable_references_are_scrubbed() {
    let travels = vec![
        TravelForBook::new("1", "Стиль").with_description("<p>Фон был var(--accent) зеленым.</p>"),
    ];
    let html = BookGenerator::new(BookSettings::default())
        .with_seed(7)
        .generate(&travels);

    // The rasterizer cannot resolve custom properties
    assert!(!html.contains("var(--"));
    assert!(html.contains("transparent"));
}

// ============================================================================
// Page Planning Tests
// ============================================================================

#[test]
fn test_fixture_produces_expected_page_count() {
    let html = generate(BookSettings::default());

    // cover, toc, 5 pages for the full travel (photo/description/
    // recommendation/gallery/map), 4 for the second (no recommendation),
    // 2 for the minimal one, closing page
    assert_eq!(html.matches("class=\"pdf-page").count(), 14);
}

#[test]
fn test_every_travel_name_appears() {
    let html = generate(BookSettings::default());

    assert!(html.contains("Беловежская пуща"));
    assert!(html.contains("Прага за три дня"));
    assert!(html.contains("Минск пешком"));
}

#[test]
fn test_default_sort_puts_newest_first() {
    let html = generate(BookSettings::default());

    let pushcha = html.find("Беловежская пуща").unwrap();
    let praga = html.find("Прага за три дня").unwrap();
    let minsk = html.find("Минск пешком").unwrap();
    assert!(pushcha < praga);
    assert!(praga < minsk);
}

#[test]
fn test_alphabetical_sort() {
    let html = generate(BookSettings {
        sort_order: SortOrder::Alphabetical,
        ..Default::default()
    });

    let pushcha = html.find("Беловежская пуща").unwrap();
    let minsk = html.find("Минск пешком").unwrap();
    let praga = html.find("Прага за три дня").unwrap();
    assert!(pushcha < minsk);
    assert!(minsk < praga);
}

// ============================================================================
// Settings Toggle Tests
// ============================================================================

#[test]
fn test_toc_toggle() {
    let with_toc = generate(BookSettings::default());
    assert!(with_toc.contains("Содержание"));

    let without = generate(BookSettings {
        include_toc: false,
        ..Default::default()
    });
    assert!(!without.contains("Содержание"));
    // Two fewer: the TOC page itself plus the shifted start makes
    // the same travel pages land one earlier
    assert_eq!(without.matches("class=\"pdf-page").count(), 13);
}

#[test]
fn test_gallery_toggle() {
    let with_gallery = generate(BookSettings::default());
    assert!(with_gallery.contains("Фотогалерея"));

    let without = generate(BookSettings {
        include_gallery: false,
        ..Default::default()
    });
    assert!(!without.contains("Фотогалерея"));
}

#[test]
fn test_map_toggle() {
    let with_map = generate(BookSettings::default());
    assert!(with_map.contains("Маршрут"));

    let without = generate(BookSettings {
        include_map: false,
        ..Default::default()
    });
    assert!(!without.contains("Маршрут"));
    assert!(!without.contains("Недостаточно данных"));
}

#[test]
fn test_coordinates_toggle_on_map_page() {
    let with_coords = generate(BookSettings::default());
    assert!(with_coords.contains("52.5747,23.8019"));

    let without = generate(BookSettings {
        show_coordinates_on_map_page: false,
        ..Default::default()
    });
    assert!(!without.contains("52.5747,23.8019"));
    // The map page itself still renders
    assert!(without.contains("Маршрут"));
}

// ============================================================================
// Map Content Tests
// ============================================================================

#[test]
fn test_route_svg_and_placeholder_coexist() {
    let html = generate(BookSettings::default());

    // First travel has coordinates: a drawn route path
    assert!(html.contains("<path d=\"M "));
    // Second travel has a point without coordinates: the placeholder
    assert!(html.contains("Недостаточно данных"));
    // Its address still shows up in the location list
    assert!(html.contains("Карлов мост"));
}

// ============================================================================
// Image Handling Tests
// ============================================================================

#[test]
fn test_remote_images_are_proxied() {
    let html = generate(BookSettings::default());

    assert!(html.contains("images.weserv.nl/?url=cdn.example.com"));
    // No raw remote src survives
    assert!(!html.contains("src=\"https://cdn.example.com"));
}

#[test]
fn test_travel_without_photo_degrades() {
    let html = generate(BookSettings::default());

    // The minimal travel renders a photo page without an <img> hero
    assert!(html.contains("Минск пешком"));
    assert!(html.contains("Описание путешествия отсутствует"));
}

// ============================================================================
// Text Content Tests
// ============================================================================

#[test]
fn test_descriptions_are_sanitized() {
    let travels = vec![TravelForBook::new("1", "XSS").with_description(
        "<p>Нормальный текст</p><script>alert('x')</script><iframe src=\"https://evil.example\"></iframe>",
    )];
    let html = BookGenerator::new(BookSettings::default())
        .with_seed(7)
        .generate(&travels);

    assert!(html.contains("Нормальный текст"));
    assert!(!html.contains("alert('x')"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("<iframe"));
}

#[test]
fn test_recommendation_page_renders_pros_and_cons() {
    let html = generate(BookSettings::default());

    assert!(html.contains("Рекомендации"));
    assert!(html.contains("Зубры в дикой природе"));
    assert!(html.contains("Столовая у входа закрывается рано"));
    // Pros/cons panel colors
    assert!(html.contains("#f0fdf4"));
    assert!(html.contains("#fef2f2"));
}

#[test]
fn test_online_links_render_as_footer() {
    let html = generate(BookSettings::default());

    assert!(html.contains("Онлайн-версия"));
    assert!(html.contains("https://metravel.by/travels/belovezhskaya-pushcha"));
    assert!(html.contains("https://example.com/praga-za-tri-dnya"));
}

// ============================================================================
// Quote and Determinism Tests
// ============================================================================

#[test]
fn test_cover_and_closing_quotes_come_from_the_pool() {
    let html = generate(BookSettings::default());

    let pool_hits = wanderbook::quotes::travel_quotes()
        .iter()
        .filter(|quote| html.contains(quote.text))
        .count();
    assert!(pool_hits >= 2, "expected cover and closing quotes, got {pool_hits}");
}

#[test]
fn test_same_seed_same_document() {
    let travels = fixture_travels();
    let a = BookGenerator::new(BookSettings::default())
        .with_seed(99)
        .generate(&travels);
    let b = BookGenerator::new(BookSettings::default())
        .with_seed(99)
        .generate(&travels);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_change_the_quotes() {
    let travels = fixture_travels();
    let a = BookGenerator::new(BookSettings::default())
        .with_seed(0)
        .generate(&travels);
    let b = BookGenerator::new(BookSettings::default())
        .with_seed(3)
        .generate(&travels);
    // Seeds far enough apart land on different quotes
    assert_ne!(a, b);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

#[test]
fn test_empty_travel_list() {
    let html = BookGenerator::new(BookSettings::default())
        .with_seed(7)
        .generate(&[]);

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("Спасибо за путешествие!"));
    // Cover, empty TOC, closing page
    assert_eq!(html.matches("class=\"pdf-page").count(), 3);
}

#[test]
fn test_author_falls_back_when_user_name_missing() {
    let html = BookGenerator::new(BookSettings::default())
        .with_seed(7)
        .generate(&[TravelForBook::new("1", "Анонимная поездка")]);

    assert!(html.contains("Путешественник"));
}

#[test]
fn test_fixture_author_is_used() {
    let html = generate(BookSettings::default());
    assert!(html.contains("Алина"));
}

// ============================================================================
// Theme Tests
// ============================================================================

#[test]
fn test_every_theme_generates_a_document() {
    let travels = fixture_travels();
    for name in wanderbook::theme::theme_names() {
        let html = BookGenerator::new(BookSettings {
            template: name.to_string(),
            ..Default::default()
        })
        .with_seed(7)
        .generate(&travels);

        assert!(html.starts_with("<!doctype html>"), "theme {name}");
        assert!(html.contains("Беловежская пуща"), "theme {name}");
    }
}

#[test]
fn test_unknown_theme_falls_back() {
    let html = generate(BookSettings {
        template: "vaporwave".to_string(),
        ..Default::default()
    });
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("Беловежская пуща"));
}

// ============================================================================
// File Output Tests
// ============================================================================

#[test]
fn test_generate_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("book.html");

    BookGenerator::new(BookSettings::default())
        .with_seed(7)
        .generate_to_file(&fixture_travels(), &path)
        .expect("Failed to write book");

    let written = std::fs::read_to_string(&path).expect("Failed to read back");
    assert!(written.starts_with("<!doctype html>"));
    assert!(written.contains("Беловежская пуща"));
}

#[test]
fn test_generate_to_file_propagates_io_errors() {
    let result = BookGenerator::new(BookSettings::default())
        .generate_to_file(&[], std::path::Path::new("/nonexistent-dir/book.html"));
    assert!(result.is_err());
}
