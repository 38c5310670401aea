//! Utility functions with platform-specific implementations.

use chrono::Datelike;

/// Get a time-based seed value for pseudo-random number generation.
///
/// On native platforms, uses `SystemTime::now()`.
/// On WASM, uses `js_sys::Date::now()`.
#[cfg(not(target_arch = "wasm32"))]
pub fn time_seed_nanos() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(12345)
}

#[cfg(target_arch = "wasm32")]
pub fn time_seed_nanos() -> u64 {
    // js_sys::Date::now() returns milliseconds as f64
    (js_sys::Date::now() * 1_000_000.0) as u64
}

// ============================================================================
// Russian Pluralization
// ============================================================================

/// Pick a Russian plural form with the coarse rule the summary lines use:
/// 1 -> singular, everything else below 5 -> paucal, 5 and up -> plural.
///
/// # Examples
///
/// ```
/// use wanderbook::util::plural_ru;
///
/// assert_eq!(plural_ru(1, "путешествие", "путешествия", "путешествий"), "путешествие");
/// assert_eq!(plural_ru(3, "путешествие", "путешествия", "путешествий"), "путешествия");
/// assert_eq!(plural_ru(7, "путешествие", "путешествия", "путешествий"), "путешествий");
/// ```
pub fn plural_ru<'a>(count: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else if count < 5 {
        few
    } else {
        many
    }
}

/// Format a trip duration like "3 дня" with full declension rules.
///
/// Rounds to the nearest whole day. Returns an empty string for missing,
/// zero, or negative values.
pub fn format_days(days: Option<f64>) -> String {
    let Some(days) = days else {
        return String::new();
    };
    if !days.is_finite() {
        return String::new();
    }
    let normalized = days.round().max(0.0) as u64;
    if normalized == 0 {
        return String::new();
    }
    if normalized % 10 == 1 && normalized % 100 != 11 {
        return format!("{normalized} день");
    }
    if matches!(normalized % 10, 2..=4) && !matches!(normalized % 100, 12..=14) {
        return format!("{normalized} дня");
    }
    format!("{normalized} дней")
}

// ============================================================================
// Dates
// ============================================================================

/// Russian month names in the genitive case, for "26 мая 2024" style lines.
const RU_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Today's date as `(year, month 1-12, day)`.
pub fn today_parts() -> (i32, u32, u32) {
    let today = chrono::Utc::now().date_naive();
    (today.year(), today.month(), today.day())
}

/// Format a date like "26 мая 2024" for the cover's creation line.
///
/// Out-of-range months clamp to January rather than panic.
pub fn format_date_ru(year: i32, month: u32, day: u32) -> String {
    let month_name = RU_MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(RU_MONTHS[0]);
    format!("{day} {month_name} {year}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_ru_forms() {
        assert_eq!(plural_ru(1, "день", "дня", "дней"), "день");
        assert_eq!(plural_ru(2, "день", "дня", "дней"), "дня");
        assert_eq!(plural_ru(4, "день", "дня", "дней"), "дня");
        assert_eq!(plural_ru(5, "день", "дня", "дней"), "дней");
        assert_eq!(plural_ru(12, "день", "дня", "дней"), "дней");
        // Zero follows the paucal branch of the coarse rule
        assert_eq!(plural_ru(0, "день", "дня", "дней"), "дня");
    }

    #[test]
    fn test_format_days_declension() {
        assert_eq!(format_days(Some(1.0)), "1 день");
        assert_eq!(format_days(Some(2.0)), "2 дня");
        assert_eq!(format_days(Some(4.0)), "4 дня");
        assert_eq!(format_days(Some(5.0)), "5 дней");
        assert_eq!(format_days(Some(11.0)), "11 дней");
        assert_eq!(format_days(Some(12.0)), "12 дней");
        assert_eq!(format_days(Some(21.0)), "21 день");
        assert_eq!(format_days(Some(22.0)), "22 дня");
    }

    #[test]
    fn test_format_days_degenerate_values() {
        assert_eq!(format_days(None), "");
        assert_eq!(format_days(Some(0.0)), "");
        assert_eq!(format_days(Some(-3.0)), "");
        assert_eq!(format_days(Some(f64::NAN)), "");
        // Rounds to the nearest day
        assert_eq!(format_days(Some(2.6)), "3 дня");
    }

    #[test]
    fn test_format_date_ru() {
        assert_eq!(format_date_ru(2024, 5, 26), "26 мая 2024");
        assert_eq!(format_date_ru(2025, 1, 1), "1 января 2025");
        // Clamp instead of panic on nonsense months
        assert_eq!(format_date_ru(2025, 0, 1), "1 января 2025");
        assert_eq!(format_date_ru(2025, 13, 1), "1 января 2025");
    }

    #[test]
    fn test_time_seed_nonzero() {
        assert!(time_seed_nanos() > 0);
    }
}
