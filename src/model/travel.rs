//! Travel records and the metadata derived from them.
//!
//! `TravelForBook` mirrors the JSON shape the travel API returns (a mix of
//! camelCase and snake_case keys, ids and years that may arrive as numbers
//! or strings). Everything beyond `id` and `name` is optional; derivation
//! helpers degrade to `None`/empty instead of failing.

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::settings::SortOrder;

/// One image of a travel's gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(default, deserialize_with = "opt_flexible_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>) -> Self {
        GalleryImage {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// One point of a travel's route, as the API sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelAddress {
    #[serde(default, deserialize_with = "opt_flexible_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub coord: Option<String>,
    #[serde(rename = "travelImageThumbUrl", default)]
    pub travel_image_thumb_url: Option<String>,
    #[serde(rename = "categoryName", default)]
    pub category_name: Option<String>,
}

/// A route point normalized for rendering: stable id, non-empty address,
/// coordinates parsed where possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub coord: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// One travel record, as selected for book export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelForBook {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub recommendation: Option<String>,
    pub plus: Option<String>,
    pub minus: Option<String>,
    #[serde(rename = "countryName")]
    pub country_name: Option<String>,
    #[serde(rename = "cityName")]
    pub city_name: Option<String>,
    #[serde(deserialize_with = "opt_flexible_string")]
    pub year: Option<String>,
    #[serde(rename = "monthName")]
    pub month_name: Option<String>,
    pub number_days: Option<f64>,
    pub travel_image_thumb_url: Option<String>,
    pub travel_image_url: Option<String>,
    pub gallery: Vec<GalleryImage>,
    #[serde(rename = "travelAddress")]
    pub travel_address: Vec<TravelAddress>,
    pub youtube_link: Option<String>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
}

impl TravelForBook {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        TravelForBook {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_recommendation(mut self, text: impl Into<String>) -> Self {
        self.recommendation = Some(text.into());
        self
    }

    pub fn with_pros_cons(
        mut self,
        plus: impl Into<String>,
        minus: impl Into<String>,
    ) -> Self {
        self.plus = Some(plus.into());
        self.minus = Some(minus.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country_name = Some(country.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_days(mut self, days: f64) -> Self {
        self.number_days = Some(days);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.travel_image_url = Some(url.into());
        self
    }

    pub fn with_gallery(mut self, gallery: Vec<GalleryImage>) -> Self {
        self.gallery = gallery;
        self
    }

    pub fn with_addresses(mut self, addresses: Vec<TravelAddress>) -> Self {
        self.travel_address = addresses;
        self
    }

    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// The year as a number, when it parses as one.
    pub fn year_number(&self) -> Option<i64> {
        self.year.as_deref().and_then(|y| y.trim().parse().ok())
    }

    /// The travel's representative image: main image, then thumbnail, then
    /// the first gallery entry.
    pub fn primary_photo(&self) -> Option<&str> {
        if let Some(url) = self.travel_image_url.as_deref() {
            return Some(url);
        }
        if let Some(url) = self.travel_image_thumb_url.as_deref() {
            return Some(url);
        }
        self.gallery.first().map(|image| image.url.as_str())
    }

    /// The travel's public page, preferring the canonical slug URL.
    pub fn online_url(&self) -> Option<String> {
        if let Some(slug) = self.slug.as_deref() {
            if !slug.is_empty() {
                return Some(format!("https://metravel.by/travels/{slug}"));
            }
        }
        self.url.clone()
    }

    /// Route points with parsed coordinates, empty addresses replaced by
    /// numbered fallbacks.
    pub fn route_points(&self) -> Vec<RoutePoint> {
        self.travel_address
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let (lat, lng) = match point.coord.as_deref().and_then(parse_coordinates) {
                    Some((lat, lng)) => (Some(lat), Some(lng)),
                    None => (None, None),
                };
                let address = if point.address.trim().is_empty() {
                    format!("Точка {}", index + 1)
                } else {
                    point.address.clone()
                };
                RoutePoint {
                    id: point
                        .id
                        .clone()
                        .unwrap_or_else(|| index.to_string()),
                    address,
                    category_name: point.category_name.clone(),
                    coord: point.coord.clone(),
                    lat,
                    lng,
                }
            })
            .collect()
    }
}

/// Parse a `"lat,lng"` pair. Extra components are ignored; a side that is
/// not a number yields `None`.
pub fn parse_coordinates(coord: &str) -> Option<(f64, f64)> {
    let mut parts = coord.split(',');
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    let lng: f64 = parts.next()?.trim().parse().ok()?;
    Some((lat, lng))
}

/// Sort travels for presentation. Stable, so equal keys keep input order.
pub fn sort_travels(travels: &[TravelForBook], order: SortOrder) -> Vec<TravelForBook> {
    let mut sorted = travels.to_vec();
    match order {
        SortOrder::DateDesc => {
            sorted.sort_by_key(|t| std::cmp::Reverse(t.year_number().unwrap_or(0)));
        }
        SortOrder::DateAsc => {
            sorted.sort_by_key(|t| t.year_number().unwrap_or(0));
        }
        SortOrder::Country => {
            sorted.sort_by(|a, b| {
                let a = a.country_name.as_deref().unwrap_or("").to_lowercase();
                let b = b.country_name.as_deref().unwrap_or("").to_lowercase();
                a.cmp(&b)
            });
        }
        SortOrder::Alphabetical => {
            sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }
    sorted
}

/// The span of years covered: `"2019 - 2023"`, or the single year.
pub fn year_range(travels: &[TravelForBook]) -> Option<String> {
    let years: Vec<i64> = travels
        .iter()
        .filter_map(|t| t.year_number())
        .filter(|&y| y > 0)
        .collect();
    let min = years.iter().min()?;
    let max = years.iter().max()?;
    if min == max {
        Some(min.to_string())
    } else {
        Some(format!("{min} - {max}"))
    }
}

/// First available primary photo across travels, for automatic covers.
pub fn best_cover_image(travels: &[TravelForBook]) -> Option<&str> {
    travels.iter().find_map(|t| t.primary_photo())
}

/// Accept a JSON string or number where the API is inconsistent.
fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(s) => s,
        Repr::Int(n) => n.to_string(),
        Repr::Float(f) => f.to_string(),
    })
}

fn opt_flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|repr| match repr {
        Repr::Text(s) => s,
        Repr::Int(n) => n.to_string(),
        Repr::Float(f) => f.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("55.7558,37.6173"), Some((55.7558, 37.6173)));
        assert_eq!(parse_coordinates(" 53.9 , 27.56 "), Some((53.9, 27.56)));
        // Extra components are ignored
        assert_eq!(parse_coordinates("1,2,3"), Some((1.0, 2.0)));
        assert_eq!(parse_coordinates("abc,12"), None);
        assert_eq!(parse_coordinates("12"), None);
        assert_eq!(parse_coordinates(""), None);
    }

    #[test]
    fn test_primary_photo_precedence() {
        let mut travel = TravelForBook::new("1", "Минск")
            .with_gallery(vec![GalleryImage::new("https://example.com/g1.jpg")]);
        assert_eq!(travel.primary_photo(), Some("https://example.com/g1.jpg"));

        travel.travel_image_thumb_url = Some("https://example.com/thumb.jpg".into());
        assert_eq!(travel.primary_photo(), Some("https://example.com/thumb.jpg"));

        travel.travel_image_url = Some("https://example.com/main.jpg".into());
        assert_eq!(travel.primary_photo(), Some("https://example.com/main.jpg"));
    }

    #[test]
    fn test_online_url_prefers_slug() {
        let with_slug = TravelForBook::new("1", "Минск").with_slug("minsk-trip");
        assert_eq!(
            with_slug.online_url().as_deref(),
            Some("https://metravel.by/travels/minsk-trip")
        );

        let mut with_url = TravelForBook::new("2", "Прага");
        with_url.url = Some("https://example.com/praga".into());
        assert_eq!(
            with_url.online_url().as_deref(),
            Some("https://example.com/praga")
        );

        assert_eq!(TravelForBook::new("3", "Без ссылки").online_url(), None);
    }

    #[test]
    fn test_route_points_normalization() {
        let travel = TravelForBook::new("1", "Маршрут").with_addresses(vec![
            TravelAddress {
                id: Some("a".into()),
                address: "Площадь Победы".into(),
                coord: Some("53.9,27.56".into()),
                ..Default::default()
            },
            TravelAddress {
                address: "   ".into(),
                coord: Some("not,numbers".into()),
                ..Default::default()
            },
        ]);

        let points = travel.route_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id, "a");
        assert_eq!(points[0].lat, Some(53.9));
        // Blank address falls back to a numbered label, bad coord parses to None
        assert_eq!(points[1].id, "1");
        assert_eq!(points[1].address, "Точка 2");
        assert_eq!(points[1].lat, None);
    }

    #[test]
    fn test_sort_travels_orders() {
        let travels = vec![
            TravelForBook::new("1", "Вильнюс").with_year("2020"),
            TravelForBook::new("2", "Амстердам"),
            TravelForBook::new("3", "Будапешт").with_year("2023"),
        ];

        let desc = sort_travels(&travels, SortOrder::DateDesc);
        assert_eq!(desc[0].id, "3");
        assert_eq!(desc[1].id, "1");
        // Missing year sorts as 0, which lands last in descending order
        assert_eq!(desc[2].id, "2");

        let asc = sort_travels(&travels, SortOrder::DateAsc);
        assert_eq!(asc[0].id, "2");
        assert_eq!(asc[2].id, "3");

        let alpha = sort_travels(&travels, SortOrder::Alphabetical);
        assert_eq!(alpha[0].name, "Амстердам");
        assert_eq!(alpha[1].name, "Будапешт");
        assert_eq!(alpha[2].name, "Вильнюс");
    }

    #[test]
    fn test_year_range() {
        let travels = vec![
            TravelForBook::new("1", "A").with_year("2019"),
            TravelForBook::new("2", "B").with_year("2023"),
            TravelForBook::new("3", "C"),
        ];
        assert_eq!(year_range(&travels), Some("2019 - 2023".into()));

        let single = vec![TravelForBook::new("1", "A").with_year("2021")];
        assert_eq!(year_range(&single), Some("2021".into()));

        let none = vec![TravelForBook::new("1", "A")];
        assert_eq!(year_range(&none), None);
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "id": 42,
            "name": "Карпаты",
            "countryName": "Украина",
            "year": 2021,
            "number_days": 5,
            "travelAddress": [
                {"id": 7, "address": "Говерла", "coord": "48.16,24.5", "categoryName": "Горы"}
            ],
            "gallery": [{"url": "https://example.com/1.jpg", "id": "g1"}],
            "userName": "Алина"
        }"#;

        let travel: TravelForBook = serde_json::from_str(json).unwrap();
        assert_eq!(travel.id, "42");
        assert_eq!(travel.year.as_deref(), Some("2021"));
        assert_eq!(travel.year_number(), Some(2021));
        assert_eq!(travel.country_name.as_deref(), Some("Украина"));
        assert_eq!(travel.travel_address[0].id.as_deref(), Some("7"));
        assert_eq!(
            travel.travel_address[0].category_name.as_deref(),
            Some("Горы")
        );
        assert_eq!(travel.gallery[0].id.as_deref(), Some("g1"));
        assert_eq!(travel.user_name.as_deref(), Some("Алина"));
    }

    #[test]
    fn test_minimal_record_deserializes() {
        let travel: TravelForBook = serde_json::from_str(r#"{"id": "1", "name": "X"}"#).unwrap();
        assert_eq!(travel.name, "X");
        assert!(travel.gallery.is_empty());
        assert_eq!(travel.primary_photo(), None);
    }
}
