//! Jikan v4 response types for deserialization.
//!
//! Only the fields the app renders are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

use crate::Entry;

/// Top-level body of `GET /anime`.
#[derive(Debug, Deserialize)]
pub(super) struct AnimeListResponse {
    /// Missing or null means an empty result set.
    #[serde(default)]
    pub data: Option<Vec<AnimeItem>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AnimeItem {
    pub mal_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub aired: Option<Aired>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub synopsis: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Images {
    #[serde(default)]
    pub jpg: Option<ImageUrls>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ImageUrls {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Aired {
    #[serde(default)]
    pub prop: Option<AiredProp>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AiredProp {
    #[serde(default)]
    pub from: Option<DateParts>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DateParts {
    #[serde(default)]
    pub year: Option<i32>,
}

impl AnimeItem {
    pub(super) fn into_entry(self) -> Entry {
        let cover_url = self
            .images
            .and_then(|i| i.jpg)
            .and_then(|j| j.image_url)
            .unwrap_or_default();
        let year = self
            .aired
            .and_then(|a| a.prop)
            .and_then(|p| p.from)
            .and_then(|f| f.year);

        Entry {
            id: self.mal_id,
            title: self.title.unwrap_or_default(),
            cover_url,
            year,
            score: self.score,
            synopsis: self.synopsis,
        }
    }
}

/// Decode a response body into entries, preserving service order.
pub(super) fn decode_entries(body: &str) -> Result<Vec<Entry>, serde_json::Error> {
    let resp: AnimeListResponse = serde_json::from_str(body)?;
    Ok(resp
        .data
        .unwrap_or_default()
        .into_iter()
        .map(AnimeItem::into_entry)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_item() {
        let body = r#"{
            "pagination": {"has_next_page": true},
            "data": [{
                "mal_id": 1,
                "title": "Cowboy Bebop",
                "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/images/anime/4/19644.jpg"}},
                "aired": {"from": "1998-04-03T00:00:00+00:00", "prop": {"from": {"day": 3, "month": 4, "year": 1998}}},
                "score": 8.75,
                "synopsis": "Crime is timeless."
            }]
        }"#;
        let entries = decode_entries(body).unwrap();
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.id, 1);
        assert_eq!(e.title, "Cowboy Bebop");
        assert_eq!(
            e.cover_url,
            "https://cdn.myanimelist.net/images/anime/4/19644.jpg"
        );
        assert_eq!(e.year, Some(1998));
        assert_eq!(e.score, Some(8.75));
        assert_eq!(e.synopsis.as_deref(), Some("Crime is timeless."));
    }

    #[test]
    fn tolerates_missing_and_null_optionals() {
        let body = r#"{"data": [
            {"mal_id": 2, "title": "No Extras"},
            {"mal_id": 3, "title": "Nulls", "aired": {"prop": {"from": {"year": null}}},
             "score": null, "synopsis": null, "images": {"jpg": {}}}
        ]}"#;
        let entries = decode_entries(body).unwrap();
        assert_eq!(entries[0], Entry::new(2, "No Extras"));
        assert_eq!(entries[1], Entry::new(3, "Nulls"));
    }

    #[test]
    fn missing_data_field_is_empty() {
        assert!(decode_entries(r#"{"status": 404}"#).unwrap().is_empty());
        assert!(decode_entries(r#"{"data": null}"#).unwrap().is_empty());
    }

    #[test]
    fn preserves_service_order() {
        let body = r#"{"data": [{"mal_id": 9, "title": "Z"}, {"mal_id": 4, "title": "A"}]}"#;
        let ids: Vec<u64> = decode_entries(body).unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(decode_entries("<html>502 Bad Gateway</html>").is_err());
        assert!(decode_entries(r#"{"data": [{"title": "no id"}]}"#).is_err());
    }
}
