//! Wire format of the artworks list endpoint.
//!
//! Only `data` and `pagination.total` are read; every other field in the
//! response is ignored. Decoding fails on anything else that is missing or
//! of the wrong type, so a bad payload never reaches the domain.

use crate::domain::entities::{Artwork, Page};
use serde::Deserialize;
use serde_with::{DefaultOnNull, DisplayFromStr, PickFirst, serde_as};

/// Top-level response body.
#[derive(Debug, Deserialize)]
pub struct ArtworkListResponse {
    pub data: Vec<ArtworkDto>,
    pub pagination: PaginationDto,
}

/// Pagination block. The server may send `total` as a number or a numeric string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationDto {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub total: u64,
}

/// A single record as sent over the wire.
///
/// The catalogue leaves `place_of_origin` and `artist_display` null or absent
/// for some works; those become empty strings.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ArtworkDto {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub place_of_origin: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub artist_display: String,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(with = "string_or_number")]
    pub date_start: String,
    #[serde(with = "string_or_number")]
    pub date_end: String,
}

impl From<ArtworkDto> for Artwork {
    fn from(dto: ArtworkDto) -> Self {
        Artwork::new(
            dto.id,
            dto.place_of_origin,
            dto.artist_display,
            dto.inscriptions,
            dto.date_start,
            dto.date_end,
        )
    }
}

impl From<ArtworkListResponse> for Page {
    fn from(body: ArtworkListResponse) -> Self {
        Page::new(
            body.data.into_iter().map(Artwork::from).collect(),
            body.pagination.total,
        )
    }
}

/// Accepts a JSON string or number and keeps its textual form.
mod string_or_number {
    use serde::Deserializer;
    use serde::de::{self, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrNumber)
    }

    struct StringOrNumber;

    impl Visitor<'_> for StringOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "pagination": { "total": 129884, "limit": 2, "offset": 0, "total_pages": 64942, "current_page": 1 },
        "data": [
            {
                "id": 129884,
                "place_of_origin": "Tokyo",
                "artist_display": "Utagawa Hiroshige",
                "inscriptions": null,
                "date_start": 1857,
                "date_end": 1857,
                "title": "ignored"
            },
            {
                "id": 27992,
                "place_of_origin": "France",
                "artist_display": "Georges Seurat",
                "inscriptions": "signed",
                "date_start": "1884",
                "date_end": "1886"
            }
        ],
        "info": { "version": "1.13" }
    }"#;

    #[test]
    fn test_parse_list_response() {
        let body: ArtworkListResponse = serde_json::from_str(BODY).unwrap();
        let page = Page::from(body);

        assert_eq!(page.total, 129884);
        assert_eq!(page.len(), 2);
        assert_eq!(page.records[0].id, 129884);
        assert_eq!(page.records[0].date_start, "1857");
        assert!(page.records[0].inscriptions.is_none());
        assert_eq!(page.records[1].date_end, "1886");
        assert_eq!(page.records[1].inscriptions.as_deref(), Some("signed"));
    }

    #[test]
    fn test_total_as_string() {
        let body: ArtworkListResponse =
            serde_json::from_str(r#"{"data": [], "pagination": {"total": "42"}}"#).unwrap();
        assert_eq!(body.pagination.total, 42);
    }

    #[test]
    fn test_missing_inscriptions_is_none() {
        let dto: ArtworkDto = serde_json::from_str(
            r#"{"id": 1, "place_of_origin": "Peru", "artist_display": "Unknown",
                "date_start": "1400", "date_end": "1500"}"#,
        )
        .unwrap();
        assert!(dto.inscriptions.is_none());
    }

    #[test]
    fn test_null_origin_and_artist_become_empty() {
        let json = r#"{"data": [
            {"id": 1, "place_of_origin": null, "artist_display": null,
             "date_start": 1700, "date_end": 1710},
            {"id": 2, "date_start": 1800, "date_end": 1810}
        ], "pagination": {"total": 2}}"#;
        let page = Page::from(serde_json::from_str::<ArtworkListResponse>(json).unwrap());

        assert_eq!(page.len(), 2);
        assert_eq!(page.records[0].place_of_origin, "");
        assert_eq!(page.records[0].artist_display, "");
        assert_eq!(page.records[1].place_of_origin, "");
    }

    #[test]
    fn test_missing_pagination_is_error() {
        assert!(serde_json::from_str::<ArtworkListResponse>(r#"{"data": []}"#).is_err());
    }

    #[test]
    fn test_missing_total_is_error() {
        let json = r#"{"data": [], "pagination": {"limit": 6}}"#;
        assert!(serde_json::from_str::<ArtworkListResponse>(json).is_err());
    }

    #[test]
    fn test_wrong_id_type_is_error() {
        let json = r#"{"data": [{"id": "x", "place_of_origin": "a", "artist_display": "b",
                      "date_start": "1", "date_end": "2"}], "pagination": {"total": 1}}"#;
        assert!(serde_json::from_str::<ArtworkListResponse>(json).is_err());
    }

    #[test]
    fn test_null_date_is_error() {
        let json = r#"{"id": 1, "place_of_origin": "a", "artist_display": "b",
                      "date_start": null, "date_end": "2"}"#;
        assert!(serde_json::from_str::<ArtworkDto>(json).is_err());
    }
}
