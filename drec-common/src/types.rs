//! API request/response types shared between the resource API and its clients

use serde::{Deserialize, Serialize};

/// One release row as served by the list and item read endpoints.
///
/// Immutable once fetched; the client replaces its list wholesale on every
/// query rather than patching rows in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub status: String,
    /// Creation date as "YYYY-MM-DD"
    pub date: String,
}

/// Paged releases list response.
///
/// `mock` is set when the backing store was unreachable and the items are
/// the built-in sample dataset rather than authoritative data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseList {
    pub items: Vec<ReleaseRecord>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub mock: bool,
}

impl ReleaseList {
    /// Empty, authoritative list for the given page window
    pub fn empty(page: i64, limit: i64) -> Self {
        Self {
            items: Vec::new(),
            page,
            limit,
            total: 0,
            mock: false,
        }
    }
}

/// Track payload within a release create request.
///
/// `order_index` is accepted for wire compatibility but the server assigns
/// track order from array position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTrack {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub duration_sec: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

/// POST /v1/releases request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRelease {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<NewTrack>,
}

/// 201 response for a created release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedRelease {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub status: String,
}

/// PUT /v1/releases/:id request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRelease {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

/// Generic `{ok: true}` acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Name-only entity (artist or label)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRecord {
    pub id: i64,
    pub name: String,
}

/// Paged list of name-only entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameList {
    pub items: Vec<NameRecord>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub mock: bool,
}

/// POST body for creating an artist or label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewName {
    #[serde(default)]
    pub name: String,
}

/// Error body returned by failing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_flag_omitted_when_false() {
        let list = ReleaseList::empty(1, 10);
        let json = serde_json::to_string(&list).unwrap();
        assert!(!json.contains("mock"));

        let mocked = ReleaseList { mock: true, ..list };
        let json = serde_json::to_string(&mocked).unwrap();
        assert!(json.contains("\"mock\":true"));
    }

    #[test]
    fn test_new_release_tolerates_missing_fields() {
        let req: NewRelease = serde_json::from_str(r#"{"title":"City Lights"}"#).unwrap();
        assert_eq!(req.title, "City Lights");
        assert_eq!(req.artist, "");
        assert!(req.status.is_none());
        assert!(req.tracks.is_empty());
    }

    #[test]
    fn test_new_track_accepts_order_index() {
        let t: NewTrack =
            serde_json::from_str(r#"{"title":"Intro","duration_sec":90,"order_index":7}"#).unwrap();
        assert_eq!(t.order_index, Some(7));
        assert_eq!(t.duration_sec, 90);
        assert!(t.artist.is_none());
    }
}
