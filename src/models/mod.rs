use serde::{Deserialize, Serialize};

use crate::providers::ProviderId;

/// A single search hit, already normalized into the common schema by
/// its provider client.
///
/// Optional fields are plain strings defaulting to `""` rather than
/// `Option`s — that is how the provider payloads arrive, and it keeps
/// the matching code free of null handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Provider-scoped ID; unique within its provider, not globally.
    pub id: String,
    pub title: String,
    /// Artist name(s); may already be a comma-joined list.
    pub artist: String,
    #[serde(default)]
    pub album: String,
    /// Cover art URL.
    #[serde(default)]
    pub image: String,
    /// Duration in seconds, as the providers send it: a string, often empty.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub language: String,
    /// Whether the provider advertises a 320kbps stream.
    #[serde(default)]
    pub has_320kbps: bool,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    pub provider: ProviderId,
}

fn default_kind() -> String {
    "song".to_string()
}

impl Track {
    /// A bare candidate with only the fields matching looks at; the
    /// rest start empty.
    pub fn new(provider: ProviderId, id: &str, title: &str, artist: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: String::new(),
            image: String::new(),
            duration: String::new(),
            year: String::new(),
            language: String::new(),
            has_320kbps: false,
            kind: default_kind(),
            provider,
        }
    }
}
