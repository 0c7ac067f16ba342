use serde::{Deserialize, Deserializer, Serialize};

use super::metadata::ExternalKey;

/// Server-assigned identity of a watchlist entry.
pub type MediaId = i64;

/// Whether an entry is a movie or a TV show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Tv,
}

impl MediaType {
    pub const ALL: &[MediaType] = &[Self::Movie, Self::Tv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Tv => "TV Show",
        }
    }

    /// Path segment and wire value used by the backend.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User's watch status for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WatchStatus {
    #[default]
    #[serde(rename = "watching")]
    Watching,
    #[serde(rename = "completed")]
    Completed,
    #[serde(
        rename = "plan to watch",
        alias = "plan-to-watch",
        alias = "plan_to_watch"
    )]
    PlanToWatch,
}

impl WatchStatus {
    pub const ALL: &[WatchStatus] = &[Self::Watching, Self::Completed, Self::PlanToWatch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watching => "Watching",
            Self::Completed => "Completed",
            Self::PlanToWatch => "Plan to Watch",
        }
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One watchlist item as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub id: MediaId,
    pub title: String,
    #[serde(rename = "mediaType")]
    pub media_type: MediaType,
    pub status: WatchStatus,
    #[serde(
        rename = "nextReleaseDate",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub next_release_date: Option<String>,
    #[serde(rename = "tmdb_id", default)]
    pub external_id: Option<u64>,
    #[serde(rename = "tmdb_type", default, deserialize_with = "lenient_media_type")]
    pub external_type: Option<MediaType>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub poster_path: Option<String>,
}

impl MediaEntry {
    /// Key for fetching third-party metadata, if the entry is linked.
    ///
    /// Falls back to the entry's own media type when no external type was stored.
    pub fn external_key(&self) -> Option<ExternalKey> {
        self.external_id.map(|id| ExternalKey {
            media_type: self.external_type.unwrap_or(self.media_type),
            id,
        })
    }

    /// The entry's fields without its identity.
    pub fn draft(&self) -> MediaDraft {
        MediaDraft {
            title: self.title.clone(),
            media_type: self.media_type,
            status: self.status,
            next_release_date: self.next_release_date.clone(),
            external_id: self.external_id,
            external_type: self.external_type,
            poster_path: self.poster_path.clone(),
        }
    }
}

/// Body of a create or update request: an entry without `id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaDraft {
    pub title: String,
    #[serde(rename = "mediaType")]
    pub media_type: MediaType,
    pub status: WatchStatus,
    #[serde(rename = "nextReleaseDate")]
    pub next_release_date: Option<String>,
    #[serde(rename = "tmdb_id")]
    pub external_id: Option<u64>,
    #[serde(rename = "tmdb_type")]
    pub external_type: Option<MediaType>,
    pub poster_path: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn lenient_media_type<'de, D>(deserializer: D) -> Result<Option<MediaType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(MediaType::from_api_str))
}
