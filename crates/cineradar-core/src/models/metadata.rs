use serde::{Deserialize, Serialize};

use super::entry::MediaType;

/// Identifies a title in the third-party media database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalKey {
    pub media_type: MediaType,
    pub id: u64,
}

/// A candidate external match for a typed title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    /// Release date for movies, first air date for shows.
    pub release_date: Option<String>,
}

impl Suggestion {
    /// Four-digit year from the release date, if present.
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
    }
}

/// Extended descriptive data shown on the detail view.
///
/// Every field is optional; the view omits whatever is missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalMetadata {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub genres: Vec<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub seasons: Option<u32>,
    pub cast: Vec<CastMember>,
}

/// A top-billed cast credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
}
