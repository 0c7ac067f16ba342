use serde::{Deserialize, Serialize};

use cineradar_core::models::{CastMember, ExternalMetadata, MediaEntry, Suggestion, User};

/// Number of cast credits kept for the detail view.
pub const CAST_LIMIT: usize = 10;

// ── Backend request/response bodies ─────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub authenticated: bool,
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListResponse {
    #[serde(default)]
    pub media: Vec<MediaEntry>,
}

/// Error body. The backend sends `message`; proxied media-database errors carry `status_message`.
#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    pub message: Option<String>,
    pub status_message: Option<String>,
}

impl MessageBody {
    /// Extract a human-readable message from a raw error body, if it has one.
    pub fn extract(body: &str) -> String {
        serde_json::from_str::<MessageBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.status_message))
            .unwrap_or_default()
    }
}

// ── Media database (proxied) ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchItem>,
}

/// Movie results use `title`/`release_date`, TV results `name`/`first_air_date`.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

impl SearchItem {
    /// `None` for results without any title.
    pub fn into_suggestion(self) -> Option<Suggestion> {
        let title = non_blank(self.title).or(non_blank(self.name))?;
        Some(Suggestion {
            id: self.id,
            title,
            poster_path: non_blank(self.poster_path),
            release_date: non_blank(self.release_date).or(non_blank(self.first_air_date)),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub title: Option<String>,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub runtime: Option<u32>,
    pub number_of_seasons: Option<u32>,
}

impl DetailsResponse {
    pub fn into_metadata(self) -> ExternalMetadata {
        ExternalMetadata {
            title: non_blank(self.title).or(non_blank(self.name)),
            tagline: non_blank(self.tagline),
            overview: non_blank(self.overview),
            // An unrated title reports 0 with no votes.
            vote_average: self.vote_average.filter(|_| self.vote_count != Some(0)),
            vote_count: self.vote_count,
            genres: self.genres.into_iter().map(|g| g.name).collect(),
            poster_path: non_blank(self.poster_path),
            release_date: non_blank(self.release_date).or(non_blank(self.first_air_date)),
            runtime_minutes: self.runtime.filter(|&m| m > 0),
            seasons: self.number_of_seasons,
            cast: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastCredit>,
}

#[derive(Debug, Deserialize)]
pub struct CastCredit {
    pub name: String,
    pub character: Option<String>,
    pub order: Option<u32>,
}

impl CreditsResponse {
    /// Billing order first, at most `limit` credits.
    pub fn into_cast(mut self, limit: usize) -> Vec<CastMember> {
        self.cast.sort_by_key(|c| c.order.unwrap_or(u32::MAX));
        self.cast
            .into_iter()
            .take(limit)
            .map(|c| CastMember {
                name: c.name,
                character: non_blank(c.character),
            })
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineradar_core::models::{MediaType, WatchStatus};

    #[test]
    fn test_deserialize_check_auth() {
        let json = r#"{ "authenticated": true, "user": { "id": 3, "username": "ana", "email": "ana@example.com" } }"#;
        let resp: CheckAuthResponse = serde_json::from_str(json).unwrap();
        assert!(resp.authenticated);
        assert_eq!(resp.user.unwrap().username, "ana");

        let resp: CheckAuthResponse = serde_json::from_str(r#"{ "authenticated": false }"#).unwrap();
        assert!(!resp.authenticated);
        assert!(resp.user.is_none());
    }

    #[test]
    fn test_deserialize_media_list() {
        let json = r#"{
            "media": [
                { "id": 1, "title": "Dune", "mediaType": "movie", "status": "completed",
                  "nextReleaseDate": null, "tmdb_id": 438631, "tmdb_type": "movie",
                  "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg" },
                { "id": 2, "title": "Severance", "mediaType": "tv", "status": "plan to watch",
                  "nextReleaseDate": "2026-01-16", "tmdb_id": null, "tmdb_type": null,
                  "poster_path": null }
            ]
        }"#;
        let resp: MediaListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.media.len(), 2);
        assert_eq!(resp.media[0].external_id, Some(438631));
        assert_eq!(resp.media[1].media_type, MediaType::Tv);
        assert_eq!(resp.media[1].status, WatchStatus::PlanToWatch);
        assert_eq!(resp.media[1].next_release_date.as_deref(), Some("2026-01-16"));
    }

    #[test]
    fn test_message_extract() {
        assert_eq!(
            MessageBody::extract(r#"{"message":"Media not found"}"#),
            "Media not found"
        );
        assert_eq!(
            MessageBody::extract(r#"{"status_code":7,"status_message":"Invalid API key"}"#),
            "Invalid API key"
        );
        assert_eq!(MessageBody::extract("<html>Internal Server Error</html>"), "");
    }

    #[test]
    fn test_search_normalizes_movie_and_tv() {
        let json = r#"{
            "page": 1,
            "results": [
                { "id": 27205, "title": "Inception", "release_date": "2010-07-15", "poster_path": "/inc.jpg" },
                { "id": 1399, "name": "Game of Thrones", "first_air_date": "2011-04-17", "poster_path": null },
                { "id": 5, "title": "", "name": null }
            ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let suggestions: Vec<_> = resp
            .results
            .into_iter()
            .filter_map(SearchItem::into_suggestion)
            .collect();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].title, "Inception");
        assert_eq!(suggestions[0].year(), Some("2010"));
        assert_eq!(suggestions[1].title, "Game of Thrones");
        assert_eq!(suggestions[1].release_date.as_deref(), Some("2011-04-17"));
        assert!(suggestions[1].poster_path.is_none());
    }

    #[test]
    fn test_details_movie() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "tagline": "Your mind is the scene of the crime.",
            "overview": "Cobb, a skilled thief...",
            "vote_average": 8.4,
            "vote_count": 36000,
            "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
            "poster_path": "/inc.jpg",
            "release_date": "2010-07-15",
            "runtime": 148
        }"#;
        let meta = serde_json::from_str::<DetailsResponse>(json)
            .unwrap()
            .into_metadata();
        assert_eq!(meta.title.as_deref(), Some("Inception"));
        assert_eq!(meta.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(meta.runtime_minutes, Some(148));
        assert!(meta.seasons.is_none());
        assert!(meta.cast.is_empty());
    }

    #[test]
    fn test_details_tv_with_blanks() {
        let json = r#"{
            "id": 95396,
            "name": "Severance",
            "tagline": "",
            "overview": "",
            "vote_average": 0.0,
            "vote_count": 0,
            "first_air_date": "2022-02-17",
            "number_of_seasons": 2
        }"#;
        let meta = serde_json::from_str::<DetailsResponse>(json)
            .unwrap()
            .into_metadata();
        assert_eq!(meta.title.as_deref(), Some("Severance"));
        assert!(meta.tagline.is_none());
        assert!(meta.overview.is_none());
        assert!(meta.vote_average.is_none());
        assert!(meta.genres.is_empty());
        assert_eq!(meta.release_date.as_deref(), Some("2022-02-17"));
        assert_eq!(meta.seasons, Some(2));
    }

    #[test]
    fn test_credits_ordered_and_limited() {
        let json = r#"{
            "id": 27205,
            "cast": [
                { "name": "Elliot Page", "character": "Ariadne", "order": 2 },
                { "name": "Leonardo DiCaprio", "character": "Cobb", "order": 0 },
                { "name": "Joseph Gordon-Levitt", "character": "", "order": 1 }
            ]
        }"#;
        let cast = serde_json::from_str::<CreditsResponse>(json)
            .unwrap()
            .into_cast(2);
        assert_eq!(cast.len(), 2);
        assert_eq!(cast[0].name, "Leonardo DiCaprio");
        assert_eq!(cast[1].name, "Joseph Gordon-Levitt");
        assert!(cast[1].character.is_none());
    }
}
