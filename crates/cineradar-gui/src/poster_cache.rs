use std::collections::HashMap;
use std::time::Duration;

use iced::widget::image;

/// State of a poster image for a given URL.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// In-memory poster images keyed by their full URL.
///
/// Posters are small and come from a CDN, so nothing is written to disk.
#[derive(Debug)]
pub struct PosterCache {
    states: HashMap<String, PosterState>,
    http: reqwest::Client,
}

impl Default for PosterCache {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl PosterCache {
    pub fn get(&self, url: &str) -> Option<&PosterState> {
        self.states.get(url)
    }

    /// Mark `url` as loading. Returns false when it was already requested.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.states.contains_key(url) {
            return false;
        }
        self.states.insert(url.to_string(), PosterState::Loading);
        true
    }

    /// Store a download result. Ignored if `url` was forgotten meanwhile.
    pub fn finish(&mut self, url: String, result: Result<image::Handle, String>) {
        let Some(slot) = self
            .states
            .get_mut(&url)
            .filter(|state| matches!(state, PosterState::Loading))
        else {
            tracing::trace!(%url, "poster no longer wanted");
            return;
        };
        *slot = match result {
            Ok(handle) => PosterState::Loaded(handle),
            Err(e) => {
                tracing::debug!(%url, error = %e, "poster unavailable");
                PosterState::Failed
            }
        };
    }

    /// Drop images that are no longer shown, such as suggestion thumbnails.
    pub fn forget(&mut self, urls: impl IntoIterator<Item = String>) {
        for url in urls {
            self.states.remove(&url);
        }
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn client(&self) -> reqwest::Client {
        self.http.clone()
    }
}

/// Download a poster into an image handle.
pub async fn fetch_poster(http: reqwest::Client, url: String) -> Result<image::Handle, String> {
    let bytes = http
        .get(&url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;
    Ok(image::Handle::from_bytes(bytes))
}
