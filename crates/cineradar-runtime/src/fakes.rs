//! In-memory backend used by the store tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use cineradar_api::{ApiError, MetadataService, SessionService, WatchlistService};
use cineradar_core::models::{
    CastMember, ExternalKey, ExternalMetadata, MediaDraft, MediaEntry, MediaId, MediaType,
    Suggestion, User,
};

pub const PASSWORD: &str = "hunter2";

#[derive(Default)]
pub struct FakeBackend {
    pub entries: Mutex<Vec<MediaEntry>>,
    pub user: Mutex<Option<User>>,
    pub calls: Mutex<Vec<String>>,
    pub catalog: Vec<(MediaType, Suggestion)>,
    pub metadata: HashMap<u64, ExternalMetadata>,
    pub search_delay: Duration,
    pub logout_delay: Duration,
    pub failures: Mutex<HashMap<&'static str, (u16, String)>>,
}

impl FakeBackend {
    pub fn with_entries(entries: Vec<MediaEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Default::default()
        }
    }

    /// Make every later call to `op` fail with the given status and body message.
    pub fn fail_on(&self, op: &'static str, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(op, (status, message.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, detail: String) -> Result<(), ApiError> {
        let call = if detail.is_empty() {
            op.to_string()
        } else {
            format!("{op} {detail}")
        };
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().get(op) {
            Some((status, message)) => Err(ApiError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Api {
            status: 404,
            message: "Media not found".into(),
        }
    }
}

pub fn entry(id: MediaId, title: &str, media_type: MediaType) -> MediaEntry {
    MediaEntry {
        id,
        title: title.into(),
        media_type,
        status: Default::default(),
        next_release_date: None,
        external_id: None,
        external_type: None,
        poster_path: None,
    }
}

pub fn user(name: &str) -> User {
    User {
        id: Some(1),
        username: name.into(),
        email: None,
    }
}

impl SessionService for FakeBackend {
    async fn check_session(&self) -> Result<Option<User>, ApiError> {
        self.record("check", String::new())?;
        Ok(self.user.lock().unwrap().clone())
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        self.record("login", username.to_string())?;
        if password != PASSWORD {
            return Err(ApiError::Api {
                status: 401,
                message: "Invalid username or password".into(),
            });
        }
        let u = user(username);
        *self.user.lock().unwrap() = Some(u.clone());
        Ok(u)
    }

    async fn signup(&self, username: &str, email: &str, _password: &str) -> Result<User, ApiError> {
        self.record("signup", username.to_string())?;
        let u = User {
            email: Some(email.to_string()),
            ..user(username)
        };
        *self.user.lock().unwrap() = Some(u.clone());
        Ok(u)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout", String::new())?;
        if !self.logout_delay.is_zero() {
            tokio::time::sleep(self.logout_delay).await;
        }
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}

impl WatchlistService for FakeBackend {
    async fn list(&self) -> Result<Vec<MediaEntry>, ApiError> {
        self.record("list", String::new())?;
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn create(&self, draft: &MediaDraft) -> Result<(), ApiError> {
        self.record("create", draft.title.clone())?;
        let mut entries = self.entries.lock().unwrap();
        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        entries.push(MediaEntry {
            id,
            title: draft.title.clone(),
            media_type: draft.media_type,
            status: draft.status,
            next_release_date: draft.next_release_date.clone(),
            external_id: draft.external_id,
            external_type: draft.external_type,
            poster_path: draft.poster_path.clone(),
        });
        Ok(())
    }

    async fn update(&self, id: MediaId, draft: &MediaDraft) -> Result<(), ApiError> {
        self.record("update", id.to_string())?;
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(Self::not_found)?;
        entry.title = draft.title.clone();
        entry.media_type = draft.media_type;
        entry.status = draft.status;
        entry.next_release_date = draft.next_release_date.clone();
        entry.external_id = draft.external_id;
        entry.external_type = draft.external_type;
        entry.poster_path = draft.poster_path.clone();
        Ok(())
    }

    async fn delete(&self, id: MediaId) -> Result<(), ApiError> {
        self.record("delete", id.to_string())?;
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

impl MetadataService for FakeBackend {
    async fn search(&self, media_type: MediaType, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        self.record("search", format!("{} {query}", media_type.as_api_str()))?;
        if !self.search_delay.is_zero() {
            tokio::time::sleep(self.search_delay).await;
        }
        let needle = query.to_lowercase();
        Ok(self
            .catalog
            .iter()
            .filter(|(t, s)| *t == media_type && s.title.to_lowercase().contains(&needle))
            .map(|(_, s)| s.clone())
            .collect())
    }

    async fn details(&self, key: ExternalKey) -> Result<ExternalMetadata, ApiError> {
        self.record("details", key.id.to_string())?;
        self.metadata.get(&key.id).cloned().ok_or(ApiError::Api {
            status: 404,
            message: "The resource you requested could not be found.".into(),
        })
    }

    async fn credits(&self, key: ExternalKey) -> Result<Vec<CastMember>, ApiError> {
        self.record("credits", key.id.to_string())?;
        Ok(vec![CastMember {
            name: "Lead Actor".into(),
            character: Some("Lead".into()),
        }])
    }
}
