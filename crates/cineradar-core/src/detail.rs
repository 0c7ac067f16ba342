use crate::models::{ExternalKey, ExternalMetadata, MediaEntry};

/// Extended metadata for the open detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataState {
    /// The entry is not linked to an external title; nothing to fetch.
    Unlinked,
    Loading(ExternalKey),
    Loaded(Box<ExternalMetadata>),
    Failed(String),
}

/// State of the detail page for one entry.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub entry: MediaEntry,
    pub metadata: MetadataState,
}

impl DetailState {
    /// Open the page; returns the key to fetch, if any.
    pub fn open(entry: MediaEntry) -> (Self, Option<ExternalKey>) {
        let key = entry.external_key();
        let metadata = match key {
            Some(key) => MetadataState::Loading(key),
            None => MetadataState::Unlinked,
        };
        (Self { entry, metadata }, key)
    }

    /// Apply a fetch result. Results for any other key are ignored.
    pub fn resolve(&mut self, key: ExternalKey, result: Result<ExternalMetadata, String>) -> bool {
        if self.metadata != MetadataState::Loading(key) {
            return false;
        }
        self.metadata = match result {
            Ok(metadata) => MetadataState::Loaded(Box::new(metadata)),
            Err(message) => MetadataState::Failed(message),
        };
        true
    }

    /// Poster from the fetched metadata, else the one stored on the entry.
    pub fn poster_path(&self) -> Option<&str> {
        match &self.metadata {
            MetadataState::Loaded(m) => m
                .poster_path
                .as_deref()
                .or(self.entry.poster_path.as_deref()),
            _ => self.entry.poster_path.as_deref(),
        }
    }
}
