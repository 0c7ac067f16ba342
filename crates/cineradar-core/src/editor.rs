//! Create/update form state for a single watchlist entry.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::models::{MediaDraft, MediaEntry, MediaId, MediaType, Suggestion, WatchStatus};
use crate::search::{Suggestions, MAX_SUGGESTIONS};

/// Whether the editor creates a new entry or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update(MediaId),
}

impl EditorMode {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Add New Media",
            Self::Update(_) => "Update Media",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Add",
            Self::Update(_) => "Update",
        }
    }
}

/// The third-party title the draft is linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalMatch {
    pub id: u64,
    pub media_type: MediaType,
    pub poster_path: Option<String>,
    /// Title at the time of linking. Editing the title away from it unlinks.
    pub title: String,
}

/// Controlled form state.
#[derive(Debug, Clone)]
pub struct Editor {
    mode: EditorMode,
    pub title: String,
    pub media_type: MediaType,
    pub status: WatchStatus,
    /// Raw date input, `YYYY-MM-DD` or empty.
    pub next_release_date: String,
    external: Option<ExternalMatch>,
    pub suggestions: Suggestions,
}

impl Editor {
    /// Empty form with defaults: movie, watching.
    pub fn create() -> Self {
        Self::blank(EditorMode::Create)
    }

    /// Form seeded from an existing entry.
    pub fn update(entry: &MediaEntry) -> Self {
        let mut editor = Self::blank(EditorMode::Update(entry.id));
        editor.title = entry.title.clone();
        editor.media_type = entry.media_type;
        editor.status = entry.status;
        editor.next_release_date = entry.next_release_date.clone().unwrap_or_default();
        editor.external = entry.external_id.map(|id| ExternalMatch {
            id,
            media_type: entry.external_type.unwrap_or(entry.media_type),
            poster_path: entry.poster_path.clone(),
            title: entry.title.clone(),
        });
        editor
    }

    /// Cap the suggestion list at `limit` entries.
    pub fn limit_suggestions(mut self, limit: usize) -> Self {
        self.suggestions = Suggestions::new(limit);
        self
    }

    fn blank(mode: EditorMode) -> Self {
        Self {
            mode,
            title: String::new(),
            media_type: MediaType::default(),
            status: WatchStatus::default(),
            next_release_date: String::new(),
            external: None,
            suggestions: Suggestions::new(MAX_SUGGESTIONS),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn external(&self) -> Option<&ExternalMatch> {
        self.external.as_ref()
    }

    /// Update the title. A hand edit away from the linked title drops the link.
    pub fn set_title(&mut self, title: String) {
        if self.external.as_ref().is_some_and(|m| m.title != title) {
            self.external = None;
        }
        self.title = title;
    }

    /// Switch media type. The link belongs to the old type's catalogue, so it goes too.
    pub fn set_media_type(&mut self, media_type: MediaType) {
        if self.media_type != media_type {
            self.external = None;
            self.suggestions.clear();
        }
        self.media_type = media_type;
    }

    /// Link the draft to the suggestion at `index`.
    ///
    /// Title, external id, poster and the emptied suggestion list all change together.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&ExternalMatch> {
        let picked: Suggestion = self.suggestions.take(index)?;
        self.title = picked.title.clone();
        self.external = Some(ExternalMatch {
            id: picked.id,
            media_type: self.media_type,
            poster_path: picked.poster_path,
            title: picked.title,
        });
        self.external.as_ref()
    }

    /// Assemble the request body, rejecting what the backend would reject.
    pub fn to_draft(&self) -> Result<MediaDraft, CoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("You must include a title".into()));
        }

        let date = self.next_release_date.trim();
        let next_release_date = if date.is_empty() {
            None
        } else {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                CoreError::Validation(format!("Release date must be YYYY-MM-DD, got \"{date}\""))
            })?;
            Some(date.to_string())
        };

        Ok(MediaDraft {
            title: title.to_string(),
            media_type: self.media_type,
            status: self.status,
            next_release_date,
            external_id: self.external.as_ref().map(|m| m.id),
            external_type: self.external.as_ref().map(|m| m.media_type),
            poster_path: self.external.as_ref().and_then(|m| m.poster_path.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> MediaEntry {
        MediaEntry {
            id: 7,
            title: "Inception".into(),
            media_type: MediaType::Movie,
            status: WatchStatus::Completed,
            next_release_date: Some("2026-01-02".into()),
            external_id: Some(27205),
            external_type: Some(MediaType::Movie),
            poster_path: Some("/inception.jpg".into()),
        }
    }

    fn suggestion(id: u64, title: &str) -> Suggestion {
        Suggestion {
            id,
            title: title.into(),
            poster_path: Some(format!("/{id}.jpg")),
            release_date: None,
        }
    }

    #[test]
    fn test_create_defaults() {
        let editor = Editor::create();
        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.media_type, MediaType::Movie);
        assert_eq!(editor.status, WatchStatus::Watching);
        assert!(editor.title.is_empty());
        assert!(editor.external().is_none());
    }

    #[test]
    fn test_update_seeds_from_entry() {
        let editor = Editor::update(&inception());
        assert_eq!(editor.mode(), EditorMode::Update(7));
        assert_eq!(editor.title, "Inception");
        assert_eq!(editor.status, WatchStatus::Completed);
        assert_eq!(editor.next_release_date, "2026-01-02");
        assert_eq!(editor.external().map(|m| m.id), Some(27205));
    }

    #[test]
    fn test_update_round_trips_untouched_entry() {
        let entry = inception();
        let draft = Editor::update(&entry).to_draft().unwrap();
        assert_eq!(draft, entry.draft());
    }

    #[test]
    fn test_select_suggestion_fills_fields_and_clears_list() {
        let mut editor = Editor::create();
        editor.set_title("incep".into());
        editor
            .suggestions
            .resolve(vec![suggestion(1, "Inception"), suggestion(2, "Inception: The Cobol Job")]);

        editor.select_suggestion(0).unwrap();

        assert_eq!(editor.title, "Inception");
        let linked = editor.external().unwrap();
        assert_eq!(linked.id, 1);
        assert_eq!(linked.poster_path.as_deref(), Some("/1.jpg"));
        assert!(editor.suggestions.items().is_empty());
    }

    #[test]
    fn test_suggestion_limit() {
        let mut editor = Editor::create().limit_suggestions(2);
        editor.suggestions.resolve(vec![
            suggestion(1, "Alien"),
            suggestion(2, "Aliens"),
            suggestion(3, "Alien 3"),
        ]);
        assert_eq!(editor.suggestions.items().len(), 2);
    }

    #[test]
    fn test_draft_carries_external_match() {
        let mut editor = Editor::create();
        editor.media_type = MediaType::Tv;
        editor.suggestions.resolve(vec![suggestion(1399, "Game of Thrones")]);
        editor.select_suggestion(0);

        let draft = editor.to_draft().unwrap();
        assert_eq!(draft.external_id, Some(1399));
        assert_eq!(draft.external_type, Some(MediaType::Tv));
        assert_eq!(draft.poster_path.as_deref(), Some("/1399.jpg"));
    }

    #[test]
    fn test_editing_title_unlinks() {
        let mut editor = Editor::update(&inception());
        editor.set_title("Inception".into());
        assert!(editor.external().is_some());

        editor.set_title("Interstellar".into());
        assert!(editor.external().is_none());
        assert!(editor.to_draft().unwrap().external_id.is_none());
    }

    #[test]
    fn test_changing_media_type_unlinks() {
        let mut editor = Editor::update(&inception());
        editor.set_media_type(MediaType::Movie);
        assert!(editor.external().is_some());
        editor.set_media_type(MediaType::Tv);
        assert!(editor.external().is_none());
    }

    #[test]
    fn test_validation() {
        let mut editor = Editor::create();
        editor.title = "   ".into();
        assert!(matches!(editor.to_draft(), Err(CoreError::Validation(_))));

        editor.title = "Dune".into();
        editor.next_release_date = "next friday".into();
        assert!(matches!(editor.to_draft(), Err(CoreError::Validation(_))));

        editor.next_release_date = " 2026-10-30 ".into();
        let draft = editor.to_draft().unwrap();
        assert_eq!(draft.next_release_date.as_deref(), Some("2026-10-30"));

        editor.next_release_date.clear();
        assert!(editor.to_draft().unwrap().next_release_date.is_none());
    }
}
