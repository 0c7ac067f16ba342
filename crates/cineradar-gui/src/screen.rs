pub mod auth;
pub mod detail;
pub mod editor;
pub mod watchlist;

use iced::Task;

use cineradar_core::editor::EditorMode;
use cineradar_core::models::{MediaEntry, MediaId, User};
use cineradar_core::shell::AuthForm;
use cineradar_runtime::RuntimeError;

use crate::app;
use crate::toast::Notice;

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state; the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Switch between the login and signup forms.
    ShowAuthForm(AuthForm),
    /// Login or signup succeeded.
    Authenticated(User),
    Logout,
    OpenDetail(MediaId),
    /// Leave the detail page for the list.
    Back,
    OpenEditor(EditorMode),
    CloseEditor,
    /// Show a modal dialog.
    ShowModal(ModalKind),
    /// The backend collection was reloaded after a change.
    EntriesChanged(Vec<MediaEntry>),
    /// Fetch these poster URLs into the cache.
    LoadPosters(Vec<String>),
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
    /// Show a toast notification.
    ShowToast(Notice),
}

/// What kind of modal is currently shown.
#[derive(Debug, Clone)]
pub enum ModalKind {
    ConfirmDelete { id: MediaId, title: String },
}

/// A failed watchlist mutation, stringified so it can travel in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationFailure {
    /// The backend accepted the change; only the reload failed.
    pub applied: bool,
    pub message: String,
}

impl MutationFailure {
    pub fn new(error: &RuntimeError, fallback: &str) -> Self {
        Self {
            applied: error.was_applied(),
            message: error.user_message(fallback),
        }
    }
}
