//! Top-level view selection.
//!
//! ```text
//! Loading ──resolved, no user──▶ Unauthenticated(Login ⇄ Signup)
//!    │                                   │ login / signup ok
//!    └──────resolved, user──────▶ MainList ◀──back── Detail
//!                                    │ └──open───────▶
//!                                    └─ editor overlay (MainList only)
//! logout: any state ──▶ Unauthenticated(Login)
//! ```

use crate::editor::EditorMode;
use crate::models::{MediaId, Session};

/// Which authentication form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthForm {
    #[default]
    Login,
    Signup,
}

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Loading,
    Unauthenticated(AuthForm),
    MainList,
    Detail(MediaId),
}

/// View state plus the editor overlay.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    view: View,
    editor: Option<EditorMode>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn editor(&self) -> Option<EditorMode> {
        self.editor
    }

    /// Whether the watchlist or a detail page may be rendered.
    pub fn is_main_reachable(&self) -> bool {
        matches!(self.view, View::MainList | View::Detail(_))
    }

    /// Apply the outcome of the startup session check.
    ///
    /// Ignored once the shell has left `Loading`, and while the session is still loading.
    pub fn session_resolved(&mut self, session: &Session) {
        if self.view != View::Loading || session.is_loading {
            return;
        }
        self.view = if session.user.is_some() {
            View::MainList
        } else {
            View::Unauthenticated(AuthForm::Login)
        };
    }

    /// Login or signup succeeded.
    pub fn authenticated(&mut self) {
        if matches!(self.view, View::Unauthenticated(_)) {
            self.view = View::MainList;
        }
    }

    /// Switch between the login and signup forms.
    pub fn show_auth_form(&mut self, form: AuthForm) {
        if matches!(self.view, View::Unauthenticated(_)) {
            self.view = View::Unauthenticated(form);
        }
    }

    /// Drop back to the login form from anywhere, closing overlays.
    pub fn logged_out(&mut self) {
        self.view = View::Unauthenticated(AuthForm::Login);
        self.editor = None;
    }

    /// Open the detail page for an entry. Only allowed from the list with no editor open.
    pub fn open_detail(&mut self, id: MediaId) -> bool {
        if self.view != View::MainList || self.editor.is_some() {
            return false;
        }
        self.view = View::Detail(id);
        true
    }

    /// Leave the detail page.
    pub fn back(&mut self) {
        if matches!(self.view, View::Detail(_)) {
            self.view = View::MainList;
        }
    }

    /// Open the editor overlay. Ignored unless on the list with no editor open.
    pub fn open_editor(&mut self, mode: EditorMode) -> bool {
        if self.view != View::MainList || self.editor.is_some() {
            return false;
        }
        self.editor = Some(mode);
        true
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }
}
