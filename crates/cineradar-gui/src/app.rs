use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::{button, center, column, container, row, stack, text};
use iced::window;
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use cineradar_api::{ApiError, CineRadarClient};
use cineradar_core::config::{AppConfig, ThemeMode};
use cineradar_core::editor::EditorMode;
use cineradar_core::models::{MediaEntry, Session};
use cineradar_core::prompt::{DeletePrompt, PendingDelete};
use cineradar_core::shell::{Shell, View};
use cineradar_runtime::{SearchDebouncer, SessionStore, WatchlistStore};

use crate::poster_cache::{self, PosterCache};
use crate::screen::{auth, detail, editor, watchlist, Action, ModalKind, MutationFailure};
use crate::style;
use crate::subscription;
use crate::theme::{self, CineRadarTheme, ColorScheme};
use crate::toast::{self, Notice, Operation, Toasts};
use crate::widgets;
use crate::window_state::{self, WindowState};

/// Backend handles shared by every screen. Cloning is cheap.
#[derive(Clone)]
pub struct Services {
    pub client: Arc<CineRadarClient>,
    pub session: SessionStore<CineRadarClient>,
    pub watchlist: WatchlistStore<CineRadarClient>,
    pub debouncer: SearchDebouncer,
}

impl Services {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Arc::new(CineRadarClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )?);
        Ok(Self {
            session: SessionStore::new(Arc::clone(&client)),
            watchlist: WatchlistStore::new(Arc::clone(&client)),
            debouncer: SearchDebouncer::new(config.search.debounce()),
            client,
        })
    }
}

/// Application state: a router over the shell's current view.
pub struct CineRadar {
    config: AppConfig,
    services: Services,
    shell: Shell,
    session: Session,
    // Theme
    current_theme: CineRadarTheme,
    active_mode: ThemeMode,
    // Screens
    auth: auth::Auth,
    watchlist: watchlist::Watchlist,
    editor: Option<editor::EditorScreen>,
    next_editor_token: u64,
    detail: Option<detail::Detail>,
    // App-level chrome
    delete_prompt: DeletePrompt,
    deleting: bool,
    toasts: Toasts,
    posters: PosterCache,
    /// Suggestion thumbnails fetched while the editor is open.
    editor_thumbs: HashSet<String>,
    window_state: WindowState,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    SessionChecked(Session),
    Auth(auth::Message),
    Watchlist(watchlist::Message),
    Editor(editor::Message),
    EditorSaved {
        token: u64,
        mode: EditorMode,
        result: Result<Vec<MediaEntry>, MutationFailure>,
    },
    Detail(detail::Message),
    ConfirmDelete,
    CancelDelete,
    DeleteFinished(Result<Vec<MediaEntry>, MutationFailure>),
    LogoutFinished(Session),
    LoadPosters(Vec<String>),
    PosterLoaded {
        url: String,
        result: Result<iced::widget::image::Handle, String>,
    },
    DismissToast(u64),
    AppearanceChanged(ThemeMode),
    WindowEvent(window::Event),
    SaveWindow(u64),
    Escape,
}

impl CineRadar {
    pub fn new(config: AppConfig, services: Services) -> (Self, Task<Message>) {
        let active_mode = theme::resolve_mode(config.appearance.mode);
        let app = Self {
            config,
            services,
            shell: Shell::new(),
            session: Session::loading(),
            current_theme: CineRadarTheme::load(),
            active_mode,
            auth: auth::Auth::new(),
            watchlist: watchlist::Watchlist::new(),
            editor: None,
            next_editor_token: 0,
            detail: None,
            delete_prompt: DeletePrompt::default(),
            deleting: false,
            toasts: Toasts::default(),
            posters: PosterCache::default(),
            editor_thumbs: HashSet::new(),
            window_state: WindowState::load(),
        };

        let session = app.services.session.clone();
        let task = Task::perform(
            async move { session.check_session().await },
            Message::SessionChecked,
        );
        (app, task)
    }

    pub fn title(&self) -> String {
        match (&self.shell.view(), &self.detail) {
            (View::Detail(_), Some(detail)) => format!("{} - CineRadar", detail.state.entry.title),
            _ => String::from("CineRadar"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SessionChecked(session) => {
                self.session = session;
                self.shell.session_resolved(&self.session);
                if self.shell.is_main_reachable() {
                    let action = self.watchlist.refresh(&self.services);
                    return self.handle_action(action);
                }
                Task::none()
            }
            Message::Auth(msg) => {
                let View::Unauthenticated(form) = self.shell.view() else {
                    return Task::none();
                };
                let action = self.auth.update(msg, form, &self.services);
                self.handle_action(action)
            }
            Message::Watchlist(msg) => {
                if !self.shell.is_main_reachable() {
                    return Task::none();
                }
                let action = self.watchlist.update(msg, &self.services);
                self.handle_action(action)
            }
            Message::Editor(msg) => {
                let Some(editor) = self.editor.as_mut() else {
                    return Task::none();
                };
                let finished_search = matches!(msg, editor::Message::SearchFinished(_));
                let action = editor.update(msg, &self.services, &self.config.search);
                let thumbs = if finished_search {
                    editor.suggestion_posters(&self.config.images)
                } else {
                    Vec::new()
                };
                self.editor_thumbs.extend(thumbs.iter().cloned());
                let task = self.handle_action(action);
                Task::batch([task, self.request_posters(thumbs)])
            }
            Message::EditorSaved { token, mode, result } => {
                // The session that made the change is gone.
                if !self.shell.is_main_reachable() {
                    return Task::none();
                }
                let op = match mode {
                    EditorMode::Create => Operation::Add,
                    EditorMode::Update(_) => Operation::Update,
                };
                let same_editor = self.editor.as_ref().is_some_and(|e| e.token == token);
                match result {
                    Ok(entries) => {
                        let changed = self.handle_action(Action::EntriesChanged(entries));
                        let close = self.close_editor_if(same_editor);
                        Task::batch([changed, close, self.push_toast(Notice::success(op))])
                    }
                    Err(failure) if failure.applied => {
                        let close = self.close_editor_if(same_editor);
                        Task::batch([close, self.push_toast(Notice::unrefreshed(op))])
                    }
                    Err(failure) => {
                        if let Some(editor) = self.editor.as_mut().filter(|_| same_editor) {
                            editor.save_failed(failure.message.clone());
                        }
                        self.push_toast(Notice::failure(op, &failure.message))
                    }
                }
            }
            Message::Detail(msg) => {
                let Some(detail) = self.detail.as_mut() else {
                    return Task::none();
                };
                let action = detail.update(msg, &self.config.images);
                self.handle_action(action)
            }
            Message::ConfirmDelete => {
                if self.deleting {
                    return Task::none();
                }
                let Some(id) = self.delete_prompt.confirm() else {
                    return Task::none();
                };
                self.deleting = true;
                let store = self.services.watchlist.clone();
                Task::perform(async move { store.delete(id).await }, |r| {
                    Message::DeleteFinished(
                        r.map_err(|e| MutationFailure::new(&e, "Failed to delete media")),
                    )
                })
            }
            Message::CancelDelete => {
                self.delete_prompt.cancel();
                Task::none()
            }
            Message::DeleteFinished(result) => {
                self.deleting = false;
                if !self.shell.is_main_reachable() {
                    return Task::none();
                }
                match result {
                    Ok(entries) => {
                        let changed = self.handle_action(Action::EntriesChanged(entries));
                        Task::batch([changed, self.push_toast(Notice::success(Operation::Delete))])
                    }
                    Err(failure) if failure.applied => {
                        self.push_toast(Notice::unrefreshed(Operation::Delete))
                    }
                    Err(failure) => {
                        self.push_toast(Notice::failure(Operation::Delete, &failure.message))
                    }
                }
            }
            Message::LogoutFinished(session) => {
                self.auth.signing_out = false;
                // Someone signed in again before the logout call returned.
                if matches!(self.shell.view(), View::Unauthenticated(_)) {
                    self.session = session;
                } else {
                    tracing::debug!("ignoring stale logout result");
                }
                Task::none()
            }
            Message::LoadPosters(urls) => self.request_posters(urls),
            Message::PosterLoaded { url, result } => {
                self.posters.finish(url, result);
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::AppearanceChanged(mode) => {
                if self.config.appearance.mode == ThemeMode::System && mode != self.active_mode {
                    tracing::debug!(?mode, "system appearance changed");
                    self.active_mode = mode;
                }
                Task::none()
            }
            Message::WindowEvent(event) => {
                let revision = match event {
                    window::Event::Resized(size) => self.window_state.resized(size),
                    window::Event::Moved(pos) => self.window_state.moved(pos),
                    _ => None,
                };
                match revision {
                    Some(revision) => Task::perform(
                        async move {
                            tokio::time::sleep(Duration::from_millis(window_state::SETTLE_MS))
                                .await
                        },
                        move |_| Message::SaveWindow(revision),
                    ),
                    None => Task::none(),
                }
            }
            Message::SaveWindow(revision) => {
                self.window_state.flush(revision);
                Task::none()
            }
            Message::Escape => {
                if self.delete_prompt.pending().is_some() {
                    self.delete_prompt.cancel();
                    Task::none()
                } else if self.editor.is_some() {
                    self.update(Message::Editor(editor::Message::Cancel))
                } else if self.detail.is_some() {
                    self.update(Message::Detail(detail::Message::Back))
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::ShowAuthForm(form) => {
                self.shell.show_auth_form(form);
                Task::none()
            }
            Action::Authenticated(user) => {
                self.session = Session {
                    user: Some(user),
                    is_loading: false,
                };
                self.shell.authenticated();
                let action = self.watchlist.refresh(&self.services);
                self.handle_action(action)
            }
            Action::Logout => {
                self.shell.logged_out();
                self.editor = None;
                self.editor_thumbs.clear();
                self.detail = None;
                self.delete_prompt.cancel();
                self.watchlist.clear();
                self.posters.clear();
                self.auth.reset();
                self.auth.signing_out = true;
                self.services.debouncer.cancel();

                let session = self.services.session.clone();
                Task::perform(
                    async move { session.logout().await },
                    Message::LogoutFinished,
                )
            }
            Action::OpenDetail(id) => {
                let Some(entry) = self.watchlist.get(id).cloned() else {
                    return Task::none();
                };
                if !self.shell.open_detail(id) {
                    return Task::none();
                }
                let (detail, action) =
                    detail::Detail::open(entry, &self.services, &self.config.images);
                self.detail = Some(detail);
                self.handle_action(action)
            }
            Action::Back => {
                self.shell.back();
                self.detail = None;
                Task::none()
            }
            Action::OpenEditor(mode) => {
                let entry = match mode {
                    EditorMode::Create => None,
                    EditorMode::Update(id) => match self.watchlist.get(id) {
                        Some(entry) => Some(entry.clone()),
                        None => return Task::none(),
                    },
                };
                if self.shell.open_editor(mode) {
                    let token = self.next_editor_token;
                    self.next_editor_token += 1;
                    self.editor = Some(editor::EditorScreen::open(
                        token,
                        mode,
                        entry.as_ref(),
                        &self.config.search,
                    ));
                }
                Task::none()
            }
            Action::CloseEditor => {
                self.shell.close_editor();
                self.editor = None;
                self.posters.forget(self.editor_thumbs.drain());
                Task::none()
            }
            Action::ShowModal(ModalKind::ConfirmDelete { id, title }) => {
                self.delete_prompt.request(id, title);
                Task::none()
            }
            Action::EntriesChanged(entries) => {
                if !self.shell.is_main_reachable() {
                    return Task::none();
                }
                let urls: Vec<String> = entries
                    .iter()
                    .filter_map(|e| e.poster_path.as_deref())
                    .map(|p| self.config.images.poster_url(p))
                    .collect();
                if let Some(detail) = self.detail.as_mut() {
                    if !detail.sync_entry(&entries) {
                        self.shell.back();
                        self.detail = None;
                    }
                }
                self.watchlist.entries = entries;
                self.request_posters(urls)
            }
            Action::LoadPosters(urls) => self.request_posters(urls),
            Action::RunTask(task) => task,
            Action::ShowToast(notice) => self.push_toast(notice),
        }
    }

    fn close_editor_if(&mut self, open: bool) -> Task<Message> {
        if open {
            self.handle_action(Action::CloseEditor)
        } else {
            Task::none()
        }
    }

    /// Start downloads for posters not yet requested.
    fn request_posters(&mut self, urls: Vec<String>) -> Task<Message> {
        let client = self.posters.client();
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.posters.begin(url))
            .map(|url| {
                let http = client.clone();
                let fetch_url = url.clone();
                Task::perform(
                    async move { poster_cache::fetch_poster(http, fetch_url).await },
                    move |result| Message::PosterLoaded {
                        url: url.clone(),
                        result,
                    },
                )
            })
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Show a toast and schedule its dismissal.
    fn push_toast(&mut self, notice: Notice) -> Task<Message> {
        let id = self.toasts.push(notice);
        Task::perform(
            async move { tokio::time::sleep(Duration::from_secs(toast::AUTO_DISMISS_SECS)).await },
            move |_| Message::DismissToast(id),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);

        let page: Element<'_, Message> = match self.shell.view() {
            View::Loading => center(
                column![
                    lucide_icons::iced::icon_clapperboard()
                        .size(style::TEXT_3XL)
                        .color(cs.primary),
                    text("Loading...")
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                ]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center),
            )
            .into(),
            View::Unauthenticated(form) => self.auth.view(cs, form).map(Message::Auth),
            View::MainList => self
                .watchlist
                .view(
                    cs,
                    &self.posters,
                    &self.config.images,
                    self.session.user.as_ref().map(|u| u.username.as_str()),
                )
                .map(Message::Watchlist),
            View::Detail(_) => match &self.detail {
                Some(detail) => detail
                    .view(cs, &self.posters, &self.config.images)
                    .map(Message::Detail),
                None => center(text("Media not found").size(style::TEXT_SM)).into(),
            },
        };

        let base = container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::card(cs));

        let mut main: Element<'_, Message> = base.into();

        if let Some(editor) = &self.editor {
            let content = editor
                .view(cs, &self.posters, &self.config.images)
                .map(Message::Editor);
            main = widgets::modal(
                cs,
                main,
                content,
                Message::Editor(editor::Message::Cancel),
            );
        }

        if let Some(pending) = self.delete_prompt.pending() {
            main = widgets::modal(
                cs,
                main,
                self.delete_dialog(cs, pending),
                Message::CancelDelete,
            );
        }

        stack![main, self.toasts.view(cs, Message::DismissToast)].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions(self.config.appearance.mode)
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }

    fn delete_dialog<'a>(
        &self,
        cs: &ColorScheme,
        pending: &'a PendingDelete,
    ) -> Element<'a, Message> {
        container(
            column![
                text("Delete media?")
                    .size(style::TEXT_LG)
                    .font(style::FONT_HEADING)
                    .line_height(style::LINE_HEIGHT_TIGHT),
                text("Are you sure you want to delete this?")
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                text(pending.title.as_str())
                    .size(style::TEXT_SM)
                    .font(style::FONT_HEADING)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                row![
                    button(text("Cancel").size(style::TEXT_SM))
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .on_press(Message::CancelDelete)
                        .style(theme::ghost_button(cs)),
                    button(text("Delete").size(style::TEXT_SM))
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .on_press(Message::ConfirmDelete)
                        .style(theme::danger_button(cs)),
                ]
                .spacing(style::SPACE_SM),
            ]
            .spacing(style::SPACE_LG),
        )
        .width(Length::Fixed(style::DIALOG_WIDTH))
        .style(theme::dialog_container(cs))
        .padding(style::SPACE_2XL)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineradar_core::models::{MediaType, User, WatchStatus};
    use cineradar_core::shell::AuthForm;

    fn app() -> CineRadar {
        let mut config = AppConfig::default();
        config.appearance.mode = ThemeMode::Dark;
        let services = Services::new(&config).unwrap();
        CineRadar::new(config, services).0
    }

    fn entry(id: i64, title: &str) -> MediaEntry {
        MediaEntry {
            id,
            title: title.into(),
            media_type: MediaType::Movie,
            status: WatchStatus::Watching,
            next_release_date: None,
            external_id: None,
            external_type: None,
            poster_path: None,
        }
    }

    fn signed_in() -> CineRadar {
        let mut app = app();
        let _ = app.update(Message::SessionChecked(Session {
            user: Some(User {
                id: Some(1),
                username: "ana".into(),
                email: None,
            }),
            is_loading: false,
        }));
        let _ = app.update(Message::Watchlist(watchlist::Message::Loaded(Ok(vec![
            entry(1, "Heat"),
            entry(2, "Ronin"),
        ]))));
        app
    }

    #[test]
    fn test_services_reject_bad_url() {
        let config = AppConfig {
            api: cineradar_core::config::ApiConfig {
                base_url: "not a url".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(Services::new(&config).is_err());
    }

    #[test]
    fn test_starts_loading() {
        let app = app();
        assert_eq!(app.shell.view(), View::Loading);
        assert!(app.session.is_loading);
    }

    #[test]
    fn test_anonymous_session_shows_login() {
        let mut app = app();
        let _ = app.update(Message::SessionChecked(Session {
            user: None,
            is_loading: false,
        }));
        assert_eq!(app.shell.view(), View::Unauthenticated(AuthForm::Login));

        // List results cannot leak into the auth screen.
        let _ = app.update(Message::Watchlist(watchlist::Message::Loaded(Ok(vec![entry(
            1, "Heat",
        )]))));
        assert!(app.watchlist.entries.is_empty());
    }

    #[test]
    fn test_open_and_leave_detail() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Open(2)));
        assert_eq!(app.shell.view(), View::Detail(2));
        assert_eq!(app.title(), "Ronin - CineRadar");

        let _ = app.update(Message::Escape);
        assert_eq!(app.shell.view(), View::MainList);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_deleted_entry_closes_detail() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Open(2)));
        let _ = app.update(Message::DeleteFinished(Ok(vec![entry(1, "Heat")])));
        assert_eq!(app.shell.view(), View::MainList);
        assert_eq!(app.watchlist.entries.len(), 1);
    }

    #[test]
    fn test_edit_unknown_entry_is_ignored() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Edit(42)));
        assert!(app.editor.is_none());
        assert_eq!(app.shell.editor(), None);
    }

    #[test]
    fn test_editor_save_closes_overlay() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Edit(1)));
        assert_eq!(app.shell.editor(), Some(EditorMode::Update(1)));
        assert_eq!(app.editor.as_ref().unwrap().form.title, "Heat");

        let token = app.editor.as_ref().unwrap().token;
        let _ = app.update(Message::EditorSaved {
            token,
            mode: EditorMode::Update(1),
            result: Ok(vec![entry(1, "Heat (1995)"), entry(2, "Ronin")]),
        });
        assert!(app.editor.is_none());
        assert_eq!(app.shell.editor(), None);
        assert_eq!(app.watchlist.entries[0].title, "Heat (1995)");
        assert_eq!(
            app.toasts.last(),
            Some(&Notice::success(Operation::Update))
        );
    }

    #[test]
    fn test_save_after_editor_closed_still_updates_list() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Add));
        let token = app.editor.as_ref().unwrap().token;
        let _ = app.update(Message::Escape);
        assert!(app.editor.is_none());

        let _ = app.update(Message::EditorSaved {
            token,
            mode: EditorMode::Create,
            result: Ok(vec![entry(1, "Heat"), entry(2, "Ronin"), entry(3, "Thief")]),
        });
        assert_eq!(app.watchlist.entries.len(), 3);
        assert_eq!(app.toasts.last(), Some(&Notice::success(Operation::Add)));
    }

    #[test]
    fn test_stale_save_leaves_newer_editor_alone() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Add));
        let add_token = app.editor.as_ref().unwrap().token;
        let _ = app.update(Message::Escape);
        let _ = app.update(Message::Watchlist(watchlist::Message::Edit(1)));

        let _ = app.update(Message::EditorSaved {
            token: add_token,
            mode: EditorMode::Create,
            result: Err(MutationFailure {
                applied: false,
                message: "Media already exists".into(),
            }),
        });
        let editor = app.editor.as_ref().unwrap();
        assert_eq!(editor.form.mode(), EditorMode::Update(1));
        assert!(editor.error.is_none());
        assert_eq!(
            app.toasts.last().map(|n| n.message.as_str()),
            Some("Couldn't add media: Media already exists")
        );

        let _ = app.update(Message::EditorSaved {
            token: add_token,
            mode: EditorMode::Create,
            result: Ok(vec![entry(1, "Heat"), entry(2, "Ronin"), entry(3, "Thief")]),
        });
        assert_eq!(app.shell.editor(), Some(EditorMode::Update(1)));
        assert!(app.editor.is_some());
        assert_eq!(app.watchlist.entries.len(), 3);
        assert_eq!(app.toasts.last(), Some(&Notice::success(Operation::Add)));
    }

    #[test]
    fn test_rejected_save_keeps_editor_open() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Add));
        let token = app.editor.as_ref().unwrap().token;
        let _ = app.update(Message::EditorSaved {
            token,
            mode: EditorMode::Create,
            result: Err(MutationFailure {
                applied: false,
                message: "You must include a title, type, and status".into(),
            }),
        });
        let editor = app.editor.as_ref().unwrap();
        assert_eq!(
            editor.error.as_deref(),
            Some("You must include a title, type, and status")
        );
        assert_eq!(app.toasts.last().unwrap().kind, toast::ToastKind::Error);
    }

    #[test]
    fn test_applied_save_with_failed_reload_closes_editor() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Add));
        let token = app.editor.as_ref().unwrap().token;
        let _ = app.update(Message::EditorSaved {
            token,
            mode: EditorMode::Create,
            result: Err(MutationFailure {
                applied: true,
                message: "Failed to save media".into(),
            }),
        });
        assert!(app.editor.is_none());
        assert_eq!(app.toasts.last(), Some(&Notice::unrefreshed(Operation::Add)));
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Delete(2)));
        assert_eq!(app.delete_prompt.pending().map(|p| p.id), Some(2));

        let _ = app.update(Message::CancelDelete);
        assert!(app.delete_prompt.pending().is_none());
        assert_eq!(app.watchlist.entries.len(), 2);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Add));
        let _ = app.update(Message::Watchlist(watchlist::Message::Logout));
        assert_eq!(app.shell.view(), View::Unauthenticated(AuthForm::Login));
        assert!(app.editor.is_none());
        assert!(app.watchlist.entries.is_empty());
    }

    #[test]
    fn test_login_during_logout_is_kept() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Logout));
        assert!(app.auth.signing_out);

        let _ = app.update(Message::Auth(auth::Message::Finished(
            cineradar_runtime::AuthOutcome::Success(User {
                id: Some(1),
                username: "ana".into(),
                email: None,
            }),
        )));
        assert_eq!(app.shell.view(), View::MainList);

        let _ = app.update(Message::LogoutFinished(Session {
            user: None,
            is_loading: false,
        }));
        assert_eq!(app.shell.view(), View::MainList);
        assert_eq!(
            app.session.user.as_ref().map(|u| u.username.as_str()),
            Some("ana")
        );
        assert!(!app.auth.signing_out);
    }

    #[test]
    fn test_logout_result_unlocks_login() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Logout));
        let _ = app.update(Message::Auth(auth::Message::UsernameChanged("ana".into())));
        let _ = app.update(Message::Auth(auth::Message::PasswordChanged("secret".into())));
        let _ = app.update(Message::Auth(auth::Message::Submit));
        assert!(!app.auth.submitting);

        let _ = app.update(Message::LogoutFinished(Session {
            user: None,
            is_loading: false,
        }));
        assert!(app.session.user.is_none());
        let _ = app.update(Message::Auth(auth::Message::Submit));
        assert!(app.auth.submitting);
    }

    #[test]
    fn test_delete_finishing_after_logout_is_dropped() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Delete(2)));
        let _ = app.update(Message::ConfirmDelete);
        assert!(app.deleting);
        let _ = app.update(Message::Watchlist(watchlist::Message::Logout));

        let _ = app.update(Message::DeleteFinished(Ok(vec![entry(1, "Heat")])));
        assert!(!app.deleting);
        assert!(app.watchlist.entries.is_empty());
        assert!(app.toasts.last().is_none());
    }

    #[test]
    fn test_closing_editor_forgets_thumbnails() {
        let mut app = signed_in();
        let _ = app.update(Message::Watchlist(watchlist::Message::Add));
        let thumb = app.config.images.thumb_url("/abc.jpg");
        let _ = app.update(Message::LoadPosters(vec![thumb.clone()]));
        app.editor_thumbs.insert(thumb.clone());
        assert!(app.posters.get(&thumb).is_some());

        let _ = app.update(Message::Escape);
        assert!(app.posters.get(&thumb).is_none());
        assert!(app.editor_thumbs.is_empty());
    }
}
