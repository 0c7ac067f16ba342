//! Create/update overlay with debounced title suggestions.

use std::sync::Arc;

use iced::task;
use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Task};

use cineradar_core::config::{ImageConfig, SearchConfig};
use cineradar_core::editor::{Editor, EditorMode};
use cineradar_core::models::{MediaEntry, MediaType, WatchStatus};
use cineradar_core::search::SearchPhase;
use cineradar_runtime::SearchOutcome;

use crate::app::{self, Services};
use crate::poster_cache::PosterCache;
use crate::screen::{Action, MutationFailure};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

pub struct EditorScreen {
    /// Identifies this opening of the overlay, so a save that finishes
    /// after it closed cannot act on a later one.
    pub token: u64,
    pub form: Editor,
    pub error: Option<String>,
    pub saving: bool,
    /// Scheduled or in-flight lookup. Dropping the handle aborts it.
    pending_search: Option<task::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    MediaTypeChanged(MediaType),
    StatusChanged(WatchStatus),
    DateChanged(String),
    SuggestionPicked(usize),
    SearchFinished(SearchOutcome),
    Submit,
    Cancel,
}

impl EditorScreen {
    /// Open the form for `mode`. Update mode is seeded from `entry`.
    pub fn open(
        token: u64,
        mode: EditorMode,
        entry: Option<&MediaEntry>,
        search: &SearchConfig,
    ) -> Self {
        let form = match (mode, entry) {
            (EditorMode::Update(_), Some(entry)) => Editor::update(entry),
            _ => Editor::create(),
        };
        Self {
            token,
            form: form.limit_suggestions(search.max_suggestions),
            error: None,
            saving: false,
            pending_search: None,
        }
    }

    pub fn update(&mut self, msg: Message, services: &Services, search: &SearchConfig) -> Action {
        match msg {
            Message::TitleChanged(title) => {
                self.form.set_title(title);
                self.schedule_search(services, search)
            }
            Message::MediaTypeChanged(media_type) => {
                let changed = media_type != self.form.media_type;
                self.form.set_media_type(media_type);
                if changed {
                    self.schedule_search(services, search)
                } else {
                    Action::None
                }
            }
            Message::StatusChanged(status) => {
                self.form.status = status;
                Action::None
            }
            Message::DateChanged(date) => {
                self.form.next_release_date = date;
                Action::None
            }
            Message::SuggestionPicked(index) => {
                self.stop_search(services);
                self.form.select_suggestion(index);
                Action::None
            }
            Message::SearchFinished(outcome) => match outcome {
                SearchOutcome::Results { seq, items } if services.debouncer.is_current(seq) => {
                    self.pending_search = None;
                    self.form.suggestions.resolve(items);
                    Action::None
                }
                SearchOutcome::Failed { seq } if services.debouncer.is_current(seq) => {
                    self.pending_search = None;
                    self.form.suggestions.clear();
                    Action::None
                }
                _ => Action::None,
            },
            Message::Submit => {
                if self.saving {
                    return Action::None;
                }
                let draft = match self.form.to_draft() {
                    Ok(draft) => draft,
                    Err(e) => {
                        self.error = Some(e.to_string());
                        return Action::None;
                    }
                };
                self.stop_search(services);
                self.saving = true;
                self.error = None;

                let store = services.watchlist.clone();
                let mode = self.form.mode();
                let token = self.token;
                Action::RunTask(Task::perform(
                    async move { store.submit(mode, draft).await },
                    move |r| app::Message::EditorSaved {
                        token,
                        mode,
                        result: r.map_err(|e| MutationFailure::new(&e, "Failed to save media")),
                    },
                ))
            }
            Message::Cancel => {
                self.stop_search(services);
                Action::CloseEditor
            }
        }
    }

    /// The save was rejected; keep the form open for another try.
    pub fn save_failed(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }

    /// Poster thumbnails for the current suggestions.
    pub fn suggestion_posters(&self, images: &ImageConfig) -> Vec<String> {
        self.form
            .suggestions
            .items()
            .iter()
            .filter_map(|s| s.poster_path.as_deref())
            .map(|p| images.thumb_url(p))
            .collect()
    }

    fn schedule_search(&mut self, services: &Services, search: &SearchConfig) -> Action {
        // Replacing the handle aborts whatever was scheduled before.
        self.pending_search = None;

        let Some(query) =
            services
                .debouncer
                .schedule(&self.form.title, self.form.media_type, search.min_query_len)
        else {
            self.form.suggestions.clear();
            return Action::None;
        };

        self.form.suggestions.waiting();
        let debouncer = services.debouncer.clone();
        let client = Arc::clone(&services.client);
        let (search_task, handle) = Task::perform(
            async move { debouncer.run(client.as_ref(), query).await },
            |outcome| app::Message::Editor(Message::SearchFinished(outcome)),
        )
        .abortable();
        self.pending_search = Some(handle.abort_on_drop());
        Action::RunTask(search_task)
    }

    fn stop_search(&mut self, services: &Services) {
        services.debouncer.cancel();
        self.pending_search = None;
    }

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        images: &'a ImageConfig,
    ) -> Element<'a, Message> {
        let mode = self.form.mode();

        let title_input = text_input("Title", &self.form.title)
            .on_input(Message::TitleChanged)
            .on_submit(Message::Submit)
            .size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .width(Length::Fill)
            .style(theme::text_input_style(cs));

        let mut title_field = column![title_input].spacing(style::SPACE_XS);

        if self.form.suggestions.phase() != SearchPhase::Idle {
            title_field = title_field.push(
                row![
                    lucide_icons::iced::icon_loader()
                        .size(style::TEXT_XS)
                        .color(cs.outline),
                    text("Searching...").size(style::TEXT_XS).color(cs.outline),
                ]
                .spacing(style::SPACE_XS)
                .align_y(Alignment::Center),
            );
        }

        let items = self.form.suggestions.items();
        if !items.is_empty() {
            let rows: Vec<Element<'a, Message>> = items
                .iter()
                .enumerate()
                .map(|(index, suggestion)| {
                    let thumb_url = suggestion.poster_path.as_deref().map(|p| images.thumb_url(p));
                    let thumb = widgets::poster(
                        cs,
                        posters,
                        thumb_url.as_deref(),
                        style::THUMB_WIDTH,
                        style::THUMB_HEIGHT,
                        style::RADIUS_SM,
                    );
                    let mut label = column![text(suggestion.title.as_str())
                        .size(style::TEXT_SM)
                        .color(cs.on_surface)]
                    .spacing(style::SPACE_XXS);
                    if let Some(year) = suggestion.year() {
                        label = label.push(text(year).size(style::TEXT_XS).color(cs.outline));
                    }
                    button(
                        row![thumb, label]
                            .spacing(style::SPACE_SM)
                            .align_y(Alignment::Center),
                    )
                    .width(Length::Fill)
                    .padding(style::SPACE_XS)
                    .on_press(Message::SuggestionPicked(index))
                    .style(theme::suggestion_item(cs))
                    .into()
                })
                .collect();

            title_field = title_field.push(
                container(column(rows).spacing(style::SPACE_XXS))
                    .padding(style::SPACE_XS)
                    .width(Length::Fill)
                    .style(theme::suggestion_list(cs)),
            );
        }

        if let Some(linked) = self.form.external() {
            title_field = title_field.push(
                row![
                    lucide_icons::iced::icon_link()
                        .size(style::TEXT_XS)
                        .color(cs.primary),
                    text(format!("Linked to TMDb #{}", linked.id))
                        .size(style::TEXT_XS)
                        .color(cs.on_surface_variant),
                ]
                .spacing(style::SPACE_XS)
                .align_y(Alignment::Center),
            );
        }

        let type_pick = pick_list(MediaType::ALL, Some(self.form.media_type), Message::MediaTypeChanged)
            .text_size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .width(Length::Fill)
            .style(theme::pick_list_style(cs))
            .menu_style(theme::pick_list_menu_style(cs));

        let status_pick = pick_list(WatchStatus::ALL, Some(self.form.status), Message::StatusChanged)
            .text_size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .width(Length::Fill)
            .style(theme::pick_list_style(cs))
            .menu_style(theme::pick_list_menu_style(cs));

        let date_input = text_input("YYYY-MM-DD", &self.form.next_release_date)
            .on_input(Message::DateChanged)
            .on_submit(Message::Submit)
            .size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .width(Length::Fixed(style::INPUT_DATE_WIDTH))
            .style(theme::text_input_style(cs));

        let mut body = column![
            text(mode.heading())
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            widgets::form_row(cs, "Title", title_field),
            widgets::form_row(cs, "Type", type_pick),
            widgets::form_row(cs, "Status", status_pick),
            widgets::form_row(cs, "Next release", date_input),
        ]
        .spacing(style::SPACE_LG);

        if let Some(error) = &self.error {
            body = body.push(
                text(error.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }

        let submit_label = if self.saving {
            "Saving..."
        } else {
            mode.submit_label()
        };
        body = body.push(
            row![
                iced::widget::Space::new().width(Length::Fill),
                button(text("Cancel").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::Cancel)
                    .style(theme::ghost_button(cs)),
                button(text(submit_label).size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press_maybe((!self.saving).then_some(Message::Submit))
                    .style(theme::primary_button(cs)),
            ]
            .spacing(style::SPACE_SM),
        );

        container(widgets::styled_scrollable(body, cs))
            .width(Length::Fixed(style::EDITOR_WIDTH))
            .max_height(640.0)
            .padding(style::SPACE_2XL)
            .style(theme::dialog_container(cs))
            .into()
    }
}
