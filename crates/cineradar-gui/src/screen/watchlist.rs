use iced::widget::{button, center, column, container, row, rule, text};
use iced::{Alignment, Element, Length, Task};

use cineradar_core::config::ImageConfig;
use cineradar_core::editor::EditorMode;
use cineradar_core::filter::{filter_by_type, TypeFilter};
use cineradar_core::models::{MediaEntry, MediaId};

use crate::app::{self, Services};
use crate::poster_cache::PosterCache;
use crate::screen::{Action, ModalKind};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::toast::{Notice, Operation};
use crate::widgets;

/// Main list screen state.
#[derive(Debug, Default)]
pub struct Watchlist {
    pub entries: Vec<MediaEntry>,
    pub filter: TypeFilter,
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(TypeFilter),
    Open(MediaId),
    Add,
    Edit(MediaId),
    Delete(MediaId),
    Reload,
    Logout,
    // Async result messages (errors stringified for Clone)
    Loaded(Result<Vec<MediaEntry>, String>),
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, msg: Message, services: &Services) -> Action {
        match msg {
            Message::FilterChanged(filter) => {
                self.filter = filter;
                Action::None
            }
            Message::Open(id) => Action::OpenDetail(id),
            Message::Add => Action::OpenEditor(EditorMode::Create),
            Message::Edit(id) => Action::OpenEditor(EditorMode::Update(id)),
            Message::Delete(id) => match self.entries.iter().find(|e| e.id == id) {
                Some(entry) => Action::ShowModal(ModalKind::ConfirmDelete {
                    id,
                    title: entry.title.clone(),
                }),
                None => Action::None,
            },
            Message::Reload => self.refresh(services),
            Message::Logout => Action::Logout,
            Message::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(entries) => Action::EntriesChanged(entries),
                    Err(e) => Action::ShowToast(Notice::failure(Operation::Load, &e)),
                }
            }
        }
    }

    /// Reload the whole collection from the backend.
    pub fn refresh(&mut self, services: &Services) -> Action {
        self.loading = true;
        let store = services.watchlist.clone();
        Action::RunTask(Task::perform(
            async move { store.fetch_all().await },
            |r| app::Message::Watchlist(Message::Loaded(r.map_err(|e| e.to_string()))),
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, id: MediaId) -> Option<&MediaEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        images: &'a ImageConfig,
        username: Option<&'a str>,
    ) -> Element<'a, Message> {
        let visible = filter_by_type(&self.entries, self.filter);

        let count_text = format!(
            "{} {}",
            visible.len(),
            if visible.len() == 1 { "entry" } else { "entries" }
        );

        let toolbar = row![
            chip_bar(cs, self.filter),
            text(count_text)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fill),
            button(
                container(
                    lucide_icons::iced::icon_refresh_cw()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .center(Length::Fill),
            )
            .width(Length::Fixed(28.0))
            .height(Length::Fixed(28.0))
            .padding(0)
            .on_press_maybe((!self.loading).then_some(Message::Reload))
            .style(theme::icon_button(cs)),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .padding([style::SPACE_SM, style::SPACE_LG]);

        let list: Element<'_, Message> = if self.entries.is_empty() {
            if self.loading {
                center(
                    text("Loading...")
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .into()
            } else {
                let icon = lucide_icons::iced::icon_film()
                    .size(48.0)
                    .color(cs.outline)
                    .into();
                widgets::empty_state(
                    cs,
                    icon,
                    "No media added yet.",
                    "Use \"Add Media\" to start your watchlist.",
                )
            }
        } else if visible.is_empty() {
            let icon = lucide_icons::iced::icon_film()
                .size(48.0)
                .color(cs.outline)
                .into();
            widgets::empty_state(cs, icon, "Nothing here", "No entries of this type yet.")
        } else {
            let cards: Vec<Element<'a, Message>> = visible
                .into_iter()
                .map(|entry| {
                    let url = entry.poster_path.as_deref().map(|p| images.poster_url(p));
                    widgets::media_card(
                        cs,
                        posters,
                        entry,
                        url.as_deref(),
                        Message::Open(entry.id),
                        Message::Edit(entry.id),
                        Message::Delete(entry.id),
                    )
                })
                .collect();

            let wrap = iced_aw::Wrap::with_elements(cards)
                .spacing(style::SPACE_SM)
                .line_spacing(style::SPACE_SM);

            widgets::styled_scrollable(
                container(wrap).padding([style::SPACE_SM, style::SPACE_LG]),
                cs,
            )
            .height(Length::Fill)
            .into()
        };

        column![header(cs, username), toolbar, rule::horizontal(1), list]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn header<'a>(cs: &ColorScheme, username: Option<&'a str>) -> Element<'a, Message> {
    let mut bar = row![
        lucide_icons::iced::icon_clapperboard()
            .size(style::TEXT_XL)
            .color(cs.primary),
        text("CineRadar")
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT)
            .width(Length::Fill),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center);

    if let Some(name) = username {
        bar = bar.push(
            text(format!("Signed in as {name}"))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant),
        );
    }

    bar = bar
        .push(
            button(
                row![
                    lucide_icons::iced::icon_plus().size(style::TEXT_SM),
                    text("Add Media").size(style::TEXT_SM),
                ]
                .spacing(style::SPACE_XS)
                .align_y(Alignment::Center),
            )
            .padding([style::SPACE_XS, style::SPACE_MD])
            .on_press(Message::Add)
            .style(theme::primary_button(cs)),
        )
        .push(
            button(
                row![
                    lucide_icons::iced::icon_log_out().size(style::TEXT_SM),
                    text("Logout").size(style::TEXT_SM),
                ]
                .spacing(style::SPACE_XS)
                .align_y(Alignment::Center),
            )
            .padding([style::SPACE_XS, style::SPACE_MD])
            .on_press(Message::Logout)
            .style(theme::ghost_button(cs)),
        );

    container(bar)
        .height(Length::Fixed(style::HEADER_HEIGHT))
        .center_y(Length::Fixed(style::HEADER_HEIGHT))
        .padding([0.0, style::SPACE_LG])
        .width(Length::Fill)
        .style(theme::header_bar(cs))
        .into()
}

/// Filter chip bar for media type filtering.
fn chip_bar(cs: &ColorScheme, active: TypeFilter) -> Element<'static, Message> {
    let chips: Vec<Element<'_, Message>> = TypeFilter::ALL
        .iter()
        .map(|&filter| {
            let is_selected = filter == active;
            let mut chip_content = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);
            if is_selected {
                chip_content =
                    chip_content.push(lucide_icons::iced::icon_check().size(style::TEXT_XS));
            }
            chip_content = chip_content.push(
                text(filter.to_string())
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );

            button(container(chip_content).center_y(Length::Fill))
                .height(Length::Fixed(style::CHIP_HEIGHT))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::FilterChanged(filter))
                .style(theme::filter_chip(is_selected, cs))
                .into()
        })
        .collect();

    row(chips).spacing(style::SPACE_XS).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cineradar_core::models::{MediaType, WatchStatus};

    fn services() -> Services {
        Services::new(&cineradar_core::config::AppConfig::default()).unwrap()
    }

    fn entry(id: MediaId, title: &str) -> MediaEntry {
        MediaEntry {
            id,
            title: title.into(),
            media_type: MediaType::Tv,
            status: WatchStatus::Watching,
            next_release_date: None,
            external_id: None,
            external_type: None,
            poster_path: None,
        }
    }

    #[test]
    fn test_delete_asks_for_confirmation() {
        let mut screen = Watchlist::new();
        screen.entries = vec![entry(4, "Severance")];
        let action = screen.update(Message::Delete(4), &services());
        assert!(matches!(
            action,
            Action::ShowModal(ModalKind::ConfirmDelete { id: 4, ref title }) if title == "Severance"
        ));
    }

    #[test]
    fn test_delete_of_unknown_entry_is_ignored() {
        let mut screen = Watchlist::new();
        assert!(matches!(
            screen.update(Message::Delete(9), &services()),
            Action::None
        ));
    }

    #[test]
    fn test_card_buttons_route_separately() {
        let mut screen = Watchlist::new();
        let s = services();
        assert!(matches!(
            screen.update(Message::Open(2), &s),
            Action::OpenDetail(2)
        ));
        assert!(matches!(
            screen.update(Message::Edit(2), &s),
            Action::OpenEditor(EditorMode::Update(2))
        ));
        assert!(matches!(
            screen.update(Message::Add, &s),
            Action::OpenEditor(EditorMode::Create)
        ));
    }

    #[test]
    fn test_load_failure_toasts() {
        let mut screen = Watchlist::new();
        screen.loading = true;
        let action = screen.update(Message::Loaded(Err("connection refused".into())), &services());
        assert!(!screen.loading);
        let Action::ShowToast(notice) = action else {
            panic!("expected a toast");
        };
        assert_eq!(notice.message, "Couldn't load media: connection refused");
    }
}
