use std::sync::Arc;

use iced::widget::{button, column, container, row, rule, text};
use iced::{Alignment, Element, Length, Task};

use cineradar_core::config::ImageConfig;
use cineradar_core::detail::{DetailState, MetadataState};
use cineradar_core::models::{ExternalKey, ExternalMetadata, MediaEntry, MediaId};

use crate::app::{self, Services};
use crate::format;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Detail page for one entry.
#[derive(Debug)]
pub struct Detail {
    pub state: DetailState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Loaded {
        key: ExternalKey,
        result: Result<ExternalMetadata, String>,
    },
}

impl Detail {
    /// Open the page, starting the metadata fetch when the entry is linked.
    pub fn open(entry: MediaEntry, services: &Services, images: &ImageConfig) -> (Self, Action) {
        let (state, key) = DetailState::open(entry);
        let poster = state.poster_path().map(|p| images.poster_url(p));
        let detail = Self { state };

        let Some(key) = key else {
            return (detail, poster_action(poster));
        };

        let client = Arc::clone(&services.client);
        let fetch = Task::perform(
            async move { cineradar_runtime::load_details(client.as_ref(), key).await },
            move |r| {
                app::Message::Detail(Message::Loaded {
                    key,
                    result: r.map_err(|e| e.user_message("Failed to load details")),
                })
            },
        );
        let action = match poster {
            Some(url) => Action::RunTask(Task::batch([
                fetch,
                Task::done(app::Message::LoadPosters(vec![url])),
            ])),
            None => Action::RunTask(fetch),
        };
        (detail, action)
    }

    pub fn id(&self) -> MediaId {
        self.state.entry.id
    }

    pub fn update(&mut self, msg: Message, images: &ImageConfig) -> Action {
        match msg {
            Message::Back => Action::Back,
            Message::Loaded { key, result } => {
                if let Err(e) = &result {
                    tracing::warn!(id = key.id, error = %e, "metadata fetch failed");
                }
                if !self.state.resolve(key, result) {
                    return Action::None;
                }
                poster_action(self.state.poster_path().map(|p| images.poster_url(p)))
            }
        }
    }

    /// Pick up the reloaded copy of this entry, if it still exists.
    pub fn sync_entry(&mut self, entries: &[MediaEntry]) -> bool {
        match entries.iter().find(|e| e.id == self.id()) {
            Some(entry) => {
                self.state.entry = entry.clone();
                true
            }
            None => false,
        }
    }

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        images: &'a ImageConfig,
    ) -> Element<'a, Message> {
        let entry = &self.state.entry;
        let metadata = match &self.state.metadata {
            MetadataState::Loaded(m) => Some(m.as_ref()),
            _ => None,
        };

        let back = button(
            row![
                lucide_icons::iced::icon_arrow_left().size(style::TEXT_SM),
                text("Back").size(style::TEXT_SM),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_XS, style::SPACE_MD])
        .on_press(Message::Back)
        .style(theme::ghost_button(cs));

        let poster_url = self.state.poster_path().map(|p| images.poster_url(p));
        let poster = widgets::poster(
            cs,
            posters,
            poster_url.as_deref(),
            style::DETAIL_POSTER_WIDTH,
            style::DETAIL_POSTER_HEIGHT,
            style::RADIUS_LG,
        );

        let status_col = theme::status_color(cs, entry.status);
        let mut info = column![
            text(entry.title.as_str())
                .size(style::TEXT_2XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
        ]
        .spacing(style::SPACE_MD)
        .width(Length::Fill);

        if let Some(tagline) = metadata.and_then(|m| m.tagline.as_deref()) {
            info = info.push(
                text(tagline)
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface_variant),
            );
        }

        info = info.push(
            row![
                text(entry.media_type.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant),
                container(text(entry.status.as_str()).size(style::TEXT_SM).color(status_col))
                    .padding([style::SPACE_XXS, style::SPACE_SM])
                    .style(theme::status_badge(status_col)),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
        );

        info = info.push(fact(
            cs,
            "Next release",
            format::release_date(entry.next_release_date.as_deref()),
        ));

        match &self.state.metadata {
            MetadataState::Unlinked => {}
            MetadataState::Loading(_) => {
                info = info.push(
                    row![
                        lucide_icons::iced::icon_loader()
                            .size(style::TEXT_SM)
                            .color(cs.outline),
                        text("Loading details...")
                            .size(style::TEXT_SM)
                            .color(cs.outline),
                    ]
                    .spacing(style::SPACE_XS)
                    .align_y(Alignment::Center),
                );
            }
            MetadataState::Failed(message) => {
                info = info.push(
                    container(
                        row![
                            lucide_icons::iced::icon_info()
                                .size(style::TEXT_SM)
                                .color(cs.error),
                            text(format!("Extended details unavailable: {message}"))
                                .size(style::TEXT_SM)
                                .color(cs.on_surface_variant),
                        ]
                        .spacing(style::SPACE_SM)
                        .align_y(Alignment::Center),
                    )
                    .padding([style::SPACE_SM, style::SPACE_MD])
                    .style(theme::notice(cs)),
                );
            }
            MetadataState::Loaded(m) => {
                info = metadata_facts(cs, info, m);
            }
        }

        let mut page = column![
            back,
            row![poster, info]
                .spacing(style::SPACE_XL)
                .align_y(Alignment::Start),
        ]
        .spacing(style::SPACE_LG)
        .max_width(style::DETAIL_MAX_WIDTH);

        if let Some(m) = metadata {
            page = metadata_sections(cs, page, m);
        }

        widgets::styled_scrollable(
            container(page)
                .padding([style::SPACE_LG, style::SPACE_XL])
                .center_x(Length::Fill),
            cs,
        )
        .height(Length::Fill)
        .into()
    }
}

fn poster_action(url: Option<String>) -> Action {
    match url {
        Some(url) => Action::LoadPosters(vec![url]),
        None => Action::None,
    }
}

fn fact<'a>(cs: &ColorScheme, label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label)
            .size(style::TEXT_SM)
            .color(cs.outline)
            .width(Length::Fixed(style::INPUT_LABEL_WIDTH)),
        text(value).size(style::TEXT_SM).color(cs.on_surface),
    ]
    .spacing(style::SPACE_SM)
    .into()
}

/// Rating, runtime and genre facts beside the poster. Absent fields are skipped.
fn metadata_facts<'a>(
    cs: &'a ColorScheme,
    mut info: iced::widget::Column<'a, Message>,
    m: &'a ExternalMetadata,
) -> iced::widget::Column<'a, Message> {
    if let Some(average) = m.vote_average {
        info = info.push(
            row![
                lucide_icons::iced::icon_star()
                    .size(style::TEXT_BASE)
                    .color(cs.tertiary),
                text(format::rating(average, m.vote_count))
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        );
    }
    if let Some(date) = &m.release_date {
        info = info.push(fact(cs, "Released", format::release_date(Some(date))));
    }
    if let Some(minutes) = m.runtime_minutes {
        info = info.push(fact(cs, "Runtime", format::runtime(minutes)));
    }
    if let Some(count) = m.seasons {
        info = info.push(fact(cs, "Seasons", format::seasons(count)));
    }
    if !m.genres.is_empty() {
        let pills: Vec<Element<'a, Message>> = m
            .genres
            .iter()
            .map(|g| {
                container(text(g.as_str()).size(style::TEXT_XS).color(cs.on_surface_variant))
                    .padding([style::SPACE_XXS, style::SPACE_SM])
                    .style(theme::metadata_badge(cs))
                    .into()
            })
            .collect();
        info = info.push(
            iced_aw::Wrap::with_elements(pills)
                .spacing(style::SPACE_XS)
                .line_spacing(style::SPACE_XS),
        );
    }
    info
}

/// Overview and cast below the header row.
fn metadata_sections<'a>(
    cs: &'a ColorScheme,
    mut page: iced::widget::Column<'a, Message>,
    m: &'a ExternalMetadata,
) -> iced::widget::Column<'a, Message> {
    if let Some(overview) = &m.overview {
        page = page.push(rule::horizontal(1)).push(
            column![
                section_heading("Overview"),
                text(overview.as_str())
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_SM),
        );
    }
    if !m.cast.is_empty() {
        let members: Vec<Element<'a, Message>> = m
            .cast
            .iter()
            .map(|member| {
                let mut line = row![text(member.name.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface)]
                .spacing(style::SPACE_XS);
                if let Some(character) = &member.character {
                    line = line.push(
                        text(format!("as {character}"))
                            .size(style::TEXT_SM)
                            .color(cs.on_surface_variant),
                    );
                }
                line.into()
            })
            .collect();
        page = page.push(rule::horizontal(1)).push(
            column![
                section_heading("Cast"),
                column(members).spacing(style::SPACE_XS),
            ]
            .spacing(style::SPACE_SM),
        );
    }
    page
}

fn section_heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(style::TEXT_LG)
        .font(style::FONT_HEADING)
        .line_height(style::LINE_HEIGHT_TIGHT)
        .into()
}
