use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use cineradar_core::models::MediaEntry;

use crate::format;
use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Card width: poster + horizontal padding inside the card.
pub const CARD_WIDTH: f32 = style::POSTER_WIDTH + 2.0 * style::SPACE_SM;

/// Grid card for one watchlist entry.
///
/// The whole card opens the entry. Edit and Delete are nested buttons, so a
/// press on them is captured before it reaches the card.
pub fn media_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    entry: &'a MediaEntry,
    poster_url: Option<&str>,
    on_open: Message,
    on_edit: Message,
    on_delete: Message,
) -> Element<'a, Message> {
    let cover = widgets::poster(
        cs,
        posters,
        poster_url,
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    // Title clipped to 2 lines
    let title = container(
        text(entry.title.as_str())
            .size(style::TEXT_SM)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let status_col = theme::status_color(cs, entry.status);
    let badges = row![
        text(entry.media_type.as_str())
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant),
        container(
            text(entry.status.as_str())
                .size(style::TEXT_XS)
                .color(status_col),
        )
        .padding([0.0, style::SPACE_XS])
        .style(theme::status_badge(status_col)),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center);

    let next = text(format!(
        "Next: {}",
        format::release_date(entry.next_release_date.as_deref())
    ))
    .size(style::TEXT_XS)
    .color(cs.outline)
    .line_height(style::LINE_HEIGHT_LOOSE);

    let actions = row![
        button(
            row![
                lucide_icons::iced::icon_pencil().size(style::TEXT_XS),
                text("Edit").size(style::TEXT_XS),
            ]
            .spacing(style::SPACE_XXS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_XXS, style::SPACE_SM])
        .on_press(on_edit)
        .style(theme::ghost_button(cs)),
        button(
            row![
                lucide_icons::iced::icon_trash_2().size(style::TEXT_XS),
                text("Delete").size(style::TEXT_XS),
            ]
            .spacing(style::SPACE_XXS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_XXS, style::SPACE_SM])
        .on_press(on_delete)
        .style(theme::danger_button(cs)),
    ]
    .spacing(style::SPACE_XS);

    let content = column![cover, title, badges, next, actions]
        .spacing(style::SPACE_XS)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    button(container(content).style(theme::media_card_style(cs, status_col)))
        .padding(0)
        .width(Length::Fixed(CARD_WIDTH))
        .on_press(on_open)
        .style(theme::media_card_button(cs))
        .into()
}
