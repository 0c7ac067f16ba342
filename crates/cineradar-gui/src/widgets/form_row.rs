use iced::widget::{row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::ColorScheme;

/// A `[ label | control ]` row with a fixed label column, used by the editor.
pub fn form_row<'a, Message: 'a>(
    cs: &ColorScheme,
    label: &str,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    row![
        text(label.to_string())
            .size(style::INPUT_FONT_SIZE)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .width(Length::Fixed(style::INPUT_LABEL_WIDTH)),
        control.into(),
    ]
    .align_y(Alignment::Center)
    .spacing(style::SPACE_SM)
    .into()
}
