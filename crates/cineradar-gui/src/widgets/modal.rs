use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

use crate::theme::{self, ColorScheme};

/// Show `content` centered over a dimmed `base`.
///
/// The backdrop swallows all input to `base`; clicking it emits `on_blur`.
pub fn modal<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(theme::modal_backdrop(cs)))
                .on_press(on_blur)
        ),
    ]
    .into()
}
