//! Non-blocking notices for watchlist operations.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// Auto-dismiss delay in seconds.
pub const AUTO_DISMISS_SECS: u64 = 4;

/// Most toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    /// The change went through but something after it did not.
    Partial,
}

/// Operation a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
}

impl Operation {
    fn done(self) -> &'static str {
        match self {
            Self::Load => "Watchlist refreshed",
            Self::Add => "Media added",
            Self::Update => "Media updated",
            Self::Delete => "Media deleted",
        }
    }

    fn failed(self) -> &'static str {
        match self {
            Self::Load => "Couldn't load media",
            Self::Add => "Couldn't add media",
            Self::Update => "Couldn't update media",
            Self::Delete => "Couldn't delete media",
        }
    }
}

/// A notice waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn success(op: Operation) -> Self {
        Self {
            kind: ToastKind::Success,
            message: op.done().to_string(),
        }
    }

    pub fn failure(op: Operation, detail: &str) -> Self {
        let message = if detail.trim().is_empty() {
            op.failed().to_string()
        } else {
            format!("{}: {detail}", op.failed())
        };
        Self {
            kind: ToastKind::Error,
            message,
        }
    }

    /// The backend applied `op` but the follow-up reload failed.
    pub fn unrefreshed(op: Operation) -> Self {
        Self {
            kind: ToastKind::Partial,
            message: format!("{}, but the list could not be refreshed", op.done()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Queue a notice and return its id for the dismiss timer.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Notice> {
        self.items.last().map(|t| &t.notice)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Stack of toasts anchored top-right.
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        cs: &ColorScheme,
        on_dismiss: impl Fn(u64) -> Message + 'a,
    ) -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = self.items.iter().map(|toast| {
            let (icon, accent) = match toast.notice.kind {
                ToastKind::Success => (lucide_icons::iced::icon_circle_check(), cs.status_completed),
                ToastKind::Error => (lucide_icons::iced::icon_circle_x(), cs.error),
                ToastKind::Partial => (lucide_icons::iced::icon_info(), cs.tertiary),
            };
            container(
                row![
                    icon.size(style::TEXT_LG).color(accent),
                    text(toast.notice.message.as_str())
                        .size(style::TEXT_SM)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    button(
                        lucide_icons::iced::icon_x()
                            .size(style::TEXT_SM)
                            .color(cs.on_surface_variant),
                    )
                    .on_press(on_dismiss(toast.id))
                    .padding(style::SPACE_XXS)
                    .style(theme::icon_button(cs)),
                ]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
            )
            .style(theme::card(cs))
            .padding([style::SPACE_SM, style::SPACE_MD])
            .width(Length::Fill)
            .into()
        }).collect();

        container(
            column(cards)
                .spacing(style::SPACE_SM)
                .width(Length::Fixed(320.0)),
        )
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .padding([style::SPACE_MD, style::SPACE_XL])
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_names_operation() {
        let notice = Notice::failure(Operation::Delete, "Media not found");
        assert_eq!(notice.kind, ToastKind::Error);
        assert_eq!(notice.message, "Couldn't delete media: Media not found");
        assert_eq!(
            Notice::failure(Operation::Load, "").message,
            "Couldn't load media"
        );
    }

    #[test]
    fn test_unrefreshed_mentions_applied_change() {
        let notice = Notice::unrefreshed(Operation::Add);
        assert_eq!(notice.kind, ToastKind::Partial);
        assert_eq!(notice.message, "Media added, but the list could not be refreshed");
    }

    #[test]
    fn test_oldest_dropped_past_cap() {
        let mut toasts = Toasts::default();
        let first = toasts.push(Notice::success(Operation::Load));
        for _ in 0..MAX_VISIBLE {
            toasts.push(Notice::success(Operation::Add));
        }
        assert_eq!(toasts.len(), MAX_VISIBLE);
        toasts.dismiss(first);
        assert_eq!(toasts.len(), MAX_VISIBLE);
        assert_eq!(toasts.last(), Some(&Notice::success(Operation::Add)));
    }
}
