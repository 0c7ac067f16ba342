use std::time::Duration;

use iced::keyboard::{self, key::Named, Key};
use iced::{window, Subscription};

use cineradar_core::config::ThemeMode;

use crate::app::Message;
use crate::theme;

/// How often the OS appearance is re-checked while following the system theme.
const APPEARANCE_POLL_SECS: u64 = 5;

pub fn subscriptions(mode: ThemeMode) -> Subscription<Message> {
    let mut subs = vec![events()];
    if mode == ThemeMode::System {
        subs.push(appearance_poll());
    }
    Subscription::batch(subs)
}

/// Escape and window geometry changes.
fn events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Escape),
        iced::Event::Window(
            event @ (window::Event::Resized(_) | window::Event::Moved(_)),
        ) => Some(Message::WindowEvent(event)),
        _ => None,
    })
}

fn appearance_poll() -> Subscription<Message> {
    iced::time::every(Duration::from_secs(APPEARANCE_POLL_SECS))
        .map(|_| Message::AppearanceChanged(theme::resolve_mode(ThemeMode::System)))
}
