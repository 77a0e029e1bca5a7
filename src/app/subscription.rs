// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo viewer.
//!
//! Each subscription exists only while the lightbox holds the matching
//! resource, so dropping a guard on the lightbox side stops the events.

use super::Message;
use crate::application::port::Key;
use crate::lightbox;
use iced::keyboard::{self, key::Named};
use iced::{event, mouse, time, Subscription};
use std::time::{Duration, Instant};

/// Period of the host tick that settles keys and polls idleness.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Keyboard navigation, live only while the key subscription is held.
pub fn create_keyboard_subscription(active: bool) -> Subscription<Message> {
    if !active {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Some(Message::Lightbox(lightbox::Message::KeyPressed {
                    key: map_key(&key),
                    at: Instant::now(),
                }))
            }
            _ => None,
        }
    })
}

/// Pointer movement counts as activity for idle detection.
pub fn create_activity_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::ButtonPressed(_)) => {
            Some(Message::Lightbox(lightbox::Message::Activity(Instant::now())))
        }
        event::Event::Window(iced::window::Event::Opened { .. } | iced::window::Event::Focused) => {
            Some(Message::WindowSeen(window))
        }
        _ => None,
    })
}

/// Host tick while the lightbox is open.
pub fn create_tick_subscription(open: bool) -> Subscription<Message> {
    if open {
        time::every(TICK_PERIOD).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Autoplay ticks at the period of the live autoplay timer.
pub fn create_autoplay_subscription(period: Option<Duration>) -> Subscription<Message> {
    match period {
        Some(period) => time::every(period)
            .map(|at| Message::Lightbox(lightbox::Message::AutoplayTick(at))),
        None => Subscription::none(),
    }
}

fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowUp) => Key::ArrowUp,
        keyboard::Key::Named(Named::ArrowDown) => Key::ArrowDown,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(named) => Key::Other(format!("{named:?}")),
        keyboard::Key::Character(c) => Key::Other(c.to_string()),
        keyboard::Key::Unidentified => Key::Other(String::new()),
    }
}
