use iced::Subscription;
use iced::keyboard::{self, Key};

use crate::message::{Message, Section};
use crate::view::settings::UpdateFrequency;

/// Recurring simulation tick at the selected cadence.
///
/// The subscription's identity includes the interval, so picking a new
/// frequency tears down the previous timer before the next one starts;
/// there is never more than one live tick stream.
pub fn tick_subscription(frequency: UpdateFrequency) -> Subscription<Message> {
    iced::time::every(frequency.interval()).map(|_| Message::Tick)
}

/// Ctrl/Cmd+1..4 switch sections.
pub fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().filter_map(|event| {
        let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
            return None;
        };

        if !modifiers.command() {
            return None;
        }

        match key.as_ref() {
            Key::Character(c) => c
                .chars()
                .next()
                .and_then(Section::from_shortcut)
                .map(Message::SelectSection),
            _ => None,
        }
    })
}
