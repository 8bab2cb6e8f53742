//! Transient toast notifications.
//!
//! Every toast is independent and self-dismissing: it enters, holds for
//! a fixed time and leaves, driven by one-shot tasks scheduled in
//! `app.rs`. Concurrent toasts stack in layout order, newest last.

use std::time::Duration;

use iced::widget::{Column, container, text};
use iced::{Border, Color, Element, Length, Theme};

use crate::message::Message;
use crate::view::theme;

/// Slide-in delay before a toast counts as fully shown.
pub const ENTER: Duration = Duration::from_millis(100);

/// How long a toast stays fully visible.
pub const HOLD: Duration = Duration::from_secs(3);

/// Slide-out duration before a toast is removed.
pub const EXIT: Duration = Duration::from_millis(300);

/// Message severity, mapped to the toast accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding in; rendered dimmed.
    Entering,
    /// Fully visible.
    Visible,
    /// Sliding out; rendered dimmed until removal.
    Leaving,
}

/// A single transient toast.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// State owning the active toasts.
#[derive(Debug, Default)]
pub struct NotificationsState {
    toasts: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Append a toast in its entering phase and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Entering,
        });
        id
    }

    /// Advance a toast to its fully visible phase.
    pub fn mark_shown(&mut self, id: u64) {
        self.set_phase(id, Phase::Visible);
    }

    /// Begin a toast's slide-out.
    pub fn mark_closing(&mut self, id: u64) {
        self.set_phase(id, Phase::Leaving);
    }

    /// Drop a toast after its slide-out. Unknown ids are a no-op (the
    /// scheduled removal may race a manual dismissal).
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Active toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    fn set_phase(&mut self, id: u64, phase: Phase) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.phase = phase;
        }
    }
}

/// Render the toast overlay, stacked top-right above the content.
pub fn notifications_overlay(state: &NotificationsState) -> Element<'_, Message> {
    let mut stack = Column::new().spacing(8).width(Length::Fixed(300.0));

    for toast in state.iter() {
        stack = stack.push(render_toast(toast));
    }

    container(stack)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .padding(20)
        .into()
}

/// Render one toast with its severity accent.
fn render_toast(toast: &Notification) -> Element<'_, Message> {
    let accent = theme::severity_color(toast.severity);
    let alpha = match toast.phase {
        Phase::Visible => 1.0,
        Phase::Entering | Phase::Leaving => 0.4,
    };

    container(text(&toast.message).size(14))
        .padding([12.0, 20.0])
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut state = NotificationsState::default();
        assert!(state.is_empty());

        let id = state.push("Pump started", Severity::Success);
        assert_eq!(state.len(), 1);
        assert_eq!(state.iter().next().unwrap().phase, Phase::Entering);

        state.mark_shown(id);
        assert_eq!(state.iter().next().unwrap().phase, Phase::Visible);

        state.mark_closing(id);
        assert_eq!(state.iter().next().unwrap().phase, Phase::Leaving);

        state.remove(id);
        assert!(state.is_empty());
    }

    #[test]
    fn test_toasts_stack_in_push_order() {
        let mut state = NotificationsState::default();
        let first = state.push("first", Severity::Info);
        let second = state.push("second", Severity::Warning);

        assert!(first < second);
        let order: Vec<_> = state.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn test_removing_unknown_id_is_a_noop() {
        let mut state = NotificationsState::default();
        state.push("only", Severity::Info);

        state.remove(999);
        state.mark_shown(999);
        assert_eq!(state.len(), 1);
    }
}
