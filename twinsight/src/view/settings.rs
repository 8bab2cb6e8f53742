//! Settings section: update cadence and notification preferences.

use std::time::Duration;

use iced::widget::{checkbox, column, container, pick_list, row, rule, scrollable, slider, text};
use iced::{Alignment, Element, Length};

use twinsight_common::DisplayConfig;

use crate::message::Message;
use crate::view::theme;

/// How often the simulation advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateFrequency {
    /// Every second (default).
    #[default]
    OneSecond,
    FiveSeconds,
    TenSeconds,
    ThirtySeconds,
}

impl UpdateFrequency {
    /// All available cadences.
    pub const ALL: &'static [UpdateFrequency] = &[
        UpdateFrequency::OneSecond,
        UpdateFrequency::FiveSeconds,
        UpdateFrequency::TenSeconds,
        UpdateFrequency::ThirtySeconds,
    ];

    /// Convert from a configuration label. Unknown labels fall back to
    /// the one-second default.
    pub fn from_str(s: &str) -> Self {
        if s.contains("5 sec") {
            UpdateFrequency::FiveSeconds
        } else if s.contains("10 sec") {
            UpdateFrequency::TenSeconds
        } else if s.contains("30 sec") {
            UpdateFrequency::ThirtySeconds
        } else {
            UpdateFrequency::OneSecond
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            UpdateFrequency::OneSecond => "1 sec",
            UpdateFrequency::FiveSeconds => "5 sec",
            UpdateFrequency::TenSeconds => "10 sec",
            UpdateFrequency::ThirtySeconds => "30 sec",
        }
    }

    /// Tick interval for the subscription timer.
    pub fn interval(&self) -> Duration {
        match self {
            UpdateFrequency::OneSecond => Duration::from_millis(1000),
            UpdateFrequency::FiveSeconds => Duration::from_millis(5000),
            UpdateFrequency::TenSeconds => Duration::from_millis(10000),
            UpdateFrequency::ThirtySeconds => Duration::from_millis(30000),
        }
    }
}

impl std::fmt::Display for UpdateFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Settings state.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// Selected update cadence.
    pub frequency: UpdateFrequency,
    /// Alert threshold percent (display only; no alerts are evaluated).
    pub alert_threshold: u8,
    /// Email notification preference (acknowledged, never persisted).
    pub email_notifications: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            frequency: UpdateFrequency::default(),
            alert_threshold: 80,
            email_notifications: false,
        }
    }
}

impl SettingsState {
    /// Create settings from the loaded configuration.
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            frequency: UpdateFrequency::from_str(&display.update_frequency),
            ..Self::default()
        }
    }
}

/// Render the settings section.
pub fn settings_view(state: &SettingsState) -> Element<'_, Message> {
    let title = text("Settings").size(24);

    // Update frequency
    let frequency_label = text("Update Frequency:").size(14);
    let frequency_picker = pick_list(
        UpdateFrequency::ALL,
        Some(state.frequency),
        Message::SetUpdateFrequency,
    );
    let frequency_row = row![frequency_label, frequency_picker]
        .spacing(10)
        .align_y(Alignment::Center);
    let frequency_help = text("How often simulated readings refresh")
        .size(11)
        .style(theme::help_text);

    // Alert threshold
    let threshold_label = text("Alert Threshold:").size(14);
    let threshold_slider = slider(0..=100, state.alert_threshold, Message::SetAlertThreshold)
        .width(Length::Fixed(260.0));
    let threshold_value = text(format!("{}%", state.alert_threshold)).size(14);
    let threshold_row = row![threshold_label, threshold_slider, threshold_value]
        .spacing(10)
        .align_y(Alignment::Center);
    let threshold_help = text("Shown for reference only; the demo raises no alerts")
        .size(11)
        .style(theme::help_text);

    // Notifications
    let email_checkbox = checkbox(state.email_notifications)
        .label("Email notifications")
        .on_toggle(Message::ToggleEmailNotifications);
    let email_help = text("Preference is acknowledged but not persisted")
        .size(11)
        .style(theme::help_text);

    let content = column![
        title,
        rule::horizontal(1),
        frequency_row,
        frequency_help,
        rule::horizontal(1),
        threshold_row,
        threshold_help,
        rule::horizontal(1),
        email_checkbox,
        email_help,
    ]
    .spacing(12)
    .padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_from_str() {
        assert_eq!(UpdateFrequency::from_str("1 sec"), UpdateFrequency::OneSecond);
        assert_eq!(
            UpdateFrequency::from_str("5 sec"),
            UpdateFrequency::FiveSeconds
        );
        assert_eq!(
            UpdateFrequency::from_str("10 sec"),
            UpdateFrequency::TenSeconds
        );
        assert_eq!(
            UpdateFrequency::from_str("30 sec"),
            UpdateFrequency::ThirtySeconds
        );
        // Unknown labels fall back to the default cadence.
        assert_eq!(UpdateFrequency::from_str("2 min"), UpdateFrequency::OneSecond);
    }

    #[test]
    fn test_frequency_intervals() {
        assert_eq!(
            UpdateFrequency::OneSecond.interval(),
            Duration::from_millis(1000)
        );
        assert_eq!(
            UpdateFrequency::FiveSeconds.interval(),
            Duration::from_millis(5000)
        );
        assert_eq!(
            UpdateFrequency::TenSeconds.interval(),
            Duration::from_millis(10000)
        );
        assert_eq!(
            UpdateFrequency::ThirtySeconds.interval(),
            Duration::from_millis(30000)
        );
    }

    #[test]
    fn test_settings_from_config() {
        let display = DisplayConfig {
            update_frequency: "10 sec".to_string(),
            window_samples: 20,
        };

        let state = SettingsState::from_config(&display);
        assert_eq!(state.frequency, UpdateFrequency::TenSeconds);
        assert_eq!(state.alert_threshold, 80);
        assert!(!state.email_notifications);
    }
}
