//! TwinSight Iced application.

use std::time::Duration;

use iced::widget::{Row, button, column, stack, text};
use iced::{Element, Length, Subscription, Task, Theme};

use twinsight_common::chart::{ChartKind, ChartSpec, Dataset, Paint};
use twinsight_common::{DashboardConfig, DeviceKind};

use crate::message::{Message, Section};
use crate::simulation::{DeviceAction, Simulator};
use crate::subscription::{keyboard_subscription, tick_subscription};
use crate::view::analytics::analytics_view;
use crate::view::chart::ChartState;
use crate::view::dashboard::{DashboardStats, dashboard_view};
use crate::view::devices::devices_view;
use crate::view::formatting::format_reading;
use crate::view::notifications::{
    self, NotificationsState, Severity, notifications_overlay,
};
use crate::view::settings::{SettingsState, settings_view};
use crate::view::theme;

/// Delay between a calibration request and its completion.
const CALIBRATION_DELAY: Duration = Duration::from_secs(2);

/// The main TwinSight application.
pub struct TwinSight {
    /// Simulation engine owning the device state.
    simulator: Simulator,
    /// Currently shown section.
    section: Section,
    /// Rolling realtime line chart (temperature + humidity).
    realtime: ChartState,
    /// Static equipment efficiency bar chart.
    performance: ChartState,
    /// Stat tile values, refreshed every tick.
    stats: DashboardStats,
    /// Active toasts.
    notifications: NotificationsState,
    /// Settings state.
    settings: SettingsState,
}

impl TwinSight {
    /// Boot with default configuration (called by iced::application).
    pub fn boot() -> (Self, Task<Message>) {
        Self::with_config(&DashboardConfig::default())
    }

    /// Build the application from loaded configuration.
    pub fn with_config(config: &DashboardConfig) -> (Self, Task<Message>) {
        let mut simulator = Simulator::new();

        let realtime = ChartState::new(realtime_spec(
            &mut simulator,
            config.display.window_samples,
        ));
        let performance = ChartState::new(performance_spec());
        let stats = DashboardStats::sample(&mut simulator);

        let app = Self {
            simulator,
            section: Section::default(),
            realtime,
            performance,
            stats,
            notifications: NotificationsState::default(),
            settings: SettingsState::from_config(&config.display),
        };

        (app, Task::none())
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.handle_tick();
                Task::none()
            }

            Message::SelectSection(section) => {
                self.section = section;
                Task::none()
            }

            Message::DeviceAction(kind, action) => self.handle_action(kind, action),

            Message::InspectDevice(kind) => {
                let device = self.simulator.device(kind);
                let reading = format_reading(device.value, device.unit);
                let message = format!("{}: {}", kind.display_name(), reading);
                self.notify(message, Severity::Info)
            }

            Message::CalibrationFinished(kind) => self.notify(
                format!("{} calibrated successfully!", kind.display_name()),
                Severity::Success,
            ),

            Message::SetUpdateFrequency(frequency) => {
                self.settings.frequency = frequency;
                tracing::info!(frequency = frequency.label(), "Update frequency changed");
                self.notify(
                    format!("Update frequency changed to {}", frequency.label()),
                    Severity::Info,
                )
            }

            Message::SetAlertThreshold(percent) => {
                self.settings.alert_threshold = percent;
                Task::none()
            }

            Message::ToggleEmailNotifications(enabled) => {
                self.settings.email_notifications = enabled;
                let status = if enabled { "enabled" } else { "disabled" };
                self.notify(format!("Email notifications {}", status), Severity::Info)
            }

            Message::NotificationShown(id) => {
                self.notifications.mark_shown(id);
                delay(notifications::HOLD, Message::NotificationClosing(id))
            }

            Message::NotificationClosing(id) => {
                self.notifications.mark_closing(id);
                delay(notifications::EXIT, Message::NotificationExpired(id))
            }

            Message::NotificationExpired(id) => {
                self.notifications.remove(id);
                Task::none()
            }
        }
    }

    /// Create the tick and keyboard subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            tick_subscription(self.settings.frequency),
            keyboard_subscription(),
        ])
    }

    /// Render the active section with the toast overlay on top.
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.section {
            Section::Dashboard => dashboard_view(&self.stats, &self.simulator, &self.realtime),
            Section::Devices => devices_view(&self.simulator),
            Section::Analytics => analytics_view(&self.performance),
            Section::Settings => settings_view(&self.settings),
        };

        let screen = column![self.section_tabs(), content]
            .spacing(5)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.notifications.is_empty() {
            screen.into()
        } else {
            stack![screen, notifications_overlay(&self.notifications)].into()
        }
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Current state of one device (exposed for tests).
    pub fn device_value(&self, kind: DeviceKind) -> f64 {
        self.simulator.device(kind).value
    }

    /// Advance the simulation and roll the realtime window.
    fn handle_tick(&mut self) {
        self.simulator.tick();

        let temperature = self.simulator.device(DeviceKind::Temperature).value;
        let humidity = self.simulator.device(DeviceKind::Humidity).value;
        self.realtime.roll(&[temperature, humidity]);

        self.stats = DashboardStats::sample(&mut self.simulator);
    }

    /// Apply a discrete device action and surface its feedback.
    fn handle_action(&mut self, kind: DeviceKind, action: DeviceAction) -> Task<Message> {
        let Some(feedback) = self.simulator.apply(kind, action) else {
            return Task::none();
        };

        tracing::info!(device = %kind, action = action.label(), "Device action");

        let toast = self.notify(feedback.message, feedback.severity);

        if action == DeviceAction::Calibrate {
            Task::batch([
                toast,
                delay(CALIBRATION_DELAY, Message::CalibrationFinished(kind)),
            ])
        } else {
            toast
        }
    }

    /// Push a toast and schedule its slide-in.
    fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Task<Message> {
        let id = self.notifications.push(message, severity);
        delay(notifications::ENTER, Message::NotificationShown(id))
    }

    /// Render the section tab row.
    fn section_tabs(&self) -> Element<'_, Message> {
        let mut tabs = Row::new().spacing(5).padding(10);

        for &section in Section::ALL {
            let tab = button(text(section.label()).size(14))
                .on_press(Message::SelectSection(section));

            let tab = if section == self.section {
                tab.style(button::primary)
            } else {
                tab.style(button::text)
            };

            tabs = tabs.push(tab);
        }

        tabs.into()
    }
}

/// One-shot task resolving to `message` after `duration`.
fn delay(duration: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(duration), move |_| message.clone())
}

/// Rolling realtime spec: temperature and humidity with seeded history.
fn realtime_spec(simulator: &mut Simulator, samples: usize) -> ChartSpec {
    let labels = (0..samples).rev().map(|i| format!("-{}s", i)).collect();

    let temperature = Dataset::new(
        "Temperature (°C)",
        simulator.seed_window(DeviceKind::Temperature, samples),
    )
    .with_border(theme::INDIGO)
    .with_background(Paint::Solid(theme::INDIGO.with_alpha(0.1)))
    .filled();

    let humidity = Dataset::new(
        "Humidity (%)",
        simulator.seed_window(DeviceKind::Humidity, samples),
    )
    .with_border(theme::GREEN)
    .with_background(Paint::Solid(theme::GREEN.with_alpha(0.1)))
    .filled();

    ChartSpec::new(ChartKind::Line, labels, vec![temperature, humidity])
}

/// Static efficiency bar chart for the analytics section.
fn performance_spec() -> ChartSpec {
    let labels = ["Motor A", "Motor B", "Pump 1", "Pump 2", "Sensor Array"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let efficiency = Dataset::new("Efficiency (%)", vec![85.0, 92.0, 78.0, 88.0, 95.0])
        .with_background(Paint::PerIndex(theme::BAR_SERIES.to_vec()));

    ChartSpec::new(ChartKind::Bar, labels, vec![efficiency])
}
