//! Devices section: one card per device with its operator controls.

use iced::widget::{Column, Row, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use twinsight_common::{Device, DeviceKind};

use crate::message::Message;
use crate::simulation::{DeviceAction, Simulator};
use crate::view::formatting::format_reading;
use crate::view::theme;

/// Controls offered on each device card.
fn actions_for(kind: DeviceKind) -> &'static [DeviceAction] {
    match kind {
        DeviceKind::Temperature | DeviceKind::Humidity => {
            &[DeviceAction::Calibrate, DeviceAction::ViewHistory]
        }
        DeviceKind::MotorSpeed => &[
            DeviceAction::ReduceSpeed,
            DeviceAction::EmergencyStop,
            DeviceAction::Start,
        ],
        DeviceKind::FlowRate => &[DeviceAction::Start, DeviceAction::Stop],
    }
}

/// Render the devices section.
pub fn devices_view(simulator: &Simulator) -> Element<'_, Message> {
    let title = text("Devices").size(24);

    let mut cards = Column::new().spacing(10);
    for (kind, device) in simulator.devices() {
        cards = cards.push(device_card(kind, device));
    }

    let content = column![title, cards].spacing(15).padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render a single device card.
fn device_card(kind: DeviceKind, device: &Device) -> Element<'_, Message> {
    let name = text(kind.display_name()).size(16);
    let reading = text(format_reading(device.value, device.unit)).size(26);

    let range = text(format!(
        "Range {} to {}",
        format_reading(device.min, device.unit),
        format_reading(device.max, device.unit)
    ))
    .size(11)
    .style(theme::help_text);

    let status = if device.is_running() {
        text("running").size(11)
    } else {
        text("stopped")
            .size(11)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(theme::color(theme::RED)),
            })
    };

    let mut controls = Row::new().spacing(8);
    for &action in actions_for(kind) {
        controls = controls.push(action_button(kind, action));
    }

    let header = row![name, status].spacing(10).align_y(Alignment::Center);

    let card = column![header, reading, range, controls].spacing(6);

    container(card)
        .padding(15)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Action button with severity-appropriate styling.
fn action_button(kind: DeviceKind, action: DeviceAction) -> Element<'static, Message> {
    let label = text(action.label()).size(13);
    let styled = match action {
        DeviceAction::EmergencyStop => button(label).style(button::danger),
        DeviceAction::Start => button(label).style(button::success),
        _ => button(label).style(button::secondary),
    };

    styled
        .on_press(Message::DeviceAction(kind, action))
        .into()
}
