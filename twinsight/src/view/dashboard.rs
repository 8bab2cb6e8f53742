//! Dashboard section: stat tiles, the realtime chart and the plant map.

use iced::widget::{Column, Row, button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::simulation::Simulator;
use crate::view::chart::ChartState;
use crate::view::formatting::format_reading;

/// Derived statistics shown on the stat tiles, refreshed every tick.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    /// Active simulated devices plus the always-on base count.
    pub connected_devices: usize,
    /// Synthesized data-point figure, already formatted ("1.2K").
    pub data_points: String,
}

impl DashboardStats {
    /// Sample fresh statistics from the simulator.
    pub fn sample(simulator: &mut Simulator) -> Self {
        Self {
            connected_devices: simulator.connected_devices(),
            data_points: format!("{:.1}K", simulator.data_points()),
        }
    }
}

/// Render the dashboard section.
pub fn dashboard_view<'a>(
    stats: &'a DashboardStats,
    simulator: &'a Simulator,
    realtime: &'a ChartState,
) -> Element<'a, Message> {
    let title = text("Dashboard").size(24);

    let tiles = row![
        stat_tile("Connected Devices", stats.connected_devices.to_string()),
        stat_tile("Data Points", stats.data_points.clone()),
        stat_tile("System Status", "Operational".to_string()),
    ]
    .spacing(15);

    let chart_title = text("Realtime Telemetry").size(18);
    let chart = realtime.view(260.0);

    let content = column![
        title,
        tiles,
        rule::horizontal(1),
        chart_title,
        chart,
        rule::horizontal(1),
        plant_map(simulator),
    ]
    .spacing(15)
    .padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One stat tile.
fn stat_tile<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    let content = column![text(value).size(28), text(label).size(12)]
        .spacing(4)
        .align_x(Alignment::Center);

    container(content)
        .padding(15)
        .width(Length::Fixed(180.0))
        .style(container::rounded_box)
        .into()
}

/// Clickable device nodes showing each current reading.
fn plant_map(simulator: &Simulator) -> Element<'_, Message> {
    let mut nodes = Row::new().spacing(10);

    for (kind, device) in simulator.devices() {
        let node = column![
            text(kind.display_name()).size(12),
            text(format_reading(device.value, device.unit)).size(16),
        ]
        .spacing(2)
        .align_x(Alignment::Center);

        nodes = nodes.push(
            button(node)
                .on_press(Message::InspectDevice(kind))
                .padding(10)
                .style(button::secondary),
        );
    }

    let caption = text("Click a node for its current reading")
        .size(11)
        .style(crate::view::theme::help_text);

    Column::new()
        .push(text("Plant Overview").size(18))
        .push(nodes)
        .push(caption)
        .spacing(8)
        .into()
}
