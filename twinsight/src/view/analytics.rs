//! Analytics section: equipment efficiency overview.

use iced::widget::{column, container, rule, scrollable, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::view::chart::ChartState;
use crate::view::theme;

/// Render the analytics section.
pub fn analytics_view(performance: &ChartState) -> Element<'_, Message> {
    let title = text("Analytics").size(24);
    let chart_title = text("Equipment Efficiency").size(18);

    let caption = text("Efficiency per unit, scaled against the best performer")
        .size(11)
        .style(theme::help_text);

    let content = column![
        title,
        rule::horizontal(1),
        chart_title,
        performance.view(300.0),
        caption,
    ]
    .spacing(15)
    .padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
