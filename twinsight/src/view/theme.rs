//! Color palette for the TwinSight views.
//!
//! Semantic colors live here so views and the canvas renderer agree on
//! one palette instead of scattering `Color::from_rgb` values.

use iced::Color;

use twinsight_common::chart::Rgba;

use crate::view::notifications::Severity;

/// Indigo — primary accent and first chart series.
pub const INDIGO: Rgba = Rgba::opaque(0.400, 0.494, 0.918);

/// Green — success states and second chart series.
pub const GREEN: Rgba = Rgba::opaque(0.063, 0.725, 0.506);

/// Amber — warnings.
pub const AMBER: Rgba = Rgba::opaque(0.961, 0.620, 0.043);

/// Red — errors and emergency states.
pub const RED: Rgba = Rgba::opaque(0.937, 0.267, 0.267);

/// Violet — fifth chart series.
pub const VIOLET: Rgba = Rgba::opaque(0.545, 0.361, 0.965);

/// Light gray grid lines.
pub const GRID: Rgba = Rgba::opaque(0.878, 0.878, 0.878);

/// Strong chart label color (bar value annotations).
pub const LABEL_STRONG: Rgba = Rgba::opaque(0.85, 0.85, 0.88);

/// Muted chart label color (category labels).
pub const LABEL_MUTED: Rgba = Rgba::opaque(0.62, 0.62, 0.66);

/// Per-bar palette used by the performance chart.
pub const BAR_SERIES: [Rgba; 5] = [
    Rgba::new(0.400, 0.494, 0.918, 0.8),
    Rgba::new(0.063, 0.725, 0.506, 0.8),
    Rgba::new(0.961, 0.620, 0.043, 0.8),
    Rgba::new(0.937, 0.267, 0.267, 0.8),
    Rgba::new(0.545, 0.361, 0.965, 0.8),
];

/// Convert a palette color into an iced color.
pub fn color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Accent color for a toast severity.
pub fn severity_color(severity: Severity) -> Color {
    color(match severity {
        Severity::Info => INDIGO,
        Severity::Success => GREEN,
        Severity::Warning => AMBER,
        Severity::Error => RED,
    })
}

/// Muted help-text color used across the sections.
pub fn help_text(_theme: &iced::Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(Color::from_rgb(0.5, 0.5, 0.5)),
    }
}
