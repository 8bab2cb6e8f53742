//! Shared formatting utilities for the TwinSight views.

/// Format a device reading with one decimal and its unit.
///
/// Percent and degree units attach directly ("65.0%", "23.5°C"); other
/// units get a separating space ("1450.0 RPM").
pub fn format_reading(value: f64, unit: &str) -> String {
    match unit {
        "%" | "°C" => format!("{:.1}{}", value, unit),
        _ => format!("{:.1} {}", value, unit),
    }
}

/// Format a numeric value for display with appropriate scale suffix.
///
/// - Values >= 1M display as "X.XM"
/// - Values >= 1K display as "X.XK"
/// - Integer values display without decimal places
/// - Other values display with 2 decimal places
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reading() {
        assert_eq!(format_reading(23.46, "°C"), "23.5°C");
        assert_eq!(format_reading(65.0, "%"), "65.0%");
        assert_eq!(format_reading(1450.0, "RPM"), "1450.0 RPM");
        assert_eq!(format_reading(12.3, "L/min"), "12.3 L/min");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(95.0), "95");
        assert_eq!(format_value(3.14159), "3.14");
        assert_eq!(format_value(1500.0), "1.5K");
        assert_eq!(format_value(2500000.0), "2.5M");
    }
}
