//! UI tests using the iced_test Simulator.
//!
//! These tests verify view rendering and the update flows without a
//! display, a timer or any real hardware.

use iced_test::simulator;

use twinsight::app::TwinSight;
use twinsight::message::{Message, Section};
use twinsight::simulation::{DeviceAction, Simulator};
use twinsight::view::devices::devices_view;
use twinsight::view::settings::{SettingsState, settings_view};

use twinsight_common::{DashboardConfig, DeviceKind};

fn boot() -> TwinSight {
    let (app, _task) = TwinSight::with_config(&DashboardConfig::default());
    app
}

/// The devices section lists every card with its controls.
#[test]
fn test_devices_view_lists_controls() {
    let sim = Simulator::new();
    let mut ui = simulator(devices_view(&sim));

    assert!(ui.find("Temperature Sensor").is_ok());
    assert!(ui.find("Motor Controller").is_ok());
    assert!(ui.find("Water Pump").is_ok());
    assert!(ui.find("Emergency Stop").is_ok());
    assert!(ui.find("Calibrate").is_ok());
}

/// Clicking a device control produces the matching action message.
#[test]
fn test_emergency_stop_button_emits_action() {
    let sim = Simulator::new();
    let mut ui = simulator(devices_view(&sim));

    let _ = ui.click("Emergency Stop");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.iter().any(|m| matches!(
        m,
        Message::DeviceAction(DeviceKind::MotorSpeed, DeviceAction::EmergencyStop)
    )));
}

/// The settings section shows the cadence picker and preferences.
#[test]
fn test_settings_view_shows_controls() {
    let state = SettingsState::default();
    let mut ui = simulator(settings_view(&state));

    assert!(ui.find("Update Frequency:").is_ok());
    assert!(ui.find("How often simulated readings refresh").is_ok());
    assert!(ui.find("80%").is_ok());
    assert!(ui.find("Email notifications").is_ok());
}

/// The full dashboard renders its stat tiles.
#[test]
fn test_dashboard_shows_stat_tiles() {
    let app = boot();
    let mut ui = simulator(app.view());

    assert!(ui.find("Connected Devices").is_ok());
    assert!(ui.find("Data Points").is_ok());
    assert!(ui.find("Realtime Telemetry").is_ok());
}

/// Section tabs switch the rendered section.
#[test]
fn test_section_switching() {
    let mut app = boot();

    let _ = app.update(Message::SelectSection(Section::Analytics));
    let mut ui = simulator(app.view());
    assert!(ui.find("Equipment Efficiency").is_ok());
}

/// Emergency stop halts the motor until a start action resets it.
#[tokio::test]
async fn test_emergency_stop_flow() {
    let mut app = boot();
    assert_eq!(app.device_value(DeviceKind::MotorSpeed), 1450.0);

    let _ = app.update(Message::DeviceAction(
        DeviceKind::MotorSpeed,
        DeviceAction::EmergencyStop,
    ));
    assert_eq!(app.device_value(DeviceKind::MotorSpeed), 0.0);

    // Ticks leave the stopped motor untouched.
    for _ in 0..5 {
        let _ = app.update(Message::Tick);
        assert_eq!(app.device_value(DeviceKind::MotorSpeed), 0.0);
    }

    let _ = app.update(Message::DeviceAction(
        DeviceKind::MotorSpeed,
        DeviceAction::Start,
    ));
    assert_eq!(app.device_value(DeviceKind::MotorSpeed), 1450.0);

    // The stop/start cycle surfaced toasts for the operator.
    let mut ui = simulator(app.view());
    assert!(ui.find("EMERGENCY STOP ACTIVATED").is_ok());
    assert!(ui.find("Motor started").is_ok());
}

/// Changing the frequency is acknowledged with a toast.
#[tokio::test]
async fn test_frequency_change_notifies() {
    use twinsight::view::settings::UpdateFrequency;

    let mut app = boot();
    let _ = app.update(Message::SetUpdateFrequency(UpdateFrequency::FiveSeconds));

    let mut ui = simulator(app.view());
    assert!(ui.find("Update frequency changed to 5 sec").is_ok());
}
