//! Simulation engine for the demo plant.
//!
//! Generates bounded random-walk telemetry for the demo devices and
//! applies the discrete operator actions. There is no hardware behind
//! any of this; the engine exists so the dashboard has live data.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use twinsight_common::{Device, DeviceKind};

use crate::view::notifications::Severity;

/// Floor the motor speed never drops below while running.
pub const MOTOR_RUN_FLOOR: f64 = 500.0;

/// Nominal motor operating speed restored by a start action.
pub const MOTOR_NOMINAL: f64 = 1450.0;

/// Nominal pump flow restored by a start action.
pub const PUMP_NOMINAL: f64 = 12.3;

/// Step removed from the motor speed by a reduce-speed action.
const REDUCE_STEP: f64 = 200.0;

/// Always-on devices assumed connected beyond the simulated ones.
const BASE_DEVICE_COUNT: usize = 8;

/// Discrete operator actions available on the device cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceAction {
    Calibrate,
    ViewHistory,
    ReduceSpeed,
    EmergencyStop,
    Start,
    Stop,
}

impl DeviceAction {
    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceAction::Calibrate => "Calibrate",
            DeviceAction::ViewHistory => "View History",
            DeviceAction::ReduceSpeed => "Reduce Speed",
            DeviceAction::EmergencyStop => "Emergency Stop",
            DeviceAction::Start => "Start",
            DeviceAction::Stop => "Stop",
        }
    }
}

/// Operator feedback produced by a discrete action.
#[derive(Debug, Clone)]
pub struct ActionFeedback {
    pub message: String,
    pub severity: Severity,
}

impl ActionFeedback {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// The simulation engine owning the demo devices.
pub struct Simulator {
    /// Random number generator.
    rng: SmallRng,
    /// Device state, keyed in display order.
    devices: BTreeMap<DeviceKind, Device>,
    /// Simulation tick counter.
    tick: u64,
}

impl Simulator {
    /// Create a simulator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Create a simulator with a fixed RNG (tests).
    pub fn with_rng(rng: SmallRng) -> Self {
        let devices = DeviceKind::ALL
            .iter()
            .map(|&kind| (kind, Device::seed(kind)))
            .collect();

        Self {
            rng,
            devices,
            tick: 0,
        }
    }

    /// Current state of one device.
    pub fn device(&self, kind: DeviceKind) -> &Device {
        &self.devices[&kind]
    }

    /// All devices, in display order.
    pub fn devices(&self) -> impl Iterator<Item = (DeviceKind, &Device)> {
        self.devices.iter().map(|(&kind, device)| (kind, device))
    }

    /// Number of ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Advance the simulation by one tick.
    ///
    /// Every device takes a uniform perturbation scaled by its jitter
    /// magnitude and is clamped back into bounds. Stopped devices hold
    /// at zero until restarted; the running motor clamps to its 500 RPM
    /// floor rather than its configured minimum.
    pub fn tick(&mut self) {
        self.tick += 1;

        for (&kind, device) in self.devices.iter_mut() {
            if kind.is_stoppable() && !device.is_running() {
                continue;
            }

            let delta = self.rng.random_range(-0.5..0.5) * kind.jitter();
            let floor = match kind {
                DeviceKind::MotorSpeed => MOTOR_RUN_FLOOR,
                _ => device.min,
            };
            device.nudge(delta, floor);
        }
    }

    /// Apply a discrete operator action to a device.
    ///
    /// Returns feedback for the notification layer, or `None` when the
    /// action does not apply to that device.
    pub fn apply(&mut self, kind: DeviceKind, action: DeviceAction) -> Option<ActionFeedback> {
        let name = kind.display_name();

        let feedback = match (action, kind) {
            (DeviceAction::Calibrate, _) => {
                ActionFeedback::info(format!("Calibrating {}...", name))
            }
            (DeviceAction::ViewHistory, _) => {
                ActionFeedback::info(format!("Opening history for {}", name))
            }
            (DeviceAction::ReduceSpeed, DeviceKind::MotorSpeed) => {
                let motor = self.devices.get_mut(&kind)?;
                motor.value = (motor.value - REDUCE_STEP).max(MOTOR_RUN_FLOOR);
                ActionFeedback::warning("Motor speed reduced")
            }
            (DeviceAction::EmergencyStop, DeviceKind::MotorSpeed) => {
                self.devices.get_mut(&kind)?.set(0.0);
                ActionFeedback::error("EMERGENCY STOP ACTIVATED")
            }
            (DeviceAction::Start, DeviceKind::MotorSpeed) => {
                self.devices.get_mut(&kind)?.set(MOTOR_NOMINAL);
                ActionFeedback::success("Motor started")
            }
            (DeviceAction::Start, DeviceKind::FlowRate) => {
                self.devices.get_mut(&kind)?.set(PUMP_NOMINAL);
                ActionFeedback::success("Pump started")
            }
            (DeviceAction::Stop, DeviceKind::FlowRate) => {
                self.devices.get_mut(&kind)?.set(0.0);
                ActionFeedback::info("Pump stopped")
            }
            _ => {
                tracing::warn!(device = %kind, action = action.label(), "Action does not apply");
                return None;
            }
        };

        Some(feedback)
    }

    /// Count of devices currently reporting (value above zero), plus the
    /// fixed base of always-on devices shown on the dashboard.
    pub fn connected_devices(&self) -> usize {
        let active = self.devices.values().filter(|d| d.is_running()).count();
        active + BASE_DEVICE_COUNT
    }

    /// Synthesized "data points" figure for the dashboard stat tile, in
    /// thousands. There is no real backing store; the demo shows a
    /// plausible number in [1.0, 1.5).
    pub fn data_points(&mut self) -> f64 {
        self.rng.random_range(1.0..1.5)
    }

    /// Seed a rolling chart window with plausible history for a device.
    pub fn seed_window(&mut self, kind: DeviceKind, samples: usize) -> Vec<f64> {
        let (base, spread) = match kind {
            DeviceKind::Temperature => (20.0, 10.0),
            DeviceKind::Humidity => (50.0, 20.0),
            _ => {
                let device = self.device(kind);
                (device.min, device.max - device.min)
            }
        };

        (0..samples)
            .map(|_| base + self.rng.random_range(0.0..1.0) * spread)
            .collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
