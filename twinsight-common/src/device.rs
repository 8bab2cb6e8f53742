use std::fmt;

/// The simulated devices of the demo plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeviceKind {
    Temperature,
    Humidity,
    MotorSpeed,
    FlowRate,
}

impl DeviceKind {
    /// All devices, in display order.
    pub const ALL: &'static [DeviceKind] = &[
        DeviceKind::Temperature,
        DeviceKind::Humidity,
        DeviceKind::MotorSpeed,
        DeviceKind::FlowRate,
    ];

    /// Get the string identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Temperature => "temperature",
            DeviceKind::Humidity => "humidity",
            DeviceKind::MotorSpeed => "motor",
            DeviceKind::FlowRate => "pump",
        }
    }

    /// Human-readable name used on cards and in notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceKind::Temperature => "Temperature Sensor",
            DeviceKind::Humidity => "Humidity Sensor",
            DeviceKind::MotorSpeed => "Motor Controller",
            DeviceKind::FlowRate => "Water Pump",
        }
    }

    /// Measurement unit for this device's readings.
    pub fn unit(&self) -> &'static str {
        match self {
            DeviceKind::Temperature => "°C",
            DeviceKind::Humidity => "%",
            DeviceKind::MotorSpeed => "RPM",
            DeviceKind::FlowRate => "L/min",
        }
    }

    /// Magnitude of the per-tick random perturbation.
    pub fn jitter(&self) -> f64 {
        match self {
            DeviceKind::Temperature => 0.5,
            DeviceKind::Humidity => 2.0,
            DeviceKind::MotorSpeed => 50.0,
            DeviceKind::FlowRate => 0.5,
        }
    }

    /// Whether the device can be driven to a stopped (zero) state.
    ///
    /// Stopped devices are exempt from the random walk until restarted.
    pub fn is_stoppable(&self) -> bool {
        matches!(self, DeviceKind::MotorSpeed | DeviceKind::FlowRate)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current state of one simulated device.
///
/// Invariant: `min <= value <= max` after any mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Latest reading.
    pub value: f64,
    /// Lower bound of the configured operating range.
    pub min: f64,
    /// Upper bound of the configured operating range.
    pub max: f64,
    /// Measurement unit, from the device kind.
    pub unit: &'static str,
}

impl Device {
    /// Seed state for a device at startup.
    pub fn seed(kind: DeviceKind) -> Self {
        let (value, min, max) = match kind {
            DeviceKind::Temperature => (23.5, 15.0, 35.0),
            DeviceKind::Humidity => (65.0, 30.0, 90.0),
            DeviceKind::MotorSpeed => (1450.0, 0.0, 3000.0),
            DeviceKind::FlowRate => (12.3, 0.0, 25.0),
        };
        Self {
            value,
            min,
            max,
            unit: kind.unit(),
        }
    }

    /// Set the value, clamped to the configured bounds.
    pub fn set(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Apply a perturbation, clamping to `floor` and the configured max.
    ///
    /// The floor may sit above the configured min (the motor holds at its
    /// running floor of 500 RPM rather than its configured min of 0).
    pub fn nudge(&mut self, delta: f64, floor: f64) {
        self.value = (self.value + delta).clamp(floor, self.max);
    }

    /// Whether the device currently reads above zero.
    pub fn is_running(&self) -> bool {
        self.value > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_values() {
        let motor = Device::seed(DeviceKind::MotorSpeed);
        assert_eq!(motor.value, 1450.0);
        assert_eq!(motor.min, 0.0);
        assert_eq!(motor.max, 3000.0);
        assert_eq!(motor.unit, "RPM");

        let temp = Device::seed(DeviceKind::Temperature);
        assert_eq!(temp.value, 23.5);
        assert_eq!(temp.unit, "°C");
    }

    #[test]
    fn test_set_clamps_to_bounds() {
        let mut temp = Device::seed(DeviceKind::Temperature);

        temp.set(100.0);
        assert_eq!(temp.value, 35.0);

        temp.set(-20.0);
        assert_eq!(temp.value, 15.0);

        temp.set(22.0);
        assert_eq!(temp.value, 22.0);
    }

    #[test]
    fn test_nudge_honors_floor_above_min() {
        let mut motor = Device::seed(DeviceKind::MotorSpeed);

        motor.nudge(-2000.0, 500.0);
        assert_eq!(motor.value, 500.0);

        motor.nudge(5000.0, 500.0);
        assert_eq!(motor.value, 3000.0);
    }

    #[test]
    fn test_stoppable_kinds() {
        assert!(DeviceKind::MotorSpeed.is_stoppable());
        assert!(DeviceKind::FlowRate.is_stoppable());
        assert!(!DeviceKind::Temperature.is_stoppable());
        assert!(!DeviceKind::Humidity.is_stoppable());
    }
}
