//! The device-control capability — the uniform surface every variant exposes.

use serde::{Deserialize, Serialize};

/// Whether a device is currently exerting its "on" behaviour.
///
/// Variants with inverted semantics (the smart lock) map their own state onto
/// this scale: unlocked reports [`On`](Self::On), locked reports
/// [`Off`](Self::Off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// Whether the state is [`On`](Self::On).
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// The closed set of device kinds homelet knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Thermostat,
    SmartLock,
    GarageDoor,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Thermostat => f.write_str("thermostat"),
            Self::SmartLock => f.write_str("smart_lock"),
            Self::GarageDoor => f.write_str("garage_door"),
        }
    }
}

/// Control capability implemented by every device variant.
///
/// Operations take `&mut self`: devices are exclusively owned by their
/// caller and mutated synchronously, so no interior mutability is involved.
pub trait DeviceControl {
    /// Current position on the on/off scale.
    fn power_state(&self) -> PowerState;

    /// Drive the device to its "on" behaviour.
    fn turn_on(&mut self);

    /// Drive the device to its "off" behaviour.
    fn turn_off(&mut self);

    /// Flip to the opposite power state.
    fn toggle(&mut self) {
        if self.power_state().is_on() {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert_eq!(PowerState::default(), PowerState::Off);
    }

    #[test]
    fn should_report_is_on_only_for_on() {
        assert!(PowerState::On.is_on());
        assert!(!PowerState::Off.is_on());
    }

    #[test]
    fn should_convert_from_bool() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert_eq!(PowerState::from(false), PowerState::Off);
    }

    #[test]
    fn should_display_lowercase_power_state() {
        assert_eq!(PowerState::On.to_string(), "on");
        assert_eq!(PowerState::Off.to_string(), "off");
    }

    #[test]
    fn should_display_snake_case_kind() {
        assert_eq!(DeviceKind::Light.to_string(), "light");
        assert_eq!(DeviceKind::SmartLock.to_string(), "smart_lock");
        assert_eq!(DeviceKind::GarageDoor.to_string(), "garage_door");
    }

    #[test]
    fn should_serialize_power_state_lowercase() {
        let json = serde_json::to_string(&PowerState::On).unwrap();
        assert_eq!(json, "\"on\"");
    }

    #[test]
    fn should_roundtrip_kind_through_serde_json() {
        let kind = DeviceKind::GarageDoor;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"garage_door\"");
        let parsed: DeviceKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, kind);
    }
}
