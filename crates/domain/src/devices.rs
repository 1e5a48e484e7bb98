//! Device variants — light, thermostat, smart lock, garage door.
//!
//! Each variant owns its private state and implements
//! [`DeviceControl`](crate::device::DeviceControl); the [`Device`] enum
//! closes the set so heterogeneous collections stay fully typed.

mod garage_door;
mod light;
mod smart_lock;
mod thermostat;

pub use garage_door::GarageDoor;
pub use light::Light;
pub use smart_lock::SmartLock;
pub use thermostat::Thermostat;

use serde::{Deserialize, Serialize};

use crate::device::{DeviceControl, DeviceKind, PowerState};

/// Wrapper enum over the concrete device variants.
///
/// The set of device kinds is closed and known, so collections hold this
/// enum rather than trait objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Device {
    Light(Light),
    Thermostat(Thermostat),
    SmartLock(SmartLock),
    GarageDoor(GarageDoor),
}

impl Device {
    /// Which kind of device this is.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Thermostat(_) => DeviceKind::Thermostat,
            Self::SmartLock(_) => DeviceKind::SmartLock,
            Self::GarageDoor(_) => DeviceKind::GarageDoor,
        }
    }
}

impl DeviceControl for Device {
    fn power_state(&self) -> PowerState {
        match self {
            Self::Light(d) => d.power_state(),
            Self::Thermostat(d) => d.power_state(),
            Self::SmartLock(d) => d.power_state(),
            Self::GarageDoor(d) => d.power_state(),
        }
    }

    fn turn_on(&mut self) {
        match self {
            Self::Light(d) => d.turn_on(),
            Self::Thermostat(d) => d.turn_on(),
            Self::SmartLock(d) => d.turn_on(),
            Self::GarageDoor(d) => d.turn_on(),
        }
    }

    fn turn_off(&mut self) {
        match self {
            Self::Light(d) => d.turn_off(),
            Self::Thermostat(d) => d.turn_off(),
            Self::SmartLock(d) => d.turn_off(),
            Self::GarageDoor(d) => d.turn_off(),
        }
    }
}

impl From<Light> for Device {
    fn from(light: Light) -> Self {
        Self::Light(light)
    }
}

impl From<Thermostat> for Device {
    fn from(thermostat: Thermostat) -> Self {
        Self::Thermostat(thermostat)
    }
}

impl From<SmartLock> for Device {
    fn from(lock: SmartLock) -> Self {
        Self::SmartLock(lock)
    }
}

impl From<GarageDoor> for Device {
    fn from(door: GarageDoor) -> Self {
        Self::GarageDoor(door)
    }
}
