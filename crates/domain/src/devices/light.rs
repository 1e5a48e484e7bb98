//! Light — plain on/off, no additional state.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceControl, PowerState};
use crate::time::{Timestamp, now};

/// A light that can be turned on and off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    on: bool,
    last_changed: Timestamp,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            on: false,
            last_changed: now(),
        }
    }
}

impl Light {
    /// Whether the light is currently on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// When the light last changed state.
    #[must_use]
    pub fn last_changed(&self) -> Timestamp {
        self.last_changed
    }

    fn set(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.last_changed = now();
        }
    }
}

impl DeviceControl for Light {
    fn power_state(&self) -> PowerState {
        self.on.into()
    }

    fn turn_on(&mut self) {
        self.set(true);
    }

    fn turn_off(&mut self) {
        self.set(false);
    }
}
