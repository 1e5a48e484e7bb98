//! Garage door — opens when turned on, closes when turned off.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceControl, PowerState};
use crate::time::{Timestamp, now};

/// A garage door that starts closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageDoor {
    open: bool,
    last_changed: Timestamp,
}

impl Default for GarageDoor {
    fn default() -> Self {
        Self {
            open: false,
            last_changed: now(),
        }
    }
}

impl GarageDoor {
    /// Whether the door is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// When the door last changed state.
    #[must_use]
    pub fn last_changed(&self) -> Timestamp {
        self.last_changed
    }

    fn set(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            self.last_changed = now();
        }
    }
}

impl DeviceControl for GarageDoor {
    fn power_state(&self) -> PowerState {
        self.open.into()
    }

    fn turn_on(&mut self) {
        self.set(true);
    }

    fn turn_off(&mut self) {
        self.set(false);
    }
}
