//! Smart lock — inverted on/off semantics.
//!
//! `turn_on` maps to **unlock** and `turn_off` maps to **lock**, so a
//! freshly created (locked) lock reports [`PowerState::Off`]. The inversion
//! is part of the device's contract and must hold everywhere the lock is
//! driven through the shared capability.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceControl, PowerState};
use crate::time::{Timestamp, now};

/// A lock that starts locked and unlocks when turned on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartLock {
    locked: bool,
    last_changed: Timestamp,
}

impl Default for SmartLock {
    fn default() -> Self {
        Self {
            locked: true,
            last_changed: now(),
        }
    }
}

impl SmartLock {
    /// Whether the lock is currently engaged.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// When the lock last changed state.
    #[must_use]
    pub fn last_changed(&self) -> Timestamp {
        self.last_changed
    }

    fn set(&mut self, locked: bool) {
        if self.locked != locked {
            self.locked = locked;
            self.last_changed = now();
        }
    }
}

impl DeviceControl for SmartLock {
    fn power_state(&self) -> PowerState {
        (!self.locked).into()
    }

    fn turn_on(&mut self) {
        self.set(false);
    }

    fn turn_off(&mut self) {
        self.set(true);
    }
}
