//! Thermostat — on/off plus a bounded target temperature.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceControl, PowerState};
use crate::error::{HomeletError, ValidationError};
use crate::time::{Timestamp, now};

/// A thermostat holding a target temperature in degrees Celsius.
///
/// The temperature is independent of the power state: turning the thermostat
/// on or off never touches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thermostat {
    on: bool,
    temperature: i32,
    last_changed: Timestamp,
}

impl Thermostat {
    /// Lowest accepted target temperature.
    pub const MIN_TEMPERATURE: i32 = 10;
    /// Highest accepted target temperature.
    pub const MAX_TEMPERATURE: i32 = 30;
    /// Target temperature a new thermostat starts at.
    pub const DEFAULT_TEMPERATURE: i32 = 20;

    /// Whether the thermostat is currently on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Current target temperature.
    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// When the thermostat last changed state.
    #[must_use]
    pub fn last_changed(&self) -> Timestamp {
        self.last_changed
    }

    /// Set the target temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TemperatureOutOfRange`] when `value` falls
    /// outside `MIN_TEMPERATURE..=MAX_TEMPERATURE`; the stored temperature is
    /// left untouched.
    pub fn set_temperature(&mut self, value: i32) -> Result<(), HomeletError> {
        if !(Self::MIN_TEMPERATURE..=Self::MAX_TEMPERATURE).contains(&value) {
            return Err(ValidationError::TemperatureOutOfRange {
                value,
                min: Self::MIN_TEMPERATURE,
                max: Self::MAX_TEMPERATURE,
            }
            .into());
        }
        if self.temperature != value {
            self.temperature = value;
            self.last_changed = now();
        }
        Ok(())
    }

    fn set(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.last_changed = now();
        }
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self {
            on: false,
            temperature: Self::DEFAULT_TEMPERATURE,
            last_changed: now(),
        }
    }
}

impl DeviceControl for Thermostat {
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
