//! Control panel — the owned, heterogeneous collection of devices.

use homelet_domain::device::{DeviceControl, DeviceKind};
use homelet_domain::devices::Device;
use homelet_domain::error::{HomeletError, NotFoundError};

/// Application service owning every registered device.
///
/// Devices are held by value in registration order. The panel is the only
/// place the per-operation status lines are emitted.
#[derive(Default)]
pub struct ControlPanel {
    devices: Vec<Device>,
}

impl ControlPanel {
    /// Create an empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a device and add it to the panel.
    #[tracing::instrument(skip_all)]
    pub fn register(&mut self, device: impl Into<Device>) {
        let device = device.into();
        tracing::info!(device = %device.kind(), "registered device");
        self.devices.push(device);
    }

    /// All registered devices, in registration order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether no device is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// First registered device of the given kind, if any.
    pub fn device_mut(&mut self, kind: DeviceKind) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.kind() == kind)
    }

    /// Turn every registered device on, one status line per device.
    #[tracing::instrument(skip(self))]
    pub fn turn_all_on(&mut self) {
        for device in &mut self.devices {
            device.turn_on();
            tracing::info!(device = %device.kind(), state = %device.power_state(), "turned on");
        }
    }

    /// Turn every registered device off, one status line per device.
    #[tracing::instrument(skip(self))]
    pub fn turn_all_off(&mut self) {
        for device in &mut self.devices {
            device.turn_off();
            tracing::info!(device = %device.kind(), state = %device.power_state(), "turned off");
        }
    }

    /// Route a target temperature to the registered thermostat.
    ///
    /// # Errors
    ///
    /// Returns [`HomeletError::NotFound`] when no thermostat is registered,
    /// or the domain's validation error for an out-of-range value (the
    /// stored temperature is left untouched).
    #[tracing::instrument(skip(self))]
    pub fn set_temperature(&mut self, value: i32) -> Result<(), HomeletError> {
        let Some(Device::Thermostat(thermostat)) = self.device_mut(DeviceKind::Thermostat) else {
            return Err(NotFoundError {
                kind: DeviceKind::Thermostat,
            }
            .into());
        };
        thermostat.set_temperature(value)?;
        tracing::info!(temperature = value, "thermostat temperature set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homelet_domain::device::PowerState;
    use homelet_domain::devices::{GarageDoor, Light, SmartLock, Thermostat};

    fn full_panel() -> ControlPanel {
        let mut panel = ControlPanel::new();
        panel.register(Light::default());
        panel.register(Thermostat::default());
        panel.register(SmartLock::default());
        panel.register(GarageDoor::default());
        panel
    }

    #[test]
    fn should_start_empty() {
        let panel = ControlPanel::new();
        assert!(panel.is_empty());
        assert_eq!(panel.len(), 0);
    }

    #[test]
    fn should_register_devices_in_order() {
        let panel = full_panel();
        assert_eq!(panel.len(), 4);
        assert_eq!(panel.devices()[0].kind(), DeviceKind::Light);
        assert_eq!(panel.devices()[3].kind(), DeviceKind::GarageDoor);
    }

    #[test]
    fn should_find_device_by_kind() {
        let mut panel = full_panel();
        assert!(panel.device_mut(DeviceKind::SmartLock).is_some());
    }

    #[test]
    fn should_not_find_unregistered_kind() {
        let mut panel = ControlPanel::new();
        panel.register(Light::default());
        assert!(panel.device_mut(DeviceKind::GarageDoor).is_none());
    }

    #[test]
    fn should_turn_every_device_on() {
        let mut panel = full_panel();
        panel.turn_all_on();
        for device in panel.devices() {
            assert_eq!(device.power_state(), PowerState::On, "{}", device.kind());
        }
    }

    #[test]
    fn should_unlock_the_lock_when_turning_all_on() {
        let mut panel = full_panel();
        panel.turn_all_on();
        let Some(Device::SmartLock(lock)) = panel.device_mut(DeviceKind::SmartLock) else {
            panic!("lock missing");
        };
        assert!(!lock.is_locked());
    }

    #[test]
    fn should_return_every_device_to_off_after_round_trip() {
        let mut panel = full_panel();
        panel.turn_all_on();
        panel.turn_all_off();
        for device in panel.devices() {
            assert_eq!(device.power_state(), PowerState::Off, "{}", device.kind());
        }
    }

    #[test]
    fn should_set_temperature_on_registered_thermostat() {
        let mut panel = full_panel();
        panel.set_temperature(25).unwrap();
        let Some(Device::Thermostat(thermostat)) = panel.device_mut(DeviceKind::Thermostat)
        else {
            panic!("thermostat missing");
        };
        assert_eq!(thermostat.temperature(), 25);
    }

    #[test]
    fn should_keep_previous_temperature_when_rejecting() {
        let mut panel = full_panel();
        panel.set_temperature(25).unwrap();
        let result = panel.set_temperature(35);
        assert!(matches!(result, Err(HomeletError::Validation(_))));
        let Some(Device::Thermostat(thermostat)) = panel.device_mut(DeviceKind::Thermostat)
        else {
            panic!("thermostat missing");
        };
        assert_eq!(thermostat.temperature(), 25);
    }

    #[test]
    fn should_return_not_found_without_thermostat() {
        let mut panel = ControlPanel::new();
        panel.register(Light::default());
        let result = panel.set_temperature(25);
        assert!(matches!(result, Err(HomeletError::NotFound(_))));
    }
}
