//! Fixed self-test sequence run at every start.
//!
//! The assertions are the verification mechanism: any violation aborts the
//! process abnormally instead of being handled.

use homelet_domain::device::{DeviceControl, PowerState};
use homelet_domain::devices::{Device, GarageDoor, Light, SmartLock, Thermostat};

/// Exercise every device variant against its documented behaviour.
pub fn run() {
    light_checks();
    thermostat_checks();
    smart_lock_checks();
    garage_door_checks();
    heterogeneous_walk();
    tracing::info!("self-test passed");
}

fn light_checks() {
    let mut light = Light::default();
    assert!(!light.is_on());

    light.turn_on();
    assert!(light.is_on());

    light.turn_off();
    assert!(!light.is_on());
}

fn thermostat_checks() {
    let mut thermostat = Thermostat::default();
    assert_eq!(thermostat.temperature(), 20);

    assert!(thermostat.set_temperature(25).is_ok());
    assert_eq!(thermostat.temperature(), 25);

    // Out-of-range values are rejected without touching state.
    assert!(thermostat.set_temperature(35).is_err());
    assert_eq!(thermostat.temperature(), 25);
    assert!(thermostat.set_temperature(5).is_err());
    assert_eq!(thermostat.temperature(), 25);

    // Power transitions never touch the temperature.
    thermostat.turn_on();
    assert_eq!(thermostat.temperature(), 25);
    thermostat.turn_off();
    assert_eq!(thermostat.temperature(), 25);
}

fn smart_lock_checks() {
    let mut lock = SmartLock::default();
    assert!(lock.is_locked());

    lock.turn_on();
    assert!(!lock.is_locked());

    lock.turn_off();
    assert!(lock.is_locked());
}

fn garage_door_checks() {
    let mut door = GarageDoor::default();
    assert!(!door.is_open());

    door.turn_on();
    assert!(door.is_open());

    door.turn_off();
    assert!(!door.is_open());
}

fn heterogeneous_walk() {
    let mut devices: Vec<Device> = vec![
        Light::default().into(),
        Thermostat::default().into(),
        SmartLock::default().into(),
        GarageDoor::default().into(),
    ];

    for device in &mut devices {
        device.turn_on();
        assert_eq!(device.power_state(), PowerState::On);
        device.turn_off();
        assert_eq!(device.power_state(), PowerState::Off);
    }
}
