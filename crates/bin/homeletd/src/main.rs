//! # homeletd — homelet device panel runner
//!
//! Composition root that wires configuration, logging, and the control
//! panel, then runs the fixed device self-test.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialise the tracing subscriber
//! - Run the self-test sequence (any assertion failure aborts abnormally)
//! - Build the panel from the enabled devices and exercise it
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod selftest;

use anyhow::Context;
use homelet_app::services::control_panel::ControlPanel;
use homelet_domain::devices::{GarageDoor, Light, SmartLock, Thermostat};

use config::{Config, PanelConfig};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    let filter = tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    selftest::run();

    let mut panel = build_panel(&config.panel);
    panel.turn_all_on();

    // Invalid input is a handled, reported failure: log and keep going.
    for value in [25, 35] {
        if let Err(err) = panel.set_temperature(value) {
            tracing::warn!(%err, temperature = value, "temperature rejected");
        }
    }

    panel.turn_all_off();

    println!("all device checks passed");
    Ok(())
}

fn build_panel(config: &PanelConfig) -> ControlPanel {
    let mut panel = ControlPanel::new();
    if config.light {
        panel.register(Light::default());
    }
    if config.thermostat {
        panel.register(Thermostat::default());
    }
    if config.smart_lock {
        panel.register(SmartLock::default());
    }
    if config.garage_door {
        panel.register(GarageDoor::default());
    }
    panel
}
