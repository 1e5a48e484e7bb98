//! # homelet-domain
//!
//! Pure domain model for the homelet device-control stack.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **control capability** (`turn_on`, `turn_off`, `toggle`) that
//!   every device variant implements
//! - Define the four **device variants** (light, thermostat, smart lock,
//!   garage door) and the closed [`Device`](devices::Device) enum over them
//! - Contain all invariant enforcement (e.g. the thermostat's temperature
//!   range) and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the binary, or IO crates.
//! Logging and configuration live in the layers above.

pub mod device;
pub mod devices;
pub mod error;
pub mod time;
