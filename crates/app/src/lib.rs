//! # homelet-app
//!
//! Application layer — use-cases over the domain's device variants.
//!
//! ## Responsibilities
//! - Own the heterogeneous device collection ([`ControlPanel`](services::control_panel::ControlPanel))
//! - Drive devices through the shared control capability
//! - Emit the per-operation status lines (the domain stays framework-free)
//!
//! ## Dependency rule
//! Depends on `homelet-domain` only. Never imports the binary crate;
//! the binary depends on *this* crate, not the reverse.

pub mod services;
