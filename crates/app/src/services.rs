//! Application services — use-case implementations.
//!
//! Services own domain objects outright (the concurrency model is
//! single-threaded exclusive ownership), so methods are plain synchronous
//! calls with no locking.

pub mod control_panel;
