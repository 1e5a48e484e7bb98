//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeletError`] via `#[from]` — no `String` variants.

use crate::device::DeviceKind;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum HomeletError {
    /// A domain invariant was violated by caller input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup did not match any registered device.
    #[error("device not found")]
    NotFound(#[from] NotFoundError),
}

/// Invariant violations reported back to the caller.
///
/// These are handled failures: state is left untouched and the operation
/// otherwise completes normally.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Requested thermostat temperature falls outside the supported range.
    #[error("temperature {value} outside supported range {min}..={max}")]
    TemperatureOutOfRange {
        value: i32,
        min: i32,
        max: i32,
    },
}

/// No device of the requested kind is registered.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no {kind} device registered")]
pub struct NotFoundError {
    pub kind: DeviceKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_temperature_range_message() {
        let err = ValidationError::TemperatureOutOfRange {
            value: 35,
            min: 10,
            max: 30,
        };
        assert_eq!(
            err.to_string(),
            "temperature 35 outside supported range 10..=30"
        );
    }

    #[test]
    fn should_format_not_found_message() {
        let err = NotFoundError {
            kind: DeviceKind::Thermostat,
        };
        assert_eq!(err.to_string(), "no thermostat device registered");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: HomeletError = ValidationError::TemperatureOutOfRange {
            value: 5,
            min: 10,
            max: 30,
        }
        .into();
        assert!(matches!(err, HomeletError::Validation(_)));
    }

    #[test]
    fn should_convert_not_found_error_into_top_level_error() {
        let err: HomeletError = NotFoundError {
            kind: DeviceKind::Light,
        }
        .into();
        assert!(matches!(err, HomeletError::NotFound(_)));
    }
}
