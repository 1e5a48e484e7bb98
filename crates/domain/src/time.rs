//! Timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp recorded when a device last changed state.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_run_backwards() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
