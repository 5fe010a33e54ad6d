//! Durations and clocks.
//!
//! Clocks read the current time on every call, so two mock values built in
//! sequence carry distinct, non-decreasing timestamps.

use std::time::{Duration, Instant, SystemTime};

use crate::MockData;

impl MockData for Duration {
    fn mock_data() -> Self {
        Self::ZERO
    }
}

impl MockData for SystemTime {
    fn mock_data() -> Self {
        Self::now()
    }
}

impl MockData for Instant {
    fn mock_data() -> Self {
        Self::now()
    }
}
