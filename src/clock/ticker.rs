// SPDX-License-Identifier: MPL-2.0
//! Decorative seconds hand animation.
//!
//! The ticker only records whether it runs; the one-second timer itself is
//! an iced subscription that exists while the ticker is running, so stopping
//! the ticker disposes of the timer.

use std::time::Duration;

/// Interval between two seconds-hand steps.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Start/stop control for the seconds hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondsTicker {
    running: bool,
}

impl SecondsTicker {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
