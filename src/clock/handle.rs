// SPDX-License-Identifier: MPL-2.0
//! Clock hand identifiers.

use std::fmt;

/// One rotatable hand on the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handle {
    Hours,
    #[default]
    Minutes,
    Seconds,
}

impl Handle {
    /// Hands the user can select, drag and type into.
    pub const SELECTABLE: [Handle; 2] = [Handle::Hours, Handle::Minutes];

    /// Class selector naming this hand in a markup host.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Handle::Hours => ".handle_hours",
            Handle::Minutes => ".handle_minutes",
            Handle::Seconds => ".handle_seconds",
        }
    }

    /// Parses a hand selector.
    ///
    /// Only the hours selector is recognized; every other value, including
    /// the seconds selector and unknown strings, resolves to `Minutes`.
    #[must_use]
    pub fn from_selector(selector: &str) -> Handle {
        if selector == Handle::Hours.selector() {
            Handle::Hours
        } else {
            Handle::Minutes
        }
    }

    /// Identifier carried in change notifications.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Handle::Hours => "hours",
            Handle::Minutes => "minutes",
            Handle::Seconds => "seconds",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
