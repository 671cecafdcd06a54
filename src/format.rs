// SPDX-License-Identifier: MPL-2.0
//! Text formatting helpers shared by the clock and the form.

/// Formats a number with at least two digits: `5` → `"05"`.
#[must_use]
pub fn format_digit(value: u32) -> String {
    format!("{value:02}")
}
