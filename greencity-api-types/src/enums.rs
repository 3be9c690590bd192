//! Enumerations shared across the API surface

use serde::{Deserialize, Serialize};

/// Lifecycle of a habit fact translation with respect to the
/// fact-of-the-day rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactOfDayStatus {
    /// Eligible for selection but never shown
    Potential,
    /// Currently published as the fact of the day
    Current,
    /// Already rotated through
    Used,
}

impl Default for FactOfDayStatus {
    fn default() -> Self {
        Self::Potential
    }
}
