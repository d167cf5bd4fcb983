use crate::domain::{Speed, SECONDS_PER_DAY};

/// Real time between two ticks, in milliseconds
pub const TICK_INTERVAL_MS: i64 = 100;

/// "+ 1 Day" offset
pub const ONE_DAY_MS: i64 = SECONDS_PER_DAY * 1000;

/// "+ 1 Month" offset. A fixed 30 days, not calendar-month aware.
pub const ONE_MONTH_MS: i64 = 30 * ONE_DAY_MS;

/// Transitions of the simulated clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    /// One timer firing: resample real time and accrue the speed bonus
    Tick,

    /// Replace the speed multiplier, effective from the next tick
    SetSpeed(Speed),

    /// Shift the adjusted time by a signed number of milliseconds
    AddOffset { delta_ms: i64 },

    /// Drop the offset and return to real-time speed
    Reset,
}

impl ClockCommand {
    pub fn add_day() -> Self {
        Self::AddOffset { delta_ms: ONE_DAY_MS }
    }

    pub fn add_month() -> Self {
        Self::AddOffset { delta_ms: ONE_MONTH_MS }
    }
}
