use crate::domain::{group_thousands, ElapsedBreakdown, Speed, YearProgress};

/// Read-only view of the simulated clock for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub progress: YearProgress,

    /// Speed multiplier in effect
    pub speed: Speed,

    /// Accumulated simulated offset
    pub offset_ms: i64,
}

impl ProgressSnapshot {
    pub fn new(progress: YearProgress, speed: Speed, offset_ms: i64) -> Self {
        Self {
            progress,
            speed,
            offset_ms,
        }
    }

    pub fn year(&self) -> i32 {
        self.progress.year
    }

    /// `"12.345678%"`
    pub fn percent_label(&self) -> String {
        format!("{}%", self.progress.percent())
    }

    /// `"of 2024"`
    pub fn year_label(&self) -> String {
        format!("of {}", self.progress.year)
    }

    pub fn breakdown(&self) -> ElapsedBreakdown {
        self.progress.breakdown()
    }

    /// `"86,400 / 31,536,000 seconds"`
    pub fn totals_label(&self) -> String {
        format!(
            "{} / {} seconds",
            group_thousands(self.progress.elapsed_seconds),
            group_thousands(self.progress.total_seconds)
        )
    }

    /// `"Time Speed: 10x"`
    pub fn speed_label(&self) -> String {
        format!("Time Speed: {}", self.speed)
    }
}
