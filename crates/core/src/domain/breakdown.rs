use std::fmt;

/// Elapsed seconds split into days, hours, minutes and seconds.
///
/// Days do not carry into months or years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ElapsedBreakdown {
    pub fn from_seconds(total: i64) -> Self {
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for ElapsedBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Render elapsed seconds as `"{d}d {h}h {m}m {s}s"`
pub fn format_elapsed(seconds: i64) -> String {
    ElapsedBreakdown::from_seconds(seconds).to_string()
}

/// Render an integer with `,` between groups of three digits
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
