use std::fmt;

/// Playback speed multiplier, always within `Speed::MIN..=Speed::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u32);

impl Speed {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1000;

    /// Real-time playback
    pub const NORMAL: Speed = Speed(Self::MIN);

    /// Constrain any value into range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Position on the slider track, 0.0 at `MIN` and 1.0 at `MAX`
    pub fn ratio(self) -> f64 {
        f64::from(self.0 - Self::MIN) / f64::from(Self::MAX - Self::MIN)
    }

    /// Step by `delta`, clamping at either end
    pub fn nudged(self, delta: i64) -> Self {
        Self::clamped(i64::from(self.0) + delta)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_clamped() {
        assert_eq!(Speed::clamped(-5).get(), 1);
        assert_eq!(Speed::clamped(50).get(), 50);
        assert_eq!(Speed::clamped(5000).get(), 1000);
    }

    #[test]
    fn test_speed_nudged_and_ratio() {
        let speed = Speed::default();
        assert_eq!(speed.nudged(-1), Speed::NORMAL);
        assert_eq!(speed.nudged(9).get(), 10);
        assert_eq!(Speed::NORMAL.ratio(), 0.0);
        assert_eq!(Speed::clamped(1000).ratio(), 1.0);
        assert_eq!(Speed::clamped(10).to_string(), "10x");
    }
}
