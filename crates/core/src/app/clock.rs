use chrono::{DateTime, Duration};

use super::commands::{ClockCommand, TICK_INTERVAL_MS};
use super::queries::ProgressSnapshot;
use crate::domain::{Speed, YearProgress};
use crate::ports::Clock;

/// Real time plus an accumulated offset, played back at a speed multiplier.
///
/// Every mutation goes through one of the four transitions ([`tick`],
/// [`set_speed`], [`add_offset`], [`reset`]) or the [`apply`] entry point
/// that dispatches to them.
///
/// [`tick`]: SimulatedClock::tick
/// [`set_speed`]: SimulatedClock::set_speed
/// [`add_offset`]: SimulatedClock::add_offset
/// [`reset`]: SimulatedClock::reset
/// [`apply`]: SimulatedClock::apply
#[derive(Debug)]
pub struct SimulatedClock<C: Clock> {
    source: C,
    last_sample: DateTime<C::Tz>,
    offset_ms: i64,
    speed: Speed,
}

impl<C: Clock> SimulatedClock<C> {
    /// Sample the source once; offset 0, speed 1
    pub fn new(source: C) -> Self {
        let last_sample = source.now();
        Self {
            source,
            last_sample,
            offset_ms: 0,
            speed: Speed::NORMAL,
        }
    }

    pub fn apply(&mut self, command: ClockCommand) {
        match command {
            ClockCommand::Tick => self.tick(),
            ClockCommand::SetSpeed(speed) => self.set_speed(speed),
            ClockCommand::AddOffset { delta_ms } => self.add_offset(delta_ms),
            ClockCommand::Reset => self.reset(),
        }
    }

    pub fn tick(&mut self) {
        self.last_sample = self.source.now();
        let bonus = (i64::from(self.speed.get()) - 1) * TICK_INTERVAL_MS;
        self.offset_ms = self.offset_ms.saturating_add(bonus);
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn add_offset(&mut self, delta_ms: i64) {
        self.offset_ms = self.offset_ms.saturating_add(delta_ms);
    }

    /// Clears offset and speed; the last real-time sample is kept
    pub fn reset(&mut self) {
        self.offset_ms = 0;
        self.speed = Speed::NORMAL;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    pub fn last_sample(&self) -> &DateTime<C::Tz> {
        &self.last_sample
    }

    /// Last real-time sample shifted by the accumulated offset.
    ///
    /// Offsets past chrono's representable range leave the sample unchanged.
    pub fn adjusted_time(&self) -> DateTime<C::Tz> {
        Duration::try_milliseconds(self.offset_ms)
            .and_then(|offset| self.last_sample.clone().checked_add_signed(offset))
            .unwrap_or_else(|| self.last_sample.clone())
    }

    pub fn progress(&self) -> YearProgress {
        YearProgress::at(&self.adjusted_time())
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.progress(), self.speed, self.offset_ms)
    }
}
