//! Speed control to step delay mapping
//!
//! `delay = max(1, round(200 - speed * 1.8))` milliseconds, for speeds in
//! `1..=100`. Values outside that range are rejected, not clamped.

use crate::stepper::SortError;
use std::time::Duration;

pub const SPEED_MIN: u32 = 1;
pub const SPEED_MAX: u32 = 100;
pub const DEFAULT_SPEED: u32 = 60;

/// Map a speed control value to a delay in whole milliseconds
pub fn map_speed_to_delay(speed: u32) -> Result<u64, SortError> {
    if !(SPEED_MIN..=SPEED_MAX).contains(&speed) {
        return Err(SortError::SpeedOutOfRange {
            speed: i64::from(speed),
            min: SPEED_MIN,
            max: SPEED_MAX,
        });
    }
    Ok(delay_for(speed))
}

fn delay_for(speed: u32) -> u64 {
    // 200 - 1.8s in tenths of a millisecond, rounded half up
    let tenths = 2000 - 18 * u64::from(speed);
    ((tenths + 5) / 10).max(1)
}

/// A validated speed control value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u32);

impl Speed {
    pub fn new(speed: u32) -> Result<Self, SortError> {
        map_speed_to_delay(speed)?;
        Ok(Speed(speed))
    }

    /// Clamp an arbitrary adjustment into range (used by UI nudges)
    pub fn saturating(speed: i64) -> Self {
        Speed(speed.clamp(i64::from(SPEED_MIN), i64::from(SPEED_MAX)) as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn delay_ms(self) -> u64 {
        delay_for(self.0)
    }

    pub fn delay(self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }

    pub fn faster(self, by: u32) -> Self {
        Speed::saturating(i64::from(self.0) + i64::from(by))
    }

    pub fn slower(self, by: u32) -> Self {
        Speed::saturating(i64::from(self.0) - i64::from(by))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(DEFAULT_SPEED)
    }
}
