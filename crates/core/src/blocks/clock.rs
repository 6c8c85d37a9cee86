//! Gravity clock - turns elapsed time into downward steps

/// Accumulates elapsed time and releases one step per interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl GravityClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time collected towards the next step
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    pub fn accumulate(&mut self, elapsed_ms: u32) {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
    }

    /// Take one step if a full interval has elapsed
    pub fn take_step(&mut self) -> bool {
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Replace the interval and restart the phase
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.accumulated_ms = 0;
    }

    /// Drop any partially elapsed interval
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}
