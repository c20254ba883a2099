use std::time::Instant;

/// Frame clock: delta time between ticks plus total running time
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frames: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frames: 0,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frames += 1;
        delta
    }

    /// Seconds since the clock was created or last reset
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Number of ticks since the clock was created or last reset
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Reset clock to current time; the next tick measures from here
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
        self.frames = 0;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
