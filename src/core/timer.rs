/// Self-contained timers - manage internal state, fed with frame deltas
/// Each timer accumulates delta time and decides when to fire

/// Fixed rate timer - fires at specific Hz
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    pub interval: f32,
    pub accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            true
        } else {
            false
        }
    }

    /// Fraction of the current interval already elapsed
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.interval
    }
}

/// Frames-per-second counter that reports once per interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    timer: FixedHz,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    /// Reports `hz` times per second
    pub fn new(hz: f32) -> Self {
        Self {
            timer: FixedHz::new(hz),
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame; returns the new average when the interval closes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if !self.timer.tick(delta) {
            return None;
        }

        self.fps = if self.elapsed > 0.0 {
            self.frames as f32 / self.elapsed
        } else {
            0.0
        };
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    /// Last reported value
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_hz_fires_at_rate() {
        let mut timer = FixedHz::new(60.0); // 60Hz = 0.0166s

        // Small delta - no fire
        assert!(!timer.tick(0.01));

        // Accumulate to threshold
        assert!(timer.tick(0.01)); // Total ~0.02s >= 0.0166s

        // Immediate next - no fire
        assert!(!timer.tick(0.001));
    }

    #[test]
    fn fixed_hz_alpha_tracks_progress() {
        let mut timer = FixedHz::new(2.0);
        timer.tick(0.25);
        assert!((timer.alpha() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fps_counter_reports_once_per_interval() {
        let mut fps = FpsCounter::new(1.0);

        assert_eq!(fps.tick(0.25), None);
        assert_eq!(fps.tick(0.25), None);
        assert_eq!(fps.tick(0.25), None);
        assert_eq!(fps.tick(0.25), Some(4.0));
        assert_eq!(fps.fps(), 4.0);

        // Counting restarts after a report
        assert_eq!(fps.tick(0.5), None);
        assert_eq!(fps.fps(), 4.0);
    }

    #[test]
    fn fps_counter_starts_at_zero() {
        assert_eq!(FpsCounter::default().fps(), 0.0);
    }
}
