use std::time::Instant;

/// Frame clock - tracks elapsed time between ticks on a monotonic clock
#[derive(Debug)]
pub struct Clock {
    last_tick: Option<Instant>,
}

impl Clock {
    /// Create new clock; the first tick reports zero elapsed time
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Get seconds since last tick and advance clock
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map_or(0.0, |last| now.duration_since(last).as_secs_f64());
        self.last_tick = Some(now);
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
