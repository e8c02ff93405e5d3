/// Throttled timer - minimum interval between fires
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f64,
    time_since_last: f64,
    ticks: u32,
}

impl Throttled {
    /// Create throttled timer with minimum interval in seconds
    pub fn new(min_interval: f64) -> Self {
        Self {
            min_interval,
            time_since_last: 0.0,
            ticks: 0,
        }
    }

    /// Accumulate a frame; returns the average rate (ticks per second)
    /// over the finished interval once enough time has passed
    pub fn try_tick(&mut self, delta: f64) -> Option<f64> {
        self.time_since_last += delta;
        self.ticks += 1;

        if self.time_since_last >= self.min_interval {
            let rate = self.ticks as f64 / self.time_since_last;
            self.time_since_last = 0.0;
            self.ticks = 0;
            Some(rate)
        } else {
            None
        }
    }
}
