use std::thread;
use std::time::{Duration, Instant};

/// Frame-rate governor: `tick` sleeps out whatever is left of the frame
/// budget.  An overrun frame is simply not slept for.
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    /// Time still left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.frame_start.elapsed())
    }

    /// Sleep until the frame budget is used up, start the next frame and
    /// return how long the finished frame took to compute.
    pub fn tick(&mut self) -> Duration {
        let worked = self.frame_start.elapsed();
        if worked < self.budget {
            thread::sleep(self.budget - worked);
        }
        self.frame_start = Instant::now();
        worked
    }
}
