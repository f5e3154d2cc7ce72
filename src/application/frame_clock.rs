use std::time::{Duration, Instant};

/// Holds the main loop to a fixed frame rate by sleeping out the rest of each frame.
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            budget: Self::budget_for(fps),
            frame_start: Instant::now(),
        }
    }

    /// Time allotted to one frame at `fps` frames per second
    pub fn budget_for(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }

    pub const fn budget(&self) -> Duration {
        self.budget
    }

    /// Sleep until the current frame's budget is spent, then start the next frame.
    /// Returns how long the frame's work took.
    pub fn tick(&mut self) -> Duration {
        let worked = self.frame_start.elapsed();
        if let Some(rest) = self.budget.checked_sub(worked) {
            std::thread::sleep(rest);
        }
        self.frame_start = Instant::now();
        worked
    }
}
