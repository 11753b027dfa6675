//! Frame timing, delta time, and frame pacing.
//!
//! The game loop owns a [`Time`] value and calls [`tick`](Time::tick) once
//! per frame. Systems receive the delta as a plain `f32` — frame pacing is a
//! loop-level concern, never a Registry concern.

use std::thread;
use std::time::{Duration, Instant};

/// Frame clock. Owned by the game loop and ticked once per frame.
#[derive(Clone, Copy)]
pub struct Time {
    /// When the loop started.
    startup: Instant,
    /// When the current frame started.
    frame_start: Instant,
    /// Duration of the previous frame.
    delta: Duration,
    /// Total time since startup.
    elapsed: Duration,
    /// Frame counter.
    frame_count: u64,
    /// Frame budget when the frame rate is capped.
    target_frame_time: Option<Duration>,
}

impl Time {
    /// An uncapped clock — frames run as fast as the loop does.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            startup: now,
            frame_start: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            target_frame_time: None,
        }
    }

    /// A clock that caps the frame rate: [`tick`](Time::tick) sleeps away
    /// whatever remains of the frame budget before measuring the delta.
    pub fn with_target_fps(fps: u32) -> Self {
        let mut time = Self::new();
        if fps > 0 {
            time.target_frame_time = Some(Duration::from_secs_f64(1.0 / fps as f64));
        }
        time
    }

    /// Call once at the top of each frame. Sleeps to honor the frame cap,
    /// then rolls the clock forward and measures the previous frame's delta.
    pub fn tick(&mut self) {
        if let Some(budget) = self.target_frame_time {
            let spent = self.frame_start.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
        let now = Instant::now();
        self.delta = now - self.frame_start;
        self.frame_start = now;
        self.elapsed = now - self.startup;
        self.frame_count += 1;
    }

    /// Duration of the previous frame.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Delta time in seconds (f32), the most common way to use it.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total elapsed time since the loop started.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total elapsed time in seconds (f32).
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Number of frames completed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Estimated FPS based on the last frame's delta.
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
