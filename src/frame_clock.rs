use circular_queue::CircularQueue;
use std::time::{Duration, Instant};

const FPS_SAMPLES: usize = 100;

/// Fixed-step redraw scheduling. Fires at most once per interval and never
/// tries to catch up on frames missed during a stall.
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
    recent_ticks: CircularQueue<Instant>,
}

impl FrameClock {
    pub fn new(frame_rate: u32, now: Instant) -> Self {
        let interval = Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)));

        Self {
            interval,
            next_tick: now,
            recent_ticks: CircularQueue::with_capacity(FPS_SAMPLES),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    /// Whether a frame is due at `now`. When it is, the next one is scheduled.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }

        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        self.recent_ticks.push(now);
        true
    }

    /// Average rate over the last ticks, once there are at least two.
    pub fn fps(&self) -> Option<f32> {
        let newest = self.recent_ticks.iter().next()?;
        let oldest = self.recent_ticks.iter().last()?;
        let elapsed = newest.duration_since(*oldest).as_secs_f32();

        if self.recent_ticks.len() < 2 || elapsed <= 0.0 {
            None
        } else {
            Some((self.recent_ticks.len() - 1) as f32 / elapsed)
        }
    }
}
