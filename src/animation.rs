//! Animation driver with an explicit start/stop handle, plus frame statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame intervals kept for the rolling average
const STATS_WINDOW: usize = 60;

/// One frame's timing, produced by [`AnimationDriver::tick`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the driver was first started (never reset)
    pub elapsed_s: f32,
    /// Seconds since the previous tick; 0 on the first tick after a start
    pub delta_s: f32,
    /// Frames produced so far, starting at 0
    pub frame: u64,
}

/// Drives the per-frame time uniform.
///
/// A stopped driver yields no ticks, which lets the event loop stop
/// requesting redraws. Restarting resumes from the original start instant.
pub struct AnimationDriver {
    started_at: Option<Instant>,
    last_tick: Option<Instant>,
    last_elapsed: Duration,
    running: bool,
    frame: u64,
    stats: FrameStats,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    /// Create a stopped driver
    pub fn new() -> Self {
        Self {
            started_at: None,
            last_tick: None,
            last_elapsed: Duration::ZERO,
            running: false,
            frame: 0,
            stats: FrameStats::new(STATS_WINDOW),
        }
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.started_at.get_or_insert(now);
        self.last_tick = None;
        self.running = true;
        log::debug!("animation started");
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::debug!("animation stopped after {} frames", self.frame);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self) -> Option<FrameTick> {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`; `None` while stopped
    pub fn tick_at(&mut self, now: Instant) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let started_at = self.started_at?;

        let elapsed = now.saturating_duration_since(started_at).max(self.last_elapsed);
        let delta = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);

        if self.last_tick.is_some() {
            self.stats.record(delta.as_secs_f32());
        }
        self.last_tick = Some(now);
        self.last_elapsed = elapsed;

        let tick = FrameTick {
            elapsed_s: elapsed.as_secs_f32(),
            delta_s: delta.as_secs_f32(),
            frame: self.frame,
        };
        self.frame += 1;
        Some(tick)
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

/// Rolling frame-interval statistics
#[derive(Debug, Clone)]
pub struct FrameStats {
    intervals: VecDeque<f32>,
    capacity: usize,
}

impl FrameStats {
    pub fn new(capacity: usize) -> Self {
        Self {
            intervals: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, interval_s: f32) {
        if self.intervals.len() == self.capacity {
            self.intervals.pop_front();
        }
        self.intervals.push_back(interval_s);
    }

    /// Mean frame interval in milliseconds (0 before any interval)
    pub fn mean_frame_ms(&self) -> f32 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        self.intervals.iter().sum::<f32>() / self.intervals.len() as f32 * 1000.0
    }

    /// Frames per second over the window (0 before any interval)
    pub fn fps(&self) -> f32 {
        let mean_ms = self.mean_frame_ms();
        if mean_ms > 0.0 {
            1000.0 / mean_ms
        } else {
            0.0
        }
    }

    pub fn samples(&self) -> usize {
        self.intervals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_stopped_driver_yields_nothing() {
        let mut driver = AnimationDriver::new();
        assert!(!driver.is_running());
        assert_eq!(driver.tick(), None);

        let t0 = Instant::now();
        driver.start_at(t0);
        assert!(driver.tick_at(t0).is_some());

        driver.stop();
        assert_eq!(driver.tick_at(t0 + ms(16)), None);
    }

    #[test]
    fn test_elapsed_time_advances() {
        let mut driver = AnimationDriver::new();
        let t0 = Instant::now();
        driver.start_at(t0);

        let first = driver.tick_at(t0).unwrap();
        assert_eq!(first.elapsed_s, 0.0);
        assert_eq!(first.delta_s, 0.0);
        assert_eq!(first.frame, 0);

        let second = driver.tick_at(t0 + ms(500)).unwrap();
        assert!((second.elapsed_s - 0.5).abs() < 1e-6);
        assert!((second.delta_s - 0.5).abs() < 1e-6);
        assert_eq!(second.frame, 1);
    }

    #[test]
    fn test_restart_keeps_time_monotonic() {
        let mut driver = AnimationDriver::new();
        let t0 = Instant::now();
        driver.start_at(t0);
        driver.tick_at(t0 + ms(100)).unwrap();

        driver.stop();
        driver.start_at(t0 + ms(1000));

        let resumed = driver.tick_at(t0 + ms(1000)).unwrap();
        assert!((resumed.elapsed_s - 1.0).abs() < 1e-6, "time was reset");
        assert_eq!(resumed.delta_s, 0.0, "pause leaked into delta");

        // An earlier instant never moves time backwards
        let late = driver.tick_at(t0 + ms(900)).unwrap();
        assert!(late.elapsed_s >= resumed.elapsed_s);
    }

    #[test]
    fn test_stats_average_recent_intervals() {
        let mut driver = AnimationDriver::new();
        let t0 = Instant::now();
        driver.start_at(t0);
        for i in 0..=10 {
            driver.tick_at(t0 + ms(20 * i)).unwrap();
        }

        let stats = driver.stats();
        assert_eq!(stats.samples(), 10);
        assert!((stats.mean_frame_ms() - 20.0).abs() < 1e-3);
        assert!((stats.fps() - 50.0).abs() < 1e-2);
    }

    #[test]
    fn test_stats_window_is_bounded() {
        let mut stats = FrameStats::new(4);
        assert_eq!(stats.fps(), 0.0);

        for _ in 0..10 {
            stats.record(1.0);
        }
        for _ in 0..4 {
            stats.record(0.01);
        }
        assert_eq!(stats.samples(), 4);
        assert!((stats.mean_frame_ms() - 10.0).abs() < 1e-3);
    }
}
