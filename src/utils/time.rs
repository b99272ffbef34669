use std::time::{Duration, Instant};

/// Frame clock for the render loop.
///
/// Tracks the time since the window opened, the time since the previous
/// frame, and a one-second frames-per-second window.
pub struct FrameTimer {
    start_time: Instant,
    last_tick: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,

    window_frames: u32,
    window_time: Duration,
    /// Frame rate measured over the last full one-second window
    pub current_fps: f32,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    const FPS_WINDOW: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            start_time: now,
            last_tick: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            window_frames: 0,
            window_time: Duration::ZERO,
            current_fps: 0.0,
        }
    }

    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`. Returns the new frame rate whenever a
    /// one-second window completes.
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.delta = now.saturating_duration_since(self.last_tick);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_tick = now;
        self.frame_count += 1;

        self.window_frames += 1;
        self.window_time += self.delta;
        if self.window_time >= Self::FPS_WINDOW {
            self.current_fps = self.window_frames as f32 / self.window_time.as_secs_f32();
            self.window_frames = 0;
            self.window_time = Duration::ZERO;
            return Some(self.current_fps);
        }

        None
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_tracks_delta_and_elapsed() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::starting_at(t0);

        assert!(timer.tick_at(t0 + Duration::from_millis(100)).is_none());
        assert_eq!(timer.delta, Duration::from_millis(100));

        timer.tick_at(t0 + Duration::from_millis(250));
        assert_eq!(timer.delta, Duration::from_millis(150));
        assert_eq!(timer.elapsed, Duration::from_millis(250));
        assert_eq!(timer.frame_count, 2);
        assert!((timer.dt_seconds() - 0.15).abs() < 1e-6);
        assert!((timer.elapsed_seconds() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn fps_is_reported_once_per_second() {
        let t0 = Instant::now();
        let mut timer = FrameTimer::starting_at(t0);

        let mut reports = Vec::new();
        for i in 1..=40 {
            if let Some(fps) = timer.tick_at(t0 + Duration::from_millis(50 * i)) {
                reports.push(fps);
            }
        }

        // 20 frames per second, reported at 1s and 2s
        assert_eq!(reports.len(), 2);
        for fps in reports {
            assert!((fps - 20.0).abs() < 1e-3);
        }
    }
}
