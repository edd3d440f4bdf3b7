//! Fixed-timestep frame clock.
//!
//! `draw_web()` fires at whatever rate the browser likes. Sprite animation in
//! the overlays is defined as "one pixel per frame", so wall-clock time is
//! converted into a whole number of 60 Hz frames counted from the first
//! timestamp, and each frame is stepped individually.

/// Frame rate of the handheld the overlays were designed for.
pub const FRAMES_PER_SEC: u32 = 60;

/// Longest stretch of wall-clock time replayed in one update. A tab that was
/// backgrounded for minutes resumes with at most this much catch-up.
const MAX_CATCH_UP_MS: u64 = 500;

/// Counts frames against a fixed origin: frame `n` is due `n / fps` seconds
/// after the first timestamp seen.
pub struct FrameClock {
    frames_per_sec: u32,
    origin: Option<f64>,
    /// Frames due so far, stepped or skipped.
    counted: u64,
    /// Frames actually handed to the caller.
    pub total_frames: u64,
}

impl FrameClock {
    pub fn new(frames_per_sec: u32) -> Self {
        Self {
            frames_per_sec: frames_per_sec.max(1),
            origin: None,
            counted: 0,
            total_frames: 0,
        }
    }

    /// Feed a `performance.now()` timestamp and get the number of frames to
    /// step. The first call only fixes the origin.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let Some(origin) = self.origin else {
            self.origin = Some(now_ms);
            return 0;
        };
        let due = self.frames_at(now_ms - origin);
        let steps = due.saturating_sub(self.counted).min(self.max_catch_up());
        self.counted = self.counted.max(due);
        self.total_frames += steps;
        steps as u32
    }

    fn frames_at(&self, elapsed_ms: f64) -> u64 {
        (elapsed_ms.max(0.0) * self.frames_per_sec as f64 / 1000.0) as u64
    }

    fn max_catch_up(&self) -> u64 {
        self.frames_per_sec as u64 * MAX_CATCH_UP_MS / 1000
    }
}
