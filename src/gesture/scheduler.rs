//! Frame sampling gate
//!
//! At most one detection in flight, and no faster than the target rate.
//! Frames arriving too early or while busy are dropped, never queued.

/// Target classification rate
pub const TARGET_FPS: f64 = 60.0;

/// Minimum spacing between detections at the target rate
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / TARGET_FPS;

/// Tolerance for display refresh jitter around the interval
const FRAME_SLACK_MS: f64 = 1.0;

/// Why a frame request was or wasn't admitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameGate {
    /// Go ahead and run detection
    Ready,
    /// A detection is still in flight
    Busy,
    /// Too soon after the previous admitted frame
    TooSoon,
    /// Session stopped or detector not available
    Unavailable,
}

#[derive(Clone, Debug)]
pub struct FrameScheduler {
    min_interval_ms: f64,
    last_frame_at: Option<f64>,
    in_flight: bool,
    dropped_frames: u64,
}

impl FrameScheduler {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms: min_interval_ms.max(0.0),
            last_frame_at: None,
            in_flight: false,
            dropped_frames: 0,
        }
    }

    /// Admit a frame at `now`, marking a detection in flight on success
    pub fn try_begin(&mut self, now: f64) -> FrameGate {
        if self.in_flight {
            self.dropped_frames += 1;
            return FrameGate::Busy;
        }

        if let Some(last) = self.last_frame_at {
            if now - last < self.min_interval_ms - FRAME_SLACK_MS {
                self.dropped_frames += 1;
                return FrameGate::TooSoon;
            }
        }

        self.last_frame_at = Some(now);
        self.in_flight = true;
        FrameGate::Ready
    }

    /// Mark the in-flight detection complete. Returns false if none was pending.
    pub fn finish(&mut self) -> bool {
        std::mem::replace(&mut self.in_flight, false)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Frames skipped as busy or too soon since creation / reset
    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }

    pub fn reset(&mut self) {
        self.last_frame_at = None;
        self.in_flight = false;
        self.dropped_frames = 0;
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}
