//! Gesture module - turns per-frame predictions into committed text
//!
//! Re-exports only. All logic in submodules.

mod config;
mod hold;
mod output;
mod scheduler;
mod session;

pub use config::{ConfigError, SessionConfig};
pub use hold::{HoldEvent, HoldState, HoldTracker, CONFIDENCE_THRESHOLD, HOLD_DURATION_MS};
pub use output::TextSink;
pub use scheduler::{FrameGate, FrameScheduler, FRAME_INTERVAL_MS, TARGET_FPS};
pub use session::{FrameReport, SignSession};
