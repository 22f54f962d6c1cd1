//! Session tuning parameters

use serde::Deserialize;
use thiserror::Error;

use super::hold::{CONFIDENCE_THRESHOLD, HOLD_DURATION_MS};
use super::scheduler::FRAME_INTERVAL_MS;
use crate::classifier::SMOOTHING_WINDOW;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("confidence threshold must be in [0, 1), got {0}")]
    Threshold(f32),
    #[error("hold duration must be positive, got {0}ms")]
    HoldDuration(f64),
    #[error("smoothing window must hold at least one frame")]
    EmptyWindow,
    #[error("frame interval must be non-negative, got {0}ms")]
    FrameInterval(f64),
}

/// Knobs for one recognition session; missing JSON fields take the defaults
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub confidence_threshold: f32,
    pub hold_duration_ms: f64,
    pub smoothing_window: usize,
    pub frame_interval_ms: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            hold_duration_ms: HOLD_DURATION_MS,
            smoothing_window: SMOOTHING_WINDOW,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::Threshold(self.confidence_threshold));
        }
        if !(self.hold_duration_ms > 0.0) {
            return Err(ConfigError::HoldDuration(self.hold_duration_ms));
        }
        if self.smoothing_window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if !(self.frame_interval_ms >= 0.0) {
            return Err(ConfigError::FrameInterval(self.frame_interval_ms));
        }
        Ok(())
    }
}
