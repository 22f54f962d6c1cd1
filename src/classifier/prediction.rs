//! Smoothed per-frame prediction

use super::letters::Letter;
use crate::hand::Handedness;

/// Output of the smoothing stage for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    /// Majority letter over the smoothing window
    pub letter: Option<Letter>,
    /// Share of the window agreeing with `letter` (0-1)
    pub confidence: f32,
    pub handedness: Handedness,
    /// Frame time in milliseconds
    pub timestamp: f64,
}

impl Prediction {
    /// Letter, if confidence clears `threshold` (strictly greater)
    pub fn confident_letter(&self, threshold: f32) -> Option<Letter> {
        self.letter.filter(|_| self.confidence > threshold)
    }
}
