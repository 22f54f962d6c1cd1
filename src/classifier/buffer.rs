//! Rolling letter window for temporal smoothing
//!
//! Keeps the last N raw single-frame letters and reports the majority
//! with an agreement ratio as confidence.

use std::collections::VecDeque;

use super::letters::Letter;
use super::prediction::Prediction;
use crate::hand::Handedness;

/// Default number of frames in the smoothing window
pub const SMOOTHING_WINDOW: usize = 5;

/// FIFO of recent raw letters (repeats count, it is not a set)
#[derive(Clone, Debug)]
pub struct PredictionBuffer {
    history: VecDeque<Letter>,
    capacity: usize,
}

impl PredictionBuffer {
    /// `capacity` is clamped to at least 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a raw letter, evicting the oldest past capacity
    pub fn push(&mut self, letter: Letter) {
        self.history.push_back(letter);
        if self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    /// Most frequent letter in the window.
    ///
    /// Ties go to the letter seen most recently.
    pub fn majority(&self) -> Option<Letter> {
        let mut counts: Vec<(Letter, usize)> = Vec::with_capacity(self.history.len());

        // Newest first, so first-seen order is recency order
        for &letter in self.history.iter().rev() {
            match counts.iter_mut().find(|(l, _)| *l == letter) {
                Some((_, count)) => *count += 1,
                None => counts.push((letter, 1)),
            }
        }

        let mut best: Option<(Letter, usize)> = None;
        for (letter, count) in counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((letter, count));
            }
        }
        best.map(|(letter, _)| letter)
    }

    /// Share of the window equal to `letter`; 0 when empty
    pub fn confidence(&self, letter: Letter) -> f32 {
        if self.history.is_empty() {
            return 0.0;
        }
        let count = self.history.iter().filter(|&&l| l == letter).count();
        count as f32 / self.history.len() as f32
    }

    /// Push this frame's raw letter and report the smoothed result
    pub fn smooth(&mut self, letter: Letter, handedness: Handedness, timestamp: f64) -> Prediction {
        self.push(letter);
        let majority = self.majority();
        Prediction {
            letter: majority,
            confidence: majority.map_or(0.0, |l| self.confidence(l)),
            handedness,
            timestamp,
        }
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PredictionBuffer {
    fn default() -> Self {
        Self::new(SMOOTHING_WINDOW)
    }
}
