//! Hold-to-commit timer
//!
//! A letter must stay the confident smoothed prediction for the full hold
//! duration before it is committed. Any change restarts the timer; any
//! frame without a confident letter drops back to idle immediately.

use log::debug;

use crate::classifier::{Letter, Prediction};

/// Smoothed confidence must be strictly above this to count
pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

/// How long a letter must be held before it is committed
pub const HOLD_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoldState {
    Idle,
    Holding { letter: Letter, started_at: f64 },
}

/// What a single frame did to the hold
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoldEvent {
    /// Nothing held before or after this frame
    Idle,
    /// A new hold began (fresh, or replacing a different letter)
    Started(Letter),
    /// Same letter, timer running
    Holding { letter: Letter, progress: f32 },
    /// Hold abandoned without committing
    Released(Letter),
    /// Hold completed; the letter should be appended to the output
    Committed(Letter),
}

impl HoldEvent {
    pub fn committed(&self) -> Option<Letter> {
        match self {
            HoldEvent::Committed(letter) => Some(*letter),
            _ => None,
        }
    }
}

/// Hold state machine for one tracked hand
#[derive(Clone, Debug)]
pub struct HoldTracker {
    state: HoldState,
    /// Progress as of the last update (0-1)
    progress: f32,
    threshold: f32,
    hold_duration_ms: f64,
}

impl HoldTracker {
    pub fn new(threshold: f32, hold_duration_ms: f64) -> Self {
        Self {
            state: HoldState::Idle,
            progress: 0.0,
            threshold,
            hold_duration_ms,
        }
    }

    /// Advance with this frame's smoothed prediction (None = no hand / no match)
    pub fn update(&mut self, prediction: Option<&Prediction>, now: f64) -> HoldEvent {
        let incoming = prediction.and_then(|p| p.confident_letter(self.threshold));

        match (self.state, incoming) {
            (HoldState::Idle, None) => HoldEvent::Idle,

            (HoldState::Holding { letter, .. }, None) => {
                debug!("Hold on {} released at {:.0}%", letter, self.progress * 100.0);
                self.reset();
                HoldEvent::Released(letter)
            }

            (HoldState::Idle, Some(letter)) => self.start(letter, now),

            (HoldState::Holding { letter, started_at }, Some(next)) if next == letter => {
                let elapsed = (now - started_at).max(0.0);
                if elapsed >= self.hold_duration_ms {
                    debug!("Committing {} after {:.0}ms", letter, elapsed);
                    self.reset();
                    HoldEvent::Committed(letter)
                } else {
                    self.progress = (elapsed / self.hold_duration_ms) as f32;
                    HoldEvent::Holding {
                        letter,
                        progress: self.progress,
                    }
                }
            }

            (HoldState::Holding { letter, .. }, Some(next)) => {
                debug!("Hold switched {} -> {}", letter, next);
                self.start(next, now)
            }
        }
    }

    fn start(&mut self, letter: Letter, now: f64) -> HoldEvent {
        self.state = HoldState::Holding {
            letter,
            started_at: now,
        };
        self.progress = 0.0;
        HoldEvent::Started(letter)
    }

    /// Drop any hold without committing
    pub fn reset(&mut self) {
        self.state = HoldState::Idle;
        self.progress = 0.0;
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn active_letter(&self) -> Option<Letter> {
        match self.state {
            HoldState::Holding { letter, .. } => Some(letter),
            HoldState::Idle => None,
        }
    }

    pub fn started_at(&self) -> Option<f64> {
        match self.state {
            HoldState::Holding { started_at, .. } => Some(started_at),
            HoldState::Idle => None,
        }
    }

    /// Progress as of the last update, in [0, 1)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress at an arbitrary time, capped at 1
    pub fn progress_at(&self, now: f64) -> f32 {
        match self.state {
            HoldState::Holding { started_at, .. } => {
                ((now - started_at).max(0.0) / self.hold_duration_ms).min(1.0) as f32
            }
            HoldState::Idle => 0.0,
        }
    }
}

impl Default for HoldTracker {
    fn default() -> Self {
        Self::new(CONFIDENCE_THRESHOLD, HOLD_DURATION_MS)
    }
}
