//! Recognition session - one camera/hand pipeline
//!
//! Owns the smoothing window, hold timer, frame gate and output sink.
//! Create one at camera start and drop (or stop) it at camera end; run one
//! session per tracked hand for multi-hand setups.

use log::{debug, warn};

use super::config::{ConfigError, SessionConfig};
use super::hold::{HoldEvent, HoldTracker};
use super::output::TextSink;
use super::scheduler::{FrameGate, FrameScheduler};
use crate::classifier::{classify_hand, Letter, Prediction, PredictionBuffer};
use crate::hand::HandObservation;

/// Result of running the pipeline on one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Smoothed prediction; None when no hand or no rule matched
    pub prediction: Option<Prediction>,
    pub hold: HoldEvent,
}

impl FrameReport {
    pub fn committed(&self) -> Option<Letter> {
        self.hold.committed()
    }
}

pub struct SignSession<S: TextSink> {
    config: SessionConfig,
    smoother: PredictionBuffer,
    hold: HoldTracker,
    scheduler: FrameScheduler,
    sink: S,
    active: bool,
    detector_available: bool,
    last_prediction: Option<Prediction>,
}

impl<S: TextSink> SignSession<S> {
    /// Start a session writing committed letters into `sink`
    pub fn new(config: SessionConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;

        debug!(
            "SignSession created: threshold={} hold={}ms window={} interval={:.1}ms",
            config.confidence_threshold,
            config.hold_duration_ms,
            config.smoothing_window,
            config.frame_interval_ms
        );

        Ok(Self {
            smoother: PredictionBuffer::new(config.smoothing_window),
            hold: HoldTracker::new(config.confidence_threshold, config.hold_duration_ms),
            scheduler: FrameScheduler::new(config.frame_interval_ms),
            sink,
            active: true,
            detector_available: true,
            last_prediction: None,
            config,
        })
    }

    pub fn with_defaults(sink: S) -> Self {
        Self {
            smoother: PredictionBuffer::default(),
            hold: HoldTracker::default(),
            scheduler: FrameScheduler::default(),
            sink,
            active: true,
            detector_available: true,
            last_prediction: None,
            config: SessionConfig::default(),
        }
    }

    /// Resume after `stop`, from a clean state
    pub fn start(&mut self) {
        self.discard_in_flight_state();
        self.active = true;
    }

    /// Tear down: any partial hold is discarded, never committed
    pub fn stop(&mut self) {
        if let Some(letter) = self.hold.active_letter() {
            debug!("Session stopped mid-hold on {}; discarding", letter);
        }
        self.discard_in_flight_state();
        self.active = false;
    }

    fn discard_in_flight_state(&mut self) {
        self.smoother.reset();
        self.hold.reset();
        self.scheduler.reset();
        self.last_prediction = None;
    }

    /// Detector failed to initialize (or came back). While unavailable no
    /// frame is admitted.
    pub fn set_detector_available(&mut self, available: bool) {
        if !available && self.detector_available {
            warn!("Hand detector unavailable; classification paused");
            self.discard_in_flight_state();
        }
        self.detector_available = available;
    }

    /// Ask to run detection for a new video frame
    pub fn begin_frame(&mut self, now: f64) -> FrameGate {
        if !self.active || !self.detector_available {
            return FrameGate::Unavailable;
        }
        self.scheduler.try_begin(now)
    }

    /// Give up on the admitted frame without a result (detection threw).
    ///
    /// Counts as a frame with no hand: any hold is released and the
    /// smoother cleared, and the next `begin_frame` is admitted again.
    pub fn abort_frame(&mut self, now: f64) -> Option<FrameReport> {
        if !self.scheduler.finish() {
            return None;
        }
        debug!("Detection failed; treating frame as empty");
        self.process_frame(&[], now)
    }

    /// Deliver the detector's result for the frame admitted by `begin_frame`.
    ///
    /// Results with no matching admitted frame (e.g. arriving after `stop`)
    /// are ignored.
    pub fn submit_frame(&mut self, hands: &[HandObservation], now: f64) -> Option<FrameReport> {
        if !self.scheduler.finish() {
            debug!("Dropping detection result with no frame in flight");
            return None;
        }
        self.process_frame(hands, now)
    }

    /// Run classification, smoothing and the hold timer on one frame.
    ///
    /// Only the first hand is tracked. Bypasses the frame gate.
    pub fn process_frame(&mut self, hands: &[HandObservation], now: f64) -> Option<FrameReport> {
        if !self.active || !self.detector_available {
            return None;
        }

        let primary = hands.first();
        let raw = primary.and_then(|hand| classify_hand(&hand.landmarks));

        let prediction = match (primary, raw) {
            (Some(hand), Some(letter)) => Some(self.smoother.smooth(letter, hand.handedness, now)),
            _ => {
                if let Some(hand) = primary.filter(|h| !h.is_complete()) {
                    warn!("Skipping hand with {} landmarks", hand.landmarks.len());
                }
                self.smoother.reset();
                None
            }
        };

        let hold = self.hold.update(prediction.as_ref(), now);
        if let (HoldEvent::Started(letter), Some(hand)) = (hold, primary) {
            debug!(
                "Holding {} ({:?} hand, detector confidence {:.2})",
                letter, hand.handedness, hand.confidence
            );
        }
        if let Some(letter) = hold.committed() {
            self.sink.append_letter(letter.as_char());
            self.smoother.reset();
        }

        self.last_prediction = prediction;
        Some(FrameReport { prediction, hold })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_detector_available(&self) -> bool {
        self.detector_available
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn hold(&self) -> &HoldTracker {
        &self.hold
    }

    pub fn smoother(&self) -> &PredictionBuffer {
        &self.smoother
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn last_prediction(&self) -> Option<&Prediction> {
        self.last_prediction.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
