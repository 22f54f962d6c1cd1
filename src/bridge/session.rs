//! JS-owned recognition session
//!
//! JavaScript drives the camera and the MediaPipe HandLandmarker. Per
//! animation frame it calls `beginFrame(now)`; when that returns true it
//! runs detection and hands the result back through `submitLandmarks` or
//! `submitJson`. If detection rejects, it must call `abortFrame(now)`
//! instead, or every later frame stays busy. Committed letters go to the
//! optional `onCommit` callback and accumulate in `text()`.

use log::warn;
use wasm_bindgen::prelude::*;

use super::error::BridgeError;
use crate::gesture::{FrameGate, FrameReport, SessionConfig, SignSession, TextSink};
use crate::hand::{parse_flat_hands, HandObservation, Handedness, MIN_LANDMARKS};

/// Output sink that mirrors commits into a JS callback
#[derive(Default)]
struct JsTextSink {
    text: String,
    on_commit: Option<js_sys::Function>,
}

impl TextSink for JsTextSink {
    fn append_letter(&mut self, letter: char) {
        self.text.push(letter);
        if let Some(callback) = &self.on_commit {
            let arg = JsValue::from_str(&letter.to_string());
            if let Err(err) = callback.call1(&JsValue::NULL, &arg) {
                warn!("onCommit callback threw: {:?}", err);
            }
        }
    }
}

fn committed_letter(report: Option<FrameReport>) -> Option<String> {
    report
        .and_then(|r| r.committed())
        .map(|letter| letter.as_str().to_string())
}

#[wasm_bindgen(js_name = SignSession)]
pub struct WebSignSession {
    inner: SignSession<JsTextSink>,
}

#[wasm_bindgen(js_class = SignSession)]
impl WebSignSession {
    /// `config_json` may set any of confidenceThreshold, holdDurationMs,
    /// smoothingWindow, frameIntervalMs
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebSignSession, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => {
                serde_json::from_str::<SessionConfig>(json).map_err(BridgeError::from)?
            }
            _ => SessionConfig::default(),
        };

        let inner = SignSession::new(config, JsTextSink::default()).map_err(BridgeError::from)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = setOnCommit)]
    pub fn set_on_commit(&mut self, callback: js_sys::Function) {
        self.inner.sink_mut().on_commit = Some(callback);
    }

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn stop(&mut self) {
        self.inner.stop();
    }

    /// Call with false if the landmark model failed to load
    #[wasm_bindgen(js_name = setDetectorReady)]
    pub fn set_detector_ready(&mut self, ready: bool) {
        self.inner.set_detector_available(ready);
    }

    /// True if detection should run for this animation frame
    #[wasm_bindgen(js_name = beginFrame)]
    pub fn begin_frame(&mut self, now: f64) -> bool {
        self.inner.begin_frame(now) == FrameGate::Ready
    }

    /// Release the admitted frame after a failed detection. The frame
    /// counts as empty, so any hold is released.
    #[wasm_bindgen(js_name = abortFrame)]
    pub fn abort_frame(&mut self, now: f64) {
        self.inner.abort_frame(now);
    }

    /// Flat Float32Array of `num_hands × 21 × 3` values (x, y, z).
    /// `handedness`/`confidence` describe the first hand. Returns the
    /// committed letter, if this frame completed a hold.
    #[wasm_bindgen(js_name = submitLandmarks)]
    pub fn submit_landmarks(
        &mut self,
        flat_data: &[f32],
        num_hands: usize,
        handedness: &str,
        confidence: f32,
        now: f64,
    ) -> Option<String> {
        let hands = match parse_flat_hands(flat_data, 3, num_hands) {
            Some(hands) => hands,
            None => {
                warn!(
                    "Expected {} landmark values, got {}; treating frame as empty",
                    num_hands * MIN_LANDMARKS * 3,
                    flat_data.len()
                );
                Vec::new()
            }
        };

        let label = Handedness::from_label(handedness);
        let observations: Vec<HandObservation> = hands
            .into_iter()
            .enumerate()
            .map(|(i, landmarks)| {
                if i == 0 {
                    HandObservation::new(landmarks, label, confidence)
                } else {
                    HandObservation::new(landmarks, Handedness::Unknown, 0.0)
                }
            })
            .collect();

        committed_letter(self.inner.submit_frame(&observations, now))
    }

    /// MediaPipe-shaped JSON: `[{landmarks: [{x, y, z?}], handedness, confidence}]`
    #[wasm_bindgen(js_name = submitJson)]
    pub fn submit_json(&mut self, json: &str, now: f64) -> Option<String> {
        let hands: Vec<HandObservation> = serde_json::from_str(json).unwrap_or_else(|err| {
            warn!("Unparseable landmark JSON ({}); treating frame as empty", err);
            Vec::new()
        });

        committed_letter(self.inner.submit_frame(&hands, now))
    }

    /// Letter currently being held
    #[wasm_bindgen(js_name = activeLetter)]
    pub fn active_letter(&self) -> Option<String> {
        self.inner.hold().active_letter().map(|l| l.as_str().to_string())
    }

    /// Hold progress (0-1) at `now`, for a progress ring
    #[wasm_bindgen(js_name = holdProgress)]
    pub fn hold_progress(&self, now: f64) -> f32 {
        self.inner.hold().progress_at(now)
    }

    /// Smoothed letter from the last processed frame
    #[wasm_bindgen(js_name = predictedLetter)]
    pub fn predicted_letter(&self) -> Option<String> {
        self.inner
            .last_prediction()
            .and_then(|p| p.letter)
            .map(|l| l.as_str().to_string())
    }

    #[wasm_bindgen(js_name = predictionConfidence)]
    pub fn prediction_confidence(&self) -> f32 {
        self.inner.last_prediction().map_or(0.0, |p| p.confidence)
    }

    /// Frames skipped because detection was busy or the rate cap hit
    #[wasm_bindgen(js_name = droppedFrames)]
    pub fn dropped_frames(&self) -> u32 {
        u32::try_from(self.inner.scheduler().dropped_frames()).unwrap_or(u32::MAX)
    }

    /// Everything committed so far
    pub fn text(&self) -> String {
        self.inner.sink().text.clone()
    }
}
