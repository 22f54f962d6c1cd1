//! Sign Web - ASL letter recognition from hand landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Pipeline per frame: landmarks (from JS) → finger states + features →
//! rule classifier → smoothing window → hold-to-commit timer → text.

pub mod hand;
pub mod classifier;
pub mod gesture;
mod bridge;

use wasm_bindgen::prelude::*;

pub use bridge::{BridgeError, WebSignSession};
pub use classifier::{classify_hand, Letter, Prediction, PredictionBuffer};
pub use gesture::{FrameGate, FrameReport, HoldEvent, HoldTracker, SessionConfig, SignSession, TextSink};
pub use hand::{HandObservation, Handedness, Landmark};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_logging(log::LevelFilter::Debug);
    log::info!("✅ Sign recognizer loaded ({} letters)", Letter::ALL.len());
}

/// Reference text for a letter ("" if unsupported), for the help cards
#[wasm_bindgen(js_name = letterDescription)]
pub fn letter_description(letter: &str) -> String {
    letter
        .chars()
        .next()
        .and_then(Letter::from_char)
        .map(|l| l.description().to_string())
        .unwrap_or_default()
}

/// Letters the classifier can produce, e.g. "ABCEFLOUVY"
#[wasm_bindgen(js_name = supportedLetters)]
pub fn supported_letters() -> String {
    Letter::ALL.iter().map(Letter::as_char).collect()
}
