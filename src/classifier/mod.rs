//! Classifier module - rule-based ASL letter inference
//!
//! Classification is stateless per frame; smoothing lives in
//! `PredictionBuffer` and is composed by the caller.

mod letters;
mod prediction;
mod rules;
mod buffer;

pub use letters::Letter;
pub use prediction::Prediction;
pub use rules::{classify_hand, classify_letter};
pub use buffer::{PredictionBuffer, SMOOTHING_WINDOW};
