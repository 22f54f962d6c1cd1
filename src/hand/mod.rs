//! Hand module - landmark model, geometry, and feature extraction
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod geometry;
mod features;

#[cfg(test)]
pub(crate) mod fixtures;

pub use landmarks::*;
pub use geometry::{angle_between, distance};
pub use features::{
    extract_features, finger_angles, finger_states, fingertip_distances, flatten, normalize,
    FeatureVector, FingerStates, COORD_COUNT, FINGERTIP_PAIRS,
};
