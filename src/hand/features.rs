//! Feature extraction for letter classification
//!
//! Normalizes a raw hand into a translation/scale-invariant frame and
//! derives finger states, joint angles and fingertip distances.

use super::geometry::{angle_between, distance};
use super::landmarks::*;

/// Scalars in the flattened coordinate block (21 points × x,y,z)
pub const COORD_COUNT: usize = MIN_LANDMARKS * 3;

/// Fingertip pairs in canonical order
pub const FINGERTIP_PAIRS: [(usize, usize); 10] = [
    (THUMB_TIP, INDEX_TIP),
    (THUMB_TIP, MIDDLE_TIP),
    (THUMB_TIP, RING_TIP),
    (THUMB_TIP, PINKY_TIP),
    (INDEX_TIP, MIDDLE_TIP),
    (INDEX_TIP, RING_TIP),
    (INDEX_TIP, PINKY_TIP),
    (MIDDLE_TIP, RING_TIP),
    (MIDDLE_TIP, PINKY_TIP),
    (RING_TIP, PINKY_TIP),
];

/// (MCP, PIP, TIP) per finger; the thumb's IP joint stands in for PIP
const FINGER_JOINTS: [(usize, usize, usize); 5] = [
    (THUMB_MCP, THUMB_IP, THUMB_TIP),
    (INDEX_MCP, INDEX_PIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP, RING_TIP),
    (PINKY_MCP, PINKY_PIP, PINKY_TIP),
];

/// Extended (true) / folded (false) per finger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// [thumb, index, middle, ring, pinky]
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }
}

/// Per-frame feature vector
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    /// Normalized x,y,z per landmark
    pub coords: Vec<f32>,
    /// PIP joint angle per finger (radians)
    pub angles: [f32; 5],
    /// Normalized fingertip distances in `FINGERTIP_PAIRS` order
    pub distances: [f32; 10],
}

impl FeatureVector {
    /// Total scalar count of `as_flat`
    pub const LEN: usize = COORD_COUNT + 5 + 10;

    /// coords, then angles, then distances
    pub fn as_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(Self::LEN);
        result.extend_from_slice(&self.coords);
        result.extend_from_slice(&self.angles);
        result.extend_from_slice(&self.distances);
        result
    }
}

/// Translate so the wrist is the origin, then divide by the larger side of
/// the x/y bounding box.
///
/// Returns None for an empty hand. A zero-sized box (single point, or all
/// points coincident) returns the translated points unscaled.
pub fn normalize(landmarks: &[Landmark]) -> Option<Vec<Landmark>> {
    let wrist = *landmarks.first()?;

    let translated: Vec<Landmark> = landmarks
        .iter()
        .map(|p| Landmark::new(p.x - wrist.x, p.y - wrist.y, p.z - wrist.z))
        .collect();

    let (mut min_x, mut max_x) = (f32::INFINITY, f32::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f32::INFINITY, f32::NEG_INFINITY);
    for p in &translated {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let scale = (max_x - min_x).max(max_y - min_y);
    if scale <= 0.0 {
        return Some(translated);
    }

    Some(
        translated
            .into_iter()
            .map(|p| Landmark::new(p.x / scale, p.y / scale, p.z / scale))
            .collect(),
    )
}

/// x,y,z per point
pub fn flatten(landmarks: &[Landmark]) -> Vec<f32> {
    landmarks.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}

/// Angle at each finger's PIP joint between PIP→MCP and PIP→TIP.
///
/// A straight finger reads close to π.
pub fn finger_angles(landmarks: &[Landmark]) -> Option<[f32; 5]> {
    if landmarks.len() < MIN_LANDMARKS {
        return None;
    }

    let mut angles = [0.0; 5];
    for (angle, &(mcp, pip, tip)) in angles.iter_mut().zip(FINGER_JOINTS.iter()) {
        *angle = angle_between(landmarks[mcp], landmarks[pip], landmarks[tip]);
    }
    Some(angles)
}

/// 3D distance for every fingertip pair in `FINGERTIP_PAIRS` order
pub fn fingertip_distances(landmarks: &[Landmark]) -> Option<[f32; 10]> {
    if landmarks.len() < MIN_LANDMARKS {
        return None;
    }

    let mut distances = [0.0; 10];
    for (d, &(a, b)) in distances.iter_mut().zip(FINGERTIP_PAIRS.iter()) {
        *d = distance(landmarks[a], landmarks[b]);
    }
    Some(distances)
}

/// Build the full feature vector.
///
/// Angles come from the raw hand (already scale/translation invariant);
/// distances come from the normalized hand.
pub fn extract_features(landmarks: &[Landmark]) -> Option<FeatureVector> {
    if landmarks.len() < MIN_LANDMARKS {
        return None;
    }

    let normalized = normalize(landmarks)?;

    Some(FeatureVector {
        coords: flatten(&normalized[..MIN_LANDMARKS]),
        angles: finger_angles(landmarks)?,
        distances: fingertip_distances(&normalized)?,
    })
}

/// Extended/folded test per finger.
///
/// Non-thumb fingers are extended when the tip sits above the PIP joint
/// (smaller y). The thumb is extended when its tip is further from the
/// wrist horizontally than its MCP, which works for either hand.
pub fn finger_states(landmarks: &[Landmark]) -> Option<FingerStates> {
    if landmarks.len() < MIN_LANDMARKS {
        return None;
    }

    let wrist = landmarks[WRIST];
    let above = |tip: usize, pip: usize| landmarks[tip].y < landmarks[pip].y;

    Some(FingerStates {
        thumb: (landmarks[THUMB_TIP].x - wrist.x).abs() > (landmarks[THUMB_MCP].x - wrist.x).abs(),
        index: above(INDEX_TIP, INDEX_PIP),
        middle: above(MIDDLE_TIP, MIDDLE_PIP),
        ring: above(RING_TIP, RING_PIP),
        pinky: above(PINKY_TIP, PINKY_PIP),
    })
}
