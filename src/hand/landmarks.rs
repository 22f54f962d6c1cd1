//! Hand landmark data model
//!
//! MediaPipe Hands ordering: wrist, then four points per finger
//! (thumb uses CMC/MCP/IP/TIP in the same four-slot pattern).

use nalgebra::{Vector2, Vector3};
use serde::Deserialize;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Landmarks per detected hand
pub const MIN_LANDMARKS: usize = 21;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand landmark. x, y are normalized to the frame (y grows
/// downward); z is relative depth and defaults to 0 when the detector omits it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Image-plane projection (drops depth)
    pub fn to_planar(self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

/// Which hand the detector believes it saw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Handedness {
    Left,
    Right,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Handedness {
    /// Parse a MediaPipe category name ("Left" / "Right"); anything else is Unknown
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "left" => Handedness::Left,
            "right" => Handedness::Right,
            _ => Handedness::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
            Handedness::Unknown => "Unknown",
        }
    }
}

/// One detected hand for one frame
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HandObservation {
    pub landmarks: Vec<Landmark>,
    #[serde(default)]
    pub handedness: Handedness,
    #[serde(default)]
    pub confidence: f32,
}

impl HandObservation {
    pub fn new(landmarks: Vec<Landmark>, handedness: Handedness, confidence: f32) -> Self {
        Self {
            landmarks,
            handedness,
            confidence,
        }
    }

    /// True when the detector delivered a full hand
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= MIN_LANDMARKS
    }
}

/// Parse a flat coordinate array (`num_hands × 21 × stride`) into hands.
///
/// `stride` is 3 for x,y,z or 2 when depth is absent. Returns None if the
/// array length does not match the hand count.
pub fn parse_flat_hands(flat_data: &[f32], stride: usize, num_hands: usize) -> Option<Vec<Vec<Landmark>>> {
    if !(2..=3).contains(&stride) || flat_data.len() != num_hands * MIN_LANDMARKS * stride {
        return None;
    }

    let hands = flat_data
        .chunks_exact(MIN_LANDMARKS * stride)
        .map(|hand| {
            hand.chunks_exact(stride)
                .map(|p| Landmark {
                    x: p[0],
                    y: p[1],
                    z: if stride == 3 { p[2] } else { 0.0 },
                })
                .collect()
        })
        .collect();

    Some(hands)
}
