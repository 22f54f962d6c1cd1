//! Synthetic hand poses for tests
//!
//! Right hand, palm facing the camera, wrist at (0.5, 0.9), y grows downward.

use super::landmarks::*;

#[derive(Clone, Copy, Debug)]
pub(crate) enum Finger {
    /// Straight up, tip well above PIP
    Extended,
    /// Bent over: tip below PIP but still above MCP
    Curled,
    /// Closed into the palm: tip below MCP
    Folded,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Thumb {
    /// Abducted away from the palm
    Out,
    /// Tucked across the palm
    Tucked,
}

/// (x, MCP y) for index, middle, ring, pinky
const FINGER_BASES: [(f32, f32); 4] = [(0.42, 0.70), (0.50, 0.70), (0.57, 0.70), (0.63, 0.72)];

pub(crate) struct HandPose {
    thumb: Thumb,
    fingers: [Finger; 4],
    overrides: Vec<(usize, Landmark)>,
}

impl HandPose {
    pub(crate) fn open() -> Self {
        Self {
            thumb: Thumb::Out,
            fingers: [Finger::Extended; 4],
            overrides: Vec::new(),
        }
    }

    pub(crate) fn fist() -> Self {
        Self {
            thumb: Thumb::Tucked,
            fingers: [Finger::Folded; 4],
            overrides: Vec::new(),
        }
    }

    pub(crate) fn thumb(mut self, thumb: Thumb) -> Self {
        self.thumb = thumb;
        self
    }

    pub(crate) fn index(mut self, finger: Finger) -> Self {
        self.fingers[0] = finger;
        self
    }

    pub(crate) fn middle(mut self, finger: Finger) -> Self {
        self.fingers[1] = finger;
        self
    }

    pub(crate) fn pinky(mut self, finger: Finger) -> Self {
        self.fingers[3] = finger;
        self
    }

    /// Move a single landmark after the pose is laid out
    pub(crate) fn place(mut self, index: usize, x: f32, y: f32) -> Self {
        self.overrides.push((index, Landmark::new(x, y, 0.0)));
        self
    }

    pub(crate) fn build(&self) -> Vec<Landmark> {
        let mut hand = vec![Landmark::default(); MIN_LANDMARKS];
        hand[WRIST] = Landmark::new(0.50, 0.90, 0.0);
        hand[THUMB_CMC] = Landmark::new(0.42, 0.85, 0.0);
        hand[THUMB_MCP] = Landmark::new(0.38, 0.78, 0.0);

        match self.thumb {
            Thumb::Out => {
                hand[THUMB_IP] = Landmark::new(0.35, 0.72, 0.0);
                hand[THUMB_TIP] = Landmark::new(0.32, 0.66, 0.0);
            }
            Thumb::Tucked => {
                hand[THUMB_IP] = Landmark::new(0.42, 0.74, 0.0);
                hand[THUMB_TIP] = Landmark::new(0.46, 0.72, 0.0);
            }
        }

        for (i, (&(x, mcp_y), finger)) in FINGER_BASES.iter().zip(self.fingers.iter()).enumerate() {
            let mcp = INDEX_MCP + i * 4;
            let (pip_dy, dip_dy, tip_dy) = match finger {
                Finger::Extended => (-0.10, -0.17, -0.23),
                Finger::Curled => (-0.10, -0.08, -0.05),
                Finger::Folded => (-0.08, -0.02, 0.04),
            };
            hand[mcp] = Landmark::new(x, mcp_y, 0.0);
            hand[mcp + 1] = Landmark::new(x, mcp_y + pip_dy, 0.0);
            hand[mcp + 2] = Landmark::new(x, mcp_y + dip_dy, 0.0);
            hand[mcp + 3] = Landmark::new(x, mcp_y + tip_dy, 0.0);
        }

        for &(index, point) in &self.overrides {
            hand[index] = point;
        }

        hand
    }
}
