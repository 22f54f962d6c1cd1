//! Rule-based letter inference
//!
//! Each rule pairs a finger-state pattern with a geometric check on the raw
//! landmarks. Rules are tried in order and the first match wins, since
//! patterns overlap (A, C and O all share "fingers folded, thumb out").

use super::letters::Letter;
use crate::hand::*;

/// Index/middle tip gap separating V (spread) from U (together)
const V_SPREAD: f32 = 0.1;
/// Minimum thumb-index opening angle at the index MCP for L (radians)
const L_MIN_ANGLE: f32 = 1.2;
/// Minimum thumb-tip to index-tip gap for L
const L_MIN_GAP: f32 = 0.08;
/// Minimum thumb-tip to index-tip gap for A (thumb beside, not on, the fist)
const A_MIN_GAP: f32 = 0.05;
/// Maximum thumb-tip to index-tip gap for the F pinch
const F_MAX_GAP: f32 = 0.08;
/// Maximum thumb-tip gaps to index / middle tips for O
const O_MAX_INDEX_GAP: f32 = 0.1;
const O_MAX_MIDDLE_GAP: f32 = 0.15;

/// [thumb, index, middle, ring, pinky]
type Pattern = [bool; 5];

struct Rule {
    letter: Letter,
    pattern: Pattern,
    check: fn(&[Landmark]) -> bool,
}

const ORDERED_RULES: [Rule; 10] = [
    Rule { letter: Letter::V, pattern: [false, true, true, false, false], check: is_v },
    Rule { letter: Letter::U, pattern: [false, true, true, false, false], check: is_u },
    Rule { letter: Letter::Y, pattern: [true, false, false, false, true], check: always },
    Rule { letter: Letter::E, pattern: [false, false, false, false, false], check: always },
    Rule { letter: Letter::L, pattern: [true, true, false, false, false], check: is_l },
    Rule { letter: Letter::B, pattern: [false, true, true, true, true], check: always },
    Rule { letter: Letter::A, pattern: [true, false, false, false, false], check: is_a },
    Rule { letter: Letter::C, pattern: [true, false, false, false, false], check: is_c },
    Rule { letter: Letter::O, pattern: [true, false, false, false, false], check: is_o },
    Rule { letter: Letter::F, pattern: [true, false, true, true, true], check: is_f },
];

fn always(_: &[Landmark]) -> bool {
    true
}

fn gap(landmarks: &[Landmark], a: usize, b: usize) -> f32 {
    distance(landmarks[a], landmarks[b])
}

/// Tip lower in the image than its MCP (closed into the palm)
fn below_mcp(landmarks: &[Landmark], tip: usize, mcp: usize) -> bool {
    landmarks[tip].y > landmarks[mcp].y
}

fn is_v(landmarks: &[Landmark]) -> bool {
    gap(landmarks, INDEX_TIP, MIDDLE_TIP) > V_SPREAD
}

fn is_u(landmarks: &[Landmark]) -> bool {
    gap(landmarks, INDEX_TIP, MIDDLE_TIP) <= V_SPREAD
}

fn is_l(landmarks: &[Landmark]) -> bool {
    let opening = angle_between(landmarks[THUMB_TIP], landmarks[INDEX_MCP], landmarks[INDEX_TIP]);
    opening > L_MIN_ANGLE && gap(landmarks, THUMB_TIP, INDEX_TIP) > L_MIN_GAP
}

fn thumb_below_index_mcp(landmarks: &[Landmark]) -> bool {
    landmarks[THUMB_TIP].y > landmarks[INDEX_MCP].y
}

fn is_a(landmarks: &[Landmark]) -> bool {
    thumb_below_index_mcp(landmarks)
        && below_mcp(landmarks, INDEX_TIP, INDEX_MCP)
        && below_mcp(landmarks, MIDDLE_TIP, MIDDLE_MCP)
        && below_mcp(landmarks, RING_TIP, RING_MCP)
        && below_mcp(landmarks, PINKY_TIP, PINKY_MCP)
        && gap(landmarks, INDEX_TIP, THUMB_TIP) > A_MIN_GAP
}

fn is_c(landmarks: &[Landmark]) -> bool {
    let thumb_low = thumb_below_index_mcp(landmarks);
    let index_curved = landmarks[INDEX_TIP].y < landmarks[INDEX_MCP].y;
    let middle_curved = landmarks[MIDDLE_TIP].y < landmarks[MIDDLE_MCP].y;
    thumb_low && index_curved && middle_curved
}

fn is_o(landmarks: &[Landmark]) -> bool {
    gap(landmarks, THUMB_TIP, INDEX_TIP) < O_MAX_INDEX_GAP
        && gap(landmarks, THUMB_TIP, MIDDLE_TIP) < O_MAX_MIDDLE_GAP
}

fn is_f(landmarks: &[Landmark]) -> bool {
    gap(landmarks, INDEX_TIP, THUMB_TIP) < F_MAX_GAP
}

/// First rule matching both the finger pattern and its geometric check
pub fn classify_letter(states: &FingerStates, landmarks: &[Landmark]) -> Option<Letter> {
    if landmarks.len() < MIN_LANDMARKS {
        return None;
    }

    let pattern = states.as_array();
    ORDERED_RULES
        .iter()
        .find(|rule| rule.pattern == pattern && (rule.check)(landmarks))
        .map(|rule| rule.letter)
}

/// Single-frame classification of one raw hand.
///
/// Stateless: the result is the raw match for this frame only. Feed it
/// through a `PredictionBuffer` before reporting it.
pub fn classify_hand(landmarks: &[Landmark]) -> Option<Letter> {
    if landmarks.len() < MIN_LANDMARKS {
        return None;
    }

    let states = finger_states(landmarks)?;
    // Feature extraction gates classification even though the rules read raw points
    extract_features(landmarks)?;

    classify_letter(&states, landmarks)
}
