use sign_web::hand::{Landmark, MIN_LANDMARKS};

/// Right hand, wrist at (0.5, 0.9). `fingers` is [index, middle, ring, pinky],
/// true = extended, false = closed into the palm. `thumb` is the tip position.
pub fn hand(thumb_tip: (f32, f32), fingers: [bool; 4]) -> Vec<Landmark> {
    let mut points = vec![Landmark::default(); MIN_LANDMARKS];
    points[0] = Landmark::new(0.50, 0.90, 0.0);
    points[1] = Landmark::new(0.42, 0.85, 0.0);
    points[2] = Landmark::new(0.38, 0.78, 0.0);
    points[3] = Landmark::new((0.38 + thumb_tip.0) / 2.0, (0.78 + thumb_tip.1) / 2.0, 0.0);
    points[4] = Landmark::new(thumb_tip.0, thumb_tip.1, 0.0);

    let bases = [(0.42, 0.70), (0.50, 0.70), (0.57, 0.70), (0.63, 0.72)];
    for (i, (&(x, mcp_y), &extended)) in bases.iter().zip(fingers.iter()).enumerate() {
        let mcp = 5 + i * 4;
        let offsets = if extended { [-0.10, -0.17, -0.23] } else { [-0.08, -0.02, 0.04] };
        points[mcp] = Landmark::new(x, mcp_y, 0.0);
        for (j, dy) in offsets.iter().enumerate() {
            points[mcp + 1 + j] = Landmark::new(x, mcp_y + dy, 0.0);
        }
    }
    points
}

/// Thumb + index at a right angle
pub fn letter_l() -> Vec<Landmark> {
    hand((0.25, 0.72), [true, false, false, false])
}

/// Index + middle together
pub fn letter_u() -> Vec<Landmark> {
    hand((0.46, 0.72), [true, true, false, false])
}

/// Index + middle spread
pub fn letter_v() -> Vec<Landmark> {
    let mut points = letter_u();
    points[8].x = 0.38;
    points[12].x = 0.55;
    points
}

/// Thumb + pinky
pub fn letter_y() -> Vec<Landmark> {
    hand((0.32, 0.66), [false, false, false, true])
}
