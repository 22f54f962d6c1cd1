use proptest::prelude::*;
use sign_web::classifier::{classify_hand, Letter, PredictionBuffer};
use sign_web::hand::{
    extract_features, finger_angles, finger_states, fingertip_distances, normalize, Landmark,
    MIN_LANDMARKS,
};

fn landmark() -> impl Strategy<Value = Landmark> {
    (0.0f32..1.0, 0.0f32..1.0, -0.2f32..0.2).prop_map(|(x, y, z)| Landmark::new(x, y, z))
}

fn full_hand() -> impl Strategy<Value = Vec<Landmark>> {
    prop::collection::vec(landmark(), MIN_LANDMARKS)
}

fn letter() -> impl Strategy<Value = Letter> {
    prop::sample::select(Letter::ALL.to_vec())
}

// Short hands never classify and never panic
proptest! {
    #[test]
    fn prop_short_hands_fail_soft(points in prop::collection::vec(landmark(), 0..MIN_LANDMARKS)) {
        prop_assert!(finger_states(&points).is_none());
        prop_assert!(finger_angles(&points).is_none());
        prop_assert!(fingertip_distances(&points).is_none());
        prop_assert!(extract_features(&points).is_none());
        prop_assert!(classify_hand(&points).is_none());
    }
}

// Translating every point leaves the normalized hand unchanged
proptest! {
    #[test]
    fn prop_normalize_translation_invariant(
        points in full_hand(),
        dx in -0.5f32..0.5,
        dy in -0.5f32..0.5,
        dz in -0.5f32..0.5,
    ) {
        let moved: Vec<Landmark> = points
            .iter()
            .map(|p| Landmark::new(p.x + dx, p.y + dy, p.z + dz))
            .collect();

        let a = normalize(&points).unwrap();
        let b = normalize(&moved).unwrap();

        // Skip near-degenerate boxes where f32 rounding dominates
        let width = points.iter().map(|p| p.x).fold(f32::MIN, f32::max)
            - points.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let height = points.iter().map(|p| p.y).fold(f32::MIN, f32::max)
            - points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        prop_assume!(width.max(height) > 0.05);

        for (pa, pb) in a.iter().zip(b.iter()) {
            prop_assert!((pa.x - pb.x).abs() < 1e-3, "x {} vs {}", pa.x, pb.x);
            prop_assert!((pa.y - pb.y).abs() < 1e-3, "y {} vs {}", pa.y, pb.y);
            prop_assert!((pa.z - pb.z).abs() < 1e-3, "z {} vs {}", pa.z, pb.z);
        }
    }
}

// Angles stay in [0, π] and distances non-negative, even with coincident points
proptest! {
    #[test]
    fn prop_angles_and_distances_are_well_formed(
        points in full_hand(),
        collapse in prop::collection::vec(0usize..MIN_LANDMARKS, 0..10),
    ) {
        let mut points = points;
        for i in collapse {
            points[i] = points[0];
        }

        let angles = finger_angles(&points).unwrap();
        for angle in angles {
            prop_assert!(!angle.is_nan());
            prop_assert!((0.0..=std::f32::consts::PI + 1e-6).contains(&angle));
        }

        let distances = fingertip_distances(&points).unwrap();
        for d in distances {
            prop_assert!(!d.is_nan());
            prop_assert!(d >= 0.0);
        }

        let features = extract_features(&points).unwrap();
        prop_assert!(features.as_flat().iter().all(|v| v.is_finite()));
    }
}

// Window never exceeds capacity; confidence of the majority is the best share
proptest! {
    #[test]
    fn prop_smoother_bounded(
        capacity in 1usize..10,
        letters in prop::collection::vec(letter(), 0..40),
    ) {
        let mut buffer = PredictionBuffer::new(capacity);
        for l in letters {
            buffer.push(l);
            prop_assert!(buffer.len() <= capacity);
        }

        if let Some(majority) = buffer.majority() {
            let best = buffer.confidence(majority);
            for l in Letter::ALL {
                prop_assert!(buffer.confidence(l) <= best);
            }
        } else {
            prop_assert!(buffer.is_empty());
        }
    }
}
