// Pose Overlay 🚀 AGPL-3.0 License

//! Full-body landmark topology: names, connection pairs, and a canonical
//! reference pose.
//!
//! The tables describe the 33-point full-body landmark layout. Nothing in the
//! pipeline requires this count; these are rendering/reference data only.

use crate::landmark::{Landmark, LandmarkSet};

/// Number of landmarks in a full-body pose.
pub const LANDMARK_COUNT: usize = 33;

/// Canonical landmark names, in index order.
pub const LANDMARK_NAMES: [&str; LANDMARK_COUNT] = [
    "nose",
    "left_eye_inner",
    "left_eye",
    "left_eye_outer",
    "right_eye_inner",
    "right_eye",
    "right_eye_outer",
    "left_ear",
    "right_ear",
    "mouth_left",
    "mouth_right",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_pinky",
    "right_pinky",
    "left_index",
    "right_index",
    "left_thumb",
    "right_thumb",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
    "left_heel",
    "right_heel",
    "left_foot_index",
    "right_foot_index",
];

/// Skeleton structure (pairs of landmark indices).
/// Defines which landmarks connect to form the pose skeleton.
pub const POSE_CONNECTIONS: [[usize; 2]; 35] = [
    [0, 1],   // nose to left eye inner
    [1, 2],   // left eye inner to left eye
    [2, 3],   // left eye to left eye outer
    [3, 7],   // left eye outer to left ear
    [0, 4],   // nose to right eye inner
    [4, 5],   // right eye inner to right eye
    [5, 6],   // right eye to right eye outer
    [6, 8],   // right eye outer to right ear
    [9, 10],  // mouth left to mouth right
    [11, 12], // left shoulder to right shoulder
    [11, 13], // left shoulder to left elbow
    [13, 15], // left elbow to left wrist
    [15, 17], // left wrist to left pinky
    [15, 19], // left wrist to left index
    [15, 21], // left wrist to left thumb
    [17, 19], // left pinky to left index
    [12, 14], // right shoulder to right elbow
    [14, 16], // right elbow to right wrist
    [16, 18], // right wrist to right pinky
    [16, 20], // right wrist to right index
    [16, 22], // right wrist to right thumb
    [18, 20], // right pinky to right index
    [11, 23], // left shoulder to left hip
    [12, 24], // right shoulder to right hip
    [23, 24], // left hip to right hip
    [23, 25], // left hip to left knee
    [24, 26], // right hip to right knee
    [25, 27], // left knee to left ankle
    [26, 28], // right knee to right ankle
    [27, 29], // left ankle to left heel
    [28, 30], // right ankle to right heel
    [29, 31], // left heel to left foot index
    [30, 32], // right heel to right foot index
    [27, 31], // left ankle to left foot index
    [28, 32], // right ankle to right foot index
];

/// Connection color indices mapping into the pose palette.
/// Mapping: face=green, arms=blue, torso/legs=orange.
pub const CONNECTION_COLOR_INDICES: [usize; 35] = [
    16, 16, 16, 16, 16, 16, 16, 16, 16, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0,
];

/// Landmark color indices mapping into the pose palette.
/// Mapping: face=green, arms=blue, torso/legs=orange.
pub const LANDMARK_COLOR_INDICES: [usize; LANDMARK_COUNT] = [
    16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
];

/// Canonical reference pose in normalized image coordinates (y down),
/// an upright subject with arms extended. Used as a neutral display pose
/// and as fixture data in tests.
pub const REFERENCE_POSE: [[f32; 3]; LANDMARK_COUNT] = [
    [0.500, 0.220, 0.0], // nose
    [0.485, 0.205, 0.0], // left_eye_inner
    [0.475, 0.205, 0.0], // left_eye
    [0.465, 0.205, 0.0], // left_eye_outer
    [0.515, 0.205, 0.0], // right_eye_inner
    [0.525, 0.205, 0.0], // right_eye
    [0.535, 0.205, 0.0], // right_eye_outer
    [0.455, 0.215, 0.0], // left_ear
    [0.545, 0.215, 0.0], // right_ear
    [0.488, 0.245, 0.0], // mouth_left
    [0.512, 0.245, 0.0], // mouth_right
    [0.410, 0.310, 0.0], // left_shoulder
    [0.590, 0.310, 0.0], // right_shoulder
    [0.290, 0.310, 0.0], // left_elbow
    [0.710, 0.310, 0.0], // right_elbow
    [0.170, 0.310, 0.0], // left_wrist
    [0.830, 0.310, 0.0], // right_wrist
    [0.130, 0.305, 0.0], // left_pinky
    [0.870, 0.305, 0.0], // right_pinky
    [0.125, 0.315, 0.0], // left_index
    [0.875, 0.315, 0.0], // right_index
    [0.150, 0.325, 0.0], // left_thumb
    [0.850, 0.325, 0.0], // right_thumb
    [0.445, 0.550, 0.0], // left_hip
    [0.555, 0.550, 0.0], // right_hip
    [0.435, 0.715, 0.0], // left_knee
    [0.565, 0.715, 0.0], // right_knee
    [0.430, 0.875, 0.0], // left_ankle
    [0.570, 0.875, 0.0], // right_ankle
    [0.420, 0.905, 0.0], // left_heel
    [0.580, 0.905, 0.0], // right_heel
    [0.445, 0.925, 0.0], // left_foot_index
    [0.555, 0.925, 0.0], // right_foot_index
];

/// Get the canonical name for a landmark index, if one exists.
#[must_use]
pub fn landmark_name(index: usize) -> Option<&'static str> {
    LANDMARK_NAMES.get(index).copied()
}

/// Build the canonical reference pose as a named, fully-visible landmark set.
#[must_use]
pub fn reference_pose() -> LandmarkSet {
    LandmarkSet::from_landmarks(
        REFERENCE_POSE
            .iter()
            .zip(LANDMARK_NAMES.iter())
            .map(|(p, name)| {
                Landmark::new(p[0], p[1], p[2])
                    .with_visibility(1.0)
                    .with_presence(1.0)
                    .with_name(*name)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connections_in_range() {
        for [a, b] in POSE_CONNECTIONS {
            assert!(a < LANDMARK_COUNT);
            assert!(b < LANDMARK_COUNT);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_landmark_name_lookup() {
        assert_eq!(landmark_name(0), Some("nose"));
        assert_eq!(landmark_name(32), Some("right_foot_index"));
        assert_eq!(landmark_name(33), None);
    }

    #[test]
    fn test_reference_pose_shape() {
        let pose = reference_pose();
        assert_eq!(pose.len(), LANDMARK_COUNT);
        assert_eq!(pose.present_count(), LANDMARK_COUNT);
        // Normalized coordinates
        for slot in pose.iter() {
            let lm = slot.as_ref().unwrap();
            assert!((0.0..=1.0).contains(&lm.x));
            assert!((0.0..=1.0).contains(&lm.y));
        }
    }
}
