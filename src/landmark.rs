// Pose Overlay 🚀 AGPL-3.0 License

//! Landmark data model for the overlay pipeline.
//!
//! These are the value types flowing through the pipeline: a single
//! [`Landmark`], an ordered [`LandmarkSet`] for one detected subject, and a
//! [`PoseResult`] carrying every subject found in one frame. Absent data is
//! always an explicit `None`, never a sentinel value, so "missing" stays
//! distinguishable from "zero confidence" throughout.

use ndarray::Array3;

/// A labeled 3D point with optional confidence metadata.
///
/// Landmarks are immutable value types: smoothing and every other transform
/// construct new values rather than mutating inputs in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate (depth, same unit as x/y in the source coordinate space).
    pub z: f32,
    /// Likelihood that the landmark is visible (not occluded), if reported.
    pub visibility: Option<f32>,
    /// Likelihood that the landmark exists in frame, if reported.
    pub presence: Option<f32>,
    /// Optional display name (e.g. "left_shoulder").
    pub name: Option<String>,
}

impl Landmark {
    /// Create a landmark with position only.
    ///
    /// # Arguments
    ///
    /// * `x` - X coordinate.
    /// * `y` - Y coordinate.
    /// * `z` - Z coordinate.
    ///
    /// # Returns
    ///
    /// * A new `Landmark` with no confidence channels and no name.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
            presence: None,
            name: None,
        }
    }

    /// Set the visibility channel.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Set the presence channel.
    #[must_use]
    pub const fn with_presence(mut self, presence: f32) -> Self {
        self.presence = Some(presence);
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Position as an `[x, y, z]` array.
    #[must_use]
    pub const fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// An ordered sequence of landmark slots for one detected subject.
///
/// Individual slots may be absent (`None`) when the detector lost a landmark
/// this frame. The length is not fixed: a full-body pose typically has
/// [`crate::visualizer::skeleton::LANDMARK_COUNT`] entries, but nothing in the
/// pipeline assumes a specific count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkSet {
    /// Landmark slots in detector order.
    pub landmarks: Vec<Option<Landmark>>,
}

impl LandmarkSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            landmarks: Vec::new(),
        }
    }

    /// Create a set where every slot is present.
    ///
    /// # Arguments
    ///
    /// * `landmarks` - The landmarks, one per slot.
    ///
    /// # Returns
    ///
    /// * A new `LandmarkSet` with no absent slots.
    #[must_use]
    pub fn from_landmarks(landmarks: Vec<Landmark>) -> Self {
        Self {
            landmarks: landmarks.into_iter().map(Some).collect(),
        }
    }

    /// Get the number of landmark slots (present or absent).
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Check if the set has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Get the landmark at a slot, if the slot exists and is present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index).and_then(Option::as_ref)
    }

    /// Iterate over all slots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Option<Landmark>> {
        self.landmarks.iter()
    }

    /// Count the present landmarks.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.landmarks.iter().filter(|l| l.is_some()).count()
    }
}

/// Per-pixel segmentation masks carried alongside a detection result.
///
/// The core pipeline never reads mask data; it is cloned through untouched
/// for downstream renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Masks {
    /// Raw mask data with shape (N, H, W), one mask per subject.
    pub data: Array3<f32>,
}

impl Masks {
    /// Create a new Masks instance.
    #[must_use]
    pub const fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Get the number of masks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.shape()[0]
    }

    /// Check if there are no masks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// One frame's detection output across all subjects.
///
/// Instance slots are positional: instance `i` this frame is assumed to be
/// instance `i` next frame. A subject lost between frames appears as `None`
/// in its slot. An entirely empty result is valid data ("no detections this
/// tick"), not a failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoseResult {
    /// One landmark set per detected subject, positionally ordered.
    pub poses: Vec<Option<LandmarkSet>>,
    /// Optional segmentation masks, carried but not processed by the core.
    pub masks: Option<Masks>,
}

impl PoseResult {
    /// Create an empty result (no detections).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            poses: Vec::new(),
            masks: None,
        }
    }

    /// Create a single-subject result.
    ///
    /// # Arguments
    ///
    /// * `landmarks` - The subject's landmark set.
    ///
    /// # Returns
    ///
    /// * A `PoseResult` with one instance slot and no masks.
    #[must_use]
    pub fn single(landmarks: LandmarkSet) -> Self {
        Self {
            poses: vec![Some(landmarks)],
            masks: None,
        }
    }

    /// Get the number of instance slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Check if there are no instance slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Generate a short log string describing the result.
    ///
    /// # Returns
    ///
    /// * A summary like "2 poses, " or "(no detections), ".
    #[must_use]
    pub fn verbose(&self) -> String {
        let present = self.poses.iter().filter(|p| p.is_some()).count();
        if present == 0 {
            return "(no detections), ".to_string();
        }
        let suffix = if present > 1 { "s" } else { "" };
        format!("{present} pose{suffix}, ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_builder() {
        let lm = Landmark::new(0.5, 0.25, -0.1)
            .with_visibility(0.9)
            .with_name("nose");
        assert_eq!(lm.position(), [0.5, 0.25, -0.1]);
        assert_eq!(lm.visibility, Some(0.9));
        assert_eq!(lm.presence, None);
        assert_eq!(lm.name.as_deref(), Some("nose"));
    }

    #[test]
    fn test_landmark_set_slots() {
        let set = LandmarkSet {
            landmarks: vec![Some(Landmark::new(0.0, 0.0, 0.0)), None],
        };
        assert_eq!(set.len(), 2);
        assert_eq!(set.present_count(), 1);
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_from_landmarks_all_present() {
        let set = LandmarkSet::from_landmarks(vec![
            Landmark::new(0.1, 0.2, 0.3),
            Landmark::new(0.4, 0.5, 0.6),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.present_count(), 2);
    }

    #[test]
    fn test_pose_result_verbose() {
        let empty = PoseResult::new();
        assert_eq!(empty.verbose(), "(no detections), ");

        let one = PoseResult::single(LandmarkSet::from_landmarks(vec![Landmark::new(
            0.0, 0.0, 0.0,
        )]));
        assert_eq!(one.verbose(), "1 pose, ");

        let lost = PoseResult {
            poses: vec![None, None],
            masks: None,
        };
        assert_eq!(lost.verbose(), "(no detections), ");
    }

    #[test]
    fn test_masks_len() {
        let masks = Masks::new(Array3::zeros((2, 4, 4)));
        assert_eq!(masks.len(), 2);
        assert!(!masks.is_empty());
    }
}
