// Pose Overlay 🚀 AGPL-3.0 License

//! Temporal smoothing of landmark streams.
//!
//! A first-order exponential moving average applied per landmark index and
//! per channel: `smoothed = α·current + (1−α)·previous`. α = 1 disables
//! smoothing, α → 0 freezes the output at the previous state. The filter is
//! recursive: frame N blends against frame N−1's *output*, not its raw input.
//!
//! All degenerate inputs (first frame, empty set, landmark-count change,
//! absent slots, partially-present confidence channels) resolve to defined
//! pass-through behavior; there is no invalid input.

use crate::landmark::{Landmark, LandmarkSet, PoseResult};

/// Blend one optional confidence channel.
///
/// A true blend only happens when both operands carry the channel; otherwise
/// whichever value is present passes through, preserving the presence signal
/// instead of interpolating through a missing sample.
fn blend_channel(current: Option<f32>, previous: Option<f32>, alpha: f32) -> Option<f32> {
    match (current, previous) {
        (Some(c), Some(p)) => Some(alpha * c + (1.0 - alpha) * p),
        (Some(c), None) => Some(c),
        (None, Some(p)) => Some(p),
        (None, None) => None,
    }
}

/// EMA smoothing filter for a single subject's landmark stream.
///
/// Owned exclusively by the consumer context; holds no shared state.
///
/// # Example
///
/// ```
/// use pose_overlay::{Landmark, LandmarkSet, LandmarkSmoother};
///
/// let mut smoother = LandmarkSmoother::new(0.3);
/// let first = LandmarkSet::from_landmarks(vec![Landmark::new(1.0, 2.0, 3.0)]);
/// // First frame passes through and seeds the filter state
/// assert_eq!(smoother.update(&first), first);
/// ```
#[derive(Debug, Clone)]
pub struct LandmarkSmoother {
    alpha: f32,
    previous: Option<LandmarkSet>,
}

impl LandmarkSmoother {
    /// Create a smoother with the given smoothing factor.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing factor, clamped to [0, 1]. 1 = no smoothing,
    ///   0 = maximum smoothing.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            previous: None,
        }
    }

    /// Get the current smoothing factor.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Change the smoothing factor, clamped to [0, 1].
    ///
    /// Takes effect on the next [`update`](Self::update); filter state is kept.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Check whether the filter has seeded state.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.previous.is_some()
    }

    /// Clear stored state; the next update behaves as a first frame.
    ///
    /// Idempotent: resetting twice is the same as resetting once.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Smooth one frame of landmarks.
    ///
    /// Pass-through (input returned unchanged, state seeded verbatim) when the
    /// filter is uninitialized, the landmark count changed, or `current` is
    /// empty. Otherwise each slot blends positionally against the previous
    /// output; a slot absent on either side passes the present one through,
    /// and each confidence channel blends independently. The output carries
    /// `current`'s display names and becomes the new stored state.
    ///
    /// # Arguments
    ///
    /// * `current` - The newly synchronized landmark set.
    ///
    /// # Returns
    ///
    /// * The smoothed landmark set.
    pub fn update(&mut self, current: &LandmarkSet) -> LandmarkSet {
        let previous = match self.previous.take() {
            Some(prev) if prev.len() == current.len() && !current.is_empty() => prev,
            _ => {
                self.previous = Some(current.clone());
                return current.clone();
            }
        };

        let landmarks = current
            .landmarks
            .iter()
            .zip(previous.landmarks.iter())
            .map(|(cur, prev)| match (cur, prev) {
                (Some(c), Some(p)) => Some(self.blend(c, p)),
                (Some(c), None) => Some(c.clone()),
                (None, Some(p)) => Some(p.clone()),
                (None, None) => None,
            })
            .collect();

        let output = LandmarkSet { landmarks };
        self.previous = Some(output.clone());
        output
    }

    /// Blend two present landmarks into a new output landmark.
    fn blend(&self, current: &Landmark, previous: &Landmark) -> Landmark {
        let a = self.alpha;
        Landmark {
            x: a * current.x + (1.0 - a) * previous.x,
            y: a * current.y + (1.0 - a) * previous.y,
            z: a * current.z + (1.0 - a) * previous.z,
            visibility: blend_channel(current.visibility, previous.visibility, a),
            presence: blend_channel(current.presence, previous.presence, a),
            name: current.name.clone(),
        }
    }
}

/// Multi-instance smoothing across every subject in a [`PoseResult`].
///
/// Correspondence is positional: instance `i` this frame blends against
/// instance `i`'s previous output. No identity tracking is performed, so if
/// the producer reorders subjects between frames, unrelated subjects' data
/// will blend. An absent instance slot passes through as `None` and leaves
/// its filter state untouched. Masks are cloned through unprocessed.
#[derive(Debug, Clone)]
pub struct PoseSmoother {
    alpha: f32,
    slots: Vec<LandmarkSmoother>,
}

impl PoseSmoother {
    /// Create a multi-instance smoother.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing factor, clamped to [0, 1], applied to every slot.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            slots: Vec::new(),
        }
    }

    /// Get the current smoothing factor.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Change the smoothing factor for all instance slots.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
        for slot in &mut self.slots {
            slot.set_alpha(alpha);
        }
    }

    /// Clear all instance state; every slot behaves as a first frame next.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Smooth one frame across all instances.
    ///
    /// # Arguments
    ///
    /// * `current` - The newly synchronized multi-instance result.
    ///
    /// # Returns
    ///
    /// * A result with each present instance smoothed and masks passed through.
    pub fn update(&mut self, current: &PoseResult) -> PoseResult {
        // Positional slots: grow for new instances, drop state for vanished ones.
        if self.slots.len() != current.poses.len() {
            self.slots
                .resize_with(current.poses.len(), || LandmarkSmoother::new(self.alpha));
        }

        let poses = current
            .poses
            .iter()
            .zip(self.slots.iter_mut())
            .map(|(instance, slot)| instance.as_ref().map(|set| slot.update(set)))
            .collect();

        PoseResult {
            poses,
            masks: current.masks.clone(),
        }
    }
}
