// Pose Overlay 🚀 AGPL-3.0 License

//! Consumer-side pipeline composition and configuration.
//!
//! [`OverlayPipeline`] wires the pieces together for the render tick:
//! ConsumeIfStale → smooth → expose. The producer side holds a clone of the
//! pipeline's [`ResultSynchronizer`] and publishes into it from its own
//! context; everything else in the pipeline is owned by the consumer.

use std::sync::Arc;
use std::time::Instant;

use crate::landmark::PoseResult;
use crate::smoothing::PoseSmoother;
use crate::sync::ResultSynchronizer;

/// Configuration for the overlay pipeline.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pose_overlay::OverlayConfig;
///
/// let config = OverlayConfig::new()
///     .with_alpha(0.3)
///     .with_smoothing(true)
///     .with_visibility_threshold(0.5);
/// ```
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// EMA smoothing factor (0.0 to 1.0); 1.0 disables smoothing entirely.
    pub alpha: f32,
    /// Whether temporal smoothing is applied at all.
    pub smoothing: bool,
    /// Visibility threshold carried into the drawing options when rendering.
    pub visibility_threshold: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            smoothing: true,
            visibility_threshold: 0.5,
        }
    }
}

impl OverlayConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smoothing factor (clamped to [0, 1] by the smoother).
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Enable or disable temporal smoothing.
    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the visibility threshold for rendering.
    #[must_use]
    pub const fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold;
        self
    }
}

/// Explicit per-pipeline diagnostics.
///
/// Owned by whoever owns the pipeline and passed around explicitly. There is
/// deliberately no process-wide counter state, so multiple pipelines can run
/// and be tested independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    /// Consumer ticks that observed new data.
    pub updated_ticks: u64,
    /// Consumer ticks that found nothing new.
    pub idle_ticks: u64,
    /// Time spent pulling the snapshot on the last updated tick (ms).
    pub sync_ms: Option<f64>,
    /// Time spent smoothing on the last updated tick (ms).
    pub smooth_ms: Option<f64>,
}

impl FrameStats {
    /// Total consumer ticks observed.
    #[must_use]
    pub const fn total_ticks(&self) -> u64 {
        self.updated_ticks + self.idle_ticks
    }
}

/// The consumer-side overlay pipeline.
///
/// `tick` is expected to be called once per render cycle from a single
/// consumer context. The smoother state is owned here and never shared.
pub struct OverlayPipeline {
    synchronizer: Arc<ResultSynchronizer>,
    smoother: PoseSmoother,
    smoothing: bool,
    raw: PoseResult,
    smoothed: PoseResult,
    stats: FrameStats,
}

impl OverlayPipeline {
    /// Create a pipeline from a configuration.
    #[must_use]
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            synchronizer: Arc::new(ResultSynchronizer::new()),
            smoother: PoseSmoother::new(config.alpha),
            smoothing: config.smoothing,
            raw: PoseResult::new(),
            smoothed: PoseResult::new(),
            stats: FrameStats::default(),
        }
    }

    /// Get a handle for the producer context to publish into.
    #[must_use]
    pub fn publisher(&self) -> Arc<ResultSynchronizer> {
        Arc::clone(&self.synchronizer)
    }

    /// Run one consumer tick: pull the latest snapshot and smooth it.
    ///
    /// # Returns
    ///
    /// * `true` if new data arrived this tick; `false` if the previously
    ///   held output is still current (callers may re-render it).
    pub fn tick(&mut self) -> bool {
        let sync_start = Instant::now();
        let updated = self.synchronizer.consume_if_stale(&mut self.raw);
        if !updated {
            self.stats.idle_ticks += 1;
            return false;
        }
        self.stats.sync_ms = Some(sync_start.elapsed().as_secs_f64() * 1000.0);

        let smooth_start = Instant::now();
        if self.smoothing {
            self.smoothed = self.smoother.update(&self.raw);
        } else {
            self.smoothed.clone_from(&self.raw);
        }
        self.stats.smooth_ms = Some(smooth_start.elapsed().as_secs_f64() * 1000.0);

        self.stats.updated_ticks += 1;
        true
    }

    /// The most recent smoothed output (possibly from an earlier tick).
    #[must_use]
    pub const fn current(&self) -> &PoseResult {
        &self.smoothed
    }

    /// Change the smoothing factor; effective on the next tick.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.smoother.set_alpha(alpha);
    }

    /// Reset the smoother; the next tick's data passes through unfiltered.
    pub fn reset_smoothing(&mut self) {
        self.smoother.reset();
    }

    /// Diagnostics for this pipeline.
    #[must_use]
    pub const fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{Landmark, LandmarkSet};

    fn result_at(x: f32) -> PoseResult {
        PoseResult::single(LandmarkSet::from_landmarks(vec![Landmark::new(
            x, 0.0, 0.0,
        )]))
    }

    #[test]
    fn test_config_builder() {
        let config = OverlayConfig::new()
            .with_alpha(0.3)
            .with_smoothing(false)
            .with_visibility_threshold(0.8);
        assert!((config.alpha - 0.3).abs() < f32::EPSILON);
        assert!(!config.smoothing);
        assert!((config.visibility_threshold - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_idle_tick_keeps_output() {
        let mut pipeline = OverlayPipeline::new(&OverlayConfig::new());
        assert!(!pipeline.tick());
        assert!(pipeline.current().is_empty());
        assert_eq!(pipeline.stats().idle_ticks, 1);
        assert_eq!(pipeline.stats().updated_ticks, 0);
    }

    #[test]
    fn test_tick_smooths_published_data() {
        let mut pipeline = OverlayPipeline::new(&OverlayConfig::new().with_alpha(0.5));
        let publisher = pipeline.publisher();

        publisher.publish(&result_at(0.0));
        assert!(pipeline.tick());

        publisher.publish(&result_at(4.0));
        assert!(pipeline.tick());

        let x = pipeline.current().poses[0].as_ref().unwrap().get(0).unwrap().x;
        assert!((x - 2.0).abs() < 1e-6);
        assert_eq!(pipeline.stats().updated_ticks, 2);
    }

    #[test]
    fn test_smoothing_disabled_passes_raw() {
        let mut pipeline = OverlayPipeline::new(&OverlayConfig::new().with_smoothing(false));
        let publisher = pipeline.publisher();

        publisher.publish(&result_at(0.0));
        pipeline.tick();
        publisher.publish(&result_at(4.0));
        pipeline.tick();

        let x = pipeline.current().poses[0].as_ref().unwrap().get(0).unwrap().x;
        assert!((x - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_forces_passthrough() {
        let mut pipeline = OverlayPipeline::new(&OverlayConfig::new().with_alpha(0.5));
        let publisher = pipeline.publisher();

        publisher.publish(&result_at(0.0));
        pipeline.tick();
        pipeline.reset_smoothing();

        publisher.publish(&result_at(4.0));
        pipeline.tick();

        let x = pipeline.current().poses[0].as_ref().unwrap().get(0).unwrap().x;
        assert!((x - 4.0).abs() < 1e-6);
    }
}
