// Pose Overlay 🚀 AGPL-3.0 License

#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Pose Overlay
//!
//! Real-time human-pose visualization layer for an external pose-detection
//! pipeline. Detection results arrive asynchronously at the producer's
//! cadence; the overlay renders on its own tick without tearing, without
//! unbounded queueing, and with optional temporal smoothing to suppress
//! jitter.
//!
//! ## Core pipeline
//!
//! - [`ResultSynchronizer`]: a thread-safe, latest-result-wins snapshot
//!   buffer. Publishing overwrites; consuming pulls at most once per tick.
//!   Intermediate results between ticks are deliberately dropped (coalescing
//!   backpressure), so the consumer never falls behind a backlog.
//! - [`LandmarkSmoother`] / [`PoseSmoother`]: exponential-moving-average
//!   smoothing applied per landmark and per channel on the consumer side,
//!   with pass-through on first frame, shape change, or missing data.
//!
//! Data flow: producer → `publish` → \[consumer tick\] → `consume_if_stale` →
//! smoother → rendering.
//!
//! ## Quick Start
//!
//! ```
//! use pose_overlay::{OverlayConfig, OverlayPipeline, PoseResult};
//!
//! let mut pipeline = OverlayPipeline::new(&OverlayConfig::new().with_alpha(0.3));
//!
//! // Producer context (detection pipeline) holds a publisher handle:
//! let publisher = pipeline.publisher();
//! publisher.publish(&PoseResult::new());
//!
//! // Consumer context (render tick):
//! if pipeline.tick() {
//!     let smoothed = pipeline.current();
//!     // draw `smoothed` ...
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`landmark`] | Data model ([`Landmark`], [`LandmarkSet`], [`PoseResult`]) |
//! | [`sync`] | Producer/consumer synchronization ([`ResultSynchronizer`]) |
//! | [`smoothing`] | EMA temporal smoothing ([`LandmarkSmoother`], [`PoseSmoother`]) |
//! | [`pipeline`] | Consumer-side composition ([`OverlayPipeline`], [`OverlayConfig`]) |
//! | [`export`] | Frame recording and CSV export ([`PoseRecorder`]) |
//! | [`annotate`] | Skeleton/keypoint drawing onto images |
//! | [`visualizer`] | Colors, landmark topology, window viewer |
//! | [`error`] | Error types ([`OverlayError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `annotate` | Image annotation support (default) |
//! | `visualize` | Real-time window display (default) |

// Modules
#[cfg(feature = "annotate")]
pub mod annotate;
pub mod cli;
pub mod error;
pub mod export;
pub mod landmark;
pub mod pipeline;
pub mod smoothing;
pub mod sync;
pub mod visualizer;

// Re-export main types for convenience
pub use error::{OverlayError, Result};
pub use export::{CoordType, PoseRecorder, RecordedFrame};
pub use landmark::{Landmark, LandmarkSet, Masks, PoseResult};
pub use pipeline::{FrameStats, OverlayConfig, OverlayPipeline};
pub use smoothing::{LandmarkSmoother, PoseSmoother};
pub use sync::ResultSynchronizer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pose-overlay");
    }
}
