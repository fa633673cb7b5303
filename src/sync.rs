// Pose Overlay 🚀 AGPL-3.0 License

//! Latest-result-wins synchronization between detector and renderer.
//!
//! The detection pipeline publishes results at its own cadence, possibly much
//! faster or slower than the render tick. [`ResultSynchronizer`] is a
//! single-slot overwrite buffer: each publish replaces the previous snapshot,
//! and the consumer pulls at most once per tick. If the producer publishes
//! twice between ticks, the first result is silently dropped: the consumer
//! never works through a backlog, at the cost of losing intermediate frames.

use std::sync::Mutex;

use crate::landmark::PoseResult;

/// Shared snapshot slot guarded by the synchronizer lock.
#[derive(Debug, Default)]
struct SyncSnapshot {
    /// Most recently published result.
    result: PoseResult,
    /// True iff a publish has occurred since the last successful consume.
    stale: bool,
}

/// Thread-safe single-slot buffer decoupling an asynchronous producer from a
/// periodic consumer.
///
/// Both operations take the same lock; the critical section is bounded to the
/// copy/swap of the snapshot and never includes caller-side processing. Wrap
/// in an `Arc` to share between the producer and consumer contexts.
///
/// # Example
///
/// ```
/// use pose_overlay::{PoseResult, ResultSynchronizer};
///
/// let sync = ResultSynchronizer::new();
/// sync.publish(&PoseResult::new());
///
/// let mut held = PoseResult::new();
/// assert!(sync.consume_if_stale(&mut held));
/// assert!(!sync.consume_if_stale(&mut held));
/// ```
#[derive(Debug, Default)]
pub struct ResultSynchronizer {
    snapshot: Mutex<SyncSnapshot>,
}

impl ResultSynchronizer {
    /// Create a synchronizer with an empty, non-stale snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new result from the producer context.
    ///
    /// The result is deep-copied inside the critical section, so the producer
    /// may reuse or mutate its own buffers as soon as this returns. An empty
    /// result ("no detections this tick") is a valid publish and still marks
    /// the snapshot stale.
    ///
    /// # Arguments
    ///
    /// * `result` - The latest detection output.
    pub fn publish(&self, result: &PoseResult) {
        let mut snapshot = self.snapshot.lock().unwrap_or_else(|e| e.into_inner());
        snapshot.result.clone_from(result);
        snapshot.stale = true;
    }

    /// Pull the latest snapshot into a consumer-owned buffer, once per tick.
    ///
    /// If nothing was published since the last consume, returns `false` and
    /// leaves `out` untouched so the consumer can keep rendering its previous
    /// state.
    ///
    /// # Arguments
    ///
    /// * `out` - Consumer-owned buffer the snapshot is copied into.
    ///
    /// # Returns
    ///
    /// * `true` if new data was copied into `out`.
    pub fn consume_if_stale(&self, out: &mut PoseResult) -> bool {
        let mut snapshot = self.snapshot.lock().unwrap_or_else(|e| e.into_inner());
        if !snapshot.stale {
            return false;
        }
        out.clone_from(&snapshot.result);
        snapshot.stale = false;
        true
    }

    /// Check whether an unconsumed publish is pending.
    ///
    /// Diagnostic only; the answer may be outdated by the time it is used.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.snapshot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .stale
    }
}
