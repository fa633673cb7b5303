// Pose Overlay 🚀 AGPL-3.0 License

//! Command-line interface for the overlay tools.

/// Argument definitions.
pub mod args;

/// Logging helpers and verbosity control.
pub mod logging;

/// The replay and reference commands.
#[cfg(feature = "annotate")]
pub mod replay;
