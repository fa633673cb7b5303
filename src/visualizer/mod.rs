// Pose Overlay 🚀 AGPL-3.0 License

//! Visualization tools for the pose overlay.

/// Color definitions, palettes, and the confidence ramp.
pub mod color;

/// Landmark topology and reference-pose constants.
pub mod skeleton;

#[cfg(feature = "visualize")]
pub mod viewer;

pub use color::Color;

#[cfg(feature = "visualize")]
pub use viewer::Viewer;
