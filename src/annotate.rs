// Pose Overlay 🚀 AGPL-3.0 License

//! Drawing the pose overlay onto images.

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use std::path::Path;

use crate::landmark::{Landmark, LandmarkSet, PoseResult};
use crate::pipeline::OverlayConfig;
use crate::visualizer::color::{Color, confidence_ramp};
use crate::visualizer::skeleton::{CONNECTION_COLOR_INDICES, POSE_CONNECTIONS};

/// Options controlling how the overlay is drawn.
#[derive(Debug, Clone)]
pub struct AnnotateOptions {
    /// Keypoint circle radius in pixels.
    pub point_radius: i32,
    /// Landmarks with visibility below this are not drawn. Landmarks without
    /// a visibility channel are always drawn.
    pub visibility_threshold: f32,
    /// Color keypoints by their visibility (confidence ramp) instead of the
    /// fixed pose palette.
    pub color_by_confidence: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            point_radius: 3,
            visibility_threshold: 0.5,
            color_by_confidence: true,
        }
    }
}

impl From<&OverlayConfig> for AnnotateOptions {
    /// Derive drawing options from a pipeline configuration, carrying its
    /// visibility threshold.
    fn from(config: &OverlayConfig) -> Self {
        Self {
            visibility_threshold: config.visibility_threshold,
            ..Self::default()
        }
    }
}

/// Check whether a landmark should be drawn under the given options.
fn is_drawable(landmark: &Landmark, opts: &AnnotateOptions) -> bool {
    landmark
        .visibility
        .is_none_or(|v| v >= opts.visibility_threshold)
}

/// Convert a normalized landmark to pixel coordinates, clamped to the image.
fn to_pixel(landmark: &Landmark, width: u32, height: u32) -> (f32, f32) {
    let x = (landmark.x * width as f32).clamp(0.0, width.saturating_sub(1) as f32);
    let y = (landmark.y * height as f32).clamp(0.0, height.saturating_sub(1) as f32);
    (x, y)
}

const fn to_rgb(color: Color) -> Rgb<u8> {
    Rgb([color.0, color.1, color.2])
}

/// Draw one subject's skeleton and keypoints onto an RGB image buffer.
fn draw_landmark_set(img: &mut RgbImage, set: &LandmarkSet, opts: &AnnotateOptions) {
    let (width, height) = img.dimensions();

    // Connections first so keypoints render on top
    for (connection, &color_index) in POSE_CONNECTIONS.iter().zip(CONNECTION_COLOR_INDICES.iter())
    {
        let (Some(a), Some(b)) = (set.get(connection[0]), set.get(connection[1])) else {
            continue;
        };
        if !is_drawable(a, opts) || !is_drawable(b, opts) {
            continue;
        }
        let color = to_rgb(Color::from_pose_index(color_index));
        draw_line_segment_mut(
            img,
            to_pixel(a, width, height),
            to_pixel(b, width, height),
            color,
        );
    }

    for (index, slot) in set.iter().enumerate() {
        let Some(landmark) = slot.as_ref() else {
            continue;
        };
        if !is_drawable(landmark, opts) {
            continue;
        }
        let color = if opts.color_by_confidence {
            confidence_ramp(landmark.visibility.unwrap_or(1.0))
        } else {
            Color::from_pose_index(
                crate::visualizer::skeleton::LANDMARK_COLOR_INDICES
                    .get(index)
                    .copied()
                    .unwrap_or(0),
            )
        };
        let (x, y) = to_pixel(landmark, width, height);
        draw_filled_circle_mut(
            img,
            (x.round() as i32, y.round() as i32),
            opts.point_radius,
            to_rgb(color),
        );
    }
}

/// Annotate an image with every pose in a result.
///
/// Landmarks are interpreted as normalized image coordinates. Absent
/// instances and absent landmark slots are skipped silently.
///
/// # Arguments
///
/// * `image` - The frame to draw on (not modified).
/// * `result` - The (typically smoothed) pose result.
/// * `options` - Drawing options; `None` uses defaults.
///
/// # Returns
///
/// * A new annotated image.
#[must_use]
pub fn annotate_pose(
    image: &DynamicImage,
    result: &PoseResult,
    options: Option<&AnnotateOptions>,
) -> DynamicImage {
    let default_opts = AnnotateOptions::default();
    let opts = options.unwrap_or(&default_opts);

    let mut img = image.to_rgb8();
    for instance in result.poses.iter().flatten() {
        draw_landmark_set(&mut img, instance, opts);
    }
    DynamicImage::ImageRgb8(img)
}

/// Create a black canvas to draw a replayed overlay on when there is no
/// source footage.
#[must_use]
pub fn blank_canvas(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
}

/// Find the next available run directory (replay, replay2, replay3, etc.)
#[must_use]
pub fn find_next_run_dir(base: &str, prefix: &str) -> String {
    let base_path = Path::new(base);

    let first = base_path.join(prefix);
    if !first.exists() {
        return first.to_string_lossy().to_string();
    }

    for i in 2.. {
        let numbered = base_path.join(format!("{prefix}{i}"));
        if !numbered.exists() {
            return numbered.to_string_lossy().to_string();
        }
    }

    // Fallback (should never reach here)
    base_path.join(prefix).to_string_lossy().to_string()
}
