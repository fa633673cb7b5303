// Pose Overlay 🚀 AGPL-3.0 License

//! Window viewer for displaying the live overlay.

use image::DynamicImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{OverlayError, Result};

/// A simple overlay window using minifb.
///
/// Closing the window or pressing Escape/Q ends the display; `update`
/// reports this through its return value rather than an error.
pub struct Viewer {
    window: Window,
    /// Current buffer width in pixels.
    pub width: usize,
    /// Current buffer height in pixels.
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| OverlayError::VisualizerError(format!("Failed to create window: {e}")))?;

        // 60 fps cap; rendering cadence itself is the caller's tick
        window.set_target_fps(60);

        Ok(Self {
            window,
            width,
            height,
            buffer: Vec::new(),
        })
    }

    /// Update the window with a new frame.
    ///
    /// # Returns
    ///
    /// * `Ok(false)` once the user closed the window or pressed Escape/Q.
    ///
    /// # Errors
    ///
    /// Returns an error if the window buffer update fails.
    pub fn update(&mut self, image: &DynamicImage) -> Result<bool> {
        if !self.is_open() {
            return Ok(false);
        }

        let (img_width, img_height) = (image.width() as usize, image.height() as usize);
        let num_pixels = img_width * img_height;
        if self.buffer.len() != num_pixels {
            self.buffer.resize(num_pixels, 0);
        }

        // minifb expects one u32 per pixel, packed 0x00RRGGBB
        let rgb = image.to_rgb8();
        for (i, pixel) in rgb.pixels().enumerate() {
            let r = u32::from(pixel[0]);
            let g = u32::from(pixel[1]);
            let b = u32::from(pixel[2]);
            self.buffer[i] = (r << 16) | (g << 8) | b;
        }

        self.width = img_width;
        self.height = img_height;

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| OverlayError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Check whether the window is still open and not dismissed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.window.is_open()
            && !self.window.is_key_down(Key::Escape)
            && !self.window.is_key_down(Key::Q)
    }

    /// Keep the last frame on screen for a duration, staying responsive.
    ///
    /// # Returns
    ///
    /// * `Ok(false)` if the window was dismissed during the wait.
    ///
    /// # Errors
    ///
    /// This function currently cannot fail; the `Result` mirrors `update`.
    pub fn wait(&mut self, duration: std::time::Duration) -> Result<bool> {
        if self.buffer.is_empty() {
            return Ok(true);
        }

        let start = std::time::Instant::now();
        while start.elapsed() < duration {
            if !self.is_open() {
                return Ok(false);
            }
            // Re-present the held buffer so the image persists; the target
            // fps cap keeps this loop from spinning.
            let _ = self
                .window
                .update_with_buffer(&self.buffer, self.width, self.height);
        }
        Ok(true)
    }
}
