// Pose Overlay 🚀 AGPL-3.0 License

/// Color type for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Color = Color(255, 0, 0);
    /// Green color.
    pub const GREEN: Color = Color(0, 255, 0);
    /// Blue color.
    pub const BLUE: Color = Color(0, 0, 255);
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Get a color from the pose palette by index.
    #[must_use]
    pub const fn from_pose_index(index: usize) -> Self {
        let color = POSE_COLORS[index % POSE_COLORS.len()];
        Self(color[0], color[1], color[2])
    }
}

/// Pose Color Palette
pub const POSE_COLORS: [[u8; 3]; 20] = [
    [255, 128, 0],   // #ff8000
    [255, 153, 51],  // #ff9933
    [255, 178, 102], // #ffb266
    [230, 230, 0],   // #e6e600
    [255, 153, 255], // #ff99ff
    [153, 204, 255], // #99ccff
    [255, 102, 255], // #ff66ff
    [255, 51, 255],  // #ff33ff
    [102, 178, 255], // #66b2ff
    [51, 153, 255],  // #3399ff
    [255, 153, 153], // #ff9999
    [255, 102, 102], // #ff6666
    [255, 51, 51],   // #ff3333
    [153, 255, 153], // #99ff99
    [102, 255, 102], // #66ff66
    [51, 255, 51],   // #33ff33
    [0, 255, 0],     // #00ff00
    [0, 0, 255],     // #0000ff
    [255, 0, 0],     // #ff0000
    [255, 255, 255], // #ffffff
];

/// Map a confidence value in [0, 1] to a red→yellow→green ramp.
///
/// Out-of-range inputs are clamped. Confidence 0 is pure red, 0.5 is yellow,
/// 1 is pure green, so low-confidence landmarks stand out when drawn.
#[must_use]
pub fn confidence_ramp(confidence: f32) -> Color {
    let c = confidence.clamp(0.0, 1.0);
    if c < 0.5 {
        // red -> yellow: ramp green up
        let t = c * 2.0;
        Color(255, (t * 255.0).round() as u8, 0)
    } else {
        // yellow -> green: ramp red down
        let t = (c - 0.5) * 2.0;
        Color(255 - (t * 255.0).round() as u8, 255, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(confidence_ramp(0.0), Color::RED);
        assert_eq!(confidence_ramp(0.5), Color(255, 255, 0));
        assert_eq!(confidence_ramp(1.0), Color::GREEN);
    }

    #[test]
    fn test_ramp_clamps() {
        assert_eq!(confidence_ramp(-2.0), Color::RED);
        assert_eq!(confidence_ramp(7.0), Color::GREEN);
    }

    #[test]
    fn test_pose_palette_wraps() {
        assert_eq!(Color::from_pose_index(0), Color::from_pose_index(20));
    }
}
