//! Pixel geometry of the face
//!
//! All positions and sizes derive from the panel dimensions once, at
//! controller construction. Ratios are percentages of the face radius.

use crate::framebuffer::{HEIGHT, WIDTH};

/// Fixed pixel geometry shared by every frame
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceLayout {
    /// Face center
    pub cx: i32,
    pub cy: i32,
    /// Face radius (border circle)
    pub radius: i32,
    /// Eye center offset from face center
    pub eye_offset_x: i32,
    pub eye_offset_y: i32,
    /// Nominal eye radius before expression scaling
    pub eye_radius: i32,
    /// Mouth extent and baseline
    pub mouth_width: i32,
    pub mouth_height: i32,
    pub mouth_y: i32,
    /// Eyebrow length
    pub brow_len: i32,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceLayout {
    /// Derive the layout from the panel dimensions
    pub const fn new() -> Self {
        let cx = WIDTH as i32 / 2;
        let cy = HEIGHT as i32 / 2;
        let min_side = if WIDTH < HEIGHT { WIDTH } else { HEIGHT } as i32;
        let radius = min_side * 95 / 100 / 2;
        Self {
            cx,
            cy,
            radius,
            eye_offset_x: radius * 45 / 100,
            eye_offset_y: radius * 35 / 100,
            eye_radius: radius / 6,
            mouth_width: radius * 80 / 100,
            mouth_height: radius * 20 / 100,
            mouth_y: cy + radius * 35 / 100,
            brow_len: radius / 2,
        }
    }

    /// Left eye center
    pub const fn left_eye(&self) -> (i32, i32) {
        (self.cx - self.eye_offset_x, self.cy - self.eye_offset_y)
    }

    /// Right eye center
    pub const fn right_eye(&self) -> (i32, i32) {
        (self.cx + self.eye_offset_x, self.cy - self.eye_offset_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_panel() {
        let layout = FaceLayout::new();
        assert!(layout.radius >= 1);
        assert!(layout.cy - layout.radius >= 0);
        assert!(layout.cy + layout.radius < HEIGHT as i32);
        assert!(layout.eye_radius >= 1);
        assert!(layout.mouth_y < HEIGHT as i32);
    }

    #[test]
    fn test_eyes_are_symmetric() {
        let layout = FaceLayout::new();
        let (lx, ly) = layout.left_eye();
        let (rx, ry) = layout.right_eye();
        assert_eq!(ly, ry);
        assert_eq!(rx - layout.cx, layout.cx - lx);
    }
}
