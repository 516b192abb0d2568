//! Frame composition
//!
//! Turns the interpolated [`FaceParams`] plus the per-tick [`EyelidState`]
//! into a fully resolved [`FaceFrame`] and rasterizes it.
//!
//! Rasterization order is an invariant here: each eye is drawn before its
//! eyelid, because on a 1-bit canvas the lid occludes by erasing pixels, not
//! by layering. Reordering would make lids invisible.

use crate::face::layout::FaceLayout;
use crate::face::style::{FaceParams, Style};
use crate::framebuffer::Framebuffer;
use crate::raster;

/// Pose of one eyelid for the frame about to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LidPose {
    /// Fraction of the eye box occluded from the top, 0..=100
    pub coverage_x100: i16,
    /// Shear of the lid's bottom edge
    pub slope_x100: i16,
}

/// Effective eyelid poses for the current tick
///
/// Owned by the controller and rewritten once per tick: the base expression
/// coverage first, then any in-flight blink layered on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EyelidState {
    pub left: LidPose,
    pub right: LidPose,
}

/// One resolved eye: a center, a half-extent and a lid
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EyeFrame {
    pub cx: i32,
    pub cy: i32,
    pub half: i32,
    pub lid: LidPose,
}

impl EyeFrame {
    /// Inclusive pixel box of the eye, also the lid clip region
    pub const fn bounds(&self) -> (i32, i32, i32, i32) {
        (
            self.cx - self.half,
            self.cy - self.half,
            self.cx + self.half,
            self.cy + self.half,
        )
    }
}

/// Resolved mouth geometry
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouthFrame {
    /// Straight line mouth at zero curvature
    Flat { x: i32, y: i32, w: i32 },
    /// Bézier mouth; `amplitude` is signed, negative for a frown
    Curve {
        p0: (i32, i32),
        p1: (i32, i32),
        p2: (i32, i32),
        offset_y: i32,
    },
}

/// One eyebrow as a line segment
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrowFrame {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

/// Fully resolved draw list for one tick
///
/// Built fresh each tick from the current parameters and consumed
/// immediately by [`FaceFrame::render`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceFrame {
    pub style: Style,
    pub left_eye: EyeFrame,
    pub right_eye: EyeFrame,
    pub brows: Option<[BrowFrame; 2]>,
    pub mouth: MouthFrame,
    /// Face outline circle, when enabled
    pub border: Option<(i32, i32, i32)>,
}

impl FaceFrame {
    /// Resolve draw parameters from the interpolated state
    pub fn compose(
        style: Style,
        layout: &FaceLayout,
        params: &FaceParams,
        lids: &EyelidState,
        border: bool,
    ) -> Self {
        let (lx, ly) = layout.left_eye();
        let (rx, ry) = layout.right_eye();
        let left_eye = EyeFrame {
            cx: lx,
            cy: ly,
            half: eye_half(layout.eye_radius, params.left_eye_scale_x100),
            lid: lids.left,
        };
        let right_eye = EyeFrame {
            cx: rx,
            cy: ry,
            half: eye_half(layout.eye_radius, params.right_eye_scale_x100),
            lid: lids.right,
        };

        let amplitude = layout.mouth_height * params.mouth_curve_x100 as i32 / 100;
        let mouth = if amplitude == 0 {
            MouthFrame::Flat {
                x: layout.cx - layout.mouth_width / 2,
                y: layout.mouth_y,
                w: layout.mouth_width,
            }
        } else {
            let reach = 2 * layout.eye_radius;
            MouthFrame::Curve {
                p0: (layout.cx - reach, layout.mouth_y - amplitude),
                p1: (layout.cx, layout.mouth_y + amplitude),
                p2: (layout.cx + reach, layout.mouth_y - amplitude),
                offset_y: amplitude / 2,
            }
        };

        let brows = if params.brow_slope_x100 != 0 {
            let dy = layout.brow_len * params.brow_slope_x100 as i32 / 100;
            let dx = layout.brow_len;
            let inner = layout.radius * 30 / 100;
            let brow_y = ly - layout.eye_radius - layout.radius / 10;
            let left_x = lx + inner;
            let right_x = rx - inner;
            Some([
                BrowFrame {
                    from: (left_x, brow_y),
                    to: (left_x - dx, brow_y - dy),
                },
                BrowFrame {
                    from: (right_x, brow_y),
                    to: (right_x + dx, brow_y - dy),
                },
            ])
        } else {
            None
        };

        Self {
            style,
            left_eye,
            right_eye,
            brows,
            mouth,
            border: border.then_some((layout.cx, layout.cy, layout.radius)),
        }
    }

    /// Draw the frame into a cleared framebuffer
    pub fn render(&self, fb: &mut Framebuffer) {
        if let Some((cx, cy, r)) = self.border {
            raster::draw_circle(fb, cx, cy, r, true);
        }

        // Eye first, lid second: the lid erases
        for eye in [&self.left_eye, &self.right_eye] {
            draw_eye(fb, self.style, eye);
            raster::draw_eyelid(
                fb,
                eye.bounds(),
                eye.lid.coverage_x100 as i32,
                eye.lid.slope_x100 as i32,
            );
        }

        if let Some(brows) = &self.brows {
            for brow in brows {
                raster::line(fb, brow.from.0, brow.from.1, brow.to.0, brow.to.1, true);
            }
        }

        match self.mouth {
            MouthFrame::Flat { x, y, w } => raster::hline(fb, x, y, w, true),
            MouthFrame::Curve { p0, p1, p2, offset_y } => {
                raster::quad_bezier(fb, p0, p1, p2, offset_y, true)
            }
        }
    }
}

/// Scaled eye half-extent, clamped to stay drawable
fn eye_half(nominal: i32, scale_x100: i16) -> i32 {
    (nominal * scale_x100 as i32 / 100).max(1)
}

/// Geometry family applied to one eye
fn draw_eye(fb: &mut Framebuffer, style: Style, eye: &EyeFrame) {
    let (x0, y0, x1, y1) = eye.bounds();
    match style {
        Style::Smile => raster::fill_circle(fb, eye.cx, eye.cy, eye.half, true),
        Style::RoboRound => raster::fill_rounded_rect(fb, x0, y0, x1, y1, (eye.half + 1) / 2, true),
        Style::RoboQuad => raster::fill_rounded_rect(fb, x0, y0, x1, y1, eye.half / 4, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::style::Expression;

    fn neutral_frame(style: Style, lids: EyelidState) -> FaceFrame {
        let layout = FaceLayout::new();
        let params = FaceParams::resting(Expression::Neutral);
        FaceFrame::compose(style, &layout, &params, &lids, false)
    }

    #[test]
    fn test_open_eye_renders_pixels() {
        let mut fb = Framebuffer::new();
        let frame = neutral_frame(Style::Smile, EyelidState::default());
        frame.render(&mut fb);
        let eye = frame.left_eye;
        assert!(fb.get_pixel(eye.cx, eye.cy));
    }

    #[test]
    fn test_closed_lid_erases_eye() {
        let mut fb = Framebuffer::new();
        let closed = LidPose {
            coverage_x100: 100,
            slope_x100: 0,
        };
        let frame = neutral_frame(
            Style::RoboRound,
            EyelidState {
                left: closed,
                right: closed,
            },
        );
        frame.render(&mut fb);
        let (x0, y0, x1, y1) = frame.left_eye.bounds();
        for y in y0..=y1 {
            for x in x0..=x1 {
                assert!(!fb.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_each_style_fills_eye_center() {
        for style in [Style::Smile, Style::RoboRound, Style::RoboQuad] {
            let mut fb = Framebuffer::new();
            let frame = neutral_frame(style, EyelidState::default());
            frame.render(&mut fb);
            let eye = frame.right_eye;
            assert!(fb.get_pixel(eye.cx, eye.cy), "{:?}", style);
        }
    }

    #[test]
    fn test_angry_params_grow_brows_and_frown() {
        let layout = FaceLayout::new();
        let params = FaceParams::resting(Expression::Angry);
        let frame = FaceFrame::compose(
            Style::Smile,
            &layout,
            &params,
            &EyelidState::default(),
            false,
        );
        assert!(frame.brows.is_some());
        match frame.mouth {
            MouthFrame::Curve { p0, p1, .. } => assert!(p1.1 < p0.1, "frown curves down"),
            MouthFrame::Flat { .. } => panic!("angry mouth should curve"),
        }
    }

    #[test]
    fn test_border_uses_face_radius() {
        let layout = FaceLayout::new();
        let params = FaceParams::resting(Expression::Neutral);
        let frame = FaceFrame::compose(
            Style::Smile,
            &layout,
            &params,
            &EyelidState::default(),
            true,
        );
        assert_eq!(frame.border, Some((layout.cx, layout.cy, layout.radius)));
    }
}
