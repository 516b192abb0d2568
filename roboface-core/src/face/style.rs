//! Styles, expressions and the resting parameter table
//!
//! All numeric parameters are integer fixed point with an `_x100` suffix
//! (100 = 1.0). Eyelid tilt is a rise/run slope ×100 rather than an angle,
//! which is what the sheared lid quad consumes directly.

/// Geometry family of the face
///
/// A style selects which rasterizer primitive draws the eyes; it never
/// changes the expression parameters themselves, so switching styles
/// mid-transition cannot cause a parameter jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Style {
    /// Round eyes drawn as filled discs
    Smile,
    /// Rounded-rectangle eyes
    RoboRound,
    /// Near-square eyes with barely softened corners
    RoboQuad,
}

/// Emotional pose within a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expression {
    Neutral,
    Smile,
    Happy,
    Shocked,
    Angry,
}

/// Transition curve applied to the tick fraction before interpolation
///
/// Both variants are monotone between the endpoints and exact at t=0 and
/// t=1, so transitions never overshoot or pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Easing {
    Linear,
    /// 3t² − 2t³, slow-in/slow-out
    SmoothStep,
}

impl Easing {
    /// Map the raw fraction `tick/total` to an eased rational fraction
    pub fn apply(&self, tick: u16, total: u16) -> (i64, i64) {
        let (t, d) = (tick as i64, total as i64);
        match self {
            Easing::Linear => (t, d),
            Easing::SmoothStep => (t * t * (3 * d - 2 * t), d * d * d),
        }
    }
}

/// Resting numeric parameters of one expression
///
/// Every field interpolates independently and linearly during an expression
/// transition; the geometry family is applied afterwards by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceParams {
    /// Left eye radius scale (100 = nominal)
    pub left_eye_scale_x100: i16,
    /// Right eye radius scale (100 = nominal)
    pub right_eye_scale_x100: i16,
    /// Left eyelid coverage, 0 (open) to 100 (closed)
    pub left_lid_coverage_x100: i16,
    /// Right eyelid coverage, 0 (open) to 100 (closed)
    pub right_lid_coverage_x100: i16,
    /// Left eyelid shear; positive drops the lid toward the nose
    pub left_lid_slope_x100: i16,
    /// Right eyelid shear, mirrored
    pub right_lid_slope_x100: i16,
    /// Mouth curvature: positive smiles, negative frowns, 0 is flat
    pub mouth_curve_x100: i16,
    /// Eyebrow slope; brows are hidden at 0
    pub brow_slope_x100: i16,
}

/// tan(π/8) × 100, the angry brow/lid tilt
const ANGRY_SLOPE_X100: i16 = 41;

impl FaceParams {
    /// Resting parameter values for an expression
    ///
    /// One match arm per expression; adding an expression is adding a row
    /// here, not a new type.
    pub const fn resting(expression: Expression) -> Self {
        match expression {
            Expression::Neutral => Self {
                left_eye_scale_x100: 100,
                right_eye_scale_x100: 100,
                left_lid_coverage_x100: 0,
                right_lid_coverage_x100: 0,
                left_lid_slope_x100: 0,
                right_lid_slope_x100: 0,
                mouth_curve_x100: 0,
                brow_slope_x100: 0,
            },
            Expression::Smile => Self {
                left_eye_scale_x100: 100,
                right_eye_scale_x100: 100,
                left_lid_coverage_x100: 0,
                right_lid_coverage_x100: 0,
                left_lid_slope_x100: 0,
                right_lid_slope_x100: 0,
                mouth_curve_x100: 100,
                brow_slope_x100: 0,
            },
            // Smiling with both eyes squeezed shut
            Expression::Happy => Self {
                left_eye_scale_x100: 100,
                right_eye_scale_x100: 100,
                left_lid_coverage_x100: 100,
                right_lid_coverage_x100: 100,
                left_lid_slope_x100: 0,
                right_lid_slope_x100: 0,
                mouth_curve_x100: 100,
                brow_slope_x100: 0,
            },
            // One eye popped wide open
            Expression::Shocked => Self {
                left_eye_scale_x100: 100,
                right_eye_scale_x100: 200,
                left_lid_coverage_x100: 0,
                right_lid_coverage_x100: 0,
                left_lid_slope_x100: 0,
                right_lid_slope_x100: 0,
                mouth_curve_x100: 0,
                brow_slope_x100: 0,
            },
            Expression::Angry => Self {
                left_eye_scale_x100: 100,
                right_eye_scale_x100: 100,
                left_lid_coverage_x100: 40,
                right_lid_coverage_x100: 40,
                left_lid_slope_x100: ANGRY_SLOPE_X100,
                right_lid_slope_x100: -ANGRY_SLOPE_X100,
                mouth_curve_x100: -100,
                brow_slope_x100: ANGRY_SLOPE_X100,
            },
        }
    }

    /// Linear interpolation between two parameter sets
    ///
    /// `num/den` is the transition fraction. Exact at both endpoints and
    /// monotone in `num` for every field.
    pub fn lerp(from: &Self, to: &Self, num: i64, den: i64) -> Self {
        Self {
            left_eye_scale_x100: lerp_i16(from.left_eye_scale_x100, to.left_eye_scale_x100, num, den),
            right_eye_scale_x100: lerp_i16(from.right_eye_scale_x100, to.right_eye_scale_x100, num, den),
            left_lid_coverage_x100: lerp_i16(from.left_lid_coverage_x100, to.left_lid_coverage_x100, num, den),
            right_lid_coverage_x100: lerp_i16(from.right_lid_coverage_x100, to.right_lid_coverage_x100, num, den),
            left_lid_slope_x100: lerp_i16(from.left_lid_slope_x100, to.left_lid_slope_x100, num, den),
            right_lid_slope_x100: lerp_i16(from.right_lid_slope_x100, to.right_lid_slope_x100, num, den),
            mouth_curve_x100: lerp_i16(from.mouth_curve_x100, to.mouth_curve_x100, num, den),
            brow_slope_x100: lerp_i16(from.brow_slope_x100, to.brow_slope_x100, num, den),
        }
    }
}

fn lerp_i16(a: i16, b: i16, num: i64, den: i64) -> i16 {
    (a as i64 + (b as i64 - a as i64) * num / den) as i16
}
