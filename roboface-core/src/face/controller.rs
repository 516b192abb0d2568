//! Face controller
//!
//! Owns every piece of mutable render state: the framebuffer, the eyelid
//! state, the current/target expression parameters and the blink script
//! position. One `tick()` computes one frame, draws it and flushes it, all
//! synchronously on the calling thread.

use crate::face::layout::FaceLayout;
use crate::face::model::{EyelidState, FaceFrame, LidPose};
use crate::face::style::{Easing, Expression, FaceParams, Style};
use crate::framebuffer::Framebuffer;

/// Seam between the controller and a display driver
///
/// `flush` mirrors the framebuffer to the panel; it reads the buffer and
/// must never mutate it. Drivers surface their transport error type here.
pub trait Panel {
    type Error;

    fn flush(&mut self, fb: &Framebuffer) -> Result<(), Self::Error>;
}

/// Which eyes a blink closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkTarget {
    Left,
    Right,
    Both,
}

impl BlinkTarget {
    const fn covers_left(&self) -> bool {
        matches!(self, BlinkTarget::Left | BlinkTarget::Both)
    }

    const fn covers_right(&self) -> bool {
        matches!(self, BlinkTarget::Right | BlinkTarget::Both)
    }
}

/// Default blink: coverage sweep 0 → 1 → 0 over five ticks
pub const DEFAULT_BLINK_SCRIPT: &[i16] = &[0, 50, 100, 50, 0];

/// Controller configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Draw the face outline circle
    pub border: bool,
    /// Per-tick lid coverage values (×100) of a blink
    pub blink_script: &'static [i16],
    /// Curve applied to expression transitions
    pub easing: Easing,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            border: false,
            blink_script: DEFAULT_BLINK_SCRIPT,
            easing: Easing::Linear,
        }
    }
}

/// In-flight expression morph
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: FaceParams,
    tick: u16,
    total: u16,
}

/// In-flight blink: index into the script, advanced each tick
#[derive(Debug, Clone, Copy)]
struct Blink {
    index: usize,
    eyes: BlinkTarget,
}

/// Top-level face animation driver
///
/// Not internally synchronized: drive `tick()` from a single loop.
pub struct FaceController<P: Panel> {
    panel: P,
    fb: Framebuffer,
    layout: FaceLayout,
    config: FaceConfig,
    style: Style,
    expression: Expression,
    /// Possibly mid-transition parameter values of the last tick
    current: FaceParams,
    target: FaceParams,
    transition: Option<Transition>,
    blink: Option<Blink>,
    lids: EyelidState,
}

impl<P: Panel> FaceController<P> {
    /// Create a controller with the default configuration
    pub fn new(panel: P, style: Style) -> Self {
        Self::with_config(panel, style, FaceConfig::default())
    }

    /// Create a controller with an explicit configuration
    pub fn with_config(panel: P, style: Style, config: FaceConfig) -> Self {
        let resting = FaceParams::resting(Expression::Neutral);
        Self {
            panel,
            fb: Framebuffer::new(),
            layout: FaceLayout::new(),
            config,
            style,
            expression: Expression::Neutral,
            current: resting,
            target: resting,
            transition: None,
            blink: None,
            lids: EyelidState::default(),
        }
    }

    /// Switch the geometry family
    ///
    /// Expression parameters are untouched, so an in-flight transition
    /// carries on without a jump; only the eye primitive changes.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Morph toward an expression over `transition_ticks` ticks
    ///
    /// Interpolation restarts from the current (possibly partially
    /// interpolated) values, never from the old resting pose, so retargeting
    /// mid-transition cannot pop. Zero ticks jumps immediately.
    pub fn set_expression(&mut self, expression: Expression, transition_ticks: u16) {
        self.expression = expression;
        self.target = FaceParams::resting(expression);
        if transition_ticks == 0 {
            self.current = self.target;
            self.transition = None;
        } else {
            self.transition = Some(Transition {
                from: self.current,
                tick: 0,
                total: transition_ticks,
            });
        }
    }

    /// Start a scripted blink on the next tick
    ///
    /// The blink layers over the base expression: effective coverage is the
    /// maximum of the script value and the expression's own coverage, so it
    /// settles back on the expression, not on fully open.
    pub fn blink(&mut self, eyes: BlinkTarget) {
        self.blink = Some(Blink { index: 0, eyes });
    }

    /// Advance animation by one step, render and flush one frame
    pub fn tick(&mut self) -> Result<(), P::Error> {
        self.advance_transition();
        self.resolve_lids();

        let frame = FaceFrame::compose(
            self.style,
            &self.layout,
            &self.current,
            &self.lids,
            self.config.border,
        );
        self.fb.clear();
        frame.render(&mut self.fb);
        self.panel.flush(&self.fb)
    }

    fn advance_transition(&mut self) {
        if let Some(tr) = &mut self.transition {
            tr.tick += 1;
            let (num, den) = self.config.easing.apply(tr.tick, tr.total);
            self.current = FaceParams::lerp(&tr.from, &self.target, num, den);
            if tr.tick >= tr.total {
                self.transition = None;
            }
        }
    }

    /// Rebuild the eyelid state: expression base, then blink overlay
    fn resolve_lids(&mut self) {
        self.lids = EyelidState {
            left: LidPose {
                coverage_x100: self.current.left_lid_coverage_x100,
                slope_x100: self.current.left_lid_slope_x100,
            },
            right: LidPose {
                coverage_x100: self.current.right_lid_coverage_x100,
                slope_x100: self.current.right_lid_slope_x100,
            },
        };

        if let Some(blink) = &mut self.blink {
            let eyes = blink.eyes;
            let value = self.config.blink_script[blink.index];
            if eyes.covers_left() {
                self.lids.left.coverage_x100 = self.lids.left.coverage_x100.max(value);
            }
            if eyes.covers_right() {
                self.lids.right.coverage_x100 = self.lids.right.coverage_x100.max(value);
            }
            blink.index += 1;
            if blink.index >= self.config.blink_script.len() {
                self.blink = None;
            }
        }
    }

    /// Parameters drawn on the last tick (mid-transition values included)
    pub fn params(&self) -> &FaceParams {
        &self.current
    }

    /// Eyelid poses drawn on the last tick
    pub fn eyelids(&self) -> &EyelidState {
        &self.lids
    }

    /// The framebuffer as of the last tick
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn expression(&self) -> Expression {
        self.expression
    }

    /// Access the panel, e.g. for contrast or power passthroughs
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }
}
