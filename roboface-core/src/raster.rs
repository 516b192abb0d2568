//! Integer shape rasterizer
//!
//! All primitives work in whole-pixel coordinates and draw into a
//! [`Framebuffer`]. Shapes may extend past the panel edges; clipping happens
//! per pixel inside the framebuffer. Every loop is bounded by the shape's own
//! extent.

use heapless::Vec;

use crate::framebuffer::Framebuffer;

/// Maximum scanline crossings for polygon fill (a quad has at most 4)
const MAX_CROSSINGS: usize = 8;

/// Integer square root (floor)
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// Horizontal run of `w` pixels starting at (x, y)
pub fn hline(fb: &mut Framebuffer, x: i32, y: i32, w: i32, on: bool) {
    let (x, w) = if w < 0 { (x + w, -w) } else { (x, w) };
    for i in 0..w {
        fb.set_pixel(x + i, y, on);
    }
}

/// Vertical run of `h` pixels starting at (x, y)
pub fn vline(fb: &mut Framebuffer, x: i32, y: i32, h: i32, on: bool) {
    let (y, h) = if h < 0 { (y + h, -h) } else { (y, h) };
    for j in 0..h {
        fb.set_pixel(x, y + j, on);
    }
}

/// Bresenham line between two points, endpoints included
pub fn line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, on: bool) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        fb.set_pixel(x, y, on);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, r: i32, on: bool) {
    if r < 0 {
        return;
    }
    let mut x = r;
    let mut y = 0;
    let mut d = 1 - r;
    while x >= y {
        fb.set_pixel(cx + x, cy + y, on);
        fb.set_pixel(cx + y, cy + x, on);
        fb.set_pixel(cx - y, cy + x, on);
        fb.set_pixel(cx - x, cy + y, on);
        fb.set_pixel(cx - x, cy - y, on);
        fb.set_pixel(cx - y, cy - x, on);
        fb.set_pixel(cx + y, cy - x, on);
        fb.set_pixel(cx + x, cy - y, on);
        y += 1;
        if d <= 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
}

/// Filled disc: exactly the pixels with dx² + dy² ≤ r²
pub fn fill_circle(fb: &mut Framebuffer, cx: i32, cy: i32, r: i32, on: bool) {
    if r < 0 {
        return;
    }
    for dy in -r..=r {
        let half = isqrt(r * r - dy * dy);
        hline(fb, cx - half, cy + dy, 2 * half + 1, on);
    }
}

/// Filled rectangle with circular-arc corners, bounds inclusive
///
/// `corner_r` is clamped to half the shorter side, so `corner_r = i32::MAX`
/// degrades to a stadium/disc and `corner_r = 0` to a plain rectangle.
pub fn fill_rounded_rect(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, corner_r: i32, on: bool) {
    let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    let r = corner_r.clamp(0, ((x1 - x0).min(y1 - y0) + 1) / 2);
    for y in y0..=y1 {
        let inset = if y < y0 + r {
            let dy = y0 + r - y;
            r - isqrt(r * r - dy * dy)
        } else if y > y1 - r {
            let dy = y - (y1 - r);
            r - isqrt(r * r - dy * dy)
        } else {
            0
        };
        hline(fb, x0 + inset, y, (x1 - x0 + 1) - 2 * inset, on);
    }
}

/// Even-odd scanline polygon fill, vertex spans inclusive
pub fn fill_polygon(fb: &mut Framebuffer, verts: &[(i32, i32)], on: bool) {
    if verts.len() < 3 {
        return;
    }
    let y_min = verts.iter().map(|v| v.1).min().unwrap_or(0);
    let y_max = verts.iter().map(|v| v.1).max().unwrap_or(0);
    for y in y_min..=y_max {
        let mut crossings: Vec<i32, MAX_CROSSINGS> = Vec::new();
        for i in 0..verts.len() {
            let (xa, ya) = verts[i];
            let (xb, yb) = verts[(i + 1) % verts.len()];
            if (ya <= y) != (yb <= y) {
                let x = xa + (y - ya) * (xb - xa) / (yb - ya);
                let _ = crossings.push(x);
            }
        }
        crossings.sort_unstable();
        for pair in crossings.chunks_exact(2) {
            hline(fb, pair[0], y, pair[1] - pair[0] + 1, on);
        }
    }
}

/// Quadratic Bézier curve through fixed-point evaluation
///
/// Plots `STEPS + 1` samples of the curve p0→p2 with control point p1,
/// shifted down by `offset_y` (matches the mouth geometry, which recenters
/// the curve on its baseline).
pub fn quad_bezier(
    fb: &mut Framebuffer,
    p0: (i32, i32),
    p1: (i32, i32),
    p2: (i32, i32),
    offset_y: i32,
    on: bool,
) {
    const STEPS: i32 = 32;
    for i in 0..=STEPS {
        let a = STEPS - i;
        let x = (a * a * p0.0 + 2 * a * i * p1.0 + i * i * p2.0) / (STEPS * STEPS);
        let y = (a * a * p0.1 + 2 * a * i * p1.1 + i * i * p2.1) / (STEPS * STEPS);
        fb.set_pixel(x, y + offset_y, on);
    }
}

/// Erase-composite an eyelid over the top of an eye
///
/// `bounds` is the inclusive pixel box of the eye. The lid is a quad whose
/// bottom edge sits `coverage_x100` percent down the box and is sheared by
/// `slope_x100` (vertical rise per horizontal pixel, ×100; positive drops
/// the outer-right corner). It is filled with *off* pixels: on a 1-bit panel
/// the lid occludes by erasing, so this must run after the eye is drawn.
/// Coverage ≤ 0 touches nothing; coverage ≥ 100 clears the whole box.
pub fn draw_eyelid(
    fb: &mut Framebuffer,
    bounds: (i32, i32, i32, i32),
    coverage_x100: i32,
    slope_x100: i32,
) {
    if coverage_x100 <= 0 {
        return;
    }
    let (x0, y0, x1, y1) = bounds;
    let h = y1 - y0 + 1;
    let w = x1 - x0 + 1;
    let covered = (h * coverage_x100.min(100) + 50) / 100;
    let shear = w * slope_x100 / 200;
    let y_left = (y0 + covered - shear).clamp(y0, y1 + 1);
    let y_right = (y0 + covered + shear).clamp(y0, y1 + 1);
    let lid = [(x0, y0), (x1, y0), (x1, y_right), (x0, y_left)];
    fill_polygon(fb, &lid, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{HEIGHT, WIDTH};
    use proptest::prelude::*;

    fn circle_matches_predicate(fb: &Framebuffer, cx: i32, cy: i32, r: i32) -> bool {
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                let (dx, dy) = (x - cx, y - cy);
                let inside = dx * dx + dy * dy <= r * r;
                if fb.get_pixel(x, y) != inside {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_fill_circle_boundary_exact() {
        for r in [0, 1, 2, 5] {
            let mut fb = Framebuffer::new();
            fill_circle(&mut fb, 30, 30, r, true);
            assert!(circle_matches_predicate(&fb, 30, 30, r), "r={}", r);
        }
    }

    #[test]
    fn test_fill_circle_clips_at_edges() {
        let mut fb = Framebuffer::new();
        fill_circle(&mut fb, 0, 0, 5, true);
        assert!(fb.get_pixel(0, 0));
        assert!(fb.get_pixel(5, 0));
        assert!(!fb.get_pixel(6, 0));
    }

    #[test]
    fn test_rounded_rect_zero_radius_is_full_rect() {
        let mut fb = Framebuffer::new();
        fill_rounded_rect(&mut fb, 10, 10, 20, 15, 0, true);
        for y in 10..=15 {
            for x in 10..=20 {
                assert!(fb.get_pixel(x, y));
            }
        }
        assert!(!fb.get_pixel(9, 10));
        assert!(!fb.get_pixel(21, 10));
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut fb = Framebuffer::new();
        fill_rounded_rect(&mut fb, 10, 10, 25, 25, 6, true);
        assert!(!fb.get_pixel(10, 10), "corner pixel should be cut");
        assert!(fb.get_pixel(17, 10), "top edge midpoint stays");
        assert!(fb.get_pixel(10, 17), "left edge midpoint stays");
    }

    #[test]
    fn test_polygon_fills_rectangle_inclusive() {
        let mut fb = Framebuffer::new();
        // Bottom edge at y1+1 so rows 10..=19 fill completely
        fill_polygon(&mut fb, &[(10, 10), (19, 10), (19, 20), (10, 20)], true);
        for y in 10..=19 {
            for x in 10..=19 {
                assert!(fb.get_pixel(x, y), "({}, {})", x, y);
            }
        }
        assert!(!fb.get_pixel(10, 20));
    }

    #[test]
    fn test_eyelid_zero_coverage_is_identity() {
        let mut fb = Framebuffer::new();
        fill_circle(&mut fb, 32, 32, 8, true);
        let before = fb.clone();
        draw_eyelid(&mut fb, (24, 24, 40, 40), 0, 50);
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                assert_eq!(fb.get_pixel(x, y), before.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_eyelid_full_coverage_erases_bounds() {
        let mut fb = Framebuffer::new();
        fb.fill(true);
        draw_eyelid(&mut fb, (24, 24, 40, 40), 100, 0);
        for y in 24..=40 {
            for x in 24..=40 {
                assert!(!fb.get_pixel(x, y), "({}, {})", x, y);
            }
        }
        // Neighbours outside the bounds are untouched
        assert!(fb.get_pixel(23, 24));
        assert!(fb.get_pixel(41, 40));
        assert!(fb.get_pixel(24, 23));
        assert!(fb.get_pixel(40, 41));
    }

    #[test]
    fn test_eyelid_shear_stays_inside_bounds() {
        let mut fb = Framebuffer::new();
        fb.fill(true);
        draw_eyelid(&mut fb, (24, 24, 40, 40), 10, 300);
        for x in 0..WIDTH as i32 {
            assert!(fb.get_pixel(x, 23), "row above bounds must survive");
        }
    }

    #[test]
    fn test_bezier_endpoints_plotted() {
        let mut fb = Framebuffer::new();
        quad_bezier(&mut fb, (20, 40), (40, 50), (60, 40), 0, true);
        assert!(fb.get_pixel(20, 40));
        assert!(fb.get_pixel(60, 40));
    }

    proptest! {
        #[test]
        fn prop_fill_circle_membership(cx in 10i32..118, cy in 10i32..54, r in 0i32..10) {
            let mut fb = Framebuffer::new();
            fill_circle(&mut fb, cx, cy, r, true);
            prop_assert!(circle_matches_predicate(&fb, cx, cy, r));
        }

        #[test]
        fn prop_hline_sets_exact_run(x in 0i32..100, y in 0i32..64, w in 0i32..28) {
            let mut fb = Framebuffer::new();
            hline(&mut fb, x, y, w, true);
            for i in 0..w {
                prop_assert!(fb.get_pixel(x + i, y));
            }
            prop_assert!(!fb.get_pixel(x - 1, y));
            prop_assert!(!fb.get_pixel(x + w, y));
        }
    }
}
