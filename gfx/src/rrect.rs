//! Rectangles with rounded corners.
//!
//! The outline and the filled variant use different algorithms for the
//! corners. Outlines trace each corner with the midpoint arc from `arc`. Fills
//! scan horizontal chords of the circle computed from `r² - i²`, which can't
//! leave gaps the way a traced outline flood would. The two may disagree by a
//! pixel at the ends of the arcs. Where they do, the fill is the reference
//! shape for filled corners.

use crate::arc::{trace_arc, Quadrants};
use crate::rect;
use crate::{trace_line, Canvas};

/// Draws the outline of a rounded rectangle.
///
/// `r <= 0` draws a plain rectangle. Radii too large for the box are reduced
/// to half the shorter side.
pub fn draw_round_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i16,
    y: i16,
    w: i16,
    h: i16,
    r: i16,
    on: bool,
) {
    let (x, y, w, h, r) = widen(x, y, w, h, r);
    if w <= 0 || h <= 0 {
        return;
    }
    if r <= 0 {
        rect::outline(canvas, x, y, w, h, on);
        return;
    }
    let r = clamp_radius(w, h, r);

    let (right, bottom) = (x + w - 1, y + h - 1);
    trace_line(canvas, x + r, y, right - r, y, on);
    trace_line(canvas, x + r, bottom, right - r, bottom, on);
    trace_line(canvas, x, y + r, x, bottom - r, on);
    trace_line(canvas, right, y + r, right, bottom - r, on);

    trace_arc(canvas, right - r, bottom - r, r, Quadrants::LOWER_RIGHT, on);
    trace_arc(canvas, x + r, bottom - r, r, Quadrants::LOWER_LEFT, on);
    trace_arc(canvas, x + r, y + r, r, Quadrants::UPPER_LEFT, on);
    trace_arc(canvas, right - r, y + r, r, Quadrants::UPPER_RIGHT, on);
}

/// Draws a solid rounded rectangle.
///
/// Same radius rules as `draw_round_rect`.
pub fn fill_round_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i16,
    y: i16,
    w: i16,
    h: i16,
    r: i16,
    on: bool,
) {
    let (x, y, w, h, r) = widen(x, y, w, h, r);
    if w <= 0 || h <= 0 {
        return;
    }
    if r <= 0 {
        rect::fill(canvas, x, y, w, h, on);
        return;
    }
    let r = clamp_radius(w, h, r);

    // Full-width band, then the top and bottom caps between the corners.
    rect::fill(canvas, x, y + r, w, h - 2 * r, on);
    rect::fill(canvas, x + r, y, w - 2 * r, r, on);
    rect::fill(canvas, x + r, y + h - r, w - 2 * r, r, on);

    // Corner centers: the innermost pixel of each corner square, which the
    // band and caps already cover.
    let (left_cx, right_cx) = (x + r, x + w - r - 1);
    let (top_cy, bottom_cy) = (y + r, y + h - r - 1);

    // At i == r the chord is empty and each span comes out reversed. The line
    // tracer still plots both of its ends, one pixel past the cap.
    for i in 1..=r {
        let len = chord_len(r, i);
        for &row in &[top_cy - i, bottom_cy + i] {
            trace_line(canvas, left_cx - len, row, left_cx - 1, row, on);
            trace_line(canvas, right_cx + 1, row, right_cx + len, row, on);
        }
    }
}

/// Half-width of a circle of radius `r` at vertical offset `i` from its
/// center, truncated: `floor(sqrt(r² - i²))`.
///
/// `r` and `i` must satisfy `0 <= i <= r <= i16::MAX`.
pub fn chord_len(r: i32, i: i32) -> i32 {
    debug_assert!(0 <= i && i <= r);
    libm::sqrt(f64::from(r * r - i * i)) as i32
}

fn widen(x: i16, y: i16, w: i16, h: i16, r: i16) -> (i32, i32, i32, i32, i32) {
    (
        i32::from(x),
        i32::from(y),
        i32::from(w),
        i32::from(h),
        i32::from(r),
    )
}

/// Limits `r` so that opposite corners can't overlap.
fn clamp_radius(w: i32, h: i32, r: i32) -> i32 {
    if r > w / 2 || r > h / 2 {
        w.min(h) / 2
    } else {
        r
    }
}
