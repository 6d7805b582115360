//! Axis-aligned rectangles.
//!
//! A rectangle at `(x, y)` with size `(w, h)` covers the columns `x..x+w` and
//! rows `y..y+h`. Zero or negative sizes draw nothing.

use crate::{trace_line, Canvas};

/// Draws the one-pixel outline of a rectangle.
pub fn draw_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i16,
    y: i16,
    w: i16,
    h: i16,
    on: bool,
) {
    outline(
        canvas,
        i32::from(x),
        i32::from(y),
        i32::from(w),
        i32::from(h),
        on,
    )
}

/// Draws a solid rectangle.
pub fn fill_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i16,
    y: i16,
    w: i16,
    h: i16,
    on: bool,
) {
    fill(
        canvas,
        i32::from(x),
        i32::from(y),
        i32::from(w),
        i32::from(h),
        on,
    )
}

pub(crate) fn outline<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    on: bool,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    trace_line(canvas, x, y, right, y, on);
    trace_line(canvas, x, bottom, right, bottom, on);
    trace_line(canvas, x, y, x, bottom, on);
    trace_line(canvas, right, y, right, bottom, on);
}

/// Fills column by column, one vertical line each.
pub(crate) fn fill<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    on: bool,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    let bottom = y + h - 1;
    for column in x..x + w {
        trace_line(canvas, column, y, column, bottom, on);
    }
}
