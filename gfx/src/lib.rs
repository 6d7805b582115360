//! Monochrome rasterization algorithms.
//!
//! This crate is deliberately storage-independent to allow for testing on the
//! host. Everything here draws by calling `Canvas::set_pixel`, and the canvas
//! is responsible for clipping.
//!
//! Public entry points take `i16` coordinates. Internally everything is widened
//! to `i32`, which is enough headroom that no combination of `i16` inputs can
//! overflow the arithmetic below.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod arc;
pub mod rect;
pub mod rrect;

#[cfg(test)]
pub(crate) mod grid;

use core::mem::swap;

pub use arc::{draw_quadrant_arc, Quadrants};
pub use rect::{draw_rect, fill_rect};
pub use rrect::{draw_round_rect, fill_round_rect};

/// A surface that can have individual pixels set or cleared.
///
/// Implementations must treat out-of-bounds coordinates as a silent no-op: the
/// algorithms in this crate do no clipping of their own, and routinely produce
/// coordinates off the edge of the surface for partially visible shapes.
pub trait Canvas {
    /// Sets (`on == true`) or clears the pixel at `(x, y)`.
    fn set_pixel(&mut self, x: i32, y: i32, on: bool);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        (**self).set_pixel(x, y, on)
    }
}

/// Draws a line from `(x1, y1)` to `(x2, y2)`, both ends inclusive.
///
/// A zero-length line sets a single pixel. Swapping the endpoints produces the
/// same pixels.
pub fn draw_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    x1: i16,
    y1: i16,
    x2: i16,
    y2: i16,
    on: bool,
) {
    trace_line(
        canvas,
        i32::from(x1),
        i32::from(y1),
        i32::from(x2),
        i32::from(y2),
        on,
    )
}

/// Bresenham line tracer on widened coordinates.
///
/// The inputs must stay within a few times the `i16` range; every caller in
/// this crate derives them from `i16` values with a handful of additions.
pub(crate) fn trace_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    on: bool,
) {
    // Flip things as necessary to ensure that we draw top-to-bottom, and
    // left-to-right along a row. The error term rounds differently depending
    // on direction, so this is what makes a line and its reverse agree.
    if (y0, x0) > (y1, x1) {
        swap(&mut y0, &mut y1);
        swap(&mut x0, &mut x1);
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut error = (if dx > dy { dx } else { -dy }) / 2;

    loop {
        canvas.set_pixel(x0, y0, on);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = error;
        if e2 > -dx {
            error -= dy;
            x0 += sx;
        }
        if e2 < dy {
            error += dx;
            y0 += sy;
        }
    }
}
