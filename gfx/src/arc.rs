//! Quarter-circle outlines, traced with the integer midpoint algorithm.

use crate::Canvas;

bitflags::bitflags! {
    /// Selects which quadrants of a circle `draw_quadrant_arc` traces.
    ///
    /// "Upper" is toward smaller `y`, i.e. toward the top of the display.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct Quadrants: u8 {
        const LOWER_RIGHT = 0x01;
        const LOWER_LEFT = 0x02;
        const UPPER_LEFT = 0x04;
        const UPPER_RIGHT = 0x08;
    }
}

/// Traces the selected quadrants of a circle of radius `r` centered on
/// `(x0, y0)`.
///
/// Each quadrant is traced as one octant plus its mirror image across the
/// diagonal, so the two halves meet at 45 degrees. Negative radii draw
/// nothing; a radius of zero sets the center pixel.
pub fn draw_quadrant_arc<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i16,
    y0: i16,
    r: i16,
    quadrants: Quadrants,
    on: bool,
) {
    trace_arc(
        canvas,
        i32::from(x0),
        i32::from(y0),
        i32::from(r),
        quadrants,
        on,
    )
}

pub(crate) fn trace_arc<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    r: i32,
    quadrants: Quadrants,
    on: bool,
) {
    let mut x = 0;
    let mut y = r;
    let mut d = 1 - r;

    while x <= y {
        if quadrants.contains(Quadrants::UPPER_RIGHT) {
            canvas.set_pixel(x0 + x, y0 - y, on);
            canvas.set_pixel(x0 + y, y0 - x, on);
        }
        if quadrants.contains(Quadrants::UPPER_LEFT) {
            canvas.set_pixel(x0 - x, y0 - y, on);
            canvas.set_pixel(x0 - y, y0 - x, on);
        }
        if quadrants.contains(Quadrants::LOWER_LEFT) {
            canvas.set_pixel(x0 - x, y0 + y, on);
            canvas.set_pixel(x0 - y, y0 + x, on);
        }
        if quadrants.contains(Quadrants::LOWER_RIGHT) {
            canvas.set_pixel(x0 + x, y0 + y, on);
            canvas.set_pixel(x0 + y, y0 + x, on);
        }

        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn traced(r: i16, quadrants: Quadrants) -> Grid {
        let mut grid = Grid::default();
        draw_quadrant_arc(&mut grid, 0, 0, r, quadrants, true);
        grid
    }

    #[test]
    fn radius_zero_is_center() {
        let grid = traced(0, Quadrants::all());
        grid.check(-2..3, -2..3, |x, y| (x, y) == (0, 0));
    }

    #[test]
    fn negative_radius_draws_nothing() {
        assert_eq!(traced(-1, Quadrants::all()).len(), 0);
        assert_eq!(traced(i16::MIN, Quadrants::all()).len(), 0);
    }

    #[test]
    fn empty_mask_draws_nothing() {
        assert_eq!(traced(5, Quadrants::empty()).len(), 0);
    }

    #[test]
    fn upper_left_radius_3() {
        let grid = traced(3, Quadrants::UPPER_LEFT);
        let expected = [(0, -3), (-1, -3), (-2, -2), (-3, -1), (-3, 0)];
        grid.check(-5..6, -5..6, |x, y| expected.contains(&(x, y)));
    }

    #[test]
    fn quadrants_are_reflections() {
        for r in 0..20 {
            let ul = traced(r, Quadrants::UPPER_LEFT);
            let ur = traced(r, Quadrants::UPPER_RIGHT);
            let ll = traced(r, Quadrants::LOWER_LEFT);
            let lr = traced(r, Quadrants::LOWER_RIGHT);
            for &(x, y) in ul.pixels() {
                assert!(x <= 0 && y <= 0);
                assert!(ur.get(-x, y), "r={} ({}, {})", r, x, y);
                assert!(ll.get(x, -y), "r={} ({}, {})", r, x, y);
                assert!(lr.get(-x, -y), "r={} ({}, {})", r, x, y);
            }
            assert_eq!(ul.len(), ur.len());
            assert_eq!(ul.len(), ll.len());
            assert_eq!(ul.len(), lr.len());
        }
    }

    #[test]
    fn full_mask_is_union_of_single_masks() {
        let r = 11;
        let mut union = Grid::default();
        for q in Quadrants::all().iter() {
            draw_quadrant_arc(&mut union, 0, 0, r, q, true);
        }
        assert_eq!(traced(r, Quadrants::all()), union);
    }

    #[test]
    fn stays_near_the_circle() {
        let r = 25;
        let grid = traced(r, Quadrants::all());
        let r = f64::from(r);
        for &(x, y) in grid.pixels() {
            let dist = f64::from(x * x + y * y).sqrt();
            assert!((dist - r).abs() < 1.0, "({}, {}) at {}", x, y, dist);
        }
        // The axis extremes are always hit.
        for &(x, y) in &[(25, 0), (-25, 0), (0, 25), (0, -25)] {
            assert!(grid.get(x, y));
        }
    }
}
