//! Unbounded test canvas that records which pixels are set.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::Canvas;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Grid {
    set: BTreeSet<(i32, i32)>,
}

impl Canvas for Grid {
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if on {
            self.set.insert((x, y));
        } else {
            self.set.remove(&(x, y));
        }
    }
}

impl Grid {
    pub(crate) fn get(&self, x: i32, y: i32) -> bool {
        self.set.contains(&(x, y))
    }

    pub(crate) fn pixels(&self) -> &BTreeSet<(i32, i32)> {
        &self.set
    }

    pub(crate) fn len(&self) -> usize {
        self.set.len()
    }

    /// Checks every pixel in the window against `pred`, and that nothing was
    /// drawn outside the window.
    pub(crate) fn check(
        &self,
        xs: Range<i32>,
        ys: Range<i32>,
        pred: impl Fn(i32, i32) -> bool,
    ) {
        for &(x, y) in &self.set {
            assert!(
                xs.contains(&x) && ys.contains(&y),
                "Pixel at ({}, {}) is outside the checked window",
                x,
                y
            );
        }
        for y in ys.clone() {
            for x in xs.clone() {
                if pred(x, y) {
                    assert!(self.get(x, y), "Pixel at ({}, {}) should be set", x, y);
                } else {
                    assert!(
                        !self.get(x, y),
                        "Pixel at ({}, {}) should not be set",
                        x,
                        y
                    );
                }
            }
        }
    }
}
