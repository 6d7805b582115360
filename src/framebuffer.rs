//! Page-major 1bpp pixel storage.

use core::fmt;

use crate::{BUFFER_LEN, HEIGHT, WIDTH};

/// Largest width or height a framebuffer can have. Drawing coordinates are
/// `i16`, so anything bigger could never be fully addressed.
pub const MAX_DIMENSION: usize = 1 << 15;

/// Number of bytes needed to store a `width` x `height` display.
pub const fn buffer_len(width: usize, height: usize) -> usize {
    (height + 7) / 8 * width
}

/// Reasons a framebuffer can't be built over some storage.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GeometryError {
    /// Width or height was zero.
    Empty,
    /// Width or height exceeds `MAX_DIMENSION`.
    TooLarge,
    /// The storage isn't exactly `buffer_len(width, height)` bytes.
    BufferLength { expected: usize, actual: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Empty => f.write_str("display has no pixels"),
            GeometryError::TooLarge => write!(
                f,
                "display dimension exceeds {} pixels",
                MAX_DIMENSION
            ),
            GeometryError::BufferLength { expected, actual } => write!(
                f,
                "buffer is {} bytes, display needs {}",
                actual, expected
            ),
        }
    }
}

/// A monochrome framebuffer organized in 8-row pages.
///
/// The byte for column `x` of page `p` is at index `x + p * width`; bit `b` of
/// that byte is the pixel at row `p * 8 + b`. This is also the format the
/// display controller expects on the wire, so the buffer can be handed to a
/// transport as-is.
///
/// `B` is the backing storage: a fixed array, a `&'static mut [u8]`, a `Vec`,
/// or anything else that derefs to bytes. The storage is never resized.
pub struct Framebuffer<B> {
    buf: B,
    width: usize,
    height: usize,
}

impl Framebuffer<[u8; BUFFER_LEN]> {
    /// Creates a blank framebuffer for the standard 128x64 panel.
    pub const fn new_128x64() -> Self {
        Framebuffer {
            buf: [0; BUFFER_LEN],
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

impl Default for Framebuffer<[u8; BUFFER_LEN]> {
    fn default() -> Self {
        Self::new_128x64()
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wraps `buf` as a `width` x `height` framebuffer.
    ///
    /// The current contents of `buf` are kept, which makes this usable for
    /// adopting a buffer that was drawn into earlier.
    pub fn new(buf: B, width: usize, height: usize) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::Empty);
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GeometryError::TooLarge);
        }
        let expected = buffer_len(width, height);
        let actual = buf.as_ref().len();
        if actual != expected {
            return Err(GeometryError::BufferLength { expected, actual });
        }
        Ok(Framebuffer { buf, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of 8-row pages, including a partial last page.
    pub fn pages(&self) -> usize {
        (self.height + 7) / 8
    }

    /// The raw page-major bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Gives the storage back.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Locates the byte and bit mask for pixel `(x, y)`, or `None` if it's off
    /// the display.
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x + (y / 8) * self.width, 1 << (y % 8)))
    }

    /// Sets (`on == true`) or clears one pixel. Out-of-bounds coordinates are
    /// ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, mask)) = self.locate(x, y) {
            let byte = &mut self.buf.as_mut()[index];
            if on {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }

    /// Reads one pixel. Anything off the display reads as clear.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        match self.locate(x, y) {
            Some((index, mask)) => self.buf.as_ref()[index] & mask != 0,
            None => false,
        }
    }

    /// Overwrites every byte with `pattern`: `0x00` clears the display, `0xFF`
    /// lights it entirely.
    pub fn fill(&mut self, pattern: u8) {
        self.buf.as_mut().fill(pattern);
    }

    /// Replaces the whole 8-pixel column at `x` in `page`. Columns off the
    /// left or right edge are skipped.
    pub(crate) fn write_column(&mut self, x: i32, page: usize, bits: u8) {
        if x < 0 || x as usize >= self.width || page >= self.pages() {
            return;
        }
        let index = x as usize + page * self.width;
        self.buf.as_mut()[index] = bits;
    }

    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, on: bool) {
        gfx::draw_line(self, x1, y1, x2, y2, on)
    }

    pub fn draw_rect(&mut self, x: i16, y: i16, w: i16, h: i16, on: bool) {
        gfx::draw_rect(self, x, y, w, h, on)
    }

    pub fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, on: bool) {
        gfx::fill_rect(self, x, y, w, h, on)
    }

    pub fn draw_round_rect(
        &mut self,
        x: i16,
        y: i16,
        w: i16,
        h: i16,
        r: i16,
        on: bool,
    ) {
        gfx::draw_round_rect(self, x, y, w, h, r, on)
    }

    pub fn fill_round_rect(
        &mut self,
        x: i16,
        y: i16,
        w: i16,
        h: i16,
        r: i16,
        on: bool,
    ) {
        gfx::fill_round_rect(self, x, y, w, h, r, on)
    }

    /// Traces the quadrants of a circle selected by `quadrants`.
    pub fn draw_quadrant_arc(
        &mut self,
        x0: i16,
        y0: i16,
        r: i16,
        quadrants: gfx::Quadrants,
        on: bool,
    ) {
        gfx::draw_quadrant_arc(self, x0, y0, r, quadrants, on)
    }
}

impl<B> gfx::Canvas for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        Framebuffer::set_pixel(self, x, y, on)
    }
}

impl<B: AsRef<[u8]>> AsRef<[u8]> for Framebuffer<B> {
    fn as_ref(&self) -> &[u8] {
        self.buf.as_ref()
    }
}

impl<B> fmt::Debug for Framebuffer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_pixels<B>(fb: &Framebuffer<B>, pred: impl Fn(i32, i32) -> bool)
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                assert_eq!(
                    fb.get_pixel(x, y),
                    pred(x, y),
                    "Pixel at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn geometry_is_validated() {
        assert_eq!(
            Framebuffer::new(vec![0u8; 16], 0, 8).unwrap_err(),
            GeometryError::Empty
        );
        assert_eq!(
            Framebuffer::new(vec![0u8; 16], 16, 0).unwrap_err(),
            GeometryError::Empty
        );
        assert_eq!(
            Framebuffer::new(vec![0u8; 16], MAX_DIMENSION + 1, 8).unwrap_err(),
            GeometryError::TooLarge
        );
        assert_eq!(
            Framebuffer::new(vec![0u8; 16], 16, 16).unwrap_err(),
            GeometryError::BufferLength {
                expected: 32,
                actual: 16
            }
        );
        let fb = Framebuffer::new(vec![0u8; 32], 16, 12).unwrap();
        assert_eq!(fb.pages(), 2);
    }

    #[test]
    fn standard_panel() {
        let fb = Framebuffer::new_128x64();
        assert_eq!(fb.width(), 128);
        assert_eq!(fb.height(), 64);
        assert_eq!(fb.pages(), 8);
        assert_eq!(fb.as_bytes().len(), 1024);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn page_major_layout() {
        let mut fb = Framebuffer::new_128x64();
        fb.set_pixel(3, 10, true);
        let mut expected = [0u8; BUFFER_LEN];
        expected[3 + 128] = 1 << 2;
        assert_eq!(&fb.as_bytes()[..], &expected[..]);

        fb.set_pixel(127, 63, true);
        assert_eq!(fb.as_bytes()[127 + 7 * 128], 0x80);
    }

    #[test]
    fn set_then_clear_every_pixel() {
        let mut fb = Framebuffer::new(vec![0u8; 24 * 2], 24, 16).unwrap();
        for y in 0..16 {
            for x in 0..24 {
                fb.set_pixel(x, y, true);
                assert!(fb.get_pixel(x, y));
                fb.set_pixel(x, y, false);
                assert!(!fb.get_pixel(x, y));
            }
        }
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn clearing_leaves_neighbours() {
        let mut fb = Framebuffer::new_128x64();
        fb.fill(0xFF);
        fb.set_pixel(5, 5, false);
        check_pixels(&fb, |x, y| (x, y) != (5, 5));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new_128x64();
        fb.set_pixel(10, 10, true);
        let before = fb.as_bytes().to_vec();
        for &(x, y) in &[
            (-1, 0),
            (0, -1),
            (128, 0),
            (0, 64),
            (i32::MIN, i32::MIN),
            (i32::MAX, i32::MAX),
        ] {
            fb.set_pixel(x, y, true);
            fb.set_pixel(x, y, false);
            assert!(!fb.get_pixel(x, y));
        }
        assert_eq!(fb.as_bytes(), &before[..]);
    }

    #[test]
    fn matches_naive_model() {
        use rand::{Rng, SeedableRng};

        let (w, h) = (40usize, 20usize);
        let mut fb = Framebuffer::new(vec![0u8; buffer_len(w, h)], w, h).unwrap();
        let mut model = vec![false; w * h];
        let mut rng = rand::rngs::SmallRng::seed_from_u64(11181981);
        for _ in 0..5000 {
            let x = rng.gen_range(-5..w as i32 + 5);
            let y = rng.gen_range(-5..h as i32 + 5);
            let on = rng.gen();
            fb.set_pixel(x, y, on);
            if (0..w as i32).contains(&x) && (0..h as i32).contains(&y) {
                model[y as usize * w + x as usize] = on;
            }
        }
        check_pixels(&fb, |x, y| model[y as usize * w + x as usize]);
    }

    #[test]
    fn fill_patterns() {
        let mut fb = Framebuffer::new_128x64();
        fb.fill(0xFF);
        check_pixels(&fb, |_, _| true);
        fb.fill(0x00);
        check_pixels(&fb, |_, _| false);
        // Alternate rows.
        fb.fill(0x55);
        check_pixels(&fb, |_, y| y % 2 == 0);
    }

    #[test]
    fn partial_last_page() {
        let mut fb = Framebuffer::new(vec![0u8; 8 * 2], 8, 12).unwrap();
        fb.set_pixel(0, 11, true);
        fb.set_pixel(0, 12, true);
        assert_eq!(fb.as_bytes()[8], 1 << 3);
        assert!(!fb.get_pixel(0, 12));
    }

    #[test]
    fn shapes_go_through_the_buffer() {
        let mut fb = Framebuffer::new_128x64();
        fb.draw_line(0, 0, 4, 0, true);
        check_pixels(&fb, |x, y| y == 0 && x <= 4);

        fb.fill(0);
        fb.draw_rect(2, 2, 5, 5, true);
        check_pixels(&fb, |x, y| {
            (2..7).contains(&x)
                && (2..7).contains(&y)
                && (x == 2 || x == 6 || y == 2 || y == 6)
        });

        fb.fill(0);
        fb.fill_rect(120, 60, 20, 20, true);
        check_pixels(&fb, |x, y| x >= 120 && y >= 60);
    }

    #[test]
    fn round_rect_zero_radius_matches_rect() {
        let mut plain = Framebuffer::new_128x64();
        let mut round = Framebuffer::new_128x64();
        plain.fill_rect(10, 5, 30, 17, true);
        round.fill_round_rect(10, 5, 30, 17, 0, true);
        assert_eq!(plain.as_bytes()[..], round.as_bytes()[..]);
    }

    #[test]
    fn round_rect_radius_is_clamped() {
        let mut clamped = Framebuffer::new_128x64();
        let mut oversized = Framebuffer::new_128x64();
        clamped.fill_round_rect(10, 5, 30, 17, 8, true);
        oversized.fill_round_rect(10, 5, 30, 17, 100, true);
        assert_eq!(clamped.as_bytes()[..], oversized.as_bytes()[..]);

        clamped.fill(0);
        oversized.fill(0);
        clamped.draw_round_rect(10, 5, 30, 17, 8, true);
        oversized.draw_round_rect(10, 5, 30, 17, 100, true);
        assert_eq!(clamped.as_bytes()[..], oversized.as_bytes()[..]);
    }

    #[test]
    fn round_rect_clipped_at_edges() {
        let mut fb = Framebuffer::new_128x64();
        fb.fill_round_rect(-10, -10, 200, 200, 20, true);
        // Everything visible is inside the shape; the corners are far away.
        check_pixels(&fb, |_, _| true);
    }

    #[test]
    fn arcs_clear_as_well_as_set() {
        let mut fb = Framebuffer::new_128x64();
        fb.fill(0xFF);
        fb.draw_quadrant_arc(64, 32, 10, gfx::Quadrants::all(), false);
        assert!(!fb.get_pixel(74, 32));
        assert!(!fb.get_pixel(64, 22));
        assert!(fb.get_pixel(64, 32));
    }
}
