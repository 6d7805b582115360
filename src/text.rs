//! 5x8 text, blitted straight into pages.

use crate::framebuffer::Framebuffer;

pub use font_5x8::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Horizontal distance from one character to the next: the glyph plus one
/// blank spacer column.
pub const CHAR_ADVANCE: usize = GLYPH_WIDTH + 1;

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draws character `c` with its top-left corner at `(x, y)`.
    ///
    /// Glyph columns are copied over the page containing `y`, replacing
    /// whatever was there (including pixels the glyph leaves clear), followed
    /// by a blank spacer column. `y` is not shifted within the page, so text
    /// only lands where requested when `y` is a multiple of 8.
    ///
    /// Columns off either side of the display are skipped. Characters the font
    /// doesn't cover are drawn blank.
    ///
    /// With `on == false` nothing is drawn: text can't be erased this way. Use
    /// `fill_rect` to clear the area instead.
    pub fn draw_char(&mut self, x: i16, y: i16, c: char, on: bool) {
        if !on {
            return;
        }
        if let Some(page) = self.text_page(y) {
            self.blit_glyph(i32::from(x), page, c);
        }
    }

    /// Draws `s` left to right starting at `(x, y)`, advancing `CHAR_ADVANCE`
    /// columns per character.
    ///
    /// Characters are never cut off at the right edge: drawing stops at the
    /// first character whose full advance doesn't fit, and the rest of the
    /// string is dropped.
    pub fn draw_str(&mut self, x: i16, y: i16, s: &str, on: bool) {
        if !on {
            return;
        }
        let page = match self.text_page(y) {
            Some(page) => page,
            None => return,
        };
        let width = self.width() as i32;
        let advance = CHAR_ADVANCE as i32;
        let mut cx = i32::from(x);
        for c in s.chars() {
            if cx + advance > width {
                break;
            }
            self.blit_glyph(cx, page, c);
            cx += advance;
        }
    }

    fn text_page(&self, y: i16) -> Option<usize> {
        if y < 0 || y as usize >= self.height() {
            None
        } else {
            Some(y as usize / 8)
        }
    }

    fn blit_glyph(&mut self, x: i32, page: usize, c: char) {
        let glyph = font_5x8::glyph_for(c);
        for (i, &column) in glyph.iter().enumerate() {
            self.write_column(x + i as i32, page, column);
        }
        self.write_column(x + GLYPH_WIDTH as i32, page, 0);
    }
}
